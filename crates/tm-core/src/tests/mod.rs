mod mappers;
mod models;

use crate::{Task, TaskPriority, TaskStatus, Team, User, UserRole};

use chrono::Utc;
use uuid::Uuid;

pub(crate) fn test_user(name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: UserRole::Member,
        avatar: String::new(),
    }
}

pub(crate) fn test_team(created_by: Uuid) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: "Platform".to_string(),
        description: "Platform team".to_string(),
        members: vec![created_by],
        created_by,
        created_at: Utc::now(),
    }
}

pub(crate) fn test_task(
    assignee_id: Uuid,
    team_id: Option<Uuid>,
    status: TaskStatus,
    priority: TaskPriority,
) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: "Write release notes".to_string(),
        description: "Summarize the changes since the last release".to_string(),
        assignee_id,
        team_id,
        status,
        priority,
        created_by: assignee_id,
        created_at: Utc::now(),
        due_date: None,
    }
}
