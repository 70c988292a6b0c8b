
use chrono::Utc;
use tm_core::{Task, TaskPriority, TaskStatus, Team};
use uuid::Uuid;

pub(crate) fn test_team(name: &str, members: &[Uuid]) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: String::new(),
        members: members.to_vec(),
        created_by: members.first().copied().unwrap_or_else(Uuid::new_v4),
        created_at: Utc::now(),
    }
}

pub(crate) fn test_task(title: &str, status: TaskStatus) -> Task {
    let user = Uuid::new_v4();
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        assignee_id: user,
        team_id: None,
        status,
        priority: TaskPriority::Medium,
        created_by: user,
        created_at: Utc::now(),
        due_date: None,
    }
}
