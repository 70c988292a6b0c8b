
use chrono::Utc;
use tm_core::{ProfileRow, TaskInsert, TaskPriority, TaskStatus, TeamRow, UserRole};
use uuid::Uuid;

pub(crate) fn test_profile(name: &str) -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: UserRole::Member,
        avatar: None,
    }
}

pub(crate) fn test_team_row(name: &str, created_by: Uuid) -> TeamRow {
    TeamRow {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        created_by,
        created_at: Utc::now(),
    }
}

pub(crate) fn test_task_insert(title: &str, user: Uuid) -> TaskInsert {
    TaskInsert {
        title: title.to_string(),
        description: String::new(),
        assignee_id: user,
        team_id: None,
        status: TaskStatus::Review,
        priority: TaskPriority::High,
        created_by: user,
        due_date: None,
    }
}
