use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task input before the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assignee_id: Uuid,
    pub team_id: Option<Uuid>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_by: Uuid,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Personal task with default status and priority
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee_id: Uuid,
        created_by: Uuid,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee_id,
            team_id: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            created_by,
            due_date: None,
        }
    }
}
