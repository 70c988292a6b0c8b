use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Core fields
    pub title: String,
    pub description: String,

    // Assignment
    pub assignee_id: Uuid,
    /// None for personal tasks
    pub team_id: Option<Uuid>,

    // Workflow
    pub status: TaskStatus,
    pub priority: TaskPriority,

    // Audit
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// A personal task is not scoped to any team
    pub fn is_personal(&self) -> bool {
        self.team_id.is_none()
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}
