use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insert payload for `tasks`. `id` and `created_at` come from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInsert {
    pub title: String,
    pub description: String,
    pub assignee_id: Uuid,
    pub team_id: Option<Uuid>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_by: Uuid,
    pub due_date: Option<DateTime<Utc>>,
}
