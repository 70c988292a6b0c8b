use crate::{TaskPriority, TaskStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `tasks` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assignee_id: Uuid,
    #[serde(default)]
    pub team_id: Option<Uuid>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}
