use crate::Task;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team and assignee filter shared by the board and the dashboard.
/// An unset field matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub team_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
}

impl TaskFilter {
    pub fn new(team_id: Option<Uuid>, assignee_id: Option<Uuid>) -> Self {
        Self {
            team_id,
            assignee_id,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(team_id) = self.team_id
            && task.team_id != Some(team_id)
        {
            return false;
        }
        if let Some(assignee_id) = self.assignee_id
            && task.assignee_id != assignee_id
        {
            return false;
        }
        true
    }

    /// Matching tasks, in snapshot order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
