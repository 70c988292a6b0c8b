use crate::{Task, TaskFilter, TaskStatus};

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct KanbanColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Tasks grouped by status, one column per status in board order
#[derive(Debug, Clone, Serialize)]
pub struct KanbanBoard {
    pub columns: Vec<KanbanColumn>,
}

impl KanbanBoard {
    pub fn build(tasks: &[Task], filter: &TaskFilter) -> Self {
        let filtered = filter.apply(tasks);

        let columns = TaskStatus::ALL
            .iter()
            .map(|status| KanbanColumn {
                status: *status,
                tasks: filtered
                    .iter()
                    .filter(|t| t.status == *status)
                    .map(|t| (*t).clone())
                    .collect(),
            })
            .collect();

        Self { columns }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&KanbanColumn> {
        self.columns.iter().find(|c| c.status == status)
    }
}
