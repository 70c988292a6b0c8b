use crate::{Task, TaskFilter, TaskPriority, TaskStatus};

use std::collections::BTreeMap;

use serde::Serialize;

/// Summary counts shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Whole percent, 0 when there are no tasks
    pub completion_rate: u32,
    pub by_status: BTreeMap<TaskStatus, usize>,
    pub by_priority: BTreeMap<TaskPriority, usize>,
}

impl DashboardStats {
    pub fn compute(tasks: &[Task], filter: &TaskFilter) -> Self {
        let filtered = filter.apply(tasks);

        let mut by_status: BTreeMap<TaskStatus, usize> =
            TaskStatus::ALL.iter().map(|s| (*s, 0)).collect();
        let mut by_priority: BTreeMap<TaskPriority, usize> =
            TaskPriority::ALL.iter().map(|p| (*p, 0)).collect();

        for task in &filtered {
            *by_status.entry(task.status).or_default() += 1;
            *by_priority.entry(task.priority).or_default() += 1;
        }

        let total = filtered.len();
        let completed = by_status[&TaskStatus::Done];
        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate,
            by_status,
            by_priority,
        }
    }
}
