//! Read-only projections over a snapshot: kanban columns, dashboard counts
//! and membership lookups.

pub mod dashboard_stats;
pub mod kanban_board;
pub mod membership;
pub mod task_filter;
