pub mod board;
pub mod error;
pub mod mappers;
pub mod models;
pub mod rows;

pub use board::dashboard_stats::DashboardStats;
pub use board::kanban_board::{KanbanBoard, KanbanColumn};
pub use board::membership::{
    members_of_team, tasks_assigned_to, tasks_created_by, tasks_of_team, teams_of_user,
    users_not_in_team,
};
pub use board::task_filter::TaskFilter;
pub use error::{CoreError, Result};
pub use models::new_task::NewTask;
pub use models::new_team::NewTeam;
pub use models::task::Task;
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use models::team::Team;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use rows::profile_row::ProfileRow;
pub use rows::task_insert::TaskInsert;
pub use rows::task_row::TaskRow;
pub use rows::team_insert::TeamInsert;
pub use rows::team_member_row::TeamMemberRow;
pub use rows::team_row::TeamRow;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
