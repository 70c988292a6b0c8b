pub mod new_task;
pub mod new_team;
pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod team;
pub mod user;
pub mod user_role;
