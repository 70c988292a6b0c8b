mod new_team;
mod task_status;
mod user_role;
