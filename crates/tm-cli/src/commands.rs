use crate::{
    auth_commands::AuthCommands, task_commands::TaskCommands, team_commands::TeamCommands,
    user_commands::UserCommands,
};

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Account operations
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Team operations
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Kanban board: tasks grouped by status
    Board(FilterArgs),

    /// Task counts and completion rate
    Dashboard(FilterArgs),
}

/// Narrow tasks to one team and/or one assignee
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Team ID (UUID)
    #[arg(long)]
    pub team_id: Option<String>,

    /// Assignee user ID (UUID)
    #[arg(long)]
    pub assignee_id: Option<String>,
}
