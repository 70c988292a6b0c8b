use crate::commands::FilterArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Create a task
    Create {
        /// Task title
        #[arg(long)]
        title: String,

        /// Task description
        #[arg(long)]
        description: String,

        /// Assignee user ID (UUID)
        #[arg(long)]
        assignee_id: String,

        /// Team ID (UUID); omit for a personal task
        #[arg(long)]
        team_id: Option<String>,

        /// Initial status (default: todo)
        #[arg(long, value_parser = ["todo", "in-progress", "review", "done"])]
        status: Option<String>,

        /// Priority (default: medium)
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// Due date, RFC 3339 or YYYY-MM-DD
        #[arg(long)]
        due_date: Option<String>,
    },

    /// Move a task to another status
    Status {
        /// Task ID (UUID)
        id: String,

        /// New status
        #[arg(value_parser = ["todo", "in-progress", "review", "done"])]
        status: String,
    },
}
