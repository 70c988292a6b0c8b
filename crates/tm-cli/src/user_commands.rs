use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all user profiles
    List,

    /// Show a user with their teams and tasks
    Show {
        /// User ID (UUID)
        id: String,
    },
}
