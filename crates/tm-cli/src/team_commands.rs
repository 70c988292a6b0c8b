use clap::Subcommand;

#[derive(Subcommand)]
pub enum TeamCommands {
    /// List all teams
    List,

    /// Show a team with its members and tasks
    Show {
        /// Team ID (UUID)
        id: String,
    },

    /// Create a team; the signed-in user becomes its first member
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Add a user to a team
    AddMember {
        /// Team ID (UUID)
        team_id: String,

        /// User ID (UUID)
        user_id: String,
    },
}
