use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account with the member role
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Sign in with e-mail and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user's profile
    Whoami,
}
