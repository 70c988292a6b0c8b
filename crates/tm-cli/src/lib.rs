//! tm-cli library
//!
//! Command definitions and the runner behind the `tm` binary.

pub(crate) mod app;
pub(crate) mod auth_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod console_notifier;
pub(crate) mod error;
pub mod logger;
pub(crate) mod task_commands;
pub(crate) mod team_commands;
pub(crate) mod user_commands;


pub use app::App;
pub use auth_commands::AuthCommands;
pub use cli::Cli;
pub use commands::{Commands, FilterArgs};
pub use console_notifier::ConsoleNotifier;
pub use error::{CliError, Result};
pub use task_commands::TaskCommands;
pub use team_commands::TeamCommands;
pub use user_commands::UserCommands;
