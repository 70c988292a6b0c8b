use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tm")]
#[command(about = "Team board CLI: teams, tasks and the kanban board from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration directory (default: $TM_CONFIG_DIR or ./.tm)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
