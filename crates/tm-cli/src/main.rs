//! tm - team board CLI
//!
//! Talks to the hosted backend configured in `.tm/config.toml` (or `TM_*`
//! environment variables) and prints JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in; the session is kept in .tm/session.json
//! tm auth login --email maria@example.com --password secret
//!
//! # Create a team and add a member
//! tm team create --name Ops
//! tm team add-member <team-id> <user-id>
//!
//! # Kanban board for one team
//! tm board --team-id <uuid> --pretty
//! ```

use tm_cli::{App, Cli, CliError, logger};
use tm_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.log_file_path(),
        config.logging.colored,
    ) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let app = App::new(config);
    let result = app.run(cli.command).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}
