//! CLI interface module
//!
//! Thin command layer over the list controller: every command builds the
//! configured store, runs one controller operation, prints the outcome.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::controller::ListController;
use crate::storage::StoreFactory;

#[derive(Debug)]
pub enum CliError {
    StoreError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StoreError(msg) => format!("Store error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StoreError(msg) => {
                format!("{} {}", "Store error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::BucketlistError> for CliError {
    fn from(err: crate::errors::BucketlistError) -> Self {
        CliError::CommandError(err.format_simple())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    let config = crate::config::get_config();
    let store = StoreFactory::create(config)
        .await
        .map_err(|e| CliError::StoreError(e.format_simple()))?;
    let mut controller = ListController::new(store);

    match cmd {
        Commands::List => commands::list_objects(&mut controller).await,

        Commands::Add => commands::add_object(&mut controller).await,

        Commands::Remove { object_id } => {
            commands::remove_object(&mut controller, &object_id).await
        }

        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
