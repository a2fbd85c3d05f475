use clap::Parser;
use tracing::debug;

use bucketlist::cli::{Cli, Commands};
use bucketlist::config;
use bucketlist::interfaces::{cli as cli_interface, tui};
use bucketlist::system::init_logging;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    config::init_config();
    let _log_guard = init_logging(config::get_config());
    debug!("Configuration loaded");

    match args.command {
        None | Some(Commands::Tui) => {
            if let Err(e) = tui::run_tui().await {
                eprintln!("TUI error: {}", e);
                return std::process::ExitCode::FAILURE;
            }
        }
        Some(cmd) => {
            if let Err(e) = cli_interface::run_cli_command(cmd).await {
                eprintln!("{}", e.format_colored());
                return std::process::ExitCode::FAILURE;
            }
        }
    }

    std::process::ExitCode::SUCCESS
}
