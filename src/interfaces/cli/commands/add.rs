//! Add object command

use colored::Colorize;

use crate::controller::ListController;
use crate::interfaces::cli::CliError;

pub async fn add_object(controller: &mut ListController) -> Result<(), CliError> {
    let object = controller
        .create()
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to create object: {}", e)))?;

    println!(
        "{} Created {} ({})",
        "✓".bold().green(),
        object.label().cyan(),
        object.uri().blue()
    );
    Ok(())
}
