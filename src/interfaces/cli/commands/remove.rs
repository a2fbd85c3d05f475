//! Remove object command

use colored::Colorize;

use crate::controller::ListController;
use crate::interfaces::cli::CliError;

pub async fn remove_object(
    controller: &mut ListController,
    object_id: &str,
) -> Result<(), CliError> {
    controller
        .load()
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to load objects: {}", e)))?;

    let target = controller
        .items()
        .iter()
        .find(|o| o.id == object_id)
        .cloned()
        .ok_or_else(|| CliError::CommandError(format!("No object with id '{}'", object_id)))?;

    controller
        .delete(&target)
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to delete object: {}", e)))?;

    println!(
        "{} Deleted {} ({})",
        "✓".bold().green(),
        target.label().cyan(),
        target.id.dimmed()
    );
    Ok(())
}
