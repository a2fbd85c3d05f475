//! List objects command

use colored::Colorize;

use crate::controller::ListController;
use crate::interfaces::cli::CliError;

pub async fn list_objects(controller: &mut ListController) -> Result<(), CliError> {
    let count = controller
        .load()
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to load objects: {}", e)))?;

    if count == 0 {
        println!("{} No objects found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Objects (newest first):".bold().green());
    println!();
    for object in controller.items() {
        println!(
            "  {} {}",
            object.label().cyan(),
            object.uri().blue().underline()
        );
        println!(
            "    {}",
            format!("created: {}", object.created_at.format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} objects",
        "ℹ".bold().blue(),
        count.to_string().green()
    );
    Ok(())
}
