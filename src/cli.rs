//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Bucketlist - terminal client for a user-scoped cloud object bucket
#[derive(Parser)]
#[command(name = "bucketlist")]
#[command(version)]
#[command(about = "Browse and manage a user-scoped cloud object bucket", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode (the default when no command is given)
    Tui,

    /// List all objects in the bucket, newest first
    List,

    /// Create one auto-labelled object
    Add,

    /// Delete an object by its id
    Remove {
        /// Identifier of the object to delete
        object_id: String,
    },
}
