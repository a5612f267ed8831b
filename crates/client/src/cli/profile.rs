//! Store profile CLI commands.

use clap::{Parser, Subcommand};

/// Store profile commands.
#[derive(Debug, Parser)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Available profile actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Show the managed restaurant.
    Show,
    /// Update the store name and description.
    Update {
        /// New store name.
        #[arg(long)]
        name: String,
        /// New description; omit or pass an empty string to clear it.
        #[arg(long)]
        description: Option<String>,
    },
}
