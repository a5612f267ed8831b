//! Restaurant CLI commands.

use clap::{Parser, Subcommand};

/// Restaurant commands.
#[derive(Debug, Parser)]
pub struct RestaurantsCommand {
    #[command(subcommand)]
    pub action: RestaurantsAction,
}

/// Available restaurant actions.
#[derive(Debug, Subcommand)]
pub enum RestaurantsAction {
    /// Register a new restaurant and its manager.
    Register {
        /// Restaurant name.
        #[arg(long)]
        restaurant_name: String,
        /// Manager's name.
        #[arg(long)]
        manager_name: String,
        /// Manager's email, used to sign in.
        #[arg(long)]
        email: String,
        /// Manager's phone.
        #[arg(long, default_value = "")]
        phone: String,
    },
}
