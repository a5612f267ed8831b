//! CLI command definitions.

pub mod metrics;
pub mod profile;
pub mod restaurants;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the manageshop API.
#[derive(Debug, Parser)]
#[command(name = "manageshop")]
#[command(version, about = "Manage your store from the terminal", long_about = None)]
pub struct Cli {
    /// API base URL (overrides MANAGESHOP_API_URL).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store profile of the managed restaurant.
    Profile(profile::ProfileCommand),
    /// Restaurant registration.
    Restaurants(restaurants::RestaurantsCommand),
    /// Dashboard metrics.
    Metrics(metrics::MetricsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_profile_update() {
        let cli = Cli::parse_from([
            "manageshop",
            "--format",
            "json",
            "profile",
            "update",
            "--name",
            "Cafe B",
        ]);

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Profile(profile::ProfileCommand {
                action: profile::ProfileAction::Update { name, description },
            }) => {
                assert_eq!(name, "Cafe B");
                assert_eq!(description, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_register() {
        let cli = Cli::parse_from([
            "manageshop",
            "restaurants",
            "register",
            "--restaurant-name",
            "Cafe A",
            "--manager-name",
            "Ana",
            "--email",
            "ana@cafe.com",
        ]);

        match cli.command {
            Commands::Restaurants(restaurants::RestaurantsCommand {
                action: restaurants::RestaurantsAction::Register { phone, .. },
            }) => assert_eq!(phone, ""),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
