//! Dashboard metric CLI commands.

use clap::{Parser, Subcommand};

/// Dashboard metric commands.
#[derive(Debug, Parser)]
pub struct MetricsCommand {
    #[command(subcommand)]
    pub action: MetricsAction,
}

/// Available metrics.
#[derive(Debug, Subcommand)]
pub enum MetricsAction {
    /// Orders this month compared with last month.
    MonthOrders,
}
