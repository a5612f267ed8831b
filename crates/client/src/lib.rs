//! manageshop_client - API client and CLI for the manageshop dashboard.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod notifier;
pub mod output;
pub mod signup;

pub use cache::MemoryQueryCache;
pub use client::ManageShopClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use notifier::ConsoleNotifier;
