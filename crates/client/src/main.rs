//! manageshop CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use manageshop_client::cli::{Cli, Commands, OutputFormat};
use manageshop_client::output::{format_output, pretty};
use manageshop_client::{signup, Config, ConsoleNotifier, ManageShopClient, MemoryQueryCache};
use manageshop_core::cache::month_orders_amount_key;
use manageshop_core::mutation::{OptimisticCache, ProfileUpdateError, StoreProfileController};
use manageshop_core::query::QueryClient;
use manageshop_core::restaurant::{validate_profile, ProfileForm, RegistrationForm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --format json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manageshop_client=info,manageshop_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let base_url = cli.base_url.clone().unwrap_or_else(|| config.api_url.clone());
    let client = ManageShopClient::with_timeout(base_url, config.request_timeout())?;
    let cache = Arc::new(MemoryQueryCache::new(config.cache_max_entries)?);
    let notifier = Arc::new(ConsoleNotifier::new(cli.quiet));

    tracing::debug!(base_url = %client.base_url(), "Client configured");

    match cli.command {
        Commands::Profile(profile_cmd) => {
            use manageshop_client::cli::profile::ProfileAction;
            let controller = StoreProfileController::new(
                Arc::new(OptimisticCache::new(Arc::clone(&cache))),
                Arc::new(client),
                Arc::clone(&notifier),
            );
            let restaurant = controller.load().await?;

            match profile_cmd.action {
                ProfileAction::Show => print_restaurant(&restaurant, cli.format),
                ProfileAction::Update { name, description } => {
                    let profile = validate_profile(&ProfileForm { name, description })?;
                    let result = controller.submit(profile.name, profile.description).await;

                    if let Some(current) = controller.current()? {
                        print_restaurant(&current, cli.format);
                    }
                    match result {
                        Ok(()) => {}
                        Err(ProfileUpdateError::Rejected(_)) => return Ok(ExitCode::FAILURE),
                        Err(err) => return Err(err.into()),
                    }
                }
            }
        }
        Commands::Restaurants(restaurants_cmd) => {
            use manageshop_client::cli::restaurants::RestaurantsAction;
            match restaurants_cmd.action {
                RestaurantsAction::Register {
                    restaurant_name,
                    manager_name,
                    email,
                    phone,
                } => {
                    let form = RegistrationForm {
                        restaurant_name,
                        manager_name,
                        email,
                        phone,
                    };
                    if signup::register_restaurant(&client, notifier.as_ref(), &form)
                        .await
                        .is_err()
                    {
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
        Commands::Metrics(metrics_cmd) => {
            use manageshop_client::cli::metrics::MetricsAction;
            let query = QueryClient::new(Arc::clone(&cache));
            match metrics_cmd.action {
                MetricsAction::MonthOrders => {
                    let metric = query
                        .fetch_query(
                            &month_orders_amount_key(),
                            config.metrics_stale_time(),
                            || client.month_orders_amount(),
                        )
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&metric, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_month_orders_amount(&metric))
                        }
                    }
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_restaurant(
    restaurant: &manageshop_core::restaurant::ManagedRestaurant,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => println!("{}", format_output(restaurant, format)),
        OutputFormat::Pretty => println!("{}", pretty::format_restaurant(restaurant)),
    }
}
