//! Pricing catalog command line
//!
//! Runs one catalog operation against the configured database and prints
//! the result as JSON.
//!
//! ```sh
//! # Default config (~/.config/pricing-service/config.toml)
//! pricing service add "Voice Calls"
//! pricing product add Starter
//! pricing product link 1 1 300
//! pricing plan add 1 30
//!
//! # Custom config / database
//! pricing --config /etc/pricing/config.toml service list
//! DATABASE_URL=sqlite::memory: pricing bundle list
//!
//! # Validate config without touching the database
//! pricing --check
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use pricing_core::application::dto::{
    BundleDto, PlanDto, ProductDto, ProductServiceDto, ServiceDto,
};
use pricing_core::{init_tracing, AppConfig, AppHandle, AppOptions, Catalog};

/// Pricing catalog: services, products, plans and bundles.
#[derive(Parser, Debug)]
#[command(
    name = "pricing",
    version,
    about = "Manage the pricing catalog",
    long_about = "Pricing catalog command line.\n\n\
                  Default config: ~/.config/pricing-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PRICING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Services (voice, SMS, data...)
    #[command(subcommand)]
    Service(ServiceCmd),
    /// Products and their linked services
    #[command(subcommand)]
    Product(ProductCmd),
    /// Plans (one per product)
    #[command(subcommand)]
    Plan(PlanCmd),
    /// Bundles
    #[command(subcommand)]
    Bundle(BundleCmd),
}

#[derive(Subcommand, Debug)]
enum ServiceCmd {
    Add { name: String },
    List,
    Get { id: i32 },
    Rename { id: i32, name: String },
    Remove { id: i32 },
    /// Products the service is part of
    Products { id: i32 },
}

#[derive(Subcommand, Debug)]
enum ProductCmd {
    Add { name: String },
    List,
    Remove { id: i32 },
    /// Attach a service with an allowance of `units`
    Link {
        product_id: i32,
        service_id: i32,
        units: i32,
    },
    Unlink { product_id: i32, service_id: i32 },
    /// Services linked to the product
    Services { id: i32 },
}

#[derive(Subcommand, Debug)]
enum PlanCmd {
    Add { product_id: i32, validity_days: i32 },
    List,
    Remove { id: i32 },
}

#[derive(Subcommand, Debug)]
enum BundleCmd {
    /// `price` is in the smallest currency unit
    Add { name: String, price: i32 },
    List,
    Remove { id: i32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(pricing_core::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // ── Run one catalog operation ──────────────────────────────
    let handle = AppHandle::start(AppOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    let outcome = dispatch(&handle.catalog, command).await;
    handle.shutdown().await;

    println!("{}", outcome?);
    Ok(())
}

async fn dispatch(catalog: &Catalog, command: Command) -> Result<String, Box<dyn std::error::Error>> {
    match command {
        Command::Service(cmd) => match cmd {
            ServiceCmd::Add { name } => {
                to_json(catalog.services.add_service(ServiceDto::named(name)).await?)
            }
            ServiceCmd::List => to_json(catalog.services.get_all_services().await?),
            ServiceCmd::Get { id } => to_json(catalog.services.get_service(id).await?),
            ServiceCmd::Rename { id, name } => to_json(
                catalog
                    .services
                    .update_service(ServiceDto::with_id(id, name))
                    .await?,
            ),
            ServiceCmd::Remove { id } => to_json(catalog.services.remove_service(id).await?),
            ServiceCmd::Products { id } => {
                to_json(catalog.services.get_all_products_of_service(id).await?)
            }
        },
        Command::Product(cmd) => match cmd {
            ProductCmd::Add { name } => {
                to_json(catalog.products.add_product(ProductDto::named(name)).await?)
            }
            ProductCmd::List => to_json(catalog.products.get_all_products().await?),
            ProductCmd::Remove { id } => to_json(catalog.products.remove_product(id).await?),
            ProductCmd::Link {
                product_id,
                service_id,
                units,
            } => to_json(
                catalog
                    .products
                    .add_service_to_product(ProductServiceDto::new(product_id, service_id, units))
                    .await?,
            ),
            ProductCmd::Unlink {
                product_id,
                service_id,
            } => to_json(
                catalog
                    .products
                    .remove_service_from_product(product_id, service_id)
                    .await?,
            ),
            ProductCmd::Services { id } => {
                to_json(catalog.products.get_all_services_of_product(id).await?)
            }
        },
        Command::Plan(cmd) => match cmd {
            PlanCmd::Add {
                product_id,
                validity_days,
            } => to_json(
                catalog
                    .plans
                    .add_plan(PlanDto::new(product_id, validity_days))
                    .await?,
            ),
            PlanCmd::List => to_json(catalog.plans.get_all_plans().await?),
            PlanCmd::Remove { id } => to_json(catalog.plans.remove_plan(id).await?),
        },
        Command::Bundle(cmd) => match cmd {
            BundleCmd::Add { name, price } => {
                to_json(catalog.bundles.add_bundle(BundleDto::new(name, price)).await?)
            }
            BundleCmd::List => to_json(catalog.bundles.get_all_bundles().await?),
            BundleCmd::Remove { id } => to_json(catalog.bundles.remove_bundle(id).await?),
        },
    }
}

fn to_json<T: Serialize>(value: T) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_pretty_json() {
        let json = to_json(BundleDto::new("Family", 2500)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(json.contains('\n'));
        assert_eq!(value["bundle_name"], "Family");
        assert_eq!(value["price"], 2500);
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["pricing", "product", "link", "1", "2", "300"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Product(ProductCmd::Link { product_id: 1, service_id: 2, units: 300 }))
        ));

        assert!(Cli::try_parse_from(["pricing", "plan", "add", "7"]).is_err());
    }
}
