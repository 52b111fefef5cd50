//! Bite CLI - the BiteDash storefront in a terminal.
//!
//! Commands:
//! - `bite restaurants` - Browse and search restaurants
//! - `bite menu` - Show a restaurant's menu
//! - `bite cart` - View and change the cart
//! - `bite checkout` - Place an order
//! - `bite track` - Track an order
//! - `bite profile` - Show the customer profile
//! - `bite config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, MenuArgs, ProfileArgs, RestaurantsArgs, TrackArgs,
};

/// Bite CLI - order food from the terminal
#[derive(Parser)]
#[command(name = "bite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List restaurants
    Restaurants(RestaurantsArgs),

    /// Show a restaurant's menu
    Menu(MenuArgs),

    /// View or change the cart
    Cart(CartArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Track an order
    Track(TrackArgs),

    /// Show your profile and order history
    Profile(ProfileArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Log to stderr. `RUST_LOG` wins over the config's `log_filter`;
/// `--verbose` turns on debug logging for everything.
fn init_tracing(verbose: bool, log_filter: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(log_filter.unwrap_or("warn")))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, ctx.config.log_filter.as_deref());
    tracing::debug!(config = ?ctx.config_path, "loaded configuration");

    // Execute command
    let result = match cli.command {
        Commands::Restaurants(args) => commands::restaurants::run(args, &ctx).await,
        Commands::Menu(args) => commands::menu::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Track(args) => commands::track::run(args, &ctx).await,
        Commands::Profile(args) => commands::profile::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_flags() {
        let cli = Cli::try_parse_from([
            "bite", "--json", "cart", "--add", "main1", "--size", "Large 16\"", "--topping",
            "Olives", "--topping", "Mushrooms", "--qty", "2",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Cart(args) => {
                assert_eq!(args.add.as_deref(), Some("main1"));
                assert_eq!(args.topping, vec!["Olives", "Mushrooms"]);
                assert_eq!(args.qty, 2);
                assert_eq!(args.restaurant, "luigis");
            }
            _ => panic!("expected cart command"),
        }
    }

    #[test]
    fn test_qty_outside_per_item_limit_is_rejected() {
        for qty in ["0", "100", "9223372036854775807"] {
            assert!(
                Cli::try_parse_from(["bite", "cart", "--add", "main1", "--qty", qty]).is_err(),
                "--qty {} should be rejected",
                qty
            );
        }
        assert!(Cli::try_parse_from(["bite", "cart", "--add", "main1", "--qty", "99"]).is_ok());
    }

    #[test]
    fn test_size_requires_add() {
        assert!(Cli::try_parse_from(["bite", "cart", "--size", "Large 16\""]).is_err());
    }

    #[test]
    fn test_parse_track_status() {
        let cli = Cli::try_parse_from(["bite", "track", "--status", "cancelled"]).unwrap();
        match cli.command {
            Commands::Track(args) => {
                assert_eq!(args.status.as_deref(), Some("cancelled"));
            }
            _ => panic!("expected track command"),
        }
    }
}
