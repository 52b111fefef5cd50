//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod menu;
pub mod profile;
pub mod restaurants;
pub mod track;

use bite_commerce::cart::MAX_QUANTITY_PER_ITEM;
use clap::{Args, Subcommand};

/// Arguments for the restaurants command.
#[derive(Args)]
pub struct RestaurantsArgs {
    /// Match restaurant name or cuisine (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only restaurants of this cuisine.
    #[arg(long)]
    pub cuisine: Option<String>,
}

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Restaurant id, as listed by `bite restaurants`.
    #[arg(default_value = bite_commerce::fixtures::FEATURED_RESTAURANT_ID)]
    pub restaurant: String,
}

/// Arguments for the cart command. With no flags, shows the cart.
///
/// Changes apply in the order clear, add, inc, dec, set, remove, promo.
#[derive(Args)]
pub struct CartArgs {
    /// Add a menu item by id (e.g. main1).
    #[arg(long, value_name = "MENU_ITEM")]
    pub add: Option<String>,

    /// Restaurant the added item comes from.
    #[arg(long, default_value = bite_commerce::fixtures::FEATURED_RESTAURANT_ID)]
    pub restaurant: String,

    /// Size for the added item (defaults to the first size offered).
    #[arg(long, requires = "add")]
    pub size: Option<String>,

    /// Topping for the added item; repeat for several.
    #[arg(long, requires = "add")]
    pub topping: Vec<String>,

    /// Quantity to add (1-99).
    #[arg(
        long,
        default_value_t = 1,
        requires = "add",
        value_parser = clap::value_parser!(i64).range(1..=MAX_QUANTITY_PER_ITEM)
    )]
    pub qty: i64,

    /// Increase a line's quantity by one.
    #[arg(long, value_name = "LINE")]
    pub inc: Option<String>,

    /// Decrease a line's quantity by one (never below one).
    #[arg(long, value_name = "LINE")]
    pub dec: Option<String>,

    /// Set a line's quantity, as LINE=QTY.
    #[arg(long, value_name = "LINE=QTY")]
    pub set: Option<String>,

    /// Remove a line.
    #[arg(long, value_name = "LINE")]
    pub remove: Option<String>,

    /// Apply a promo code.
    #[arg(long)]
    pub promo: Option<String>,

    /// Empty the cart before applying the other changes.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Checkout form as JSON or TOML (address, payment, optional promo_code).
    #[arg(short, long)]
    pub form: String,

    /// Check out the session cart instead of the checkout page's sample order.
    #[arg(long)]
    pub from_cart: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the track command.
#[derive(Args)]
pub struct TrackArgs {
    /// Show the tracker as if the order were at this status
    /// (confirmed, preparing, out-for-delivery, delivered, cancelled).
    #[arg(short, long)]
    pub status: Option<String>,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// Only show the order history.
    #[arg(long)]
    pub orders: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
