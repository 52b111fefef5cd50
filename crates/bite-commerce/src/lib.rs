//! Storefront domain types and logic for BiteDash, a food-delivery app.
//!
//! This crate provides the pieces every storefront page renders from:
//!
//! - **Catalog**: Restaurants, menus, dish customization
//! - **Cart**: Cart store, quantity controls, promo code, pricing
//! - **Checkout**: Form validation, order summary, simulated submission
//! - **Order**: Status model and the progress stepper
//! - **Profile**: Saved addresses, payment methods, order history
//!
//! # Example
//!
//! ```rust
//! use bite_commerce::prelude::*;
//!
//! let restaurant = bite_commerce::fixtures::featured_restaurant();
//! let pizza = restaurant.find_item(&MenuItemId::new("main1")).unwrap();
//!
//! let mut cart = CartStore::new(PricingPolicy::cart());
//! cart.add_item(pizza, &pizza.default_selection(), 2).unwrap();
//! cart.apply_promo_code("save10");
//!
//! let totals = cart.totals().rounded();
//! assert_eq!(totals.subtotal.display(), "$25.98");
//! assert_eq!(totals.discount.display(), "$2.60");
//! assert_eq!(totals.total.display(), "$28.38");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod order;
pub mod profile;

pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CuisineCategory, ItemSelection, MenuItem, MenuOptions, MenuSection, Restaurant,
        RestaurantSummary,
    };

    // Cart
    pub use crate::cart::{
        compute_totals, CartContext, CartLineItem, CartSnapshot, CartStore, CartTotals,
        PricingPolicy, PromoOutcome, PromoRule, StepOutcome,
    };

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutForm, CheckoutSummary, DeliveryAddress, FieldErrors,
        PaymentDetails, PlacedOrder,
    };

    // Order
    pub use crate::order::{progress_percent, tracker_view, OrderStatus, TrackedOrder, TrackerView};

    // Profile
    pub use crate::profile::{OrderHistoryEntry, SavedAddress, SavedPaymentMethod, UserProfile};
}
