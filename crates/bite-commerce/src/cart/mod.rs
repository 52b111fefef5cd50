//! Shopping cart module.
//!
//! Contains the cart store, pricing, the promo code rule, quantity controls
//! and the shared cart context.

mod cart;
mod context;
pub mod controls;
mod pricing;
mod promo;

pub use cart::{CartLineItem, CartStore, MAX_QUANTITY_PER_ITEM};
pub use context::{CartContext, CartSnapshot};
pub use controls::StepOutcome;
pub use pricing::{
    compute_cart_totals, compute_totals, CartTotals, PricingPolicy, CART_DELIVERY_FEE,
    CHECKOUT_DELIVERY_FEE, CHECKOUT_TAX_RATE,
};
pub use promo::{PromoOutcome, PromoRule, PROMO_PERCENT_OFF, VALID_PROMO_CODE};
