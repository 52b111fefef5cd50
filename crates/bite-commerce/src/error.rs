//! Commerce error types.

use thiserror::Error;

use crate::checkout::FieldErrors;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Quantity below the minimum of one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Restaurant not found.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Menu item not found.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Unknown order status name.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Checkout form failed validation.
    #[error("Checkout form is invalid: {0}")]
    Validation(FieldErrors),

    /// Checkout attempted with an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}
