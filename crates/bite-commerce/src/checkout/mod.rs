//! Checkout module.
//!
//! Contains the checkout form, its validator, the order summary and the
//! simulated order submission.

mod form;
mod summary;

pub use form::{CheckoutForm, DeliveryAddress, FieldError, FieldErrors, PaymentDetails};
pub use summary::{place_order, CheckoutSummary, PlacedOrder, SummaryLine, DEFAULT_SUBMIT_DELAY};
