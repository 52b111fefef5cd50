//! Promo code rule.
//!
//! The storefront accepts exactly one code. Matching is a case-insensitive
//! comparison of the whole input: no trimming, no prefixes, no expiry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The promo code accepted by default.
pub const VALID_PROMO_CODE: &str = "SAVE10";

/// Percentage taken off the subtotal by [`VALID_PROMO_CODE`].
pub const PROMO_PERCENT_OFF: Decimal = dec!(10);

/// A single valid promo code and the percentage it takes off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoRule {
    pub code: String,
    /// Percentage off the subtotal (0 - 100).
    pub percent_off: Decimal,
}

impl PromoRule {
    pub fn new(code: impl Into<String>, percent_off: Decimal) -> Self {
        Self {
            code: code.into(),
            percent_off,
        }
    }

    /// Whether `input` names this code, ignoring case.
    pub fn matches(&self, input: &str) -> bool {
        input.to_uppercase() == self.code.to_uppercase()
    }

    /// Discount for `subtotal` when `promo_code` matches, zero otherwise.
    pub fn discount_for(&self, subtotal: &Money, promo_code: Option<&str>) -> Money {
        match promo_code {
            Some(code) if self.matches(code) => subtotal.percentage(self.percent_off),
            _ => Money::zero(subtotal.currency),
        }
    }
}

impl Default for PromoRule {
    fn default() -> Self {
        Self::new(VALID_PROMO_CODE, PROMO_PERCENT_OFF)
    }
}

/// Result of submitting a promo code to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PromoOutcome {
    /// The code was accepted and is now applied.
    Applied { code: String },
    /// The code was rejected; any previously applied code was cleared.
    Rejected { code: String },
}

impl PromoOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PromoOutcome::Applied { .. })
    }

    /// Message shown under the promo code input.
    pub fn message(&self) -> String {
        match self {
            PromoOutcome::Applied { code } => format!("\"{}\" applied!", code),
            PromoOutcome::Rejected { .. } => "Invalid or expired promo code.".to_string(),
        }
    }
}
