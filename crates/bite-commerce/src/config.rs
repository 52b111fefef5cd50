//! Storefront configuration.
//!
//! Every field defaults to the storefront's built-in pricing, so an empty
//! file is a valid configuration.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{PricingPolicy, PromoRule, CART_DELIVERY_FEE, CHECKOUT_DELIVERY_FEE, CHECKOUT_TAX_RATE};
use crate::checkout::DEFAULT_SUBMIT_DELAY;
use crate::error::CommerceError;
use crate::money::Currency;

/// Storefront configuration file (`bite.toml` or `bite.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub storefront: StorefrontSection,

    /// Cart page pricing.
    #[serde(default)]
    pub cart: CartSection,

    /// Checkout summary pricing and submission.
    #[serde(default)]
    pub checkout: CheckoutSection,

    /// The promo code both pages accept.
    #[serde(default)]
    pub promo: PromoRule,

    /// Tracing filter used when `RUST_LOG` is unset, e.g. `"bite_commerce=debug"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontSection {
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartSection {
    pub delivery_fee: Decimal,
    pub tax_rate: Decimal,
}

impl Default for CartSection {
    fn default() -> Self {
        Self {
            delivery_fee: CART_DELIVERY_FEE,
            tax_rate: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSection {
    pub delivery_fee: Decimal,
    pub tax_rate: Decimal,
    /// Simulated order submission time.
    pub submit_delay_ms: u64,
}

impl Default for CheckoutSection {
    fn default() -> Self {
        Self {
            delivery_fee: CHECKOUT_DELIVERY_FEE,
            tax_rate: CHECKOUT_TAX_RATE,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY.as_millis() as u64,
        }
    }
}

impl StorefrontConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CommerceError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::SerializationError(e.to_string()))
    }

    /// Pricing for the cart page.
    pub fn cart_policy(&self) -> PricingPolicy {
        PricingPolicy {
            currency: self.storefront.currency,
            delivery_fee: self.cart.delivery_fee,
            promo: self.promo.clone(),
            tax_rate: self.cart.tax_rate,
        }
    }

    /// Pricing for the checkout summary.
    pub fn checkout_policy(&self) -> PricingPolicy {
        PricingPolicy {
            currency: self.storefront.currency,
            delivery_fee: self.checkout.delivery_fee,
            promo: self.promo.clone(),
            tax_rate: self.checkout.tax_rate,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.checkout.submit_delay_ms)
    }

    /// Reject values no storefront page could display sensibly.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let hundred = Decimal::ONE_HUNDRED;
        for (name, fee) in [
            ("cart.delivery_fee", self.cart.delivery_fee),
            ("checkout.delivery_fee", self.checkout.delivery_fee),
        ] {
            if fee.is_sign_negative() {
                return Err(CommerceError::Config(format!("{name} must not be negative")));
            }
        }
        for (name, rate) in [
            ("cart.tax_rate", self.cart.tax_rate),
            ("checkout.tax_rate", self.checkout.tax_rate),
            ("promo.percent_off", self.promo.percent_off),
        ] {
            if rate.is_sign_negative() || rate > hundred {
                return Err(CommerceError::Config(format!(
                    "{name} must be between 0 and 100, got {rate}"
                )));
            }
        }
        if self.promo.code.trim().is_empty() {
            return Err(CommerceError::Config("promo.code must not be empty".into()));
        }
        Ok(())
    }
}
