//! Cart pricing calculations.
//!
//! Totals are a pure function of the line items, the applied promo code and
//! a [`PricingPolicy`]. Nothing here is cached: callers recompute whenever
//! the cart changes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::cart::{CartLineItem, PromoRule};
use crate::money::{Currency, Money};

/// Delivery fee charged on the cart page.
pub const CART_DELIVERY_FEE: Decimal = dec!(5.00);

/// Delivery fee charged on the checkout summary.
pub const CHECKOUT_DELIVERY_FEE: Decimal = dec!(3.50);

/// Tax rate (percent) applied on the checkout summary.
pub const CHECKOUT_TAX_RATE: Decimal = dec!(8);

/// Fees, promo rule and tax used to price a set of line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub currency: Currency,
    /// Flat fee charged once for a non-empty cart.
    pub delivery_fee: Decimal,
    pub promo: PromoRule,
    /// Tax in percent of the subtotal before any discount.
    pub tax_rate: Decimal,
}

impl PricingPolicy {
    /// Cart page policy: $5.00 delivery, SAVE10, no tax.
    pub fn cart() -> Self {
        Self {
            currency: Currency::USD,
            delivery_fee: CART_DELIVERY_FEE,
            promo: PromoRule::default(),
            tax_rate: Decimal::ZERO,
        }
    }

    /// Checkout summary policy: $3.50 delivery and 8% tax on the
    /// undiscounted subtotal.
    pub fn checkout() -> Self {
        Self {
            delivery_fee: CHECKOUT_DELIVERY_FEE,
            tax_rate: CHECKOUT_TAX_RATE,
            ..Self::cart()
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::cart()
    }
}

/// Complete pricing breakdown for a cart, at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    pub discount: Money,
    pub delivery_fee: Money,
    pub tax: Money,
    /// subtotal - discount + delivery_fee + tax.
    pub total: Money,
}

impl CartTotals {
    pub fn zero(currency: Currency) -> Self {
        let zero = Money::zero(currency);
        Self {
            subtotal: zero,
            discount: zero,
            delivery_fee: zero,
            tax: zero,
            total: zero,
        }
    }

    /// Every component rounded to the minor unit, for display.
    ///
    /// The total is rounded from the precise total, not summed from the
    /// rounded parts.
    pub fn rounded(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal.rounded(),
            discount: self.discount.rounded(),
            delivery_fee: self.delivery_fee.rounded(),
            tax: self.tax.rounded(),
            total: self.total.rounded(),
        }
    }

    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}

/// Price `items` under `policy`, applying `promo_code` if it matches.
pub fn compute_totals(
    items: &[CartLineItem],
    promo_code: Option<&str>,
    policy: &PricingPolicy,
) -> CartTotals {
    let currency = policy.currency;
    if items.is_empty() {
        return CartTotals::zero(currency);
    }

    let subtotal = Money::new(
        items.iter().map(CartLineItem::line_total).sum(),
        currency,
    );
    let discount = policy.promo.discount_for(&subtotal, promo_code);
    let delivery_fee = Money::new(policy.delivery_fee, currency);
    let tax = subtotal.percentage(policy.tax_rate);
    let total = Money::new(
        subtotal.amount - discount.amount + delivery_fee.amount + tax.amount,
        currency,
    );

    CartTotals {
        subtotal,
        discount,
        delivery_fee,
        tax,
        total,
    }
}

/// [`compute_totals`] under the cart page policy.
pub fn compute_cart_totals(items: &[CartLineItem], promo_code: Option<&str>) -> CartTotals {
    compute_totals(items, promo_code, &PricingPolicy::cart())
}
