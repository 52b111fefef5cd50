//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Arithmetic keeps full precision (a 10%
//! discount on $26.24 is $2.624) and rounding to the currency's minor unit
//! happens only when a value is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of fractional digits shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Exact amount in major units (dollars, euros).
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from minor units.
    ///
    /// ```
    /// use bite_commerce::money::{Currency, Money};
    /// let price = Money::from_cents(1599, Currency::USD);
    /// assert_eq!(price.display(), "$15.99");
    /// ```
    pub fn from_cents(cents: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(cents, currency.decimal_places()), currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Round to the currency's minor unit, half away from zero.
    pub fn rounded(&self) -> Money {
        let mut amount = self
            .amount
            .round_dp_with_strategy(self.currency.decimal_places(), RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(self.currency.decimal_places());
        Money::new(amount, self.currency)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let rounded = self.rounded();
        if rounded.amount.is_sign_negative() && !rounded.amount.is_zero() {
            format!("-{}{}", self.currency.symbol(), rounded.amount.abs())
        } else {
            format!("{}{}", self.currency.symbol(), rounded.amount.abs())
        }
    }

    /// A percentage of this amount, unrounded.
    pub fn percentage(&self, percent: Decimal) -> Money {
        Money::new(self.amount * percent / Decimal::ONE_HUNDRED, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
