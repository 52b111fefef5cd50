//! Checkout order summary and simulated order placement.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{compute_totals, CartLineItem, CartTotals, PricingPolicy};
use crate::checkout::CheckoutForm;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use crate::order::{OrderStatus, TrackedOrder};

/// How long the simulated submission takes by default.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// One row of the order summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: i64,
    pub line_total: Money,
}

/// Priced contents of the checkout page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    pub promo_code: Option<String>,
    pub totals: CartTotals,
}

impl CheckoutSummary {
    pub fn new(items: &[CartLineItem], promo_code: Option<&str>, policy: &PricingPolicy) -> Self {
        let lines = items
            .iter()
            .map(|item| SummaryLine {
                name: item.name.clone(),
                quantity: item.quantity,
                line_total: Money::new(item.line_total(), policy.currency),
            })
            .collect();
        Self {
            lines,
            promo_code: promo_code.map(str::to_string),
            totals: compute_totals(items, promo_code, policy),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An order accepted by the (simulated) backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub total: Money,
    pub status: OrderStatus,
    pub payment: String,
    pub delivery_address: String,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    /// The tracking page for this order.
    pub fn tracking(&self, estimated_delivery: impl Into<String>) -> TrackedOrder {
        TrackedOrder::new(
            self.order_id.clone(),
            self.status,
            estimated_delivery,
            self.delivery_address.clone(),
        )
    }
}

/// Validate the form, wait out the simulated submission, and confirm.
pub async fn place_order(
    form: &CheckoutForm,
    summary: &CheckoutSummary,
    delay: Duration,
) -> Result<PlacedOrder, CommerceError> {
    if summary.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    form.validate().map_err(CommerceError::Validation)?;

    tokio::time::sleep(delay).await;

    let order = PlacedOrder {
        order_id: OrderId::order_number(),
        total: summary.totals.total,
        status: OrderStatus::Confirmed,
        payment: form.payment.label(),
        delivery_address: form.address.one_line(),
        placed_at: Utc::now(),
    };
    info!(order = %order.order_id, total = %order.total, "order placed");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{DeliveryAddress, PaymentDetails};
    use rust_decimal_macros::dec;

    fn items() -> Vec<CartLineItem> {
        vec![
            CartLineItem::new("1", "Margherita Pizza", dec!(12.99), 1),
            CartLineItem::new("2", "Coca-Cola (2L)", dec!(2.50), 2),
        ]
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            address: DeliveryAddress {
                full_name: "Alice Smith".into(),
                address1: "123 Main St".into(),
                address2: None,
                city: "Anytown".into(),
                state: "CA".into(),
                zip: "90210".into(),
                phone: "555-123-4567".into(),
            },
            payment: PaymentDetails::PayPal,
            promo_code: None,
        }
    }

    #[test]
    fn test_summary_lines_and_totals() {
        let summary = CheckoutSummary::new(&items(), None, &PricingPolicy::checkout());
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[1].line_total.amount, dec!(5.00));
        assert_eq!(summary.totals.rounded().total.display(), "$22.93");
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_confirms() {
        let summary = CheckoutSummary::new(&items(), None, &PricingPolicy::checkout());
        let order = place_order(&form(), &summary, DEFAULT_SUBMIT_DELAY).await.unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.total, summary.totals.total);
        assert!(order.order_id.as_str().starts_with("FD"));
        assert_eq!(order.tracking("soon").status, OrderStatus::Confirmed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_rejects_invalid_form() {
        let summary = CheckoutSummary::new(&items(), None, &PricingPolicy::checkout());
        let mut bad = form();
        bad.address.zip = "abc".into();
        let err = place_order(&bad, &summary, DEFAULT_SUBMIT_DELAY).await.unwrap_err();
        match err {
            CommerceError::Validation(errors) => assert!(errors.get("zip").is_some()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_place_order_rejects_empty_cart() {
        let summary = CheckoutSummary::new(&[], None, &PricingPolicy::checkout());
        assert!(matches!(
            place_order(&form(), &summary, Duration::ZERO).await,
            Err(CommerceError::EmptyCart)
        ));
    }
}
