//! Customer profile: contact details, saved addresses, saved payment
//! methods and past orders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{AddressId, OrderId, PaymentMethodId};
use crate::money::Money;
use crate::order::OrderStatus;

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

impl SavedAddress {
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip, self.country
        )
    }
}

/// A saved payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SavedPaymentMethod {
    Card {
        id: PaymentMethodId,
        brand: String,
        last4: String,
        expiry: String,
        #[serde(default)]
        is_default: bool,
    },
    #[serde(rename = "paypal")]
    PayPal {
        id: PaymentMethodId,
        email: String,
        #[serde(default)]
        is_default: bool,
    },
}

impl SavedPaymentMethod {
    pub fn id(&self) -> &PaymentMethodId {
        match self {
            SavedPaymentMethod::Card { id, .. } | SavedPaymentMethod::PayPal { id, .. } => id,
        }
    }

    pub fn is_default(&self) -> bool {
        match self {
            SavedPaymentMethod::Card { is_default, .. }
            | SavedPaymentMethod::PayPal { is_default, .. } => *is_default,
        }
    }

    /// e.g. "Visa ending in 4242" or "PayPal ending in alice@example.com".
    pub fn label(&self) -> String {
        match self {
            SavedPaymentMethod::Card { brand, last4, .. } => format!("{brand} ending in {last4}"),
            SavedPaymentMethod::PayPal { email, .. } => format!("PayPal ending in {email}"),
        }
    }
}

/// A row of the order history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistoryEntry {
    pub id: OrderId,
    pub date: NaiveDate,
    pub total: Money,
    pub status: OrderStatus,
    /// Free-text item summary, e.g. "Pizza, Coke".
    pub items: String,
}

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub addresses: Vec<SavedAddress>,
    #[serde(default)]
    pub payment_methods: Vec<SavedPaymentMethod>,
    #[serde(default)]
    pub order_history: Vec<OrderHistoryEntry>,
}

impl UserProfile {
    /// Avatar fallback: first letter of each name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    pub fn default_payment_method(&self) -> Option<&SavedPaymentMethod> {
        self.payment_methods.iter().find(|p| p.is_default())
    }

    /// Order history, newest first.
    pub fn recent_orders(&self) -> Vec<&OrderHistoryEntry> {
        let mut orders: Vec<_> = self.order_history.iter().collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Alice Wonderland".into(),
            email: "alice@example.com".into(),
            phone: "123-456-7890".into(),
            addresses: vec![SavedAddress {
                id: "1".into(),
                street: "123 Main St".into(),
                city: "Anytown".into(),
                state: "CA".into(),
                zip: "90210".into(),
                country: "USA".into(),
                is_default: true,
            }],
            payment_methods: vec![
                SavedPaymentMethod::Card {
                    id: "1".into(),
                    brand: "Visa".into(),
                    last4: "4242".into(),
                    expiry: "12/25".into(),
                    is_default: false,
                },
                SavedPaymentMethod::PayPal {
                    id: "2".into(),
                    email: "alice.paypal@example.com".into(),
                    is_default: true,
                },
            ],
            order_history: vec![
                OrderHistoryEntry {
                    id: "ORD321".into(),
                    date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
                    total: Money::from_cents(3000, Currency::USD),
                    status: OrderStatus::Cancelled,
                    items: "Sushi Platter".into(),
                },
                OrderHistoryEntry {
                    id: "ORD789".into(),
                    date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
                    total: Money::from_cents(4599, Currency::USD),
                    status: OrderStatus::Delivered,
                    items: "Pizza, Coke".into(),
                },
            ],
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(profile().initials(), "AW");
    }

    #[test]
    fn test_defaults() {
        let p = profile();
        assert_eq!(p.default_address().unwrap().zip, "90210");
        assert_eq!(
            p.default_payment_method().unwrap().label(),
            "PayPal ending in alice.paypal@example.com"
        );
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let p = profile();
        let ids: Vec<_> = p.recent_orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD789", "ORD321"]);
    }

    #[test]
    fn test_payment_method_serde_tag() {
        let json = serde_json::to_value(&profile().payment_methods[1]).unwrap();
        assert_eq!(json["type"], "paypal");
    }
}
