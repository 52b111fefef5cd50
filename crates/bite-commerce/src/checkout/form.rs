//! Checkout form and its validator.
//!
//! Payment details are a tagged union: each method carries only the fields
//! it needs, and [`CheckoutForm::validate`] checks them with a single match
//! on the method instead of optional fields plus cross-field rules.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A delivery address as typed into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub full_name: String,
    /// Street address.
    pub address1: String,
    /// Apartment, suite, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    /// State code, e.g. "CA".
    pub state: String,
    pub zip: String,
    pub phone: String,
}

impl DeliveryAddress {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address1.clone()];
        if let Some(ref addr2) = self.address2 {
            parts.push(addr2.clone());
        }
        parts.push(self.city.clone());
        parts.push(format!("{} {}", self.state, self.zip));
        parts.join(", ")
    }
}

/// Payment method with the fields that method requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentDetails {
    CreditCard {
        card_number: String,
        /// MM/YY.
        expiry: String,
        cvv: String,
        #[serde(default)]
        save_payment_info: bool,
    },
    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentDetails {
    /// Short description safe to print, e.g. "Credit card ending 4242".
    pub fn label(&self) -> String {
        match self {
            PaymentDetails::CreditCard { card_number, .. } => {
                let digits: String = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
                let last4 = &digits[digits.len().saturating_sub(4)..];
                format!("Credit card ending {}", last4)
            }
            PaymentDetails::PayPal => "PayPal".to_string(),
        }
    }
}

/// The whole checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub address: DeliveryAddress,
    pub payment: PaymentDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

/// A message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All validation messages for a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

// Digits are ASCII `[0-9]`, not Unicode `\d`.
fn pattern(cell: &'static OnceLock<Regex>, src: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(src).expect("checkout pattern is valid"))
}

fn zip_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[0-9]{5}(?:-[0-9]{4})?$")
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^(\+[0-9]{1,2}\s?)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}$")
}

fn card_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[0-9]{13,19}$")
}

fn expiry_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^(0[1-9]|1[0-2])/[0-9]{2}$")
}

fn cvv_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^[0-9]{3,4}$")
}

impl CheckoutForm {
    /// Check every field, collecting all messages.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        let a = &self.address;

        if a.full_name.chars().count() < 3 {
            errors.push("full_name", "Full name must be at least 3 characters.");
        }
        if a.address1.chars().count() < 5 {
            errors.push("address1", "Street address is required.");
        }
        if a.city.chars().count() < 2 {
            errors.push("city", "City is required.");
        }
        if a.state.chars().count() < 2 {
            errors.push("state", "State is required.");
        }
        if !zip_pattern().is_match(&a.zip) {
            errors.push("zip", "Invalid ZIP code format.");
        }
        if !phone_pattern().is_match(&a.phone) {
            errors.push("phone", "Invalid phone number format.");
        }

        match &self.payment {
            PaymentDetails::CreditCard {
                card_number,
                expiry,
                cvv,
                ..
            } => {
                let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
                if !card_pattern().is_match(&digits) {
                    errors.push("card_number", "Invalid card number.");
                }
                if !expiry_pattern().is_match(expiry) {
                    errors.push("expiry", "Expiry date must be MM/YY.");
                }
                if !cvv_pattern().is_match(cvv) {
                    errors.push("cvv", "CVV must be 3 or 4 digits.");
                }
            }
            PaymentDetails::PayPal => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> DeliveryAddress {
        DeliveryAddress {
            full_name: "Alice Smith".into(),
            address1: "123 Main St".into(),
            address2: Some("Apt 4".into()),
            city: "Anytown".into(),
            state: "CA".into(),
            zip: "90210".into(),
            phone: "(555) 123-4567".into(),
        }
    }

    fn card(number: &str, expiry: &str, cvv: &str) -> PaymentDetails {
        PaymentDetails::CreditCard {
            card_number: number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
            save_payment_info: false,
        }
    }

    #[test]
    fn test_valid_card_form() {
        let form = CheckoutForm {
            address: address(),
            payment: card("4242 4242 4242 4242", "12/27", "123"),
            promo_code: None,
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_paypal_needs_no_card_fields() {
        let form = CheckoutForm {
            address: address(),
            payment: PaymentDetails::PayPal,
            promo_code: Some("SAVE10".into()),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_card_fields_are_checked() {
        let form = CheckoutForm {
            address: address(),
            payment: card("1234", "13/27", "12"),
            promo_code: None,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("card_number"), Some("Invalid card number."));
        assert_eq!(errors.get("expiry"), Some("Expiry date must be MM/YY."));
        assert_eq!(errors.get("cvv"), Some("CVV must be 3 or 4 digits."));
    }

    #[test]
    fn test_address_fields_are_checked() {
        let form = CheckoutForm {
            address: DeliveryAddress {
                zip: "9021".into(),
                phone: "call me".into(),
                ..DeliveryAddress::default()
            },
            payment: PaymentDetails::PayPal,
            promo_code: None,
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["full_name", "address1", "city", "state", "zip", "phone"]);
    }

    #[test]
    fn test_zip_plus_four_and_phone_formats() {
        assert!(zip_pattern().is_match("90210-1234"));
        assert!(phone_pattern().is_match("+1 555.123.4567"));
        assert!(phone_pattern().is_match("5551234567"));
        assert!(!phone_pattern().is_match("555-1234"));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        let form = CheckoutForm {
            address: DeliveryAddress {
                zip: "\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}".into(),
                phone: "\u{0665}\u{0665}\u{0665}1234567".into(),
                ..address()
            },
            payment: card("\u{0664}242424242424242", "12/\u{0662}7", "\u{0661}23"),
            promo_code: None,
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["zip", "phone", "card_number", "expiry", "cvv"]);
    }

    #[test]
    fn test_payment_deserializes_by_tag() {
        let form: CheckoutForm = serde_json::from_str(
            r#"{
                "address": {"full_name": "Bob", "address1": "1 Road", "city": "X",
                            "state": "NY", "zip": "10001", "phone": "5551234567"},
                "payment": {"method": "paypal"}
            }"#,
        )
        .unwrap();
        assert_eq!(form.payment, PaymentDetails::PayPal);
        assert_eq!(form.payment.label(), "PayPal");
    }

    #[test]
    fn test_card_label_masks_number() {
        assert_eq!(card("4242 4242 4242 4242", "", "").label(), "Credit card ending 4242");
    }

    #[test]
    fn test_one_line_address() {
        assert_eq!(address().one_line(), "123 Main St, Apt 4, Anytown, CA 90210");
    }
}
