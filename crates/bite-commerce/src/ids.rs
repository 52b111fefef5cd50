//! Newtype IDs for the storefront's identifiers.
//!
//! Cart lines, menu items and restaurants are all keyed by strings in the
//! placeholder data; the newtypes keep them from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new process-unique ID.
            pub fn generate() -> Self {
                Self(next_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a line in the cart.
    LineItemId
);
define_id!(
    /// Identifier of a dish on a restaurant menu.
    MenuItemId
);
define_id!(
    /// Identifier of a restaurant.
    RestaurantId
);
define_id!(
    /// Identifier of a placed order, e.g. `FD7890123`.
    OrderId
);
define_id!(AddressId);
define_id!(PaymentMethodId);

impl OrderId {
    /// Generate a customer-facing order number (`FD` followed by digits).
    pub fn order_number() -> Self {
        let now = chrono::Utc::now().timestamp_millis().unsigned_abs();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("FD{}", (now % 10_000_000) * 100 + seq % 100))
    }
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id() -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .unsigned_abs();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}-{:x}", nanos, seq)
}
