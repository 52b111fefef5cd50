//! Cart store and line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cart::{compute_totals, CartTotals, PricingPolicy, PromoOutcome};
use crate::catalog::{ItemSelection, MenuItem};
use crate::error::CommerceError;
use crate::ids::{LineItemId, MenuItemId};

/// Maximum quantity the quantity controls allow per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    pub id: LineItemId,
    /// Menu item this line was added from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<MenuItemId>,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: i64,
    /// Display-only option labels, e.g. "Size: Large".
    #[serde(default)]
    pub options: Vec<String>,
}

impl CartLineItem {
    pub fn new(
        id: impl Into<LineItemId>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            menu_item_id: None,
            name: name.into(),
            unit_price,
            quantity,
            options: Vec::new(),
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Unit price times quantity, unrounded.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The cart held by a storefront session.
///
/// Items keep insertion order. Totals are never stored; [`CartStore::totals`]
/// derives them from the current items and promo code on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    applied_promo_code: Option<String>,
    #[serde(default)]
    policy: PricingPolicy,
}

impl CartStore {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            items: Vec::new(),
            applied_promo_code: None,
            policy,
        }
    }

    pub fn with_items(items: Vec<CartLineItem>, policy: PricingPolicy) -> Self {
        Self {
            items,
            applied_promo_code: None,
            policy,
        }
    }

    /// Replace the matching item's quantity verbatim.
    ///
    /// The store does not clamp; the quantity controls keep values at one or
    /// more. Returns `false` when no item has `id`.
    pub fn update_quantity(&mut self, id: &LineItemId, new_quantity: i64) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                debug!(item = %id, from = item.quantity, to = new_quantity, "updating quantity");
                item.quantity = new_quantity;
                true
            }
            None => false,
        }
    }

    /// Delete the matching item. Returns `false` if it was absent.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(item = %id, "removed cart item");
        }
        removed
    }

    /// Validate `code` and replace the applied promo code with it.
    ///
    /// A rejected code clears whatever code was applied before.
    pub fn apply_promo_code(&mut self, code: &str) -> PromoOutcome {
        if self.policy.promo.matches(code) {
            info!(code, "promo code applied");
            self.applied_promo_code = Some(code.to_string());
            PromoOutcome::Applied {
                code: code.to_string(),
            }
        } else {
            warn!(code, "promo code rejected");
            self.applied_promo_code = None;
            PromoOutcome::Rejected {
                code: code.to_string(),
            }
        }
    }

    /// Add a dish from a menu.
    ///
    /// A line with the same dish and identical options absorbs the quantity;
    /// anything else becomes a new line at the end of the cart. The resulting
    /// line quantity must stay within `1..=MAX_QUANTITY_PER_ITEM`; otherwise
    /// the cart is left unchanged.
    pub fn add_item(
        &mut self,
        menu_item: &MenuItem,
        selection: &ItemSelection,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM));
        }

        let options = selection.option_labels();
        if let Some(existing) = self.items.iter_mut().find(|i| {
            i.menu_item_id.as_ref() == Some(&menu_item.id) && i.options == options
        }) {
            let merged = existing.quantity.saturating_add(quantity);
            if merged > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(merged, MAX_QUANTITY_PER_ITEM));
            }
            existing.quantity = merged;
            debug!(item = %existing.id, quantity = merged, "merged into existing line");
            return Ok(existing.id.clone());
        }

        let mut line = CartLineItem::new(
            LineItemId::generate(),
            menu_item.name.clone(),
            menu_item.price,
            quantity,
        )
        .with_options(options);
        line.menu_item_id = Some(menu_item.id.clone());
        let id = line.id.clone();
        debug!(item = %id, name = %line.name, "added cart item");
        self.items.push(line);
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.applied_promo_code = None;
    }

    /// Freshly derived totals for the current items and promo code.
    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.items, self.applied_promo_code.as_deref(), &self.policy)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get_item(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn applied_promo_code(&self) -> Option<&str> {
        self.applied_promo_code.as_deref()
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Sum of quantities, as shown on the header badge.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |count, i| count.saturating_add(i.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(PricingPolicy::cart())
    }
}
