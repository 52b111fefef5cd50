//! Quantity controls sitting between user input and the cart store.
//!
//! The store writes quantities verbatim. These controls are the layer that
//! keeps a line at one or more: decrementing at one does nothing, and an
//! explicit quantity below one never reaches the store.

use serde::{Deserialize, Serialize};

use crate::cart::{CartStore, MAX_QUANTITY_PER_ITEM};
use crate::error::CommerceError;
use crate::ids::LineItemId;

/// What a +/- press did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The quantity changed to the contained value.
    Changed(i64),
    /// Decrement pressed at quantity one; the line was left alone.
    AtMinimum,
    /// Increment pressed at the per-item limit.
    AtMaximum,
}

/// Whether the decrement button for a line should be enabled.
pub fn can_decrement(quantity: i64) -> bool {
    quantity > 1
}

/// The + button.
pub fn increment(store: &mut CartStore, id: &LineItemId) -> Result<StepOutcome, CommerceError> {
    let quantity = current_quantity(store, id)?;
    if quantity >= MAX_QUANTITY_PER_ITEM {
        return Ok(StepOutcome::AtMaximum);
    }
    store.update_quantity(id, quantity + 1);
    Ok(StepOutcome::Changed(quantity + 1))
}

/// The - button. Never removes the line.
pub fn decrement(store: &mut CartStore, id: &LineItemId) -> Result<StepOutcome, CommerceError> {
    let quantity = current_quantity(store, id)?;
    if !can_decrement(quantity) {
        return Ok(StepOutcome::AtMinimum);
    }
    store.update_quantity(id, quantity - 1);
    Ok(StepOutcome::Changed(quantity - 1))
}

/// Set an explicit quantity typed by the user.
pub fn set_quantity(
    store: &mut CartStore,
    id: &LineItemId,
    quantity: i64,
) -> Result<StepOutcome, CommerceError> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM));
    }
    current_quantity(store, id)?;
    store.update_quantity(id, quantity);
    Ok(StepOutcome::Changed(quantity))
}

fn current_quantity(store: &CartStore, id: &LineItemId) -> Result<i64, CommerceError> {
    store
        .get_item(id)
        .map(|item| item.quantity)
        .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartLineItem, PricingPolicy};
    use rust_decimal_macros::dec;

    fn store_with(quantity: i64) -> CartStore {
        CartStore::with_items(
            vec![CartLineItem::new("1", "Caesar Salad", dec!(8.75), quantity)],
            PricingPolicy::cart(),
        )
    }

    #[test]
    fn test_increment() {
        let mut store = store_with(1);
        assert_eq!(increment(&mut store, &"1".into()).unwrap(), StepOutcome::Changed(2));
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn test_decrement_at_one_is_noop() {
        let mut store = store_with(1);
        let before = store.clone();
        assert_eq!(decrement(&mut store, &"1".into()).unwrap(), StepOutcome::AtMinimum);
        assert_eq!(store, before);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_decrement() {
        let mut store = store_with(3);
        assert_eq!(decrement(&mut store, &"1".into()).unwrap(), StepOutcome::Changed(2));
    }

    #[test]
    fn test_set_quantity_rejects_below_one() {
        let mut store = store_with(2);
        for bad in [0, -1, i64::MIN] {
            let err = set_quantity(&mut store, &"1".into(), bad).unwrap_err();
            assert!(matches!(err, CommerceError::InvalidQuantity(q) if q == bad));
        }
        assert_eq!(store.get_item(&"1".into()).unwrap().quantity, 2);
    }

    #[test]
    fn test_set_quantity_limit() {
        let mut store = store_with(2);
        assert!(matches!(
            set_quantity(&mut store, &"1".into(), MAX_QUANTITY_PER_ITEM + 1),
            Err(CommerceError::QuantityExceedsLimit(_, _))
        ));
        assert_eq!(
            increment(&mut store_with(MAX_QUANTITY_PER_ITEM), &"1".into()).unwrap(),
            StepOutcome::AtMaximum
        );
    }

    #[test]
    fn test_unknown_item() {
        let mut store = store_with(2);
        assert!(matches!(
            increment(&mut store, &"nope".into()),
            Err(CommerceError::ItemNotInCart(_))
        ));
    }
}
