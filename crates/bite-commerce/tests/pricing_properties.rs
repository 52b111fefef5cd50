//! Pricing and cart-store properties.

use bite_commerce::cart::controls;
use bite_commerce::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line(id: usize, cents: i64, quantity: i64) -> CartLineItem {
    CartLineItem::new(
        format!("{id}"),
        format!("Item {id}"),
        Decimal::new(cents, 2),
        quantity,
    )
}

fn arb_items() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((1i64..10_000, 1i64..=99), 0..12)
}

proptest! {
    #[test]
    fn test_subtotal_is_sum_of_line_totals(raw in arb_items()) {
        let items: Vec<_> = raw.iter().enumerate().map(|(i, &(c, q))| line(i, c, q)).collect();
        let expected: Decimal = raw.iter().map(|&(c, q)| Decimal::new(c, 2) * Decimal::from(q)).sum();
        let totals = compute_totals(&items, None, &PricingPolicy::cart());
        prop_assert_eq!(totals.subtotal.amount, expected);
    }

    #[test]
    fn test_subtotal_ignores_item_order(raw in arb_items(), seed in any::<u64>()) {
        let items: Vec<_> = raw.iter().enumerate().map(|(i, &(c, q))| line(i, c, q)).collect();
        let mut shuffled = items.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }
        let policy = PricingPolicy::checkout();
        prop_assert_eq!(
            compute_totals(&items, Some("SAVE10"), &policy),
            compute_totals(&shuffled, Some("SAVE10"), &policy)
        );
    }

    #[test]
    fn test_total_is_sum_of_components(raw in prop::collection::vec((1i64..10_000, 1i64..=99), 1..12)) {
        let items: Vec<_> = raw.iter().enumerate().map(|(i, &(c, q))| line(i, c, q)).collect();
        let t = compute_totals(&items, Some("save10"), &PricingPolicy::checkout());
        prop_assert_eq!(
            t.total.amount,
            t.subtotal.amount - t.discount.amount + t.delivery_fee.amount + t.tax.amount
        );
        prop_assert!(!t.total.is_negative());
    }
}

#[test]
fn test_empty_cart_is_all_zero() {
    for policy in [PricingPolicy::cart(), PricingPolicy::checkout()] {
        let totals = compute_totals(&[], Some("SAVE10"), &policy);
        assert_eq!(totals, CartTotals::zero(Currency::USD));
    }
}

#[test]
fn test_save10_worked_example() {
    let items = vec![
        CartLineItem::new("1", "Margherita Pizza", dec!(15.99), 1),
        CartLineItem::new("2", "Caesar Salad", dec!(8.75), 1),
        CartLineItem::new("3", "Coca-Cola Can", dec!(1.50), 1),
    ];
    let totals = compute_totals(&items, Some("SAVE10"), &PricingPolicy::cart());
    assert_eq!(totals.subtotal.amount, dec!(26.24));
    assert_eq!(totals.discount.amount, dec!(2.624));
    assert_eq!(totals.discount.display(), "$2.62");
    assert_eq!(totals.total.amount, dec!(28.616));
    assert_eq!(totals.total.display(), "$28.62");
}

#[test]
fn test_rejected_code_clears_previous_code() {
    let mut store = CartStore::with_items(vec![line(1, 2000, 1)], PricingPolicy::cart());
    assert!(store.apply_promo_code("SAVE10").is_applied());
    assert!(store.totals().has_discount());

    let outcome = store.apply_promo_code("SAVE20");
    assert!(!outcome.is_applied());
    assert_eq!(store.applied_promo_code(), None);
    assert!(store.totals().discount.is_zero());
}

#[test]
fn test_controls_reject_but_store_accepts_nonpositive_quantities() {
    let mut store = CartStore::with_items(vec![line(1, 500, 2)], PricingPolicy::cart());
    let id = LineItemId::new("1");

    assert!(matches!(
        controls::set_quantity(&mut store, &id, 0),
        Err(CommerceError::InvalidQuantity(0))
    ));
    assert_eq!(store.get_item(&id).map(|i| i.quantity), Some(2));

    assert!(store.update_quantity(&id, -3));
    assert_eq!(store.get_item(&id).map(|i| i.quantity), Some(-3));
}

#[test]
fn test_decrement_stops_at_one() {
    let mut store = CartStore::with_items(vec![line(1, 500, 2)], PricingPolicy::cart());
    let id = LineItemId::new("1");
    assert_eq!(controls::decrement(&mut store, &id).unwrap(), StepOutcome::Changed(1));
    assert_eq!(controls::decrement(&mut store, &id).unwrap(), StepOutcome::AtMinimum);
    assert_eq!(store.items().len(), 1);
}

#[test]
fn test_removing_last_item_zeroes_fee_and_total() {
    let mut store = CartStore::with_items(vec![line(1, 1299, 1)], PricingPolicy::cart());
    store.apply_promo_code("SAVE10");
    assert!(store.remove_item(&LineItemId::new("1")));

    let totals = store.totals();
    assert!(store.is_empty());
    assert!(totals.delivery_fee.is_zero());
    assert!(totals.total.is_zero());
}
