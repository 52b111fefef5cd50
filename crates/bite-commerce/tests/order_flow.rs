//! Menu to cart to checkout to tracker, end to end.

use std::time::Duration;

use bite_commerce::fixtures;
use bite_commerce::prelude::*;
use bite_commerce::order::StageState;

fn form() -> CheckoutForm {
    serde_json::from_value(serde_json::json!({
        "address": {
            "full_name": "Alice Wonderland",
            "address1": "123 Main St",
            "city": "Anytown",
            "state": "CA",
            "zip": "90210-1234",
            "phone": "(555) 123-4567"
        },
        "payment": {
            "method": "credit_card",
            "card_number": "4242 4242 4242 4242",
            "expiry": "12/29",
            "cvv": "123"
        }
    }))
    .unwrap()
}

#[test]
fn test_progress_is_non_decreasing() {
    let stages = [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];
    let values: Vec<u8> = stages.iter().map(|&s| progress_percent(s)).collect();
    assert_eq!(values, vec![20, 45, 70, 100]);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_cancelled_never_shows_a_bar() {
    assert_eq!(tracker_view(OrderStatus::Cancelled), TrackerView::Cancelled);
    let order = fixtures::demo_tracked_order().at_status(OrderStatus::Cancelled);
    assert!(order.driver_notice().is_none());
    assert!(!order.shows_map_placeholder());
    assert!(order.terminal_notice().is_some());
}

#[test]
fn test_out_for_delivery_view() {
    match tracker_view(OrderStatus::OutForDelivery) {
        TrackerView::Stepper { stages, progress } => {
            assert_eq!(progress, Some(70));
            let states: Vec<_> = stages.iter().map(|s| s.state).collect();
            assert_eq!(
                states,
                vec![
                    StageState::Completed,
                    StageState::Completed,
                    StageState::Active,
                    StageState::Pending
                ]
            );
        }
        TrackerView::Cancelled => panic!("expected a stepper"),
    }
}

#[test]
fn test_shared_context_sees_menu_additions() {
    let restaurant = fixtures::featured_restaurant();
    let pizza = restaurant.find_item(&MenuItemId::new("main1")).unwrap();
    let selection = pizza.default_selection().with_topping("Olives");

    let context = CartContext::new(CartStore::new(PricingPolicy::cart()));
    let header = context.clone();
    context
        .update(|cart| -> Result<(), CommerceError> {
            cart.add_item(pizza, &selection, 1)?;
            cart.add_item(pizza, &selection, 1)?;
            Ok(())
        })
        .unwrap();

    let snapshot = header.snapshot();
    assert_eq!(snapshot.line_count, 1);
    assert_eq!(snapshot.item_count, 2);
    header.read(|cart| {
        assert_eq!(
            cart.items()[0].options,
            vec!["Size: Medium 12\"".to_string(), "Toppings: Olives".to_string()]
        );
    });
}

#[tokio::test(start_paused = true)]
async fn test_checkout_to_tracker() {
    let config = StorefrontConfig::default();
    let summary = CheckoutSummary::new(&fixtures::checkout_items(), None, &config.checkout_policy());
    assert_eq!(summary.totals.rounded().total.display(), "$22.93");

    let order = place_order(&form(), &summary, config.submit_delay()).await.unwrap();
    assert_eq!(order.payment, "Credit card ending 4242");

    let tracked = order.tracking("Approx. 30-40 mins");
    assert_eq!(tracked.view(), tracker_view(OrderStatus::Confirmed));
    assert!(tracked.driver_notice().is_none());
}

#[tokio::test]
async fn test_invalid_form_lists_every_bad_field() {
    let mut bad = form();
    bad.address.full_name = "Al".into();
    bad.payment = PaymentDetails::CreditCard {
        card_number: "1234".into(),
        expiry: "13/99".into(),
        cvv: "12".into(),
        save_payment_info: false,
    };
    let summary = CheckoutSummary::new(&fixtures::checkout_items(), None, &PricingPolicy::checkout());

    match place_order(&bad, &summary, Duration::ZERO).await {
        Err(CommerceError::Validation(errors)) => {
            for field in ["full_name", "card_number", "expiry", "cvv"] {
                assert!(errors.get(field).is_some(), "missing error for {field}");
            }
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}
