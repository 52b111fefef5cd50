//! Built-in storefront data.
//!
//! There is no backend: the homepage, the restaurant page, the cart, the
//! tracker and the profile all render from the values below.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::cart::{CartLineItem, CartStore, PricingPolicy};
use crate::catalog::{CuisineCategory, MenuItem, MenuOptions, MenuSection, Restaurant, RestaurantSummary};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::order::{OrderStatus, TrackedOrder};
use crate::profile::{OrderHistoryEntry, SavedAddress, SavedPaymentMethod, UserProfile};

/// Id of the restaurant with a full menu.
pub const FEATURED_RESTAURANT_ID: &str = "luigis";

/// Cuisine chips on the homepage.
pub fn cuisine_categories() -> Vec<CuisineCategory> {
    ["Italian", "Chinese", "Mexican", "Indian", "Burgers", "Pizza", "Sushi", "Vegan"]
        .into_iter()
        .map(CuisineCategory::new)
        .collect()
}

/// Restaurant cards on the homepage.
pub fn restaurants() -> Vec<RestaurantSummary> {
    [
        ("1", "Mama Mia Pizzeria", "Italian", 4.5, "25-35 min"),
        ("2", "Golden Dragon", "Chinese", 4.2, "30-40 min"),
        ("3", "El Sombrero Taqueria", "Mexican", 4.7, "20-30 min"),
        ("4", "Curry House", "Indian", 4.4, "35-45 min"),
        ("5", "Burger Barn", "Burgers", 4.0, "20-25 min"),
        ("6", "Sushi Heaven", "Sushi", 4.8, "40-50 min"),
    ]
    .into_iter()
    .map(|(id, name, cuisine, rating, delivery_time)| RestaurantSummary {
        id: id.into(),
        name: name.into(),
        cuisine: cuisine.into(),
        rating,
        delivery_time: delivery_time.into(),
    })
    .collect()
}

fn pizza_sizes() -> Vec<String> {
    vec!["Medium 12\"".to_string(), "Large 16\"".to_string()]
}

/// Luigi's Pizza Palace with its full menu.
pub fn featured_restaurant() -> Restaurant {
    let section = |title: &str, items: Vec<MenuItem>| MenuSection {
        title: title.to_string(),
        items,
    };

    Restaurant {
        id: FEATURED_RESTAURANT_ID.into(),
        name: "Luigi's Pizza Palace".into(),
        cuisine: "Italian".into(),
        address: "123 Pepperoni Ave, Cheesenburg, CZ 12345".into(),
        hours: "11:00 AM - 10:00 PM".into(),
        phone: "(555)-PIZZA-01".into(),
        rating: 4.5,
        description: "Experience the taste of authentic Italian cuisine. At Luigi's, we serve \
a wide variety of classic and gourmet pizzas, fresh pastas, and delightful salads."
            .into(),
        menu: vec![
            section(
                "Appetizers",
                vec![
                    MenuItem::new("app1", "Garlic Knots", dec!(6.99)).with_description(
                        "Warm, buttery garlic knots served with a side of rich marinara sauce.",
                    ),
                    MenuItem::new("app2", "Caprese Skewers", dec!(8.99)).with_description(
                        "Fresh mozzarella, cherry tomatoes, and basil drizzled with balsamic glaze.",
                    ),
                ],
            ),
            section(
                "Main Courses",
                vec![
                    MenuItem::new("main1", "Margherita Pizza", dec!(12.99))
                        .with_description(
                            "Classic Neapolitan pizza with San Marzano tomatoes, mozzarella \
cheese, fresh basil, salt, and extra-virgin olive oil.",
                        )
                        .with_options(MenuOptions {
                            sizes: pizza_sizes(),
                            toppings: vec![
                                "Extra Cheese".into(),
                                "Mushrooms".into(),
                                "Olives".into(),
                            ],
                        }),
                    MenuItem::new("main2", "Pepperoni Feast Pizza", dec!(14.99))
                        .with_description(
                            "A pepperoni lover's dream, generously topped with premium \
pepperoni slices and mozzarella.",
                        )
                        .with_options(MenuOptions {
                            sizes: pizza_sizes(),
                            toppings: vec!["Extra Pepperoni".into(), "Jalapenos".into()],
                        }),
                    MenuItem::new("main3", "Spaghetti Carbonara", dec!(15.99)).with_description(
                        "Authentic Italian pasta dish with eggs, Pecorino Romano cheese, \
pancetta, and black pepper.",
                    ),
                ],
            ),
            section(
                "Drinks",
                vec![
                    MenuItem::new("drink1", "Italian Soda", dec!(3.50)).with_description(
                        "Refreshing sparkling water with your choice of flavored syrup.",
                    ),
                    MenuItem::new("drink2", "Espresso", dec!(2.50))
                        .with_description("Rich and aromatic Italian espresso."),
                ],
            ),
            section(
                "Desserts",
                vec![MenuItem::new("des1", "Tiramisu", dec!(7.99)).with_description(
                    "Classic Italian dessert made with ladyfingers, mascarpone cheese, \
coffee, and cocoa.",
                )],
            ),
        ],
    }
}

/// Detail page for `id`.
///
/// Every homepage card opens the featured restaurant's page; the returned
/// value keeps the featured menu but carries the card's name and id.
pub fn find_restaurant(id: &str) -> Result<Restaurant, CommerceError> {
    if id == FEATURED_RESTAURANT_ID {
        return Ok(featured_restaurant());
    }
    let summary = restaurants()
        .into_iter()
        .find(|r| r.id.as_str() == id)
        .ok_or_else(|| CommerceError::RestaurantNotFound(id.to_string()))?;
    Ok(Restaurant {
        id: summary.id,
        name: summary.name,
        cuisine: summary.cuisine,
        rating: summary.rating,
        ..featured_restaurant()
    })
}

/// Items the cart page starts with.
pub fn placeholder_cart_items() -> Vec<CartLineItem> {
    vec![
        CartLineItem::new("1", "Margherita Pizza", dec!(15.99), 1)
            .with_options(["Size: Large", "Crust: Thin"]),
        CartLineItem::new("2", "Coca-Cola Can", dec!(1.50), 4),
        CartLineItem::new("3", "Caesar Salad", dec!(8.75), 1).with_options(["Dressing: Extra"]),
    ]
}

/// The cart page's store, pre-filled.
pub fn placeholder_cart(policy: PricingPolicy) -> CartStore {
    CartStore::with_items(placeholder_cart_items(), policy)
}

/// Items listed on the checkout summary.
pub fn checkout_items() -> Vec<CartLineItem> {
    vec![
        CartLineItem::new("1", "Margherita Pizza", dec!(12.99), 1),
        CartLineItem::new("2", "Coca-Cola (2L)", dec!(2.50), 2),
    ]
}

/// The order shown on the tracking page.
pub fn demo_tracked_order() -> TrackedOrder {
    TrackedOrder::new(
        "FD7890123",
        OrderStatus::OutForDelivery,
        "Approx. 15-25 mins",
        "456 Delivery Rd, Foodie City, FC 67890",
    )
    .with_restaurant("Pizza Palace")
    .with_driver("Alex P.")
}

/// The signed-in customer.
pub fn demo_profile() -> UserProfile {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let usd = |cents| Money::from_cents(cents, Currency::USD);

    UserProfile {
        name: "Alice Wonderland".into(),
        email: "alice.wonderland@example.com".into(),
        phone: "123-456-7890".into(),
        addresses: vec![
            SavedAddress {
                id: "1".into(),
                street: "123 Main St".into(),
                city: "Anytown".into(),
                state: "CA".into(),
                zip: "90210".into(),
                country: "USA".into(),
                is_default: true,
            },
            SavedAddress {
                id: "2".into(),
                street: "456 Oak Ave".into(),
                city: "Otherville".into(),
                state: "NY".into(),
                zip: "10001".into(),
                country: "USA".into(),
                is_default: false,
            },
        ],
        payment_methods: vec![
            SavedPaymentMethod::Card {
                id: "1".into(),
                brand: "Visa".into(),
                last4: "4242".into(),
                expiry: "12/25".into(),
                is_default: true,
            },
            SavedPaymentMethod::PayPal {
                id: "2".into(),
                email: "alice.paypal@example.com".into(),
                is_default: false,
            },
        ],
        order_history: vec![
            OrderHistoryEntry {
                id: "ORD789".into(),
                date: date(2024, 7, 15),
                total: usd(4599),
                status: OrderStatus::Delivered,
                items: "Pizza, Coke".into(),
            },
            OrderHistoryEntry {
                id: "ORD654".into(),
                date: date(2024, 7, 10),
                total: usd(2250),
                status: OrderStatus::Delivered,
                items: "Burger, Fries".into(),
            },
            OrderHistoryEntry {
                id: "ORD321".into(),
                date: date(2024, 6, 28),
                total: usd(3000),
                status: OrderStatus::Cancelled,
                items: "Sushi Platter".into(),
            },
        ],
    }
}
