//! Restaurant catalog module.
//!
//! Contains restaurants, menus and dish customization.

mod menu;
mod restaurant;

pub use menu::{ItemSelection, MenuItem, MenuOptions, MenuSection};
pub use restaurant::{
    by_cuisine, search_restaurants, CuisineCategory, Restaurant, RestaurantSummary, StarRating,
};
