//! Restaurants as listed on the homepage and shown on the detail page.

use serde::{Deserialize, Serialize};

use crate::catalog::{MenuItem, MenuSection};
use crate::error::CommerceError;
use crate::ids::{MenuItemId, RestaurantId};

/// A homepage restaurant card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,
    /// 0.0 - 5.0.
    pub rating: f32,
    /// e.g. "25-35 min".
    pub delivery_time: String,
}

impl RestaurantSummary {
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// A restaurant detail page with its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub hours: String,
    pub phone: String,
    pub rating: f32,
    pub description: String,
    pub menu: Vec<MenuSection>,
}

impl Restaurant {
    /// Look up a dish anywhere on the menu.
    pub fn find_item(&self, id: &MenuItemId) -> Result<&MenuItem, CommerceError> {
        self.menu
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| &item.id == id)
            .ok_or_else(|| CommerceError::MenuItemNotFound(id.to_string()))
    }

    pub fn item_count(&self) -> usize {
        self.menu.iter().map(|s| s.items.len()).sum()
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Homepage search: case-insensitive match on name or cuisine.
///
/// An empty query lists everything.
pub fn search_restaurants<'a>(
    restaurants: &'a [RestaurantSummary],
    query: &str,
) -> Vec<&'a RestaurantSummary> {
    let needle = query.trim().to_lowercase();
    restaurants
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.cuisine.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Restaurants serving `cuisine` (a homepage category chip).
pub fn by_cuisine<'a>(
    restaurants: &'a [RestaurantSummary],
    cuisine: &str,
) -> Vec<&'a RestaurantSummary> {
    restaurants
        .iter()
        .filter(|r| r.cuisine.eq_ignore_ascii_case(cuisine))
        .collect()
}

/// A homepage cuisine chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineCategory {
    pub name: String,
}

impl CuisineCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Restaurants listed under this chip.
    pub fn restaurants<'a>(&self, all: &'a [RestaurantSummary]) -> Vec<&'a RestaurantSummary> {
        by_cuisine(all, &self.name)
    }
}

/// Full, half and empty stars out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_rating(rating: f32) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        Self {
            full,
            half,
            empty: 5 - full - u8::from(half),
        }
    }

    /// e.g. "★★★★½" padded with "☆".
    pub fn render(&self) -> String {
        let mut s = "\u{2605}".repeat(self.full as usize);
        if self.half {
            s.push('\u{00bd}');
        }
        s.push_str(&"\u{2606}".repeat(self.empty as usize));
        s
    }
}
