//! Menu items and their customization options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::MenuItemId;

/// Sizes and toppings a customizable dish offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuOptions {
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub toppings: Vec<String>,
}

/// A dish on a restaurant menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Present only for customizable dishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MenuOptions>,
}

impl MenuItem {
    pub fn new(id: impl Into<MenuItemId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            options: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_options(mut self, options: MenuOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn is_customizable(&self) -> bool {
        self.options.is_some()
    }

    /// Selection the customize dialog opens with: first size, no toppings.
    pub fn default_selection(&self) -> ItemSelection {
        let size = self
            .options
            .as_ref()
            .and_then(|o| o.sizes.first())
            .cloned();
        ItemSelection {
            size,
            toppings: Vec::new(),
        }
    }
}

/// Choices made in the customize dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSelection {
    pub size: Option<String>,
    pub toppings: Vec<String>,
}

impl ItemSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Tick a topping checkbox. Ticking twice keeps one entry.
    pub fn with_topping(mut self, topping: impl Into<String>) -> Self {
        let topping = topping.into();
        if !self.toppings.contains(&topping) {
            self.toppings.push(topping);
        }
        self
    }

    /// Display labels stored on the cart line, e.g. `["Size: Large 16\""]`.
    pub fn option_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if let Some(ref size) = self.size {
            labels.push(format!("Size: {}", size));
        }
        if !self.toppings.is_empty() {
            labels.push(format!("Toppings: {}", self.toppings.join(", ")));
        }
        labels
    }
}

/// A titled group of dishes ("Appetizers", "Drinks").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub title: String,
    pub items: Vec<MenuItem>,
}
