//! # Menu Catalog
//!
//! The list of pizzas a customer can add to the cart. Menu entries are read-only; adding
//! one to the cart copies it into a [`LineItem`] with a quantity of one.
use super::{LineItem, PizzaId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: PizzaId,
    pub name: String,
    pub unit_price: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MenuItem {
    pub fn new<I, S>(id: u32, name: &str, unit_price: f64, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: PizzaId(id),
            name: name.to_string(),
            unit_price,
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            sold_out: false,
            image_url: None,
        }
    }

    pub fn sold_out(mut self) -> Self {
        self.sold_out = true;
        self
    }

    /// One of this pizza, ready to be added to the cart.
    pub fn to_line_item(&self) -> LineItem {
        let mut line = LineItem::new(self.id, self.name.clone(), self.unit_price, 1)
            .with_ingredients(self.ingredients.iter().cloned());
        line.image_url = self.image_url.clone();
        line
    }
}

/// An ordered collection of [`MenuItem`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The house menu served by the demo binary.
    pub fn house() -> Self {
        Self::new(vec![
            MenuItem::new(1, "Margherita", 12.0, ["tomato", "mozzarella", "basil"]),
            MenuItem::new(2, "Capricciosa", 14.0, ["tomato", "mozzarella", "ham", "mushrooms", "artichoke"]),
            MenuItem::new(3, "Romana", 15.0, ["tomato", "mozzarella", "prosciutto"]),
            MenuItem::new(4, "Prosciutto e Rucola", 16.0, ["tomato", "mozzarella", "prosciutto", "arugula"]),
            MenuItem::new(5, "Diavola", 16.0, ["tomato", "mozzarella", "spicy salami", "chili flakes"]),
            MenuItem::new(6, "Vegetale", 13.0, ["tomato", "mozzarella", "bell peppers", "onions", "mushrooms"]),
            MenuItem::new(7, "Napoli", 16.0, ["tomato", "mozzarella", "fresh tomato", "basil"]).sold_out(),
            MenuItem::new(8, "Siciliana", 16.0, ["tomato", "mozzarella", "anchovies", "olives", "capers"]),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: PizzaId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
