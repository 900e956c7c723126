//! One pizza line in the cart.
//!
//! # Store Entity
//! [`LineItem`] implements [`StoreEntity`](store_actor::StoreEntity) (see
//! [`cart_actor::entity`](crate::cart_actor::entity)), so the cart is simply a
//! [`StoreActor<LineItem>`](store_actor::StoreActor).
//!
//! Only `id`, `unit_price` and `qty` take part in cart logic. `name`, `ingredients` and
//! `image_url` are display data carried along untouched.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for pizzas, shared by the menu and the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PizzaId(pub u32);

impl From<u32> for PizzaId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pizza_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: PizzaId,
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl LineItem {
    /// Creates a line with no display extras.
    ///
    /// # Arguments
    /// * `id` - Pizza identifier, unique within the cart
    /// * `name` - Display name
    /// * `unit_price` - Price of one pizza
    /// * `qty` - Number of pizzas
    pub fn new(id: impl Into<PizzaId>, name: impl Into<String>, unit_price: f64, qty: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            qty,
            ingredients: Vec::new(),
            image_url: None,
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// `unit_price * qty`, unformatted.
    pub fn line_amount(&self) -> f64 {
        self.unit_price * f64::from(self.qty)
    }
}
