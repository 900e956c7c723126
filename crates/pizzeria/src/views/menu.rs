//! # Menu View
//!
//! Lists the catalog and feeds the cart. Each row shows how many of that pizza are already
//! in the cart.
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{LineItem, Menu, PizzaId};
use crate::navigation::Route;
use crate::pricing::format_amount;
use std::fmt::Display;
use store_actor::ActorClient;
use tracing::{instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    AddToCart(PizzaId),
    OpenCart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub id: PizzaId,
    pub name: String,
    pub price: String,
    pub ingredients: String,
    pub sold_out: bool,
    pub in_cart: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuScreen {
    pub rows: Vec<MenuRow>,
    pub currency: String,
}

impl Display for MenuScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            write!(f, "{:<22} ", row.name)?;
            if row.sold_out {
                write!(f, "SOLD OUT")?;
            } else {
                write!(f, "{}{}", self.currency, row.price)?;
            }
            write!(f, "  ({})", row.ingredients)?;
            if row.in_cart > 0 {
                write!(f, "  in cart: {}", row.in_cart)?;
            } else if !row.sold_out {
                write!(f, "  [ADD TO CART]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct MenuView {
    menu: Menu,
    cart: CartClient,
    currency: String,
}

impl MenuView {
    pub fn new(menu: Menu, cart: CartClient) -> Self {
        Self {
            menu,
            cart,
            currency: "$".to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[instrument(skip(self))]
    pub async fn render(&self) -> Result<MenuScreen, CartError> {
        let snapshot = self.cart.snapshot().await?;
        let in_cart = |id: PizzaId| {
            snapshot
                .items
                .iter()
                .find(|line| line.id == id)
                .map_or(0, |line| line.qty)
        };

        let rows = self
            .menu
            .items()
            .iter()
            .map(|pizza| MenuRow {
                id: pizza.id,
                name: pizza.name.clone(),
                price: format_amount(pizza.unit_price),
                ingredients: pizza.ingredients.join(", "),
                sold_out: pizza.sold_out,
                in_cart: in_cart(pizza.id),
            })
            .collect();

        Ok(MenuScreen {
            rows,
            currency: self.currency.clone(),
        })
    }

    /// Applies one user intent. Returns a navigation request for `OpenCart`.
    #[instrument(skip(self))]
    pub async fn dispatch(&mut self, intent: MenuIntent) -> Result<Option<Route>, CartError> {
        match intent {
            MenuIntent::AddToCart(id) => {
                self.add_to_cart(id).await?;
                Ok(None)
            }
            MenuIntent::OpenCart => Ok(Some(Route::Cart)),
        }
    }

    /// Adds one of pizza `id`. Unknown and sold-out pizzas are skipped.
    pub async fn add_to_cart(&self, id: PizzaId) -> Result<Option<LineItem>, CartError> {
        match self.menu.find(id) {
            None => {
                warn!(%id, "Pizza not on the menu");
                Ok(None)
            }
            Some(pizza) if pizza.sold_out => {
                warn!(%id, name = %pizza.name, "Pizza is sold out");
                Ok(None)
            }
            Some(pizza) => self.cart.add(pizza.to_line_item()).await.map(Some),
        }
    }
}
