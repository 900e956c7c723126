//! # Header
//!
//! Storefront title, greeting and the cart badge. The badge only appears once the cart
//! holds at least one pizza.
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::CurrentUser;
use crate::navigation::Route;
use crate::pricing::DerivedCache;
use std::fmt::Display;
use store_actor::ActorClient;
use tracing::instrument;

pub const STORE_TITLE: &str = "Fast Pizza Co.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderIntent {
    /// The title link.
    Home,
    OpenMenu,
    OpenCart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartBadge {
    pub item_count: u32,
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBar {
    pub title: &'static str,
    pub user: Option<String>,
    pub badge: Option<CartBadge>,
    pub currency: String,
}

impl Display for HeaderBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(user) = &self.user {
            write!(f, " | {user}")?;
        }
        if let Some(badge) = &self.badge {
            let noun = if badge.item_count == 1 { "pizza" } else { "pizzas" };
            write!(
                f,
                " | {} {noun} {}{} | Open cart →",
                badge.item_count, self.currency, badge.total_price
            )?;
        }
        writeln!(f)
    }
}

pub struct Header {
    cart: CartClient,
    user: Option<CurrentUser>,
    currency: String,
    derived: DerivedCache,
}

impl Header {
    pub fn new(cart: CartClient, user: Option<CurrentUser>) -> Self {
        Self {
            cart,
            user,
            currency: "$".to_string(),
            derived: DerivedCache::new(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    #[instrument(skip(self))]
    pub async fn render(&mut self) -> Result<HeaderBar, CartError> {
        let snapshot = self.cart.snapshot().await?;
        let derived = self.derived.get(&snapshot);
        let badge = (!derived.is_empty).then(|| CartBadge {
            item_count: derived.item_count,
            total_price: derived.total_price.clone(),
        });

        Ok(HeaderBar {
            title: STORE_TITLE,
            user: self.user.as_ref().map(|user| user.name().to_string()),
            badge,
            currency: self.currency.clone(),
        })
    }

    pub fn dispatch(&self, intent: HeaderIntent) -> Route {
        match intent {
            HeaderIntent::Home => Route::Login,
            HeaderIntent::OpenMenu => Route::Menu,
            HeaderIntent::OpenCart => Route::Cart,
        }
    }
}
