//! # Pizzeria
//!
//! The cart core of a pizza-ordering storefront, built on [`store_actor`].
//!
//! ## Components
//!
//! - **[model]**: [`LineItem`](model::LineItem), [`PizzaId`](model::PizzaId), the
//!   [`Menu`](model::Menu) catalog and the optional [`CurrentUser`](model::CurrentUser).
//! - **[cart_actor]**: `LineItem` as a store entity. Adding merges quantities, decrement
//!   stops at one.
//! - **[clients]**: [`CartClient`](clients::CartClient), the typed cart API.
//! - **[pricing]**: total price, empty flag, item count, and a per-revision cache.
//! - **[confirmation]**: the two-step deletion prompt.
//! - **[views]**: header, menu and cart page controllers.
//! - **[navigation]**: the [`Route`](navigation::Route)s views ask for.
//! - **[config]**: settings from `PIZZERIA_*` environment variables.
//! - **[lifecycle]**: [`Storefront`](lifecycle::Storefront) starts and stops the cart
//!   store.
//!
//! ## Flow
//!
//! ```text
//! intent -> view -> CartClient or DeletionFlow -> cart store -> view re-renders
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod confirmation;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod pricing;
pub mod views;
