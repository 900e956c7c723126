//! # Storefront Lifecycle
//!
//! [`Storefront`] starts the cart store, hands out views wired to it and shuts it down.
//!
//! ## Shutdown
//!
//! The cart store runs until every [`CartClient`](crate::clients::CartClient) clone is
//! gone. Views hold clones, so drop them before calling [`Storefront::shutdown`]:
//!
//! 1. Drop views and any extra clients.
//! 2. `shutdown()` drops the storefront's own client.
//! 3. The store sees its channel close, logs its final size and exits.
//! 4. `shutdown()` awaits the task and reports a panic as an error.
//!
//! Tracing is set up separately with [`store_actor::tracing::setup_tracing`].

pub mod storefront;

pub use storefront::*;
