//! # Cart Client
//!
//! High-level API over the cart store. It wraps a `StoreClient<LineItem>` and exposes the
//! cart mutations by name. Removing a line requires a [`ConfirmedRemoval`], which only the
//! deletion flow hands out. The raw store client stays private; [`ActorClient::reader`]
//! only reads.
//!
//! ```compile_fail
//! use pizzeria::clients::CartClient;
//! use pizzeria::model::PizzaId;
//! use store_actor::ActorClient;
//!
//! async fn skip_confirmation(cart: &CartClient) {
//!     let _ = cart.reader().remove(PizzaId(1)).await;
//! }
//! ```
use crate::cart_actor::{CartAction, CartError};
use crate::confirmation::ConfirmedRemoval;
use crate::model::{LineItem, PizzaId};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, StoreClient, StoreReader};
use tracing::{debug, info, instrument};

/// Client for interacting with the cart store.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<LineItem>,
    reader: StoreReader<LineItem>,
}

impl CartClient {
    pub fn new(inner: StoreClient<LineItem>) -> Self {
        let reader = inner.reader();
        Self { inner, reader }
    }
}

#[async_trait]
impl ActorClient<LineItem> for CartClient {
    type Error = CartError;

    fn reader(&self) -> &StoreReader<LineItem> {
        &self.reader
    }

    /// Hook failures carry a [`CartError`] already; everything else is a transport problem.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(source) => match source.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Adds a line to the cart. If a line with the same id is already present its
    /// quantity grows by `item.qty`; otherwise the line is appended at the end.
    ///
    /// Returns the line as stored afterwards.
    #[instrument(skip(self, item), fields(id = %item.id, qty = item.qty))]
    pub async fn add(&self, item: LineItem) -> Result<LineItem, CartError> {
        debug!("Sending request");
        self.inner.insert(item).await.map_err(Self::map_error)
    }

    /// Adds one pizza to the line with `id`.
    ///
    /// Returns the new quantity, or `None` when the cart has no such line.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: PizzaId) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CartAction::Increment)
            .await
            .map_err(Self::map_error)
    }

    /// Takes one pizza off the line with `id`, never going below one.
    ///
    /// Returns the new quantity, or `None` when the cart has no such line.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: PizzaId) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CartAction::Decrement)
            .await
            .map_err(Self::map_error)
    }

    /// Deletes the line named by a confirmed removal. Removing a line that is already
    /// gone is not an error and returns `None`.
    #[instrument(skip(self, removal), fields(id = %removal.id()))]
    pub async fn remove(&self, removal: ConfirmedRemoval) -> Result<Option<LineItem>, CartError> {
        debug!("Sending request");
        self.inner
            .remove(removal.id())
            .await
            .map_err(Self::map_error)
    }

    /// Empties the cart, returning how many lines were dropped.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        let dropped = self.inner.clear().await.map_err(Self::map_error)?;
        info!(dropped, "Cart reset");
        Ok(dropped)
    }
}
