//! # Deletion Confirmation
//!
//! Removing a line from the cart is a two-step action: a remove request opens a
//! confirmation prompt for one pizza, and only confirming it deletes the line.
//!
//! ```text
//! Idle --request_remove(id)--> Pending(id)
//! Pending(id) --confirm--> Idle      (cart line removed first)
//! Pending(id) --cancel--> Idle       (nothing else happens)
//! ```
//!
//! [`CartClient::remove`] only accepts a [`ConfirmedRemoval`], and the only way to get one
//! is [`DeletionFlow::confirm`], so the cart cannot lose a line in a single step.
use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{LineItem, PizzaId};
use tracing::debug;

/// Proof that the user confirmed removing one pizza.
///
/// Not `Clone`; only [`DeletionFlow::confirm`] creates one.
#[derive(Debug, PartialEq, Eq)]
pub struct ConfirmedRemoval {
    id: PizzaId,
}

impl ConfirmedRemoval {
    pub fn id(&self) -> PizzaId {
        self.id
    }
}

/// Confirmation prompt state. Lives with the view; never stored in the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletionFlow {
    #[default]
    Idle,
    Pending(PizzaId),
}

impl DeletionFlow {
    /// Whether the confirmation prompt should be shown.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The pizza awaiting confirmation, if any.
    pub fn pending(&self) -> Option<PizzaId> {
        match self {
            Self::Idle => None,
            Self::Pending(id) => Some(*id),
        }
    }

    /// Opens the prompt for `id`. A request while another one is pending replaces it.
    pub fn request_remove(&mut self, id: PizzaId) {
        debug!(%id, replaced = ?self.pending(), "Removal requested");
        *self = Self::Pending(id);
    }

    /// Removes the pending line from the cart, then closes the prompt.
    ///
    /// Returns the removed line. `Ok(None)` when nothing was pending or the line was
    /// already gone. If the cart cannot be reached the prompt stays open.
    pub async fn confirm(&mut self, cart: &CartClient) -> Result<Option<LineItem>, CartError> {
        let Self::Pending(id) = *self else {
            debug!("Confirm with nothing pending");
            return Ok(None);
        };
        let removed = cart.remove(ConfirmedRemoval { id }).await?;
        *self = Self::Idle;
        Ok(removed)
    }

    /// Closes the prompt without touching the cart. Returns whether it was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_visible();
        *self = Self::Idle;
        was_open
    }
}
