//! Error types for the cart store.

use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The line offered to the cart failed validation (non-finite or negative price,
    /// zero quantity). The cart is left unchanged.
    #[error("Invalid cart item: {0}")]
    InvalidItem(String),

    /// An error occurred while communicating with the cart store.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
