//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Operations on ids that are not stored are
//! never errors; they resolve to `None` instead.

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
