//! # Store Messages
//!
//! The request enum exchanged between a `StoreClient` and its `StoreActor`, and the
//! snapshot type returned by reads of the whole collection.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Requests understood by a [`StoreActor`](crate::StoreActor).
///
/// Every variant is total over ids: `Action` and `Remove` on an id that is not stored
/// answer `Ok(None)` rather than failing.
///
/// - **Insert**: append a new record, or merge it into the stored record with the same id.
/// - **Get**: fetch one record.
/// - **Snapshot**: fetch every record in insertion order, with the current revision.
/// - **Action**: run a custom [`StoreEntity::Action`] against one record.
/// - **Remove**: drop one record, returning it.
/// - **Clear**: drop every record, returning how many were dropped.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Insert {
        item: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Snapshot {
        respond_to: Response<Snapshot<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Option<T::ActionResult>>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}

/// An ordered copy of the store's contents.
///
/// `revision` increases every time the store's contents change, so two snapshots with the
/// same revision hold the same items.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub revision: u64,
    pub items: Vec<T>,
}

impl<T> Snapshot<T> {
    pub fn new(revision: u64, items: Vec<T>) -> Self {
        Self { revision, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            revision: 0,
            items: Vec::new(),
        }
    }
}
