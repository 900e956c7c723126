//! # Store Client
//!
//! The sending half of a store. Every method builds a request, hands it to the actor over
//! the mpsc channel and waits for the oneshot reply.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::{Snapshot, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cheaply cloneable handle to a [`StoreActor`](crate::StoreActor).
///
/// Holding a client keeps the actor alive; once every clone is dropped the actor's loop
/// ends.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Appends `item`, or merges it into the stored record with the same id.
    /// Returns the record as stored afterwards.
    pub async fn insert(&self, item: T) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { item, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<Snapshot<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Runs `action` against the record with `id`. `Ok(None)` if no such record exists.
    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<Option<T::ActionResult>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Removes the record with `id`, returning it. `Ok(None)` if it was not stored.
    pub async fn remove(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Remove { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Removes every record, returning how many there were.
    pub async fn clear(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Clear { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// A handle to the same store that can only read.
    pub fn reader(&self) -> StoreReader<T> {
        StoreReader {
            client: self.clone(),
        }
    }
}

/// Read-only handle to a store: `get` and `snapshot`, nothing that mutates.
///
/// Domain clients hand this out through [`ActorClient::reader`](crate::ActorClient::reader)
/// so their own mutation methods stay the only way to change the store.
#[derive(Clone)]
pub struct StoreReader<T: StoreEntity> {
    client: StoreClient<T>,
}

impl<T: StoreEntity> StoreReader<T> {
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.client.get(id).await
    }

    pub async fn snapshot(&self) -> Result<Snapshot<T>, FrameworkError> {
        self.client.snapshot().await
    }
}
