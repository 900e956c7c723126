//! # ActorClient Trait
//!
//! Common read-only surface for domain clients wrapping a [`StoreClient`](crate::StoreClient).
//! Mutations stay on the domain client so each one can decide which store operations it
//! exposes; the trait itself only ever sees a [`StoreReader`].
use crate::{FrameworkError, Snapshot, StoreEntity, StoreReader};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard reads.
///
/// Implementors supply a read handle and an error mapping; `get` and `snapshot` come
/// for free.
#[async_trait]
pub trait ActorClient<T: StoreEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Read-only handle to the underlying store.
    fn reader(&self) -> &StoreReader<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch one record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.reader().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record, in insertion order, with the store revision.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Snapshot<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.reader().snapshot().await.map_err(Self::map_error)
    }
}
