//! # Store Actor
//!
//! `StoreActor` is the server half of a store: it owns an insertion-ordered collection of
//! records and is the only code that ever mutates it. Requests arrive on one mpsc channel
//! and are handled to completion, one at a time, in arrival order.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::{Snapshot, StoreRequest};
use crate::store::OrderedStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The single owner of a collection of `T` records.
///
/// **Concurrency model**: the actor runs in its own Tokio task and processes its requests
/// sequentially, so the collection needs no `Mutex`. Any number of cloned
/// [`StoreClient`]s may send concurrently; their requests are serialized by the channel.
///
/// **Atomicity**: hooks run against a copy of the stored record. The copy is written back
/// only if the hook succeeds, so a failing hook never leaves a half-applied change.
///
/// **Revision**: a counter bumped whenever the collection changes. Snapshots carry it,
/// which lets readers cache anything derived from the contents.
///
/// ```rust
/// use async_trait::async_trait;
/// use store_actor::{StoreActor, StoreEntity};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Tally { id: u32, count: u32 }
///
/// #[derive(Debug)]
/// enum TallyAction { Bump }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tally error")]
/// struct TallyError;
///
/// #[async_trait]
/// impl StoreEntity for Tally {
///     type Id = u32;
///     type Action = TallyAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = TallyError;
///
///     fn id(&self) -> &u32 { &self.id }
///
///     async fn on_merge(&mut self, incoming: Self, _: &()) -> Result<(), TallyError> {
///         self.count += incoming.count;
///         Ok(())
///     }
///
///     async fn handle_action(&mut self, action: TallyAction, _: &()) -> Result<u32, TallyError> {
///         match action {
///             TallyAction::Bump => { self.count += 1; Ok(self.count) }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Tally>::new(8);
///     tokio::spawn(actor.run(()));
///
///     client.insert(Tally { id: 7, count: 1 }).await.unwrap();
///     assert_eq!(client.perform_action(7, TallyAction::Bump).await.unwrap(), Some(2));
///     assert_eq!(client.perform_action(9, TallyAction::Bump).await.unwrap(), None);
/// }
/// ```
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: OrderedStore<T::Id, T>,
    revision: u64,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: OrderedStore::new(),
            revision: 0,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "LineItem" rather than "pizzeria::model::line_item::LineItem"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { item, respond_to } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, ?item, "Insert");

                    let result = match self.store.get(&id).cloned() {
                        Some(mut merged) => {
                            let outcome = merged.on_merge(item, &context).await;
                            outcome.map(|()| merged)
                        }
                        None => {
                            let mut fresh = item;
                            let outcome = fresh.on_insert(&context).await;
                            outcome.map(|()| fresh)
                        }
                    };

                    match result {
                        Ok(stored) => {
                            self.commit(id.clone(), stored.clone());
                            info!(entity_type, %id, size = self.store.len(), revision = self.revision, "Inserted");
                            let _ = respond_to.send(Ok(stored));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.store.len(), revision = self.revision, "Snapshot");
                    let snapshot = Snapshot::new(self.revision, self.store.to_vec());
                    let _ = respond_to.send(Ok(snapshot));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(mut item) = self.store.get(&id).cloned() else {
                        debug!(entity_type, %id, "Not stored, action ignored");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };

                    match item.handle_action(action, &context).await {
                        Ok(result) => {
                            let changed = self.commit(id.clone(), item);
                            info!(entity_type, %id, changed, revision = self.revision, "Action ok");
                            let _ = respond_to.send(Ok(Some(result)));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    let Some(item) = self.store.get(&id) else {
                        debug!(entity_type, %id, "Not stored, remove ignored");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };

                    if let Err(e) = item.on_remove(&context).await {
                        warn!(entity_type, %id, error = %e, "on_remove failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(&id);
                    self.revision += 1;
                    info!(entity_type, %id, size = self.store.len(), revision = self.revision, "Removed");
                    let _ = respond_to.send(Ok(removed));
                }
                StoreRequest::Clear { respond_to } => {
                    let dropped = self.store.clear();
                    if dropped > 0 {
                        self.revision += 1;
                    }
                    info!(entity_type, dropped, revision = self.revision, "Cleared");
                    let _ = respond_to.send(Ok(dropped));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Writes `value` back under `id`, bumping the revision if the stored value differs.
    fn commit(&mut self, id: T::Id, value: T) -> bool {
        if self.store.get(&id) == Some(&value) {
            return false;
        }
        self.store.push(id, value);
        self.revision += 1;
        true
    }
}
