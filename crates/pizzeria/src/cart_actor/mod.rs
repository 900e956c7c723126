//! Cart-specific store logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::LineItem;
use store_actor::StoreActor;

/// Channel capacity used when no configuration overrides it.
pub const DEFAULT_CAPACITY: usize = 32;

/// Creates a new cart store and its client. The store still has to be spawned with
/// `tokio::spawn(actor.run(()))`.
pub fn new(capacity: usize) -> (StoreActor<LineItem>, CartClient) {
    let (actor, generic_client) = StoreActor::new(capacity);
    (actor, CartClient::new(generic_client))
}
