//! # Store Actor
//!
//! A single-owner, insertion-ordered record store driven by a Tokio task.
//!
//! ## Why an actor?
//!
//! State that many callers read and write (a shopping cart, a session, a playlist) needs
//! one writer. Instead of wrapping the collection in a `Mutex` and passing it around, the
//! collection lives inside one task, [`StoreActor`], and everyone else talks to it through
//! a cloneable [`StoreClient`]. Requests are processed one at a time, in the order they
//! arrive, so every operation is atomic with respect to every other.
//!
//! ## Layers
//!
//! 1. **Entity** ([`StoreEntity`]) - your record type and its hooks.
//! 2. **Runtime** ([`StoreActor`]) - the message loop that owns the collection.
//! 3. **Interface** ([`StoreClient`], [`StoreReader`], [`ActorClient`]) - typed async calls;
//!    a reader can only `get` and `snapshot`.
//!
//! ## Operations
//!
//! | Client call | Absent id | Present id |
//! |---|---|---|
//! | `insert(item)` | append, `on_insert` | `on_merge` into stored record |
//! | `get(id)` | `None` | clone |
//! | `perform_action(id, a)` | `None` | `handle_action` |
//! | `remove(id)` | `None` | `on_remove`, then drop |
//! | `clear()` | | drop all |
//! | `snapshot()` | | ordered clone + revision |
//!
//! Missing ids are never errors; [`FrameworkError`] only reports a closed store or a
//! hook that refused the change.
//!
//! ## Testing
//!
//! The [`mock`] module provides a scripted [`mock::MockClient`] and raw-channel helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::{StoreClient, StoreReader};
pub use client_trait::ActorClient;
pub use entity::StoreEntity;
pub use error::FrameworkError;
pub use message::{Response, Snapshot, StoreRequest};
pub use store::OrderedStore;
