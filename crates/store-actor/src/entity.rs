//! # StoreEntity Trait
//!
//! The `StoreEntity` trait defines the contract every record kept by a `StoreActor` must
//! satisfy. Unlike a database-style resource, a store entity carries its own identity:
//! the id is chosen by whoever produces the record (a catalog, a menu, a form), and the
//! store only guarantees that no two records share it.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_insert`] runs before a brand new record is appended.
//! - [`StoreEntity::on_remove`] runs before a record leaves the store.
//!
//! Both default to `Ok(())`. [`StoreEntity::on_merge`] and [`StoreEntity::handle_action`]
//! must be implemented.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be kept by a [`StoreActor`](crate::StoreActor).
///
/// # Identity
/// [`StoreEntity::id`] must stay stable for the lifetime of the record. Inserting a record
/// whose id is already present does not create a second entry; the existing record absorbs
/// the incoming one through [`StoreEntity::on_merge`].
///
/// # Change detection
/// The store compares a record before and after each hook (`PartialEq`) and only bumps its
/// revision when something actually changed. A hook that decides to do nothing therefore
/// leaves the revision untouched.
#[async_trait]
pub trait StoreEntity: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Enum of record-specific operations (e.g. `Increment`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One enum per entity, shared by every hook, keeps client-side matching simple.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the record's identity.
    fn id(&self) -> &Self::Id;

    /// Called before a record with an unseen id is appended.
    /// Returning an error rejects the insert and leaves the store untouched.
    async fn on_insert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when a record arrives whose id is already stored.
    async fn on_merge(&mut self, incoming: Self, _ctx: &Self::Context) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_remove(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
