//! Custom actions for the cart store.
//!
//! These are handled by [`StoreEntity::handle_action`](store_actor::StoreEntity::handle_action)
//! on [`LineItem`](crate::model::LineItem). Every action replies with the line's quantity
//! after the action ran.

/// Quantity adjustments on a single cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Adds one pizza to the line.
    Increment,
    /// Takes one pizza off the line. A line never drops below one this way; removing a
    /// line goes through the deletion confirmation instead.
    Decrement,
}
