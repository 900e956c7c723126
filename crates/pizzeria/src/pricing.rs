//! # Derived Values
//!
//! Everything the views show that is computed from the cart rather than stored in it.
//! The free functions are pure and work on any slice of lines; [`DerivedCache`] memoises
//! them per store revision so a view re-derives only after the cart actually changed.
use crate::model::LineItem;
use rust_decimal::{Decimal, RoundingStrategy};
use store_actor::Snapshot;

/// Formats an amount with exactly two decimals, e.g. `17` as `"17.00"`.
///
/// Rounds on the exact binary value, with exact half-cents going up: `2.125` is
/// `"2.13"`, while `1.005` (stored as `1.00499...`) is `"1.00"`.
pub fn format_amount(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Non-finite or beyond Decimal's range; the cart rejects these prices anyway.
        None => format!("{amount:.2}"),
    }
}

/// Σ `unit_price * qty`, unformatted.
pub fn total_amount(items: &[LineItem]) -> f64 {
    // Folding from +0.0 keeps an empty cart at "0.00" rather than "-0.00".
    items.iter().fold(0.0, |total, item| total + item.line_amount())
}

/// Cart total with two decimals; `"0.00"` for an empty cart.
pub fn total_price(items: &[LineItem]) -> String {
    format_amount(total_amount(items))
}

pub fn is_empty(items: &[LineItem]) -> bool {
    items.is_empty()
}

/// Line subtotal with two decimals.
pub fn line_total(item: &LineItem) -> String {
    format_amount(item.line_amount())
}

/// Number of pizzas in the cart, counting quantities.
pub fn item_count(items: &[LineItem]) -> u32 {
    items.iter().fold(0u32, |count, item| count.saturating_add(item.qty))
}

/// Derived values for one cart revision.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub revision: u64,
    pub total_price: String,
    pub is_empty: bool,
    pub item_count: u32,
}

impl Derived {
    pub fn of(snapshot: &Snapshot<LineItem>) -> Self {
        Self {
            revision: snapshot.revision,
            total_price: total_price(&snapshot.items),
            is_empty: is_empty(&snapshot.items),
            item_count: item_count(&snapshot.items),
        }
    }
}

/// Memoises [`Derived`] for the last revision seen. One cache per view, fed with
/// snapshots of a single cart.
#[derive(Debug, Default)]
pub struct DerivedCache {
    cached: Option<Derived>,
    computations: u64,
}

impl DerivedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived values for `snapshot`, recomputed only when its revision differs from the
    /// cached one.
    pub fn get(&mut self, snapshot: &Snapshot<LineItem>) -> &Derived {
        let fresh = self
            .cached
            .as_ref()
            .is_some_and(|derived| derived.revision == snapshot.revision);
        if !fresh {
            self.cached = Some(Derived::of(snapshot));
            self.computations += 1;
        }
        self.cached.get_or_insert_with(|| Derived::of(snapshot))
    }

    /// How many times values were actually recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
