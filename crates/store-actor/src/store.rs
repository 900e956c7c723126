//! Insertion-ordered keyed storage backing a `StoreActor`.

use std::collections::HashMap;
use std::hash::Hash;

/// A map that remembers insertion order.
///
/// Lookups go through the `HashMap`; iteration follows `order`. Removal is linear in the
/// number of keys, which is fine for the small collections a single store task owns.
#[derive(Debug)]
pub struct OrderedStore<K, V> {
    order: Vec<K>,
    entries: HashMap<K, V>,
}

impl<K, V> Default for OrderedStore<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedStore<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Appends `value` under `key`. An existing value under the same key is replaced in
    /// place and keeps its position.
    pub fn push(&mut self, key: K, value: V) {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push(key);
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    /// Drops everything, returning how many entries were held.
    pub fn clear(&mut self) -> usize {
        let count = self.order.len();
        self.order.clear();
        self.entries.clear();
        count
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|k| self.entries.get(k))
    }
}

impl<K: Eq + Hash + Clone, V: Clone> OrderedStore<K, V> {
    pub fn to_vec(&self) -> Vec<V> {
        self.values().cloned().collect()
    }
}
