//! Bounded memo table for shading lookups.

use std::collections::HashMap;
use std::hash::Hash;

use crate::fb::Cell;

/// Lazily filled lookup table keyed by a shading function's discrete inputs.
///
/// Entries are never evicted or invalidated: shading depends only on static
/// configuration. Once `capacity` entries exist, misses are computed but not
/// stored.
#[derive(Debug, Clone)]
pub struct ShadeCache<K> {
    entries: HashMap<K, Cell>,
    capacity: usize,
}

impl<K: Hash + Eq> ShadeCache<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> Cell) -> Cell {
        if let Some(cell) = self.entries.get(&key) {
            return *cell;
        }
        let cell = compute();
        if self.entries.len() < self.capacity {
            self.entries.insert(key, cell);
        }
        cell
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
