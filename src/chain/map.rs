use std::hash::Hash;
use indexmap::IndexMap;
use crate::chain::{Iter, Keys, Values};
use crate::error::{ChainMapError, Result};

/// A single backing map. Insertion order is preserved, which makes the
/// traversal order of the whole chain deterministic.
pub type Layer<K, V> = IndexMap<K, V>;

/// An ordered stack of maps presented as one logical map.
///
/// Lookups scan the override layer first, then the stack layers in order,
/// and return the first hit. The same key may live in several layers at
/// once; the highest-precedence copy shadows the rest. All writes target
/// the override layer: [`insert`](ChainMap::insert) adds brand-new keys
/// there, [`set`](ChainMap::set) rewrites existing keys there (promoting
/// keys that currently resolve from a stack layer), and
/// [`remove`](ChainMap::remove) only ever takes keys out of it. Stack
/// layers are never mutated through the chain; they are added, inspected,
/// and removed wholesale.
#[derive(Debug, Clone)]
pub struct ChainMap<K, V> {
    overrides: Layer<K, V>,
    layers: Vec<Layer<K, V>>,
}

impl<K, V> ChainMap<K, V> {
    /// Creates a chain with an empty override layer and no stack layers.
    pub fn new() -> Self {
        Self {
            overrides: Layer::new(),
            layers: Vec::new(),
        }
    }

    /// Creates a chain over the given stack layers. The first map is
    /// scanned first after the override layer, which starts out empty.
    pub fn with_layers(layers: Vec<Layer<K, V>>) -> Self {
        Self {
            overrides: Layer::new(),
            layers,
        }
    }

    /// Number of stack layers, the override layer excluded.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Read access to the override layer.
    #[inline]
    pub fn override_layer(&self) -> &Layer<K, V> {
        &self.overrides
    }

    /// Read access to the stack layer at `index`.
    pub fn layer(&self, index: usize) -> Result<&Layer<K, V>> {
        self.layers.get(index).ok_or(ChainMapError::LayerIndexOutOfRange {
            index,
            len: self.layers.len(),
        })
    }

    /// The stack layers in precedence order.
    #[inline]
    pub fn layers(&self) -> impl Iterator<Item = &Layer<K, V>> {
        self.layers.iter()
    }

    /// Inserts `layer` into the stack at position `priority`, shifting
    /// later layers towards lower precedence. Valid positions are
    /// `0..=layer_count()`.
    pub fn add_layer(&mut self, layer: Layer<K, V>, priority: usize) -> Result<()> {
        if priority > self.layers.len() {
            return Err(ChainMapError::LayerIndexOutOfRange {
                index: priority,
                len: self.layers.len(),
            });
        }
        self.layers.insert(priority, layer);
        Ok(())
    }

    /// Removes the stack layer at `index` and returns ownership of it.
    pub fn remove_layer(&mut self, index: usize) -> Result<Layer<K, V>> {
        if index >= self.layers.len() {
            return Err(ChainMapError::LayerIndexOutOfRange {
                index,
                len: self.layers.len(),
            });
        }
        Ok(self.layers.remove(index))
    }

    /// Empties the override layer. Stack layers are untouched, so keys
    /// that were shadowed become visible again.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Empties the override layer and drops every stack layer.
    pub fn clear_all(&mut self) {
        self.overrides.clear();
        self.layers.clear();
    }

    /// Total number of physical entries across the override layer and
    /// every stack layer. A key present in several layers is counted
    /// once per layer.
    pub fn len(&self) -> usize {
        self.overrides.len() + self.layers.iter().map(Layer::len).sum::<usize>()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every physical entry: the override layer first, then each
    /// stack layer in order, each map in its insertion order. Duplicate
    /// keys across layers are all yielded.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.overrides, &self.layers)
    }

    /// The keys of every physical entry, in [`iter`](ChainMap::iter) order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// The values of every physical entry, in [`iter`](ChainMap::iter) order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }
}

impl<K: Hash + Eq, V> ChainMap<K, V> {
    /// Resolves `key` against the chain: the override layer first, then
    /// each stack layer in order, first hit wins.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.try_get(key).ok_or(ChainMapError::KeyNotFound)
    }

    /// Same scan as [`get`](ChainMap::get), returning `None` on a miss.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        if let Some(value) = self.overrides.get(key) {
            return Some(value);
        }
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    /// True if any layer holds `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.overrides.contains_key(key) || self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Adds a brand-new key to the override layer. Fails with
    /// [`DuplicateKey`](ChainMapError::DuplicateKey) when the override
    /// layer already holds `key`; a copy in a stack layer does not count
    /// as a duplicate and simply becomes shadowed.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.overrides.contains_key(&key) {
            return Err(ChainMapError::DuplicateKey);
        }
        self.overrides.insert(key, value);
        Ok(())
    }

    /// Non-failing variant of [`insert`](ChainMap::insert); reports
    /// whether the entry was added.
    pub fn try_insert(&mut self, key: K, value: V) -> bool {
        self.insert(key, value).is_ok()
    }

    /// Rewrites the value of a key that already resolves somewhere in
    /// the chain. A key held by the override layer is updated in place;
    /// a key that only resolves from a stack layer gets a new entry in
    /// the override layer, shadowing the stack copy rather than mutating
    /// it. Fails with [`KeyNotFound`](ChainMapError::KeyNotFound) when no
    /// layer holds the key: `set` never creates new logical entries,
    /// that is what [`insert`](ChainMap::insert) is for.
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        if let Some(slot) = self.overrides.get_mut(&key) {
            *slot = value;
            return Ok(());
        }
        if self.layers.iter().any(|layer| layer.contains_key(&key)) {
            self.overrides.insert(key, value);
            return Ok(());
        }
        Err(ChainMapError::KeyNotFound)
    }

    /// Removes `key` from the override layer and returns its value.
    /// Returns `None` when the override layer does not hold the key,
    /// even if a stack layer does; removal never reaches into the stack,
    /// so a previously shadowed stack entry reappears instead.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.overrides.shift_remove(key)
    }

    /// Flattens the chain into one independent map holding a single
    /// entry per distinct key, taken from the highest-precedence layer
    /// that defines it.
    pub fn merge(&self) -> Layer<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let mut flat = self.overrides.clone();
        for layer in &self.layers {
            for (key, value) in layer {
                if !flat.contains_key(key) {
                    flat.insert(key.clone(), value.clone());
                }
            }
        }
        flat
    }
}

impl<K: Hash + Eq, V: PartialEq> ChainMap<K, V> {
    /// True if any layer holds an entry with this value, scanning in the
    /// usual override-then-stack order.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|held| held == value)
    }

    /// True if a single layer holds exactly this key/value pair. A key
    /// match in one layer and a value match in another does not count.
    pub fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.overrides.get(key).map_or(false, |held| held == value)
            || self.layers.iter().any(|layer| layer.get(key) == Some(value))
    }
}

impl<K, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<Vec<Layer<K, V>>> for ChainMap<K, V> {
    fn from(layers: Vec<Layer<K, V>>) -> Self {
        Self::with_layers(layers)
    }
}
