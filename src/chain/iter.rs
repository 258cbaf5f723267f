use indexmap::map;
use crate::chain::{ChainMap, Layer};

/// Lazy traversal of every physical entry in a [`ChainMap`]: the
/// override layer first, then each stack layer in precedence order, each
/// map in its insertion order. Obtained from [`ChainMap::iter`]; calling
/// that again restarts the walk from the top.
pub struct Iter<'a, K, V> {
    front: map::Iter<'a, K, V>,
    rest: std::slice::Iter<'a, Layer<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(overrides: &'a Layer<K, V>, layers: &'a [Layer<K, V>]) -> Self {
        Self {
            front: overrides.iter(),
            rest: layers.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.front.next() {
                return Some(entry);
            }
            self.front = self.rest.next()?.iter();
        }
    }
}

/// Key projection of [`Iter`], same order, duplicates preserved.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// Value projection of [`Iter`], same order, duplicates preserved.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<'a, K, V> IntoIterator for &'a ChainMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
