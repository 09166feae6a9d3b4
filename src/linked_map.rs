//! An insertion-ordered hash map.
//!
//! Lookups go through an `FxHashMap` from key to slot; entries live in a
//! slot vector in the order they were first inserted. Removal leaves a hole
//! that is skipped during iteration, and the slots are compacted once holes
//! outnumber live entries.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

pub struct LinkedMap<K, V> {
    index: FxHashMap<K, usize>,
    slots: Vec<Option<(K, V)>>,
}

impl<K: Hash + Eq + Clone, V> LinkedMap<K, V> {
    pub fn new() -> LinkedMap<K, V> {
        return LinkedMap {
            index: FxHashMap::default(),
            slots: Vec::new(),
        };
    }

    pub fn len(&self) -> usize {
        return self.index.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.index.is_empty();
    }

    /// Insert a value, returning the previous value for the key if any.
    ///
    /// Replacing the value of an existing key keeps the key's position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            let entry = self.slots[slot].as_mut().map(|(_, v)| v);
            return entry.map(|v| std::mem::replace(v, value));
        }

        self.index.insert(key.clone(), self.slots.len());
        self.slots.push(Some((key, value)));
        return None;
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.index.get(key)?;
        return self.slots[slot].as_ref().map(|(_, v)| v);
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.index.contains_key(key);
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let (_, value) = self.slots[slot].take()?;

        if self.slots.len() > 2 * self.index.len() + 8 {
            self.compact();
        }
        return Some(value);
    }

    /// Drop the holes left by removal and renumber the slots.
    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some((key, _)) = entry {
                self.index.insert(key.clone(), slot);
            }
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        return self.slots.iter().filter_map(|entry| entry.as_ref().map(|(k, v)| (k, v)));
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        return self.iter().map(|(k, _)| k);
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        return self.iter().map(|(_, v)| v);
    }
}

impl<K: Hash + Eq + Clone, V> Default for LinkedMap<K, V> {
    fn default() -> Self {
        return LinkedMap::new();
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for LinkedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LinkedMap::new();
        map.extend(iter);
        return map;
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for LinkedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for LinkedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<(K, V)>>>;

    fn into_iter(self) -> Self::IntoIter {
        return self.slots.into_iter().flatten();
    }
}

impl<K: std::fmt::Debug + Hash + Eq + Clone, V: std::fmt::Debug> std::fmt::Debug for LinkedMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_map().entries(self.iter()).finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(map: &LinkedMap<&'static str, i32>) -> Vec<&'static str> {
        return map.keys().copied().collect();
    }

    #[test]
    fn iterates_in_insertion_order() {
        let map: LinkedMap<_, _> = [("zeta", 1), ("alpha", 2), ("mu", 3)].into_iter().collect();
        assert_eq!(keys_of(&map), vec!["zeta", "alpha", "mu"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn reinsert_keeps_position_and_returns_old_value() {
        let mut map: LinkedMap<_, _> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(keys_of(&map), vec!["a", "b", "c"]);
        assert_eq!(map.get("a"), Some(&10));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut map: LinkedMap<_, _> = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
        assert_eq!(map.remove("b"), Some(2));
        assert_eq!(map.remove("b"), None);
        assert_eq!(keys_of(&map), vec!["a", "c", "d"]);
        assert!(!map.contains_key("b"));

        map.insert("b", 5);
        assert_eq!(keys_of(&map), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn survives_compaction() {
        let mut map = LinkedMap::new();
        for i in 0..100 {
            map.insert(i, i * 2);
        }
        for i in (0..100).filter(|i| i % 3 != 0) {
            map.remove(&i);
        }

        let expected: Vec<i32> = (0..100).filter(|i| i % 3 == 0).collect();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), expected);
        for key in &expected {
            assert_eq!(map.get(key), Some(&(key * 2)));
        }
        assert!(map.slots.len() < 100);
    }

    #[test]
    fn empty_after_removing_every_key() {
        let mut map = LinkedMap::new();
        assert!(map.is_empty());
        map.insert("a", 1);
        map.insert("b", 2);
        assert!(!map.is_empty());
        map.remove("a");
        map.remove("b");
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn into_iter_skips_holes() {
        let mut map: LinkedMap<_, _> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        map.remove("a");
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![("b", 2), ("c", 3)]);
    }
}
