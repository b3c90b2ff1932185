// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Separate chaining hash table.
//!
//! The table is an [`ArrayList`] of `capacity` buckets. Each bucket is a
//! [`SingleLinked`] chain of the entries whose key compresses to that slot,
//! kept in insertion order. Lookups scan a single chain, so their cost is
//! proportional to the load factor rather than to the table size.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};

use fnv::FnvBuildHasher;
use tracing::{debug, trace, warn};

use super::config::MIN_CAPACITY;
use super::{entry_comparator, entry_list, key_list, value_list, HashTableConfig, MadCompression};
use crate::adt::Sequence;
use crate::data_structures::{ArrayList, Comparator, MapEntry, SingleLinked};
use crate::error::AdtResult;
use crate::utils::rehash_capacity;

pub(crate) const COMPONENT: &str = "SeparateChaining";

type Chain<K, V> = SingleLinked<MapEntry<K, V>>;

fn by_chain_length<K, V>(a: &Chain<K, V>, b: &Chain<K, V>) -> Ordering {
    a.size().cmp(&b.size())
}

/// Hash map resolving collisions with per-slot chains.
///
/// # Type Parameters
///
/// * `K` - The key type.
/// * `V` - The value type.
/// * `S` - The hasher producing the codes fed to the MAD compression.
#[derive(Debug, Clone)]
pub struct SeparateChaining<K, V, S = FnvBuildHasher> {
    table: ArrayList<Chain<K, V>>,
    mad: MadCompression,
    size: usize,
    collisions: usize,
    limit_factor: f64,
    rehashable: bool,
    hasher: S,
}

impl<K, V, S> SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty table with the default chaining configuration.
    pub fn new() -> Self {
        Self::build(HashTableConfig::separate_chaining(), S::default())
    }

    /// Creates an empty table from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn with_config(config: HashTableConfig) -> AdtResult<Self> {
        Self::with_config_and_hasher(config, S::default())
    }

    /// Creates a table from `config` holding the pairs of `iter`.
    pub fn from_elements<I>(iter: I, config: HashTableConfig) -> AdtResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut table = Self::with_config(config)?;
        table.extend(iter);
        Ok(table)
    }
}

impl<K, V, S> SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty table from `config`, hashing keys with `hasher`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn with_config_and_hasher(config: HashTableConfig, hasher: S) -> AdtResult<Self> {
        config.validate(COMPONENT)?;
        Ok(Self::build(config, hasher))
    }

    fn build(config: HashTableConfig, hasher: S) -> Self {
        // Presets and validated configurations always have a capacity.
        let capacity = config.initial_capacity().unwrap_or(MIN_CAPACITY);
        Self {
            table: Self::empty_table(capacity),
            mad: MadCompression::from_seed(config.prime, capacity, config.seed),
            size: 0,
            collisions: 0,
            limit_factor: config.max_load_factor,
            rehashable: config.rehashable,
            hasher,
        }
    }

    fn empty_table(capacity: usize) -> ArrayList<Chain<K, V>> {
        ArrayList::from_elements(
            (0..capacity).map(|_| SingleLinked::with_comparator(entry_comparator())),
            Comparator::new("chain-length", by_chain_length::<K, V>),
        )
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// Returns the previous value when the key was already present; the size
    /// is unchanged in that case. A new key may trigger a rehash once it has
    /// been inserted.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let slot = self.mad.slot(&self.hasher, &key);
        let chain = &mut self.table.as_mut_slice()[slot];

        if let Some(pos) = chain.iter().position(|entry| entry.key() == &key) {
            if let Ok(entry) = chain.get_element_mut(pos) {
                return Some(entry.set_value(value));
            }
        }

        self.insert_new(MapEntry::new(key, value));
        self.check_load();
        None
    }

    /// Returns the value stored under `key`.
    ///
    /// An empty table answers `None` without hashing the key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(MapEntry::value)
    }

    /// Returns the entry stored under `key`.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&MapEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.size == 0 {
            return None;
        }
        let slot = self.mad.slot(&self.hasher, key);
        self.table.as_slice()[slot]
            .iter()
            .find(|entry| entry.key().borrow() == key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.size == 0 {
            return None;
        }
        let slot = self.mad.slot(&self.hasher, key);
        let chain = &mut self.table.as_mut_slice()[slot];
        let pos = chain.iter().position(|entry| entry.key().borrow() == key)?;
        chain.get_element_mut(pos).ok().map(MapEntry::value_mut)
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.size == 0 {
            return None;
        }
        let slot = self.mad.slot(&self.hasher, key);
        let chain = &mut self.table.as_mut_slice()[slot];
        let pos = chain.iter().position(|entry| entry.key().borrow() == key)?;
        let (_, value) = chain.remove_element(pos).ok()?.into_parts();
        self.size -= 1;
        Some(value)
    }

    /// Returns whether `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Lists the keys, by slot and then by chain order.
    pub fn keys(&self) -> ArrayList<&K> {
        key_list(self.entry_iter())
    }

    /// Lists the values, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> ArrayList<&V>
    where
        V: PartialEq,
    {
        value_list(self.entry_iter())
    }

    /// Lists the entries, in the same order as [`keys`](Self::keys).
    pub fn entries(&self) -> ArrayList<&MapEntry<K, V>> {
        entry_list(self.entry_iter())
    }

    /// Appends `entry` to its chain without checking for an existing key.
    fn insert_new(&mut self, entry: MapEntry<K, V>) {
        let slot = self.mad.slot(&self.hasher, entry.key());
        let chain = &mut self.table.as_mut_slice()[slot];
        if !chain.is_empty() {
            self.collisions += 1;
            trace!(slot, chain_length = chain.size(), "collision in separate chaining");
        }
        chain.add_last(entry);
        self.size += 1;
    }

    fn check_load(&mut self) {
        if self.load_factor() < self.limit_factor {
            return;
        }
        if self.rehashable {
            self.rehash();
        } else if (self.size - 1) as f64 / (self.capacity() as f64) < self.limit_factor {
            warn!(
                component = COMPONENT,
                size = self.size,
                capacity = self.capacity(),
                limit_factor = self.limit_factor,
                "load factor limit reached with rehashing disabled"
            );
        }
    }

    /// Moves every entry into a table of `next_prime(2 * capacity)` slots.
    ///
    /// The MAD coefficients are kept; only the capacity changes.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let Some(new_capacity) = rehash_capacity(old_capacity) else {
            warn!(component = COMPONENT, capacity = old_capacity, "table cannot grow further");
            return;
        };
        let old_table = std::mem::replace(&mut self.table, Self::empty_table(new_capacity));
        self.mad.update_capacity(new_capacity);
        self.size = 0;
        self.collisions = 0;

        for entry in old_table.into_iter().flatten() {
            self.insert_new(entry);
        }

        debug!(
            component = COMPONENT,
            old_capacity,
            new_capacity,
            size = self.size,
            "rehashed table"
        );
    }
}

impl<K, V, S> SeparateChaining<K, V, S> {
    /// Number of stored entries.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets. Always a prime.
    pub fn capacity(&self) -> usize {
        self.table.size()
    }

    /// Ratio of stored entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Load factor at which an insertion triggers a rehash.
    pub fn limit_factor(&self) -> f64 {
        self.limit_factor
    }

    /// Number of insertions that landed in a non-empty bucket since the
    /// last rehash.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn is_rehashable(&self) -> bool {
        self.rehashable
    }

    /// The MAD coefficients in use.
    pub fn compression(&self) -> &MadCompression {
        &self.mad
    }

    /// Iterates over the key-value pairs, by slot and then by chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter().flatten(),
        }
    }

    fn entry_iter(&self) -> impl Iterator<Item = &MapEntry<K, V>> {
        self.table.iter().flatten()
    }
}

impl<K, V, S> Default for SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> FromIterator<(K, V)> for SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V, S> Extend<(K, V)> for SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Borrowing iterator over a [`SeparateChaining`] table.
pub struct Iter<'a, K, V> {
    inner: std::iter::Flatten<std::slice::Iter<'a, Chain<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key(), entry.value()))
    }
}

/// Owning iterator over a [`SeparateChaining`] table.
pub struct IntoIter<K, V> {
    inner: std::iter::Flatten<std::vec::IntoIter<Chain<K, V>>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(MapEntry::into_parts)
    }
}

impl<K, V, S> IntoIterator for SeparateChaining<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter().flatten(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a SeparateChaining<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded() -> HashTableConfig {
        HashTableConfig::separate_chaining().with_seed(7)
    }

    #[test]
    fn test_new_table() {
        let table: SeparateChaining<String, i32> = SeparateChaining::new();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 2);
        assert_eq!(table.limit_factor(), 4.0);
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_put_get_overwrite() {
        let mut table = SeparateChaining::<String, i32>::with_config(seeded()).unwrap();

        assert_eq!(table.put("a".to_string(), 1), None);
        assert_eq!(table.put("b".to_string(), 2), None);
        assert_eq!(table.put("a".to_string(), 10), Some(1));

        assert_eq!(table.size(), 2);
        assert_eq!(table.get("a"), Some(&10));
        assert_eq!(table.get_entry("b").map(MapEntry::key), Some(&"b".to_string()));
        assert!(table.contains("b"));
        assert!(!table.contains("c"));
    }

    #[test]
    fn test_remove() {
        let mut table: SeparateChaining<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();

        assert_eq!(table.remove(&1), Some("one"));
        assert_eq!(table.remove(&1), None);
        assert_eq!(table.remove(&3), None);
        assert_eq!(table.size(), 1);
        assert_eq!(table.get(&2), Some(&"two"));
    }

    #[test]
    fn test_rehash_on_threshold() {
        let config = seeded().with_max_load_factor(2.0);
        let mut table = SeparateChaining::<i32, i32>::with_config(config).unwrap();
        assert_eq!(table.capacity(), 2);

        for key in 0..3 {
            table.put(key, key);
        }
        assert_eq!(table.capacity(), 2);

        // 4 / 2 reaches the limit and rehashes after the insertion.
        table.put(3, 3);
        assert_eq!(table.capacity(), 5);
        assert_eq!(table.size(), 4);
        for key in 0..4 {
            assert_eq!(table.get(&key), Some(&key));
        }
    }

    #[test]
    fn test_rehash_keeps_coefficients() {
        let mut table = SeparateChaining::<i32, i32>::with_config(seeded()).unwrap();
        let before = *table.compression();

        for key in 0..100 {
            table.put(key, key * 2);
        }
        let after = table.compression();

        assert!(table.capacity() > 2);
        assert_eq!(
            (before.scale(), before.shift(), before.prime()),
            (after.scale(), after.shift(), after.prime())
        );
        assert!(table.load_factor() < table.limit_factor());
    }

    #[test]
    fn test_disabled_rehash_grows_chains() {
        let config = seeded().with_rehashable(false);
        let mut table = SeparateChaining::<i32, i32>::with_config(config).unwrap();

        for key in 0..50 {
            table.put(key, key);
        }
        assert_eq!(table.capacity(), 2);
        assert_eq!(table.size(), 50);
        assert!(table.collisions() >= 48);
        assert!((0..50).all(|key| table.contains(&key)));
    }

    #[test]
    fn test_listings_cover_every_entry() {
        let table: SeparateChaining<i32, i32> = (0..20).map(|k| (k, k + 100)).collect();

        let keys: HashSet<i32> = table.keys().iter().map(|k| **k).collect();
        assert_eq!(keys, (0..20).collect());

        let values = table.values();
        let entries = table.entries();
        assert_eq!(values.size(), 20);
        for (pos, entry) in entries.iter().enumerate() {
            assert_eq!(values.get_element(pos).map(|v| **v), Ok(*entry.value()));
            assert_eq!(*entry.value(), *entry.key() + 100);
        }
    }

    #[test]
    fn test_get_mut_and_iter() {
        let mut table: SeparateChaining<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        if let Some(value) = table.get_mut("x") {
            *value += 10;
        }
        assert_eq!(table.get("x"), Some(&11));

        let mut pairs: Vec<(&str, i32)> = table.into_iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("x", 11), ("y", 2)]);
    }

    #[test]
    fn test_invalid_config() {
        let config = HashTableConfig::separate_chaining().with_prime(12);
        assert!(SeparateChaining::<i32, i32>::with_config(config).is_err());

        let config = HashTableConfig::separate_chaining().with_max_load_factor(1e-300);
        let err = SeparateChaining::<i32, i32>::with_config(config).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Value);
    }
}
