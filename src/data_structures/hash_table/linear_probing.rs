// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Linear probing hash table.
//!
//! Entries live directly in an [`ArrayList`] of `capacity` slots. A key is
//! stored at its home slot or, when that is taken, at the first usable slot
//! found by scanning forward and wrapping around.
//!
//! Removal leaves a [`Slot::Tombstone`] behind. A probe keeps scanning past
//! tombstones, so keys stored further along the sequence stay reachable, and
//! only a [`Slot::Vacant`] slot ends the scan. Insertion reuses the first
//! tombstone met along the way. Tombstones are dropped by the next rehash,
//! or by an in-place rebuild once they crowd out the vacant slots.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};

use fnv::FnvBuildHasher;
use tracing::{debug, trace, warn};

use super::config::MIN_CAPACITY;
use super::{entry_list, key_list, value_list, HashTableConfig, MadCompression};
use crate::adt::Sequence;
use crate::data_structures::{ArrayList, Comparator, MapEntry};
use crate::error::AdtResult;
use crate::utils::rehash_capacity;

pub(crate) const COMPONENT: &str = "LinearProbing";

/// State of a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K, V> {
    /// Never held an entry. Ends a probe sequence.
    Vacant,
    /// Held an entry that was removed. Probing continues past it.
    Tombstone,
    /// Holds a live entry.
    Occupied(MapEntry<K, V>),
}

impl<K, V> Slot<K, V> {
    /// Returns the live entry, if any.
    pub fn entry(&self) -> Option<&MapEntry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    fn rank(&self) -> u8 {
        match self {
            Slot::Vacant => 0,
            Slot::Tombstone => 1,
            Slot::Occupied(_) => 2,
        }
    }
}

fn by_slot_state<K, V>(a: &Slot<K, V>, b: &Slot<K, V>) -> Ordering {
    a.rank().cmp(&b.rank())
}

/// Outcome of a probe for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key is stored at this position.
    Found(usize),
    /// The key is absent; this is the first reusable slot on its sequence.
    Available(usize),
    /// The key is absent and every slot holds a live entry.
    Full,
}

/// Hash map resolving collisions with open addressing.
///
/// # Type Parameters
///
/// * `K` - The key type.
/// * `V` - The value type.
/// * `S` - The hasher producing the codes fed to the MAD compression.
#[derive(Debug, Clone)]
pub struct LinearProbing<K, V, S = FnvBuildHasher> {
    table: ArrayList<Slot<K, V>>,
    mad: MadCompression,
    size: usize,
    tombstones: usize,
    collisions: usize,
    limit_factor: f64,
    rehashable: bool,
    hasher: S,
}

impl<K, V, S> LinearProbing<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty table with the default probing configuration.
    pub fn new() -> Self {
        Self::build(HashTableConfig::linear_probing(), S::default())
    }

    /// Creates an empty table from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate, including a
    /// load factor of 1.0 or more.
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

impl<K, V, S> LinearProbing<K, V, S>
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
            tombstones: 0,
            collisions: 0,
            limit_factor: config.max_load_factor,
            rehashable: config.rehashable,
            hasher,
        }
    }

    fn empty_table(capacity: usize) -> ArrayList<Slot<K, V>> {
        ArrayList::from_elements(
            (0..capacity).map(|_| Slot::Vacant),
            Comparator::new("slot-state", by_slot_state::<K, V>),
        )
    }

    /// Scans the probe sequence of `key`.
    ///
    /// Stops at the key or at the first vacant slot. When the key is absent
    /// the returned position is the first tombstone passed, or the vacant
    /// slot if there was none.
    fn find_slot<Q>(&self, key: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slots = self.table.as_slice();
        let capacity = slots.len();
        let home = self.mad.slot(&self.hasher, key);
        let mut available = None;

        for step in 0..capacity {
            let pos = (home + step) % capacity;
            match &slots[pos] {
                Slot::Occupied(entry) if entry.key().borrow() == key => return Probe::Found(pos),
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    available.get_or_insert(pos);
                }
                Slot::Vacant => return Probe::Available(available.unwrap_or(pos)),
            }
        }
        available.map_or(Probe::Full, Probe::Available)
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// Returns the previous value when the key was already present. A full
    /// table grows before inserting, even with rehashing disabled.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let pos = match self.find_slot(&key) {
            Probe::Found(pos) => {
                if let Slot::Occupied(entry) = &mut self.table.as_mut_slice()[pos] {
                    return Some(entry.set_value(value));
                }
                return None;
            }
            Probe::Available(pos) => pos,
            Probe::Full => {
                warn!(
                    component = COMPONENT,
                    capacity = self.capacity(),
                    "no free slot left, growing table"
                );
                self.rehash();
                self.insert_new(MapEntry::new(key, value));
                return None;
            }
        };

        self.place(pos, MapEntry::new(key, value));
        self.check_load();
        None
    }

    /// Returns the value stored under `key`.
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
        match self.find_slot(key) {
            Probe::Found(pos) => self.table.as_slice()[pos].entry(),
            Probe::Available(_) | Probe::Full => None,
        }
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
        match self.find_slot(key) {
            Probe::Found(pos) => match &mut self.table.as_mut_slice()[pos] {
                Slot::Occupied(entry) => Some(entry.value_mut()),
                _ => None,
            },
            Probe::Available(_) | Probe::Full => None,
        }
    }

    /// Removes `key`, leaving a tombstone in its slot.
    ///
    /// Rebuilds the table in place when live entries and tombstones together
    /// reach the limit factor and tombstones fill at least half of the slots
    /// not holding a live entry.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.size == 0 {
            return None;
        }
        let Probe::Found(pos) = self.find_slot(key) else {
            return None;
        };
        match std::mem::replace(&mut self.table.as_mut_slice()[pos], Slot::Tombstone) {
            Slot::Occupied(entry) => {
                self.size -= 1;
                self.tombstones += 1;
                self.check_tombstones();
                Some(entry.into_parts().1)
            }
            other => {
                self.table.as_mut_slice()[pos] = other;
                None
            }
        }
    }

    /// Returns whether `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Lists the keys in slot order.
    pub fn keys(&self) -> ArrayList<&K> {
        key_list(self.entry_iter())
    }

    /// Lists the values in slot order.
    pub fn values(&self) -> ArrayList<&V>
    where
        V: PartialEq,
    {
        value_list(self.entry_iter())
    }

    /// Lists the entries in slot order.
    pub fn entries(&self) -> ArrayList<&MapEntry<K, V>> {
        entry_list(self.entry_iter())
    }

    fn place(&mut self, pos: usize, entry: MapEntry<K, V>) {
        let home = self.mad.slot(&self.hasher, entry.key());
        if pos != home {
            self.collisions += 1;
            trace!(home, pos, "collision in linear probing");
        }
        let slot = &mut self.table.as_mut_slice()[pos];
        let previous = std::mem::replace(slot, Slot::Occupied(entry));
        if previous.is_tombstone() {
            self.tombstones -= 1;
        }
        self.size += 1;
    }

    /// Stores `entry` in the first vacant slot of its probe sequence.
    ///
    /// Only used while rebuilding, when the table holds no tombstones.
    fn insert_new(&mut self, entry: MapEntry<K, V>) {
        let capacity = self.capacity();
        let home = self.mad.slot(&self.hasher, entry.key());
        let vacant = (0..capacity)
            .map(|step| (home + step) % capacity)
            .find(|&pos| matches!(self.table.as_slice()[pos], Slot::Vacant));
        if let Some(pos) = vacant {
            self.place(pos, entry);
        }
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

    fn check_tombstones(&mut self) {
        let capacity = self.capacity();
        let used = (self.size + self.tombstones) as f64 / capacity as f64;
        let free = capacity.saturating_sub(self.size);
        if self.tombstones == 0 || used < self.limit_factor || 2 * self.tombstones < free {
            return;
        }
        let tombstones = self.tombstones;
        self.rebuild(capacity);
        debug!(
            component = COMPONENT,
            capacity,
            tombstones,
            size = self.size,
            "dropped tombstones"
        );
    }

    /// Moves every live entry into a table of `next_prime(2 * capacity)`
    /// slots, dropping tombstones.
    fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let Some(new_capacity) = rehash_capacity(old_capacity) else {
            warn!(component = COMPONENT, capacity = old_capacity, "table cannot grow further");
            return;
        };
        self.rebuild(new_capacity);

        debug!(
            component = COMPONENT,
            old_capacity,
            new_capacity,
            size = self.size,
            "rehashed table"
        );
    }

    /// Reinserts every live entry into `capacity` fresh vacant slots.
    fn rebuild(&mut self, capacity: usize) {
        let old_table = std::mem::replace(&mut self.table, Self::empty_table(capacity));
        self.mad.update_capacity(capacity);
        self.size = 0;
        self.tombstones = 0;
        self.collisions = 0;

        for slot in old_table {
            if let Slot::Occupied(entry) = slot {
                self.insert_new(entry);
            }
        }
    }
}

impl<K, V, S> LinearProbing<K, V, S> {
    /// Number of stored entries.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots. Always a prime.
    pub fn capacity(&self) -> usize {
        self.table.size()
    }

    /// Ratio of stored entries to slots. Tombstones do not count.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Load factor at which an insertion triggers a rehash.
    pub fn limit_factor(&self) -> f64 {
        self.limit_factor
    }

    /// Number of insertions placed away from their home slot since the last
    /// rehash.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn is_rehashable(&self) -> bool {
        self.rehashable
    }

    /// Number of slots currently holding a tombstone.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// The MAD coefficients in use.
    pub fn compression(&self) -> &MadCompression {
        &self.mad
    }

    /// Iterates over the key-value pairs in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    fn entry_iter(&self) -> impl Iterator<Item = &MapEntry<K, V>> {
        self.table.iter().filter_map(Slot::entry)
    }
}

impl<K, V, S> Default for LinearProbing<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> FromIterator<(K, V)> for LinearProbing<K, V, S>
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

impl<K, V, S> Extend<(K, V)> for LinearProbing<K, V, S>
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

/// Borrowing iterator over a [`LinearProbing`] table.
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(Slot::entry)
            .map(|entry| (entry.key(), entry.value()))
    }
}

/// Owning iterator over a [`LinearProbing`] table.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Slot<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(|slot| match slot {
            Slot::Occupied(entry) => Some(entry.into_parts()),
            _ => None,
        })
    }
}

impl<K, V, S> IntoIterator for LinearProbing<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a LinearProbing<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::BuildHasherDefault;
    use std::hash::Hasher;

    /// Sends every key to the same home slot.
    #[derive(Default)]
    struct SameSlotHasher;

    impl Hasher for SameSlotHasher {
        fn finish(&self) -> u64 {
            0
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    type Colliding<K, V> = LinearProbing<K, V, BuildHasherDefault<SameSlotHasher>>;

    fn count_slots<K, V, S>(table: &LinearProbing<K, V, S>, vacant: bool) -> usize {
        table
            .table
            .iter()
            .filter(|slot| match slot {
                Slot::Vacant => vacant,
                Slot::Tombstone => !vacant,
                Slot::Occupied(_) => false,
            })
            .count()
    }

    fn colliding() -> Colliding<&'static str, i32> {
        let config = HashTableConfig::linear_probing()
            .with_expected_elements(8)
            .with_seed(3);
        LinearProbing::with_config_and_hasher(config, BuildHasherDefault::default()).unwrap()
    }

    #[test]
    fn test_new_table() {
        let table: LinearProbing<i32, i32> = LinearProbing::new();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.limit_factor(), 0.5);
        assert_eq!(table.get(&1), None);
    }

    #[test]
    fn test_probe_sequence_and_collisions() {
        let mut table = colliding();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);

        assert_eq!(table.collisions(), 2);
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&3));
    }

    #[test]
    fn test_tombstone_keeps_probe_chain() {
        let mut table = colliding();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);

        assert_eq!(table.remove("b"), Some(2));
        assert_eq!(table.tombstones(), 1);
        assert!(table.contains("c"));
        assert_eq!(table.get("a"), Some(&1));
        assert!(!table.contains("b"));
        assert_eq!(table.size(), 2);
    }

    #[test]
    fn test_insert_reuses_first_tombstone() {
        let mut table = colliding();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);
        table.remove("b");

        table.put("d", 4);
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.get("d"), Some(&4));
        assert_eq!(table.get("c"), Some(&3));
    }

    #[test]
    fn test_overwrite_past_tombstone() {
        let mut table = colliding();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);
        table.remove("b");

        assert_eq!(table.put("c", 30), Some(3));
        assert_eq!(table.size(), 2);
        assert_eq!(table.get("c"), Some(&30));
    }

    #[test]
    fn test_rehash_drops_tombstones() {
        let config = HashTableConfig::linear_probing().with_seed(11);
        let mut table = LinearProbing::<i32, i32>::with_config(config).unwrap();

        for key in 0..40 {
            table.put(key, key);
        }
        for key in (0..40).step_by(3) {
            table.remove(&key);
        }
        assert_eq!(table.tombstones(), 14);
        assert_eq!(count_slots(&table, false), 14);

        let capacity = table.capacity();
        let mut key = 40;
        while table.capacity() == capacity {
            table.put(key, key);
            key += 1;
        }
        assert_eq!(table.tombstones(), 0);
        assert_eq!(count_slots(&table, false), 0);

        for key in key..200 {
            table.put(key, key);
        }
        for key in 0..200 {
            let expected = (key >= 40 || key % 3 != 0).then_some(&key);
            assert_eq!(table.get(&key), expected);
        }
        assert!(table.load_factor() < 0.5);
    }

    #[test]
    fn test_churn_keeps_vacant_slots() {
        let growing = HashTableConfig::linear_probing().with_seed(17);
        let fixed = HashTableConfig::linear_probing()
            .with_expected_elements(40)
            .with_rehashable(false)
            .with_seed(17);

        for (config, capacity) in [(growing, 37), (fixed, 83)] {
            let mut table = LinearProbing::<u32, u32>::with_config(config).unwrap();
            for key in 0..8 {
                table.put(key, key);
            }
            for key in 100..20_100 {
                table.put(key, key);
                assert_eq!(table.remove(&key), Some(key));
            }

            assert_eq!(table.size(), 8);
            assert_eq!(table.capacity(), capacity);
            assert_eq!(table.tombstones(), count_slots(&table, false));
            assert!(count_slots(&table, true) > capacity / 4);
            assert!((0..8).all(|key| table.get(&key) == Some(&key)));
            assert!(!table.contains(&20_099));
        }
    }

    #[test]
    fn test_full_table_without_rehash_grows() {
        let config = HashTableConfig::linear_probing()
            .with_rehashable(false)
            .with_seed(5);
        let mut table = LinearProbing::<i32, i32>::with_config(config).unwrap();
        assert_eq!(table.capacity(), 3);

        for key in 0..4 {
            table.put(key, key);
        }
        assert_eq!(table.capacity(), 7);
        assert!((0..4).all(|key| table.contains(&key)));
    }

    #[test]
    fn test_iteration() {
        let table: LinearProbing<i32, i32> = (0..10).map(|k| (k, -k)).collect();
        assert_eq!(table.iter().count(), 10);
        assert_eq!(table.keys().size(), 10);
        assert!(table.iter().all(|(k, v)| *k == -*v));

        let sum: i32 = table.into_iter().map(|(k, _)| k).sum();
        assert_eq!(sum, 45);
    }
}
