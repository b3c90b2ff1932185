// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash tables with MAD compression.
//!
//! Two variants share the same map contract:
//!
//! - [`SeparateChaining`] keeps an [`ArrayList`] of bucket chains, each chain
//!   a [`SingleLinked`](crate::data_structures::SingleLinked) list of
//!   entries.
//! - [`LinearProbing`] keeps a single [`ArrayList`] of slots and resolves
//!   collisions by scanning forward, leaving tombstones behind on removal.
//!
//! Both keep a prime capacity, draw per-table MAD coefficients and rehash to
//! `next_prime(2 * capacity)` once an insertion brings the load factor to the
//! configured limit.
//!
//! # Example
//!
//! ```
//! use adtkit::data_structures::hash_table::{HashTableConfig, SeparateChaining};
//!
//! let config = HashTableConfig::separate_chaining().with_seed(42);
//! let mut table: SeparateChaining<&str, i32> = SeparateChaining::with_config(config).unwrap();
//!
//! table.put("a", 1);
//! assert_eq!(table.put("a", 2), Some(1));
//! assert_eq!(table.get("a"), Some(&2));
//! assert_eq!(table.size(), 1);
//! ```

pub mod config;
pub mod linear_probing;
pub mod mad;
pub mod separate_chaining;

use std::cmp::Ordering;

pub use config::HashTableConfig;
pub use linear_probing::{LinearProbing, Slot};
pub use mad::MadCompression;
pub use separate_chaining::SeparateChaining;

use crate::data_structures::{ArrayList, Comparator, MapEntry};

/// Name of the comparator used by key listings and entry chains.
pub const ENTRY_KEY: &str = "entry-key";

/// Comparator matching entries by key.
pub(crate) fn entry_comparator<K: Eq, V>() -> Comparator<MapEntry<K, V>> {
    Comparator::new(ENTRY_KEY, MapEntry::<K, V>::compare_keys)
}

fn compare_entry_refs<K: Eq, V>(a: &&MapEntry<K, V>, b: &&MapEntry<K, V>) -> Ordering {
    MapEntry::compare_keys(a, b)
}

/// Collects borrowed keys into a new list.
pub(crate) fn key_list<'a, K, V, I>(entries: I) -> ArrayList<&'a K>
where
    K: Eq + 'a,
    V: 'a,
    I: Iterator<Item = &'a MapEntry<K, V>>,
{
    ArrayList::from_elements(entries.map(MapEntry::key), Comparator::equality())
}

/// Collects borrowed values into a new list.
pub(crate) fn value_list<'a, K, V, I>(entries: I) -> ArrayList<&'a V>
where
    K: 'a,
    V: PartialEq + 'a,
    I: Iterator<Item = &'a MapEntry<K, V>>,
{
    ArrayList::from_elements(entries.map(MapEntry::value), Comparator::equality())
}

/// Collects borrowed entries into a new list.
pub(crate) fn entry_list<'a, K, V, I>(entries: I) -> ArrayList<&'a MapEntry<K, V>>
where
    K: Eq + 'a,
    V: 'a,
    I: Iterator<Item = &'a MapEntry<K, V>>,
{
    ArrayList::from_elements(entries, Comparator::new(ENTRY_KEY, compare_entry_refs::<K, V>))
}
