// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Key-value pair stored by the hash tables.

use std::cmp::Ordering;

/// A key-value pair.
///
/// The key is fixed once the entry is created; the value can be overwritten
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> MapEntry<K, V> {
    /// Creates a new entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Overwrites the value, returning the previous one.
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Eq, V> MapEntry<K, V> {
    /// Compares two entries by key equality only.
    ///
    /// Used as the comparison function of bucket chains and entry listings.
    pub fn compare_keys(a: &Self, b: &Self) -> Ordering {
        if a.key == b.key {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }
}

impl<K, V> From<(K, V)> for MapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
