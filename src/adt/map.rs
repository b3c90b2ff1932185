//! Map selection by implementation name.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};

use super::KeyValueMap;
use crate::data_structures::{ArrayList, HashTableConfig, LinearProbing, MapEntry, SeparateChaining};
use crate::error::{AdtError, AdtResult};

/// Available map implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapKind {
    SeparateChaining,
    LinearProbing,
}

impl MapKind {
    /// Every kind, in declaration order.
    pub const ALL: [MapKind; 2] = [MapKind::SeparateChaining, MapKind::LinearProbing];

    /// Name accepted by [`Map::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            MapKind::SeparateChaining => "SeparateChaining",
            MapKind::LinearProbing => "LinearProbing",
        }
    }

    /// Default configuration of this kind of table.
    pub fn default_config(self) -> HashTableConfig {
        match self {
            MapKind::SeparateChaining => HashTableConfig::separate_chaining(),
            MapKind::LinearProbing => HashTableConfig::linear_probing(),
        }
    }
}

impl FromStr for MapKind {
    type Err = AdtError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        MapKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| AdtError::UnknownImplementation {
                family: "Map",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hash table whose implementation is chosen at construction time.
#[derive(Debug, Clone)]
pub enum Map<K, V, S = FnvBuildHasher> {
    SeparateChaining(SeparateChaining<K, V, S>),
    LinearProbing(LinearProbing<K, V, S>),
}

macro_rules! dispatch {
    ($map:expr, $table:ident => $body:expr) => {
        match $map {
            Map::SeparateChaining($table) => $body,
            Map::LinearProbing($table) => $body,
        }
    };
}

impl<K, V, S> Map<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty map of `kind` with that kind's default configuration.
    pub fn new(kind: MapKind) -> Self {
        match kind {
            MapKind::SeparateChaining => Map::SeparateChaining(SeparateChaining::new()),
            MapKind::LinearProbing => Map::LinearProbing(LinearProbing::new()),
        }
    }

    /// Creates an empty map of `kind` from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid for `kind`.
    pub fn with_config(kind: MapKind, config: HashTableConfig) -> AdtResult<Self> {
        Ok(match kind {
            MapKind::SeparateChaining => Map::SeparateChaining(SeparateChaining::with_config(config)?),
            MapKind::LinearProbing => Map::LinearProbing(LinearProbing::with_config(config)?),
        })
    }

    /// Creates an empty map from an implementation name.
    ///
    /// # Errors
    ///
    /// Returns a `Value` error for an unknown name.
    pub fn from_name(name: &str) -> AdtResult<Self> {
        Ok(Self::new(name.parse()?))
    }
}

impl<K, V, S> Map<K, V, S> {
    /// The implementation held by this map.
    pub fn kind(&self) -> MapKind {
        match self {
            Map::SeparateChaining(_) => MapKind::SeparateChaining,
            Map::LinearProbing(_) => MapKind::LinearProbing,
        }
    }

    pub fn capacity(&self) -> usize {
        dispatch!(self, table => table.capacity())
    }

    pub fn load_factor(&self) -> f64 {
        dispatch!(self, table => table.load_factor())
    }

    pub fn limit_factor(&self) -> f64 {
        dispatch!(self, table => table.limit_factor())
    }

    pub fn collisions(&self) -> usize {
        dispatch!(self, table => table.collisions())
    }

    /// Iterates over the key-value pairs in storage order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        match self {
            Map::SeparateChaining(table) => Box::new(table.iter()),
            Map::LinearProbing(table) => Box::new(table.iter()),
        }
    }
}

macro_rules! impl_key_value_map {
    ($table:ident) => {
        impl<K, V, S> KeyValueMap<K, V> for $table<K, V, S>
        where
            K: Hash + Eq,
            S: BuildHasher,
        {
            fn component(&self) -> &'static str {
                stringify!($table)
            }

            fn put(&mut self, key: K, value: V) -> Option<V> {
                $table::put(self, key, value)
            }

            fn get(&self, key: &K) -> Option<&V> {
                $table::get(self, key)
            }

            fn get_entry(&self, key: &K) -> Option<&MapEntry<K, V>> {
                $table::get_entry(self, key)
            }

            fn remove(&mut self, key: &K) -> Option<V> {
                $table::remove(self, key)
            }

            fn contains(&self, key: &K) -> bool {
                $table::contains(self, key)
            }

            fn size(&self) -> usize {
                $table::size(self)
            }

            fn keys(&self) -> ArrayList<&K> {
                $table::keys(self)
            }

            fn values(&self) -> ArrayList<&V>
            where
                V: PartialEq,
            {
                $table::values(self)
            }

            fn entries(&self) -> ArrayList<&MapEntry<K, V>> {
                $table::entries(self)
            }
        }
    };
}

impl_key_value_map!(SeparateChaining);
impl_key_value_map!(LinearProbing);

impl<K, V, S> KeyValueMap<K, V> for Map<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn component(&self) -> &'static str {
        self.kind().name()
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        dispatch!(self, table => table.put(key, value))
    }

    fn get(&self, key: &K) -> Option<&V> {
        dispatch!(self, table => table.get(key))
    }

    fn get_entry(&self, key: &K) -> Option<&MapEntry<K, V>> {
        dispatch!(self, table => table.get_entry(key))
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        dispatch!(self, table => table.remove(key))
    }

    fn contains(&self, key: &K) -> bool {
        dispatch!(self, table => table.contains(key))
    }

    fn size(&self) -> usize {
        dispatch!(self, table => table.size())
    }

    fn keys(&self) -> ArrayList<&K> {
        dispatch!(self, table => table.keys())
    }

    fn values(&self) -> ArrayList<&V>
    where
        V: PartialEq,
    {
        dispatch!(self, table => table.values())
    }

    fn entries(&self) -> ArrayList<&MapEntry<K, V>> {
        dispatch!(self, table => table.entries())
    }
}
