//! Table selection and sizing configuration.
//!
//! This module defines which container implementations the workload builds
//! and how the hash tables are sized.

use super::{ConfigResult, Validate};
use crate::adt::{ListKind, MapKind};
use crate::data_structures::HashTableConfig;
use crate::error::config::ConfigError;
use crate::utils::DEFAULT_PRIME;
use serde::{Deserialize, Serialize};

/// Table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesConfig {
    /// Map implementation name ("SeparateChaining" or "LinearProbing")
    pub map: String,

    /// List implementation name ("ArrayList", "SingleLinked" or "DoubleLinked")
    pub list: String,

    /// Number of entries the tables are sized for
    pub expected_elements: usize,

    /// Rehash threshold of separate chaining tables
    pub chaining_load_factor: f64,

    /// Rehash threshold of linear probing tables (below 1.0)
    pub probing_load_factor: f64,

    /// Prime modulus of the MAD compression
    pub prime: u64,

    /// Seed of the MAD coefficients (None for a random seed)
    pub seed: Option<u64>,

    /// Whether tables grow when their load factor limit is reached
    pub rehashable: bool,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            map: MapKind::SeparateChaining.name().to_string(),
            list: ListKind::ArrayList.name().to_string(),
            expected_elements: 1,
            chaining_load_factor: 4.0,
            probing_load_factor: 0.5,
            prime: DEFAULT_PRIME,
            seed: None,
            rehashable: true,
        }
    }
}

impl TablesConfig {
    /// Resolves the configured map implementation.
    pub fn map_kind(&self) -> ConfigResult<MapKind> {
        self.map
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("tables.map: {e}")))
    }

    /// Resolves the configured list implementation.
    pub fn list_kind(&self) -> ConfigResult<ListKind> {
        self.list
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("tables.list: {e}")))
    }

    /// Builds the hash table configuration for `kind`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The table variant, which selects the load factor to use
    pub fn hash_table_config(&self, kind: MapKind) -> HashTableConfig {
        let load_factor = match kind {
            MapKind::SeparateChaining => self.chaining_load_factor,
            MapKind::LinearProbing => self.probing_load_factor,
        };
        let config = kind
            .default_config()
            .with_expected_elements(self.expected_elements)
            .with_max_load_factor(load_factor)
            .with_prime(self.prime)
            .with_rehashable(self.rehashable);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

impl Validate for TablesConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.list_kind()?;
        self.map_kind()?;

        for kind in MapKind::ALL {
            self.hash_table_config(kind)
                .validate(kind.name())
                .map_err(|e| ConfigError::ValueOutOfRange {
                    key: format!("tables ({kind})"),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }
}
