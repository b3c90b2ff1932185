//! Workload configuration module.
//!
//! This module defines the insert/overwrite/remove pattern the `adtkit run`
//! command drives through the configured map.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Workload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of distinct keys inserted
    pub key_count: usize,

    /// Every n-th key is written a second time with a new value (0 disables)
    pub overwrite_every: usize,

    /// Every n-th key is removed after the inserts (0 disables)
    pub remove_every: usize,

    /// Prefix of the generated keys
    pub key_prefix: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            key_count: 10_000,
            overwrite_every: 3,
            remove_every: 5,
            key_prefix: "key-".to_string(),
        }
    }
}

impl WorkloadConfig {
    /// Key number `index` of the workload.
    pub fn key(&self, index: usize) -> String {
        format!("{}{index}", self.key_prefix)
    }

    /// Whether key number `index` is overwritten.
    pub fn is_overwritten(&self, index: usize) -> bool {
        self.overwrite_every != 0 && index % self.overwrite_every == 0
    }

    /// Whether key number `index` is removed.
    pub fn is_removed(&self, index: usize) -> bool {
        self.remove_every != 0 && index % self.remove_every == 0
    }
}

impl Validate for WorkloadConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.key_count == 0 {
            return Err(ConfigError::ValidationError(
                "key_count must be greater than 0".to_string(),
            ));
        }

        if self.overwrite_every > self.key_count || self.remove_every > self.key_count {
            return Err(ConfigError::ValueOutOfRange {
                key: "workload".to_string(),
                message: "strides must not exceed key_count".to_string(),
            });
        }

        Ok(())
    }
}
