// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the hash tables.

use serde::{Deserialize, Serialize};

use crate::error::{AdtError, AdtResult};
use crate::utils::{is_prime, next_prime, DEFAULT_PRIME};

/// Default limit factor of [`SeparateChaining`](super::SeparateChaining).
pub const CHAINING_LOAD_FACTOR: f64 = 4.0;

/// Default limit factor of [`LinearProbing`](super::LinearProbing).
pub const PROBING_LOAD_FACTOR: f64 = 0.5;

/// Smallest slot count of any table.
pub const MIN_CAPACITY: usize = 2;

/// Largest slot count a table may start with.
pub const MAX_INITIAL_CAPACITY: u64 = 1 << 32;

/// Configuration for a hash table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashTableConfig {
    /// Number of entries the table is expected to hold.
    /// Only used to size the initial slot array.
    pub expected_elements: usize,

    /// Load factor at which an insertion triggers a rehash.
    pub max_load_factor: f64,

    /// Prime modulus of the MAD compression. Must exceed the initial
    /// capacity, and should be much larger than any capacity the table
    /// reaches, or some slots are never addressed.
    pub prime: u64,

    /// Whether the table grows once `max_load_factor` is reached.
    pub rehashable: bool,

    /// Seed for the MAD coefficients. `None` draws them from the thread RNG.
    pub seed: Option<u64>,
}

impl HashTableConfig {
    /// Creates a configuration for a separate chaining table.
    pub fn separate_chaining() -> Self {
        Self {
            expected_elements: 1,
            max_load_factor: CHAINING_LOAD_FACTOR,
            prime: DEFAULT_PRIME,
            rehashable: true,
            seed: None,
        }
    }

    /// Creates a configuration for a linear probing table.
    pub fn linear_probing() -> Self {
        Self {
            max_load_factor: PROBING_LOAD_FACTOR,
            ..Self::separate_chaining()
        }
    }

    /// Sets the number of entries the table is expected to hold.
    ///
    /// # Arguments
    ///
    /// * `expected_elements` - Sizing hint for the initial capacity.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_expected_elements(mut self, expected_elements: usize) -> Self {
        self.expected_elements = expected_elements;
        self
    }

    /// Sets the load factor that triggers a rehash.
    ///
    /// # Arguments
    ///
    /// * `max_load_factor` - The rehash threshold.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Sets the prime modulus of the MAD compression.
    pub fn with_prime(mut self, prime: u64) -> Self {
        self.prime = prime;
        self
    }

    /// Enables or disables automatic rehashing.
    pub fn with_rehashable(mut self, rehashable: bool) -> Self {
        self.rehashable = rehashable;
        self
    }

    /// Fixes the seed of the MAD coefficients, making slot placement
    /// reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of slots a table built from this configuration starts with.
    ///
    /// Always a prime, and at least 2. `None` when the expected elements and
    /// load factor ask for more than [`MAX_INITIAL_CAPACITY`] slots.
    pub fn initial_capacity(&self) -> Option<usize> {
        let wanted = (self.expected_elements as f64 / self.max_load_factor).floor();
        if wanted.is_nan() || wanted >= MAX_INITIAL_CAPACITY as f64 {
            return None;
        }
        next_prime(wanted as u64).and_then(|prime| usize::try_from(prime).ok())
    }

    /// Checks the configuration for a table of `component`.
    ///
    /// Open addressing needs a load factor below 1.0; chaining accepts any
    /// positive finite value.
    pub fn validate(&self, component: &'static str) -> AdtResult<()> {
        let invalid = |reason: String| AdtError::InvalidConfiguration { component, reason };

        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(invalid(format!(
                "load factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        if component == super::linear_probing::COMPONENT && self.max_load_factor >= 1.0 {
            return Err(invalid(format!(
                "load factor must be below 1.0 for open addressing, got {}",
                self.max_load_factor
            )));
        }
        let Some(capacity) = self.initial_capacity() else {
            return Err(invalid(format!(
                "{} expected elements at load factor {} need more than {} slots",
                self.expected_elements, self.max_load_factor, MAX_INITIAL_CAPACITY
            )));
        };
        if !is_prime(self.prime) {
            return Err(invalid(format!("{} is not a prime", self.prime)));
        }
        if self.prime <= capacity as u64 {
            return Err(invalid(format!(
                "prime {} must exceed the initial capacity {}",
                self.prime, capacity
            )));
        }
        Ok(())
    }
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self::separate_chaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, 4.0 => Some(2) ; "single element chaining")]
    #[test_case(0, 4.0 => Some(2) ; "no elements")]
    #[test_case(100, 4.0 => Some(29) ; "hundred elements chaining")]
    #[test_case(10, 0.5 => Some(23) ; "ten elements probing")]
    #[test_case(1, 1e-300 => None ; "tiny load factor")]
    #[test_case(usize::MAX, 1.0 => None ; "too many elements")]
    fn test_initial_capacity(expected: usize, load: f64) -> Option<usize> {
        HashTableConfig::default()
            .with_expected_elements(expected)
            .with_max_load_factor(load)
            .initial_capacity()
    }

    #[test]
    fn test_presets() {
        assert_eq!(HashTableConfig::separate_chaining().max_load_factor, 4.0);
        assert_eq!(HashTableConfig::linear_probing().max_load_factor, 0.5);
        assert_eq!(HashTableConfig::default().prime, DEFAULT_PRIME);
    }

    #[test]
    fn test_validate() {
        assert!(HashTableConfig::separate_chaining().validate("SeparateChaining").is_ok());
        assert!(HashTableConfig::linear_probing().validate("LinearProbing").is_ok());

        let config = HashTableConfig::default().with_max_load_factor(0.0);
        assert!(config.validate("SeparateChaining").is_err());

        let config = HashTableConfig::default().with_max_load_factor(f64::NAN);
        assert!(config.validate("SeparateChaining").is_err());

        let config = HashTableConfig::default().with_max_load_factor(1.5);
        assert!(config.validate("SeparateChaining").is_ok());
        assert!(config.validate("LinearProbing").is_err());

        let config = HashTableConfig::default().with_prime(100);
        assert!(config.validate("SeparateChaining").is_err());
    }

    #[test_case(HashTableConfig::separate_chaining().with_max_load_factor(1e-300) ; "tiny chaining load factor")]
    #[test_case(HashTableConfig::linear_probing().with_max_load_factor(f64::MIN_POSITIVE) ; "tiny probing load factor")]
    #[test_case(HashTableConfig::separate_chaining().with_expected_elements(usize::MAX) ; "too many elements")]
    fn test_validate_rejects_oversized_capacity(config: HashTableConfig) {
        for component in ["SeparateChaining", "LinearProbing"] {
            let err = config.validate(component).unwrap_err();
            assert!(matches!(err, AdtError::InvalidConfiguration { .. }));
        }
    }

    #[test]
    fn test_validate_prime_must_exceed_capacity() {
        let config = HashTableConfig::separate_chaining().with_prime(2);
        assert!(config.validate("SeparateChaining").is_err());

        let config = HashTableConfig::separate_chaining()
            .with_expected_elements(100)
            .with_prime(29);
        assert_eq!(config.initial_capacity(), Some(29));
        assert!(config.validate("SeparateChaining").is_err());

        let config = config.with_prime(31);
        assert!(config.validate("SeparateChaining").is_ok());
    }
}
