// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot selection for the hash tables.
//!
//! Keys are first hashed by the table's [`BuildHasher`] and the resulting
//! 64-bit code is compressed into a slot index with the MAD scheme
//! `((scale * hash + shift) mod prime) mod capacity`. Every table draws its
//! own `scale` and `shift` when it is built; a rehash keeps them and only
//! changes the capacity.

use std::hash::{BuildHasher, Hash};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::utils::mad_compress;

/// Per-table MAD coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MadCompression {
    scale: u64,
    shift: u64,
    prime: u64,
    capacity: usize,
}

impl MadCompression {
    /// Draws fresh coefficients from `rng`.
    ///
    /// # Arguments
    ///
    /// * `prime` - Prime modulus, at least 2.
    /// * `capacity` - Number of slots of the table.
    /// * `rng` - Source of randomness for `scale` and `shift`.
    pub fn new<R: Rng + ?Sized>(prime: u64, capacity: usize, rng: &mut R) -> Self {
        let scale = rng.random_range(1..prime);
        let shift = rng.random_range(0..prime);
        Self::with_coefficients(scale, shift, prime, capacity)
    }

    /// Draws coefficients from a seeded generator, or from the thread RNG
    /// when `seed` is `None`.
    pub fn from_seed(prime: u64, capacity: usize, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(prime, capacity, &mut SmallRng::seed_from_u64(seed)),
            None => Self::new(prime, capacity, &mut rand::rng()),
        }
    }

    /// Builds a compression with explicit coefficients.
    pub fn with_coefficients(scale: u64, shift: u64, prime: u64, capacity: usize) -> Self {
        Self {
            scale,
            shift,
            prime,
            capacity,
        }
    }

    /// Compresses a hash code into `[0, capacity)`.
    #[inline]
    pub fn index(&self, hash: u64) -> usize {
        mad_compress(hash, self.scale, self.shift, self.prime, self.capacity)
    }

    /// Hashes `key` with `hasher` and compresses the result.
    #[inline]
    pub fn slot<Q, S>(&self, hasher: &S, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
        S: BuildHasher,
    {
        self.index(hasher.hash_one(key))
    }

    /// Switches to a new capacity, keeping the coefficients.
    pub fn update_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn scale(&self) -> u64 {
        self.scale
    }

    pub fn shift(&self) -> u64 {
        self.shift
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }
}
