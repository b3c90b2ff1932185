// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Number utilities used to size and address the hash tables.
//!
//! All functions are pure: primality testing, the search for the next prime
//! and the MAD (Multiply-Add-and-Divide) compression function
//! `((a * h + b) mod p) mod M`.

/// Large prime used by the MAD compression function when none is configured.
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_PRIME: u64 = 109345121;

/// Returns whether `n` is a prime number.
///
/// Uses trial division by `6k ± 1` candidates up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: u64 = 5;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns the smallest prime strictly greater than `n`.
///
/// Any `n < 2` yields `2`, so a table sized from zero expected elements still
/// gets a usable capacity. Returns `None` when no such prime fits in a `u64`.
pub fn next_prime(n: u64) -> Option<u64> {
    if n < 2 {
        return Some(2);
    }

    let mut candidate = n.checked_add(1)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

/// Capacity a table of `capacity` slots grows to on rehash:
/// `next_prime(2 * capacity)`.
pub fn rehash_capacity(capacity: usize) -> Option<usize> {
    let doubled = u64::try_from(capacity).ok()?.checked_mul(2)?;
    usize::try_from(next_prime(doubled)?).ok()
}

/// Compresses a full-width hash code into a slot index in `[0, capacity)`.
///
/// # Arguments
///
/// * `hash` - Hash code of the key, as produced by the table's hasher.
/// * `scale` - Multiplier `a`, drawn from `[1, prime - 1]`.
/// * `shift` - Offset `b`, drawn from `[0, prime - 1]`.
/// * `prime` - Prime `p`, normally much larger than `capacity`.
/// * `capacity` - Table size `M`.
///
/// # Returns
///
/// The slot index for the key. The arithmetic is done in 128 bits, so the
/// intermediate product never wraps and is never negative.
pub fn mad_compress(hash: u64, scale: u64, shift: u64, prime: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity must be positive");
    let product = u128::from(scale) * u128::from(hash) + u128::from(shift);
    let reduced = product % u128::from(prime);
    (reduced % capacity as u128) as usize
}
