//! Shared utilities for the adtkit containers.

pub mod numbers;

pub use numbers::{is_prime, mad_compress, next_prime, rehash_capacity, DEFAULT_PRIME};
