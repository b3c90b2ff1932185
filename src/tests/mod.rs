//! Crate-internal test suites.
//!
//! Unit tests live next to the code they exercise; the suites here cover
//! behavior that spans several modules:
//! - configuration loading and validation
//! - error rendering and reporting
//! - property-based tests of the container contracts

pub mod config_tests;
pub mod test_utils;

pub use test_utils::{sequence_ops, ListOp, TestFixture};
