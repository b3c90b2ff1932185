//! Test utilities and fixtures.
//!
//! This module provides reusable fixtures for configuration tests and
//! proptest strategies for the container property tests.

use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Maximum number of operations generated for a single property case.
const MAX_OPS: usize = 64;

/// Temporary directory plus the environment variables a test has set.
///
/// Variables are removed again when the fixture is dropped.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for the lifetime of this fixture.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        config_file(self.temp_dir.path(), name, contents)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}

/// Write a configuration file into `dir`.
pub fn config_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// A mutation applied to a sequence in property tests.
#[derive(Debug, Clone, Copy)]
pub enum ListOp {
    AddFirst(i32),
    AddLast(i32),
    /// Insert at `pos % (size + 1)`
    AddAt(usize, i32),
    RemoveFirst,
    RemoveLast,
    /// Remove at `pos % size`
    RemoveAt(usize),
}

/// Strategy producing a sequence of list mutations.
pub fn sequence_ops() -> BoxedStrategy<Vec<ListOp>> {
    let op = prop_oneof![
        any::<i32>().prop_map(ListOp::AddFirst),
        any::<i32>().prop_map(ListOp::AddLast),
        (any::<usize>(), any::<i32>()).prop_map(|(pos, x)| ListOp::AddAt(pos, x)),
        Just(ListOp::RemoveFirst),
        Just(ListOp::RemoveLast),
        any::<usize>().prop_map(ListOp::RemoveAt),
    ];
    proptest::collection::vec(op, 0..MAX_OPS).boxed()
}
