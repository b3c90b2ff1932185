//! The workload driven by `adtkit run`.
//!
//! The workload builds the configured map through the selection layer,
//! inserts `key_count` keys, overwrites and removes a configurable share of
//! them, then checks every key against the value it should hold. The keys
//! left in the table are finally copied into the configured list kind, which
//! must agree with the table's size.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adt::{translate, KeyValueMap, Map, Sequence};
use crate::config::AdtKitConfig;
use crate::error::AdtKitResult;

/// Outcome of a workload run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadReport {
    /// Map implementation that was exercised
    pub implementation: String,
    /// List implementation the keys were copied into
    pub list: String,
    /// Number of distinct keys inserted
    pub inserted: usize,
    /// Number of keys written a second time
    pub overwritten: usize,
    /// Number of keys removed
    pub removed: usize,
    /// Entries left in the table
    pub size: usize,
    /// Final number of slots
    pub capacity: usize,
    /// Final load factor
    pub load_factor: f64,
    /// Collisions since the last rehash
    pub collisions: usize,
    /// Whether every key held its expected value
    pub verified: bool,
}

/// Value stored under key `index`, before and after an overwrite.
fn expected_value(index: usize, overwritten: bool, key_count: usize) -> usize {
    if overwritten {
        index + key_count
    } else {
        index
    }
}

/// Runs the workload described by `config`.
///
/// # Errors
///
/// Returns an error if the configuration names an unknown implementation or
/// an invalid table configuration.
pub fn run_workload(config: &AdtKitConfig) -> AdtKitResult<WorkloadReport> {
    let workload = &config.workload;
    let map_kind = config.tables.map_kind()?;
    let list_kind = config.tables.list_kind()?;
    let table_config = config.tables.hash_table_config(map_kind);

    info!(
        map = %map_kind,
        list = %list_kind,
        keys = workload.key_count,
        initial_capacity = ?table_config.initial_capacity(),
        "starting workload"
    );

    let mut map: Map<String, usize> = Map::with_config(map_kind, table_config)?;

    for index in 0..workload.key_count {
        map.put(workload.key(index), index);
    }
    debug!(size = map.size(), capacity = map.capacity(), "inserted keys");

    let mut overwritten = 0;
    for index in (0..workload.key_count).filter(|&i| workload.is_overwritten(i)) {
        if map
            .put(workload.key(index), expected_value(index, true, workload.key_count))
            .is_some()
        {
            overwritten += 1;
        }
    }

    let mut removed = 0;
    for index in (0..workload.key_count).filter(|&i| workload.is_removed(i)) {
        if map.remove(&workload.key(index)).is_some() {
            removed += 1;
        }
    }
    debug!(overwritten, removed, size = map.size(), "applied updates");

    let mut verified = map.size() == workload.key_count - removed;
    for index in 0..workload.key_count {
        let key = workload.key(index);
        let expected = (!workload.is_removed(index))
            .then(|| expected_value(index, workload.is_overwritten(index), workload.key_count));
        if map.get(&key).copied() != expected {
            warn!(key = %key, ?expected, actual = ?map.get(&key), "unexpected value");
            verified = false;
        }
    }

    let keys = translate(&map.keys(), list_kind);
    if keys.size() != map.size() {
        warn!(listed = keys.size(), size = map.size(), "key listing disagrees with size");
        verified = false;
    }

    let report = WorkloadReport {
        implementation: map_kind.to_string(),
        list: list_kind.to_string(),
        inserted: workload.key_count,
        overwritten,
        removed,
        size: map.size(),
        capacity: map.capacity(),
        load_factor: map.load_factor(),
        collisions: map.collisions(),
        verified,
    };
    info!(verified = report.verified, size = report.size, "workload finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::MapKind;

    fn small_config(map: MapKind) -> AdtKitConfig {
        let mut config = AdtKitConfig::default();
        config.tables.map = map.name().to_string();
        config.tables.seed = Some(99);
        config.workload.key_count = 500;
        config
    }

    #[test]
    fn test_workload_verifies_for_every_map() {
        for kind in MapKind::ALL {
            let report = run_workload(&small_config(kind)).unwrap();
            assert!(report.verified, "{kind} failed verification");
            assert_eq!(report.implementation, kind.name());
            assert_eq!(report.inserted, 500);
            assert_eq!(report.overwritten, 167);
            assert_eq!(report.removed, 100);
            assert_eq!(report.size, 400);
            let limit = kind.default_config().max_load_factor;
            assert!(report.load_factor < limit, "{kind} ended above its limit factor");
            assert_eq!(report.load_factor, 400.0 / report.capacity as f64);
        }
    }

    #[test]
    fn test_unknown_map_fails() {
        let mut config = small_config(MapKind::SeparateChaining);
        config.tables.map = "BTree".to_string();
        assert!(run_workload(&config).is_err());
    }
}
