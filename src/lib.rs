//! adtkit library
//!
//! Classic abstract data types with precise contracts:
//!
//! - sequences: [`ArrayList`], [`SingleLinked`], [`DoubleLinked`], all
//!   implementing [`Sequence`], plus the [`Queue`] and [`Stack`] wrappers;
//! - hash maps: [`SeparateChaining`] and [`LinearProbing`], both using MAD
//!   compression over a prime capacity, implementing [`KeyValueMap`];
//! - construction-time selection by name through [`List`] and [`Map`].
//!
//! Containers are single-threaded and report failures as [`AdtError`]s that
//! name the component and operation at fault.
//!
//! # Example
//!
//! ```
//! use adtkit::{KeyValueMap, Map, MapKind};
//!
//! let mut books: Map<String, u32> = Map::new(MapKind::LinearProbing);
//! books.put("978-0132350884".to_string(), 2008);
//! books.put("978-0201633610".to_string(), 1994);
//!
//! assert_eq!(books.get(&"978-0201633610".to_string()), Some(&1994));
//! assert_eq!(books.size(), 2);
//! ```

pub mod adt;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod utils;
pub mod workload;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use adt::{translate, KeyValueMap, List, ListKind, Map, MapKind, Sequence};
pub use data_structures::{
    ArrayList, Comparator, DoubleLinked, HashTableConfig, LinearProbing, MapEntry, Queue,
    SeparateChaining, SingleLinked, Stack,
};
pub use error::{AdtError, AdtKitError, AdtKitResult, AdtResult, ErrorKind};

/// Version information for adtkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
