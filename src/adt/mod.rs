//! Container contracts and construction-time selection.
//!
//! Calling code that should not depend on a concrete container programs
//! against [`Sequence`] and [`KeyValueMap`], and builds its containers
//! through [`List`] and [`Map`], picking the implementation by [`ListKind`]
//! or [`MapKind`], or by name:
//!
//! ```
//! use adtkit::adt::{List, ListKind, Sequence};
//! use adtkit::Comparator;
//!
//! let mut list = List::from_name("DoubleLinked", Comparator::natural()).unwrap();
//! list.add_last(3);
//! list.add_first(1);
//! assert_eq!(list.kind(), ListKind::DoubleLinked);
//! assert_eq!(list.get_last(), Ok(&3));
//!
//! assert!(List::<i32>::from_name("SkipList", Comparator::natural()).is_err());
//! ```

pub mod list;
pub mod map;
pub mod sequence;

use crate::data_structures::{ArrayList, MapEntry};

pub use list::{translate, List, ListKind};
pub use map::{Map, MapKind};
pub use sequence::Sequence;

/// Key-value container with unique keys.
///
/// Implemented by [`SeparateChaining`](crate::SeparateChaining),
/// [`LinearProbing`](crate::LinearProbing) and the [`Map`] selector.
pub trait KeyValueMap<K, V> {
    /// Name of the concrete implementation.
    fn component(&self) -> &'static str;

    /// Inserts or overwrites the value stored under `key`, returning the
    /// previous value.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value stored under `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns the entry stored under `key`.
    fn get_entry(&self, key: &K) -> Option<&MapEntry<K, V>>;

    /// Removes `key`, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns whether `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Number of stored entries.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Lists the keys in storage order.
    fn keys(&self) -> ArrayList<&K>;

    /// Lists the values in storage order.
    fn values(&self) -> ArrayList<&V>
    where
        V: PartialEq;

    /// Lists the entries in storage order.
    fn entries(&self) -> ArrayList<&MapEntry<K, V>>;
}
