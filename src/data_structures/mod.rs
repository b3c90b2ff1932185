//! Containers of the adtkit library.
//!
//! Sequences ([`ArrayList`], [`SingleLinked`], [`DoubleLinked`]) implement
//! the [`Sequence`](crate::adt::Sequence) contract; [`Queue`] and [`Stack`]
//! wrap the linked lists; the hash tables in [`hash_table`] implement the
//! [`KeyValueMap`](crate::adt::KeyValueMap) contract on top of the
//! sequences.
//!
//! All containers are single-threaded and own their storage outright.

pub mod array_list;
pub mod comparator;
pub mod double_linked;
pub mod hash_table;
pub mod map_entry;
pub mod node;
pub mod queue;
pub mod single_linked;
pub mod stack;

// Re-export common data structures
pub use array_list::ArrayList;
pub use comparator::{CompareFn, Comparator};
pub use double_linked::DoubleLinked;
pub use hash_table::{HashTableConfig, LinearProbing, SeparateChaining};
pub use map_entry::MapEntry;
pub use node::{DoubleNode, Node, NodeKey, SingleNode};
pub use queue::Queue;
pub use single_linked::SingleLinked;
pub use stack::Stack;
