// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node types for the linked lists.
//!
//! List nodes live in a [`slotmap::SlotMap`] owned by their list and refer to
//! each other through [`NodeKey`]s rather than pointers. A [`Node`] holds at
//! most one value: data nodes always hold one, sentinel nodes never do.

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle of a node inside its list's arena.
    pub struct NodeKey;
}

/// A single value holder.
///
/// # Type Parameters
///
/// * `T` - Type of the value stored in the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    info: Option<T>,
}

impl<T> Node<T> {
    /// Creates a new node holding `info`.
    pub fn new(info: T) -> Self {
        Self { info: Some(info) }
    }

    /// Creates a sentinel node, which never holds a value.
    pub fn sentinel() -> Self {
        Self { info: None }
    }

    /// Returns whether this node is a sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.info.is_none()
    }

    /// Returns a reference to the stored value.
    pub fn info(&self) -> Option<&T> {
        self.info.as_ref()
    }

    /// Returns a mutable reference to the stored value.
    pub fn info_mut(&mut self) -> Option<&mut T> {
        self.info.as_mut()
    }

    /// Replaces the stored value, returning the previous one.
    pub fn replace(&mut self, info: T) -> Option<T> {
        self.info.replace(info)
    }

    /// Takes the stored value out, leaving the node empty.
    pub(crate) fn take(&mut self) -> Option<T> {
        self.info.take()
    }

    /// Consumes the node, returning its value.
    pub fn into_info(self) -> Option<T> {
        self.info
    }
}

/// A node with a forward link, used by [`SingleLinked`](super::SingleLinked).
#[derive(Debug, Clone)]
pub struct SingleNode<T> {
    pub(crate) node: Node<T>,
    pub(crate) next: Option<NodeKey>,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `info`.
    pub fn new(info: T) -> Self {
        Self {
            node: Node::new(info),
            next: None,
        }
    }

    /// Returns the key of the following node, if any.
    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }

    /// Returns a reference to the stored value.
    pub fn info(&self) -> Option<&T> {
        self.node.info()
    }
}

/// A node with forward and backward links, used by
/// [`DoubleLinked`](super::DoubleLinked).
#[derive(Debug, Clone)]
pub struct DoubleNode<T> {
    pub(crate) node: Node<T>,
    pub(crate) prev: Option<NodeKey>,
    pub(crate) next: Option<NodeKey>,
}

impl<T> DoubleNode<T> {
    /// Creates an unlinked node holding `info`.
    pub fn new(info: T) -> Self {
        Self {
            node: Node::new(info),
            prev: None,
            next: None,
        }
    }

    /// Creates an unlinked sentinel node.
    pub fn sentinel() -> Self {
        Self {
            node: Node::sentinel(),
            prev: None,
            next: None,
        }
    }

    /// Returns the key of the previous node, if any.
    pub fn prev(&self) -> Option<NodeKey> {
        self.prev
    }

    /// Returns the key of the following node, if any.
    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }

    /// Returns a reference to the stored value.
    pub fn info(&self) -> Option<&T> {
        self.node.info()
    }
}
