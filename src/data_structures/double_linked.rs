// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Doubly linked list with sentinels.
//!
//! [`DoubleLinked`] owns two permanent sentinel nodes, a header and a
//! trailer, that are never removed. Every data node therefore has a real
//! predecessor and successor, and insertion or removal at either end is a
//! uniform O(1) relink. The list is empty exactly when the header's successor
//! is the trailer.
//!
//! Positional operations walk from whichever end is closer: from the header
//! when `pos < size / 2`, from the trailer otherwise.

use std::fmt;

use slotmap::SlotMap;

use crate::adt::sequence::{check_compatible, check_insert_position, check_position, check_range};
use crate::adt::Sequence;
use crate::data_structures::node::{DoubleNode, NodeKey};
use crate::data_structures::Comparator;
use crate::error::{AdtError, AdtResult};

const COMPONENT: &str = "DoubleLinked";

/// A doubly linked sequence with header and trailer sentinels.
///
/// # Type Parameters
///
/// * `T` - The element type.
#[derive(Clone)]
pub struct DoubleLinked<T> {
    nodes: SlotMap<NodeKey, DoubleNode<T>>,
    header: NodeKey,
    trailer: NodeKey,
    cmp: Comparator<T>,
}

impl<T: Ord> DoubleLinked<T> {
    /// Creates an empty list ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for DoubleLinked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoubleLinked<T> {
    /// Creates an empty list using `cmp` for `find` and compatibility checks.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        let mut nodes = SlotMap::with_key();
        let header = nodes.insert(DoubleNode::sentinel());
        let trailer = nodes.insert(DoubleNode::sentinel());
        nodes[header].next = Some(trailer);
        nodes[trailer].prev = Some(header);

        Self {
            nodes,
            header,
            trailer,
            cmp,
        }
    }

    /// Creates a list holding the elements of `iter`, in order.
    pub fn from_elements<I>(iter: I, cmp: Comparator<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_comparator(cmp);
        list.extend(iter);
        list
    }

    /// Returns a double-ended iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.next_of(self.header),
            back: self.prev_of(self.trailer),
            remaining: self.len(),
        }
    }

    /// Returns a mutable reference to the element at `pos`.
    pub fn get_element_mut(&mut self, pos: usize) -> AdtResult<&mut T> {
        let size = self.len();
        check_position(COMPONENT, "get_element_mut", pos, size)?;
        let key = self.key_at(pos);
        key.and_then(|k| self.nodes.get_mut(k))
            .and_then(|n| n.node.info_mut())
            .ok_or_else(|| missing("get_element_mut", pos, size))
    }

    fn len(&self) -> usize {
        // Both sentinels always live in the arena.
        self.nodes.len() - 2
    }

    fn next_of(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.next)
    }

    fn prev_of(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|n| n.prev)
    }

    /// Finds the node at `pos`, walking from the nearer end.
    fn key_at(&self, pos: usize) -> Option<NodeKey> {
        let size = self.len();
        if pos < size / 2 {
            let mut current = self.next_of(self.header);
            for _ in 0..pos {
                current = current.and_then(|k| self.next_of(k));
            }
            current
        } else {
            let mut current = self.prev_of(self.trailer);
            for _ in pos..size.saturating_sub(1) {
                current = current.and_then(|k| self.prev_of(k));
            }
            current
        }
    }

    /// Inserts a node holding `element` between `prev` and `next`.
    fn link_between(&mut self, prev: NodeKey, next: NodeKey, element: T) {
        let mut node = DoubleNode::new(element);
        node.prev = Some(prev);
        node.next = Some(next);
        let key = self.nodes.insert(node);
        self.nodes[prev].next = Some(key);
        self.nodes[next].prev = Some(key);
    }

    /// Removes the data node `key`, relinking its neighbours.
    fn unlink(&mut self, key: Option<NodeKey>, operation: &'static str, pos: usize) -> AdtResult<T> {
        let size = self.len();
        let key = key
            .filter(|k| *k != self.header && *k != self.trailer)
            .ok_or_else(|| missing(operation, pos, size))?;
        let removed = self
            .nodes
            .remove(key)
            .ok_or_else(|| missing(operation, pos, size))?;

        if let (Some(prev), Some(next)) = (removed.prev, removed.next) {
            self.nodes[prev].next = Some(next);
            self.nodes[next].prev = Some(prev);
        }
        removed
            .node
            .into_info()
            .ok_or_else(|| missing(operation, pos, size))
    }

    fn info_at(&self, key: Option<NodeKey>, operation: &'static str, pos: usize) -> AdtResult<&T> {
        key.and_then(|k| self.nodes.get(k))
            .and_then(|n| n.info())
            .ok_or_else(|| missing(operation, pos, self.len()))
    }
}

fn missing(operation: &'static str, index: usize, size: usize) -> AdtError {
    AdtError::IndexOutOfRange {
        component: COMPONENT,
        operation,
        index,
        size,
    }
}

impl<T> Sequence<T> for DoubleLinked<T> {
    fn component(&self) -> &'static str {
        COMPONENT
    }

    fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.next_of(self.header) == Some(self.trailer)
    }

    fn add_first(&mut self, element: T) {
        let header = self.header;
        if let Some(next) = self.next_of(header) {
            self.link_between(header, next, element);
        }
    }

    fn add_last(&mut self, element: T) {
        let trailer = self.trailer;
        if let Some(prev) = self.prev_of(trailer) {
            self.link_between(prev, trailer, element);
        }
    }

    fn add_element(&mut self, element: T, pos: usize) -> AdtResult<()> {
        let size = self.len();
        check_insert_position(COMPONENT, pos, size)?;

        if pos == size {
            self.add_last(element);
            return Ok(());
        }
        let next = self
            .key_at(pos)
            .ok_or_else(|| missing("add_element", pos, size))?;
        let prev = self
            .prev_of(next)
            .ok_or_else(|| missing("add_element", pos, size))?;
        self.link_between(prev, next, element);
        Ok(())
    }

    fn get_first(&self) -> AdtResult<&T> {
        check_position(COMPONENT, "get_first", 0, self.len())?;
        self.info_at(self.next_of(self.header), "get_first", 0)
    }

    fn get_last(&self) -> AdtResult<&T> {
        let size = self.len();
        check_position(COMPONENT, "get_last", 0, size)?;
        self.info_at(self.prev_of(self.trailer), "get_last", size - 1)
    }

    fn get_element(&self, pos: usize) -> AdtResult<&T> {
        check_position(COMPONENT, "get_element", pos, self.len())?;
        self.info_at(self.key_at(pos), "get_element", pos)
    }

    fn remove_first(&mut self) -> AdtResult<T> {
        check_position(COMPONENT, "remove_first", 0, self.len())?;
        let first = self.next_of(self.header);
        self.unlink(first, "remove_first", 0)
    }

    fn remove_last(&mut self) -> AdtResult<T> {
        let size = self.len();
        check_position(COMPONENT, "remove_last", 0, size)?;
        let last = self.prev_of(self.trailer);
        self.unlink(last, "remove_last", size - 1)
    }

    fn remove_element(&mut self, pos: usize) -> AdtResult<T> {
        check_position(COMPONENT, "remove_element", pos, self.len())?;
        let key = self.key_at(pos);
        self.unlink(key, "remove_element", pos)
    }

    fn find(&self, element: &T) -> Option<usize> {
        self.iter().position(|item| self.cmp.matches(element, item))
    }

    fn change_info(&mut self, element: T, pos: usize) -> AdtResult<T> {
        let size = self.len();
        check_position(COMPONENT, "change_info", pos, size)?;
        self.key_at(pos)
            .and_then(|k| self.nodes.get_mut(k))
            .and_then(|n| n.node.replace(element))
            .ok_or_else(|| missing("change_info", pos, size))
    }

    fn exchange(&mut self, pos1: usize, pos2: usize) -> AdtResult<()> {
        let size = self.len();
        check_position(COMPONENT, "exchange", pos1, size)?;
        check_position(COMPONENT, "exchange", pos2, size)?;
        if pos1 == pos2 {
            return Ok(());
        }

        let (k1, k2) = match (self.key_at(pos1), self.key_at(pos2)) {
            (Some(k1), Some(k2)) => (k1, k2),
            _ => return Err(missing("exchange", pos1.max(pos2), size)),
        };
        let a = self.nodes.get_mut(k1).and_then(|n| n.node.take());
        let b = self.nodes.get_mut(k2).and_then(|n| n.node.take());
        if let (Some(a), Some(b)) = (a, b) {
            self.nodes[k1].node.replace(b);
            self.nodes[k2].node.replace(a);
        }
        Ok(())
    }

    fn sublist(&self, start: usize, end: usize) -> AdtResult<Self>
    where
        T: Clone,
    {
        check_range(COMPONENT, start, end, self.len())?;
        Ok(Self::from_elements(
            self.iter().skip(start).take(end - start + 1).cloned(),
            self.cmp,
        ))
    }

    fn concat(&mut self, other: Self) -> AdtResult<()> {
        check_compatible(COMPONENT, &self.cmp, &other.cmp)?;
        self.extend(other);
        Ok(())
    }

    fn iterate<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleLinked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`DoubleLinked`].
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, DoubleNode<T>>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        node.info()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.info()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`DoubleLinked`].
pub struct IntoIter<T> {
    list: DoubleLinked<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok()
    }
}

impl<T> IntoIterator for DoubleLinked<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoubleLinked<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for DoubleLinked<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter, Comparator::natural())
    }
}

impl<T> Extend<T> for DoubleLinked<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}
