// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Singly linked list.
//!
//! [`SingleLinked`] keeps `first` and `last` handles and no sentinels.
//! `add_first`, `add_last` and `remove_first` are O(1). Positional access
//! walks forward from the head in O(pos), and `remove_last` is O(n) because
//! the predecessor of the last node has to be found by walking the chain.
//!
//! It is the chain type of the separate chaining hash table and the storage
//! of [`Queue`](super::Queue).

use std::fmt;

use slotmap::SlotMap;

use crate::adt::sequence::{check_compatible, check_insert_position, check_position, check_range};
use crate::adt::Sequence;
use crate::data_structures::node::{NodeKey, SingleNode};
use crate::data_structures::Comparator;
use crate::error::{AdtError, AdtResult};

const COMPONENT: &str = "SingleLinked";

/// A singly linked sequence.
///
/// # Type Parameters
///
/// * `T` - The element type.
#[derive(Clone)]
pub struct SingleLinked<T> {
    nodes: SlotMap<NodeKey, SingleNode<T>>,
    first: Option<NodeKey>,
    last: Option<NodeKey>,
    cmp: Comparator<T>,
}

impl<T: Ord> SingleLinked<T> {
    /// Creates an empty list ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for SingleLinked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SingleLinked<T> {
    /// Creates an empty list using `cmp` for `find` and compatibility checks.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            first: None,
            last: None,
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

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.first,
            remaining: self.nodes.len(),
        }
    }

    /// Returns a mutable reference to the element at `pos`.
    pub fn get_element_mut(&mut self, pos: usize) -> AdtResult<&mut T> {
        let size = self.nodes.len();
        check_position(COMPONENT, "get_element_mut", pos, size)?;
        let key = self.key_at(pos);
        key.and_then(|k| self.nodes.get_mut(k))
            .and_then(|n| n.node.info_mut())
            .ok_or_else(|| missing("get_element_mut", pos, size))
    }

    /// Walks forward from the head to the node at `pos`.
    fn key_at(&self, pos: usize) -> Option<NodeKey> {
        let mut current = self.first;
        for _ in 0..pos {
            current = current.and_then(|k| self.nodes.get(k)).and_then(|n| n.next);
        }
        current
    }

    fn info_at(&self, key: Option<NodeKey>, operation: &'static str, pos: usize) -> AdtResult<&T> {
        key.and_then(|k| self.nodes.get(k))
            .and_then(|n| n.info())
            .ok_or_else(|| missing(operation, pos, self.nodes.len()))
    }

    /// Unlinks `key`, whose predecessor is `prev`, and returns its value.
    fn unlink(&mut self, prev: Option<NodeKey>, key: NodeKey, operation: &'static str) -> AdtResult<T> {
        let removed = self
            .nodes
            .remove(key)
            .ok_or_else(|| missing(operation, 0, self.nodes.len()))?;

        match prev {
            Some(p) => {
                if let Some(prev_node) = self.nodes.get_mut(p) {
                    prev_node.next = removed.next;
                }
            }
            None => self.first = removed.next,
        }
        if self.last == Some(key) {
            self.last = prev;
        }

        removed
            .node
            .into_info()
            .ok_or_else(|| missing(operation, 0, self.nodes.len()))
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

impl<T> Sequence<T> for SingleLinked<T> {
    fn component(&self) -> &'static str {
        COMPONENT
    }

    fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn add_first(&mut self, element: T) {
        let mut node = SingleNode::new(element);
        node.next = self.first;
        let key = self.nodes.insert(node);
        self.first = Some(key);
        if self.last.is_none() {
            self.last = Some(key);
        }
    }

    fn add_last(&mut self, element: T) {
        let key = self.nodes.insert(SingleNode::new(element));
        match self.last.and_then(|k| self.nodes.get_mut(k)) {
            Some(last) => last.next = Some(key),
            None => self.first = Some(key),
        }
        self.last = Some(key);
    }

    fn add_element(&mut self, element: T, pos: usize) -> AdtResult<()> {
        let size = self.nodes.len();
        check_insert_position(COMPONENT, pos, size)?;

        if pos == 0 {
            self.add_first(element);
        } else if pos == size {
            self.add_last(element);
        } else {
            let prev = self
                .key_at(pos - 1)
                .ok_or_else(|| missing("add_element", pos, size))?;
            let mut node = SingleNode::new(element);
            node.next = self.nodes.get(prev).and_then(|n| n.next);
            let key = self.nodes.insert(node);
            if let Some(prev_node) = self.nodes.get_mut(prev) {
                prev_node.next = Some(key);
            }
        }
        Ok(())
    }

    fn get_first(&self) -> AdtResult<&T> {
        check_position(COMPONENT, "get_first", 0, self.nodes.len())?;
        self.info_at(self.first, "get_first", 0)
    }

    fn get_last(&self) -> AdtResult<&T> {
        let size = self.nodes.len();
        check_position(COMPONENT, "get_last", 0, size)?;
        self.info_at(self.last, "get_last", size - 1)
    }

    fn get_element(&self, pos: usize) -> AdtResult<&T> {
        check_position(COMPONENT, "get_element", pos, self.nodes.len())?;
        self.info_at(self.key_at(pos), "get_element", pos)
    }

    fn remove_first(&mut self) -> AdtResult<T> {
        check_position(COMPONENT, "remove_first", 0, self.nodes.len())?;
        let first = self
            .first
            .ok_or_else(|| missing("remove_first", 0, self.nodes.len()))?;
        self.unlink(None, first, "remove_first")
    }

    fn remove_last(&mut self) -> AdtResult<T> {
        let size = self.nodes.len();
        check_position(COMPONENT, "remove_last", 0, size)?;
        let last = self
            .last
            .ok_or_else(|| missing("remove_last", size - 1, size))?;
        // No back links: the predecessor has to be found from the head.
        let prev = if size > 1 { self.key_at(size - 2) } else { None };
        self.unlink(prev, last, "remove_last")
    }

    fn remove_element(&mut self, pos: usize) -> AdtResult<T> {
        let size = self.nodes.len();
        check_position(COMPONENT, "remove_element", pos, size)?;
        let prev = if pos > 0 { self.key_at(pos - 1) } else { None };
        let target = match prev {
            Some(p) => self.nodes.get(p).and_then(|n| n.next),
            None => self.first,
        }
        .ok_or_else(|| missing("remove_element", pos, size))?;
        self.unlink(prev, target, "remove_element")
    }

    fn find(&self, element: &T) -> Option<usize> {
        self.iter().position(|item| self.cmp.matches(element, item))
    }

    fn change_info(&mut self, element: T, pos: usize) -> AdtResult<T> {
        let size = self.nodes.len();
        check_position(COMPONENT, "change_info", pos, size)?;
        self.key_at(pos)
            .and_then(|k| self.nodes.get_mut(k))
            .and_then(|n| n.node.replace(element))
            .ok_or_else(|| missing("change_info", pos, size))
    }

    fn exchange(&mut self, pos1: usize, pos2: usize) -> AdtResult<()> {
        let size = self.nodes.len();
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
        check_range(COMPONENT, start, end, self.nodes.len())?;
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

impl<T: fmt::Debug> fmt::Debug for SingleLinked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`SingleLinked`].
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, SingleNode<T>>,
    current: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.info()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`SingleLinked`].
pub struct IntoIter<T> {
    list: SingleLinked<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.size();
        (len, Some(len))
    }
}

impl<T> IntoIterator for SingleLinked<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SingleLinked<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for SingleLinked<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter, Comparator::natural())
    }
}

impl<T> Extend<T> for SingleLinked<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn collect(list: &SingleLinked<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_add_first_and_last() {
        let mut list = SingleLinked::new();
        list.add_last(2);
        list.add_first(1);
        list.add_last(3);

        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.get_first(), Ok(&1));
        assert_eq!(list.get_last(), Ok(&3));
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_add_element_in_the_middle() {
        let mut list: SingleLinked<i32> = [1, 4].into_iter().collect();
        list.add_element(2, 1).unwrap();
        list.add_element(3, 2).unwrap();
        list.add_element(5, 4).unwrap();
        list.add_element(0, 0).unwrap();

        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(list.get_last(), Ok(&5));

        let err = list.add_element(9, 8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_remove_keeps_links_consistent() {
        let mut list: SingleLinked<i32> = (1..=5).collect();

        assert_eq!(list.remove_last(), Ok(5));
        assert_eq!(list.get_last(), Ok(&4));
        assert_eq!(list.remove_element(1), Ok(2));
        assert_eq!(list.remove_element(2), Ok(4));
        assert_eq!(list.get_last(), Ok(&3));
        assert_eq!(list.remove_first(), Ok(1));
        assert_eq!(list.remove_last(), Ok(3));

        assert!(list.is_empty());
        assert!(list.get_first().is_err());
        assert!(list.get_last().is_err());

        // The list is usable again after being drained
        list.add_last(7);
        assert_eq!(list.get_first(), Ok(&7));
        assert_eq!(list.get_last(), Ok(&7));
    }

    #[test]
    fn test_empty_access_fails() {
        let mut list: SingleLinked<i32> = SingleLinked::new();
        assert!(list.get_element(0).is_err());
        assert!(list.remove_element(0).is_err());
        assert!(list.remove_first().is_err());
        assert!(list.remove_last().is_err());
    }

    #[test]
    fn test_find_change_and_exchange() {
        let mut list: SingleLinked<i32> = (10..15).collect();
        assert_eq!(list.find(&14), Some(4));
        assert_eq!(list.find(&99), None);

        assert_eq!(list.change_info(20, 0), Ok(10));
        list.exchange(0, 4).unwrap();
        assert_eq!(collect(&list), vec![14, 11, 12, 13, 20]);

        *list.get_element_mut(2).unwrap() += 100;
        assert_eq!(list.get_element(2), Ok(&112));
    }

    #[test]
    fn test_sublist_and_concat() {
        let list: SingleLinked<i32> = (0..6).collect();
        let mut sub = list.sublist(2, 4).unwrap();
        assert_eq!(collect(&sub), vec![2, 3, 4]);

        sub.concat(list.sublist(0, 1).unwrap()).unwrap();
        assert_eq!(collect(&sub), vec![2, 3, 4, 0, 1]);
        assert_eq!(sub.get_last(), Ok(&1));

        let reversed = Comparator::new("reversed", |a: &i32, b: &i32| b.cmp(a));
        let foreign = SingleLinked::from_elements([1], reversed);
        assert_eq!(sub.concat(foreign).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let list: SingleLinked<i32> = (0..4).collect();
        assert_eq!(list.iter().len(), 4);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
