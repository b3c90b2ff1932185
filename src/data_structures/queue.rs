// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! FIFO queue over a singly linked list.

use crate::adt::Sequence;
use crate::data_structures::single_linked::{self, SingleLinked};
use crate::data_structures::Comparator;
use crate::error::{AdtError, AdtResult};

const COMPONENT: &str = "Queue";

/// First-in first-out queue.
///
/// Elements enter at the tail of a [`SingleLinked`] list and leave from its
/// head, so both `enqueue` and `dequeue` are O(1).
#[derive(Debug, Clone)]
pub struct Queue<T> {
    elements: SingleLinked<T>,
}

impl<T: Ord> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue whose backing list uses `cmp`.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            elements: SingleLinked::with_comparator(cmp),
        }
    }

    /// Adds `element` at the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.elements.add_last(element);
    }

    /// Removes and returns the element at the front of the queue.
    pub fn dequeue(&mut self) -> AdtResult<T> {
        self.elements.remove_first().map_err(|_| AdtError::Empty {
            component: COMPONENT,
            operation: "dequeue",
        })
    }

    /// Returns the element at the front without removing it.
    pub fn peek(&self) -> AdtResult<&T> {
        self.elements.get_first().map_err(|_| AdtError::Empty {
            component: COMPONENT,
            operation: "peek",
        })
    }

    /// Number of queued elements.
    pub fn size(&self) -> usize {
        self.elements.size()
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> single_linked::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Ord> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = single_linked::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
