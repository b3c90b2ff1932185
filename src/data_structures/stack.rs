// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! LIFO stack over a doubly linked list.

use crate::adt::Sequence;
use crate::data_structures::double_linked::{self, DoubleLinked};
use crate::data_structures::Comparator;
use crate::error::{AdtError, AdtResult};

const COMPONENT: &str = "Stack";

/// Last-in first-out stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    elements: DoubleLinked<T>,
}

impl<T: Ord> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack whose backing list uses `cmp`.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            elements: DoubleLinked::with_comparator(cmp),
        }
    }

    /// Pushes `element` on top of the stack.
    pub fn push(&mut self, element: T) {
        self.elements.add_last(element);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> AdtResult<T> {
        self.elements.remove_last().map_err(|_| AdtError::Empty {
            component: COMPONENT,
            operation: "pop",
        })
    }

    /// Returns the top element without removing it.
    pub fn top(&self) -> AdtResult<&T> {
        self.elements.get_last().map_err(|_| AdtError::Empty {
            component: COMPONENT,
            operation: "top",
        })
    }

    pub fn size(&self) -> usize {
        self.elements.size()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> std::iter::Rev<double_linked::Iter<'_, T>> {
        self.elements.iter().rev()
    }
}

impl<T: Ord> FromIterator<T> for Stack<T> {
    /// Pushes the elements in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');

        assert_eq!(stack.top(), Ok(&'c'));
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_iter_from_top() {
        let stack: Stack<i32> = (1..=3).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_empty_stack() {
        let mut stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(
            stack.pop(),
            Err(AdtError::Empty {
                component: "Stack",
                operation: "pop"
            })
        );
        assert!(stack.top().is_err());
    }
}
