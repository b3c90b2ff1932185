// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dynamic array container.
//!
//! [`ArrayList`] is a contiguous, growable, insertion-ordered sequence with
//! amortized O(1) `add_last` and O(1) positional access. Besides being a
//! general purpose sequence it backs the slot arrays of both hash tables.
//!
//! # Example
//!
//! ```
//! use adtkit::{ArrayList, Sequence};
//!
//! let mut list = ArrayList::new();
//! list.add_last(2);
//! list.add_first(1);
//! list.add_last(3);
//!
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.get_element(1), Ok(&2));
//! assert_eq!(list.find(&3), Some(2));
//! assert!(list.get_element(3).is_err());
//! ```

use crate::adt::sequence::{check_compatible, check_insert_position, check_position, check_range};
use crate::adt::Sequence;
use crate::data_structures::Comparator;
use crate::error::{AdtError, AdtResult};

const COMPONENT: &str = "ArrayList";

/// A growable array-backed sequence.
///
/// # Type Parameters
///
/// * `T` - The element type.
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    elements: Vec<T>,
    cmp: Comparator<T>,
}

impl<T: Ord> ArrayList<T> {
    /// Creates an empty list ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::natural())
    }
}

impl<T: Ord> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list using `cmp` for `find` and compatibility checks.
    pub fn with_comparator(cmp: Comparator<T>) -> Self {
        Self {
            elements: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: Comparator<T>) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Creates a list holding the elements of `iter`, in order.
    pub fn from_elements<I>(iter: I, cmp: Comparator<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: iter.into_iter().collect(),
            cmp,
        }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Views the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Views the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    fn component(&self) -> &'static str {
        COMPONENT
    }

    fn comparator(&self) -> &Comparator<T> {
        &self.cmp
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn add_first(&mut self, element: T) {
        self.elements.insert(0, element);
    }

    fn add_last(&mut self, element: T) {
        self.elements.push(element);
    }

    fn add_element(&mut self, element: T, pos: usize) -> AdtResult<()> {
        check_insert_position(COMPONENT, pos, self.elements.len())?;
        self.elements.insert(pos, element);
        Ok(())
    }

    fn get_first(&self) -> AdtResult<&T> {
        self.elements.first().ok_or(AdtError::Empty {
            component: COMPONENT,
            operation: "get_first",
        })
    }

    fn get_last(&self) -> AdtResult<&T> {
        self.elements.last().ok_or(AdtError::Empty {
            component: COMPONENT,
            operation: "get_last",
        })
    }

    fn get_element(&self, pos: usize) -> AdtResult<&T> {
        check_position(COMPONENT, "get_element", pos, self.elements.len())?;
        Ok(&self.elements[pos])
    }

    fn remove_first(&mut self) -> AdtResult<T> {
        check_position(COMPONENT, "remove_first", 0, self.elements.len())?;
        Ok(self.elements.remove(0))
    }

    fn remove_last(&mut self) -> AdtResult<T> {
        self.elements.pop().ok_or(AdtError::Empty {
            component: COMPONENT,
            operation: "remove_last",
        })
    }

    fn remove_element(&mut self, pos: usize) -> AdtResult<T> {
        check_position(COMPONENT, "remove_element", pos, self.elements.len())?;
        Ok(self.elements.remove(pos))
    }

    fn find(&self, element: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|item| self.cmp.matches(element, item))
    }

    fn change_info(&mut self, element: T, pos: usize) -> AdtResult<T> {
        check_position(COMPONENT, "change_info", pos, self.elements.len())?;
        Ok(std::mem::replace(&mut self.elements[pos], element))
    }

    fn exchange(&mut self, pos1: usize, pos2: usize) -> AdtResult<()> {
        check_position(COMPONENT, "exchange", pos1, self.elements.len())?;
        check_position(COMPONENT, "exchange", pos2, self.elements.len())?;
        self.elements.swap(pos1, pos2);
        Ok(())
    }

    fn sublist(&self, start: usize, end: usize) -> AdtResult<Self>
    where
        T: Clone,
    {
        check_range(COMPONENT, start, end, self.elements.len())?;
        Ok(Self {
            elements: self.elements[start..=end].to_vec(),
            cmp: self.cmp,
        })
    }

    fn concat(&mut self, other: Self) -> AdtResult<()> {
        check_compatible(COMPONENT, &self.cmp, &other.cmp)?;
        self.elements.extend(other.elements);
        Ok(())
    }

    fn iterate<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.elements.iter())
    }
}

impl<T: Ord> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter, Comparator::natural())
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
