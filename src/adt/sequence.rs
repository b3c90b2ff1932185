//! The uniform sequence contract.
//!
//! [`Sequence`] is implemented identically (modulo complexity) by
//! [`ArrayList`](crate::data_structures::ArrayList),
//! [`SingleLinked`](crate::data_structures::SingleLinked),
//! [`DoubleLinked`](crate::data_structures::DoubleLinked) and the
//! [`List`](super::List) selector, so calling code does not need to know
//! which one it holds.
//!
//! Positions are zero-based. Every failing operation reports an
//! [`AdtError`] of kind [`Index`](crate::error::ErrorKind::Index), except
//! `concat`, which reports [`Type`](crate::error::ErrorKind::Type) errors.

use crate::data_structures::Comparator;
use crate::error::{AdtError, AdtResult};

/// Insertion-ordered, position-addressable container.
pub trait Sequence<T> {
    /// Name of the concrete implementation, used in error messages.
    fn component(&self) -> &'static str;

    /// The comparison function used by `find` and by compatibility checks.
    fn comparator(&self) -> &Comparator<T>;

    /// Number of elements. Always O(1).
    fn size(&self) -> usize;

    /// Returns whether the sequence holds no element. Always O(1).
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Inserts `element` at position 0.
    fn add_first(&mut self, element: T);

    /// Appends `element` after the last position.
    fn add_last(&mut self, element: T);

    /// Inserts `element` so that it ends up at position `pos`.
    ///
    /// `pos == 0` behaves as `add_first` and `pos == size` as `add_last`.
    /// Fails when `pos > size`; on an empty sequence only `pos == 0` is valid.
    fn add_element(&mut self, element: T, pos: usize) -> AdtResult<()>;

    /// Returns the first element.
    fn get_first(&self) -> AdtResult<&T>;

    /// Returns the last element.
    fn get_last(&self) -> AdtResult<&T>;

    /// Returns the element at `pos`.
    fn get_element(&self, pos: usize) -> AdtResult<&T>;

    /// Removes and returns the first element.
    fn remove_first(&mut self) -> AdtResult<T>;

    /// Removes and returns the last element.
    fn remove_last(&mut self) -> AdtResult<T>;

    /// Removes and returns the element at `pos`.
    fn remove_element(&mut self, pos: usize) -> AdtResult<T>;

    /// Returns the position of the first element equal to `element` under the
    /// sequence's comparator, scanning every element including the last.
    fn find(&self, element: &T) -> Option<usize>;

    /// Overwrites the element at `pos`, returning the previous value.
    fn change_info(&mut self, element: T, pos: usize) -> AdtResult<T>;

    /// Swaps the values stored at `pos1` and `pos2`.
    fn exchange(&mut self, pos1: usize, pos2: usize) -> AdtResult<()>;

    /// Copies the inclusive range `[start, end]` into a new, independently
    /// owned sequence of the same kind and comparator.
    fn sublist(&self, start: usize, end: usize) -> AdtResult<Self>
    where
        Self: Sized,
        T: Clone;

    /// Moves every element of `other` to the end of `self`.
    ///
    /// Fails when the comparators are not compatible; `other` is dropped in
    /// that case.
    fn concat(&mut self, other: Self) -> AdtResult<()>
    where
        Self: Sized;

    /// Iterates over the elements in order.
    fn iterate<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a;
}

/// Checks that `pos` addresses an existing element.
pub(crate) fn check_position(
    component: &'static str,
    operation: &'static str,
    pos: usize,
    size: usize,
) -> AdtResult<()> {
    if size == 0 {
        return Err(AdtError::Empty {
            component,
            operation,
        });
    }
    if pos >= size {
        return Err(AdtError::IndexOutOfRange {
            component,
            operation,
            index: pos,
            size,
        });
    }
    Ok(())
}

/// Checks that `pos` is a valid insertion point, `0..=size`.
pub(crate) fn check_insert_position(
    component: &'static str,
    pos: usize,
    size: usize,
) -> AdtResult<()> {
    if pos <= size {
        return Ok(());
    }
    if size == 0 {
        Err(AdtError::Empty {
            component,
            operation: "add_element",
        })
    } else {
        Err(AdtError::IndexOutOfRange {
            component,
            operation: "add_element",
            index: pos,
            size,
        })
    }
}

/// Checks an inclusive `[start, end]` range for `sublist`.
pub(crate) fn check_range(
    component: &'static str,
    start: usize,
    end: usize,
    size: usize,
) -> AdtResult<()> {
    if size == 0 {
        return Err(AdtError::Empty {
            component,
            operation: "sublist",
        });
    }
    if start > end || end >= size {
        return Err(AdtError::InvalidRange {
            component,
            operation: "sublist",
            start,
            end,
            size,
        });
    }
    Ok(())
}

/// Checks that two comparators allow their containers to be concatenated.
pub(crate) fn check_compatible<T>(
    component: &'static str,
    own: &Comparator<T>,
    other: &Comparator<T>,
) -> AdtResult<()> {
    if own.is_compatible(other) {
        Ok(())
    } else {
        Err(AdtError::Incompatible {
            component,
            operation: "concat",
            reason: format!(
                "invalid compare function: '{}' != '{}'",
                own.name(),
                other.name()
            ),
        })
    }
}
