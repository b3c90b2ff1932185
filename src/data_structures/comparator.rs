// Copyright (c) 2025 adtkit Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Named comparison functions for the sequence containers.
//!
//! A [`Comparator`] pairs a plain function pointer with a name. The function
//! decides ordering and equality (`find` looks for `Ordering::Equal`), while
//! the name is the identity token used to decide whether two containers were
//! configured the same way: `concat` only accepts a container whose
//! comparator carries the same name.

use std::cmp::Ordering;
use std::fmt;

/// Signature of a comparison function.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

/// Name of the comparator built by [`Comparator::natural`].
pub const NATURAL_ORDER: &str = "natural";

/// Name of the comparator built by [`Comparator::equality`].
pub const EQUALITY: &str = "equality";

/// A comparison function tagged with an identity token.
pub struct Comparator<T> {
    name: &'static str,
    compare: CompareFn<T>,
}

impl<T> Comparator<T> {
    /// Creates a comparator from a name and a comparison function.
    ///
    /// Two comparators are considered compatible when their names match, so
    /// distinct functions must be given distinct names.
    pub const fn new(name: &'static str, compare: CompareFn<T>) -> Self {
        Self { name, compare }
    }

    /// Compares two elements.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Returns whether two elements compare as equal.
    #[inline]
    pub fn matches(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Returns the identity token of this comparator.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether containers using `self` and `other` may be combined.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: Ord> Comparator<T> {
    /// Comparator using the element type's total order.
    pub fn natural() -> Self {
        Self::new(NATURAL_ORDER, natural_order::<T>)
    }
}

impl<T: PartialEq> Comparator<T> {
    /// Comparator for element types that only support equality.
    ///
    /// Unequal elements compare as `Less`; the comparator is fit for `find`
    /// but carries no meaningful order.
    pub fn equality() -> Self {
        Self::new(EQUALITY, equality_only::<T>)
    }
}

fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

fn equality_only<T: PartialEq>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        Ordering::Less
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Comparator<T> {}

impl<T> PartialEq for Comparator<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other)
    }
}

impl<T> Eq for Comparator<T> {}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").field("name", &self.name).finish()
    }
}
