//! List selection by implementation name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Sequence;
use crate::data_structures::{ArrayList, Comparator, DoubleLinked, SingleLinked};
use crate::error::{AdtError, AdtResult};

/// Available sequence implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    ArrayList,
    SingleLinked,
    DoubleLinked,
}

impl ListKind {
    /// Every kind, in declaration order.
    pub const ALL: [ListKind; 3] = [
        ListKind::ArrayList,
        ListKind::SingleLinked,
        ListKind::DoubleLinked,
    ];

    /// Name accepted by [`List::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            ListKind::ArrayList => "ArrayList",
            ListKind::SingleLinked => "SingleLinked",
            ListKind::DoubleLinked => "DoubleLinked",
        }
    }
}

impl FromStr for ListKind {
    type Err = AdtError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ListKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| AdtError::UnknownImplementation {
                family: "List",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sequence whose implementation is chosen at construction time.
#[derive(Debug, Clone)]
pub enum List<T> {
    ArrayList(ArrayList<T>),
    SingleLinked(SingleLinked<T>),
    DoubleLinked(DoubleLinked<T>),
}

macro_rules! dispatch {
    ($list:expr, $inner:ident => $body:expr) => {
        match $list {
            List::ArrayList($inner) => $body,
            List::SingleLinked($inner) => $body,
            List::DoubleLinked($inner) => $body,
        }
    };
}

impl<T> List<T> {
    /// Creates an empty list of `kind` using `cmp`.
    pub fn new(kind: ListKind, cmp: Comparator<T>) -> Self {
        match kind {
            ListKind::ArrayList => List::ArrayList(ArrayList::with_comparator(cmp)),
            ListKind::SingleLinked => List::SingleLinked(SingleLinked::with_comparator(cmp)),
            ListKind::DoubleLinked => List::DoubleLinked(DoubleLinked::with_comparator(cmp)),
        }
    }

    /// Creates an empty list from an implementation name.
    ///
    /// # Errors
    ///
    /// Returns a `Value` error for an unknown name.
    pub fn from_name(name: &str, cmp: Comparator<T>) -> AdtResult<Self> {
        Ok(Self::new(name.parse()?, cmp))
    }

    /// Creates a list of `kind` holding the elements of `iter`, in order.
    pub fn from_elements<I>(kind: ListKind, iter: I, cmp: Comparator<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        match kind {
            ListKind::ArrayList => List::ArrayList(ArrayList::from_elements(iter, cmp)),
            ListKind::SingleLinked => List::SingleLinked(SingleLinked::from_elements(iter, cmp)),
            ListKind::DoubleLinked => List::DoubleLinked(DoubleLinked::from_elements(iter, cmp)),
        }
    }

    /// The implementation held by this list.
    pub fn kind(&self) -> ListKind {
        match self {
            List::ArrayList(_) => ListKind::ArrayList,
            List::SingleLinked(_) => ListKind::SingleLinked,
            List::DoubleLinked(_) => ListKind::DoubleLinked,
        }
    }

    /// Copies this list into a list of `kind` with the same comparator.
    pub fn translate(&self, kind: ListKind) -> Self
    where
        T: Clone,
    {
        translate(self, kind)
    }
}

/// Copies any sequence into a [`List`] of `kind`, keeping its comparator and
/// element order.
pub fn translate<T, L>(list: &L, kind: ListKind) -> List<T>
where
    T: Clone,
    L: Sequence<T> + ?Sized,
{
    List::from_elements(kind, list.iterate().cloned(), *list.comparator())
}

impl<T> Sequence<T> for List<T> {
    fn component(&self) -> &'static str {
        dispatch!(self, inner => inner.component())
    }

    fn comparator(&self) -> &Comparator<T> {
        dispatch!(self, inner => inner.comparator())
    }

    fn size(&self) -> usize {
        dispatch!(self, inner => inner.size())
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, inner => inner.is_empty())
    }

    fn add_first(&mut self, element: T) {
        dispatch!(self, inner => inner.add_first(element))
    }

    fn add_last(&mut self, element: T) {
        dispatch!(self, inner => inner.add_last(element))
    }

    fn add_element(&mut self, element: T, pos: usize) -> AdtResult<()> {
        dispatch!(self, inner => inner.add_element(element, pos))
    }

    fn get_first(&self) -> AdtResult<&T> {
        dispatch!(self, inner => inner.get_first())
    }

    fn get_last(&self) -> AdtResult<&T> {
        dispatch!(self, inner => inner.get_last())
    }

    fn get_element(&self, pos: usize) -> AdtResult<&T> {
        dispatch!(self, inner => inner.get_element(pos))
    }

    fn remove_first(&mut self) -> AdtResult<T> {
        dispatch!(self, inner => inner.remove_first())
    }

    fn remove_last(&mut self) -> AdtResult<T> {
        dispatch!(self, inner => inner.remove_last())
    }

    fn remove_element(&mut self, pos: usize) -> AdtResult<T> {
        dispatch!(self, inner => inner.remove_element(pos))
    }

    fn find(&self, element: &T) -> Option<usize> {
        dispatch!(self, inner => inner.find(element))
    }

    fn change_info(&mut self, element: T, pos: usize) -> AdtResult<T> {
        dispatch!(self, inner => inner.change_info(element, pos))
    }

    fn exchange(&mut self, pos1: usize, pos2: usize) -> AdtResult<()> {
        dispatch!(self, inner => inner.exchange(pos1, pos2))
    }

    fn sublist(&self, start: usize, end: usize) -> AdtResult<Self>
    where
        T: Clone,
    {
        Ok(match self {
            List::ArrayList(inner) => List::ArrayList(inner.sublist(start, end)?),
            List::SingleLinked(inner) => List::SingleLinked(inner.sublist(start, end)?),
            List::DoubleLinked(inner) => List::DoubleLinked(inner.sublist(start, end)?),
        })
    }

    /// Fails with a `Type` error unless `other` holds the same implementation
    /// with a compatible comparator.
    fn concat(&mut self, other: Self) -> AdtResult<()> {
        match (self, other) {
            (List::ArrayList(a), List::ArrayList(b)) => a.concat(b),
            (List::SingleLinked(a), List::SingleLinked(b)) => a.concat(b),
            (List::DoubleLinked(a), List::DoubleLinked(b)) => a.concat(b),
            (own, other) => Err(AdtError::Incompatible {
                component: own.component(),
                operation: "concat",
                reason: format!("cannot concatenate {} onto {}", other.kind(), own.kind()),
            }),
        }
    }

    fn iterate<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>
    where
        T: 'a,
    {
        dispatch!(self, inner => inner.iterate())
    }
}

impl<T: 'static> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        dispatch!(self, inner => Box::new(inner.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn filled(kind: ListKind) -> List<i32> {
        List::from_elements(kind, 0..5, Comparator::natural())
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ListKind::ALL {
            assert_eq!(kind.name().parse::<ListKind>(), Ok(kind));
        }
        let err = "Vector".parse::<ListKind>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_every_kind_behaves_the_same() {
        for kind in ListKind::ALL {
            let mut list = List::new(kind, Comparator::natural());
            assert_eq!(list.kind(), kind);
            assert_eq!(list.component(), kind.name());
            assert!(list.get_element(0).is_err());

            list.add_last(2);
            list.add_first(0);
            list.add_element(1, 1).unwrap();
            list.add_element(3, 3).unwrap();
            assert_eq!(list.iterate().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

            assert_eq!(list.find(&3), Some(3));
            assert_eq!(list.change_info(30, 3), Ok(3));
            list.exchange(0, 3).unwrap();
            assert_eq!(list.get_first(), Ok(&30));
            assert_eq!(list.remove_last(), Ok(0));
            assert_eq!(list.size(), 3);
        }
    }

    #[test]
    fn test_translate_keeps_order_and_comparator() {
        let source = filled(ListKind::SingleLinked);
        for kind in ListKind::ALL {
            let copy = source.translate(kind);
            assert_eq!(copy.kind(), kind);
            assert!(copy.iterate().eq(source.iterate()));
            assert_eq!(copy.comparator(), source.comparator());
        }
    }

    #[test]
    fn test_concat_requires_same_kind() {
        let mut list = filled(ListKind::ArrayList);
        let err = list.concat(filled(ListKind::DoubleLinked)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        list.concat(filled(ListKind::ArrayList)).unwrap();
        assert_eq!(list.size(), 10);
    }

    #[test]
    fn test_sublist_keeps_kind() {
        for kind in ListKind::ALL {
            let sub = filled(kind).sublist(1, 3).unwrap();
            assert_eq!(sub.kind(), kind);
            assert_eq!(sub.iterate().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        }
    }
}
