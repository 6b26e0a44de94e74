//! Iteration over the base container, enabled by `Iterable`.
//!
//! Which forms exist (shared, exclusive, owned, reversed) follows from what
//! the base supports.

use core::iter::Rev;

use super::NewType;
use crate::clause::Derives;
use crate::derivables as tag;

/// Iterator produced by iterating a `&NewType<B, ..>`.
pub type Iter<'a, B> = <&'a B as IntoIterator>::IntoIter;

/// Iterator produced by iterating a `&mut NewType<B, ..>`.
pub type IterMut<'a, B> = <&'a mut B as IntoIterator>::IntoIter;

/// Iterator produced by iterating a `NewType<B, ..>` by value.
pub type IntoIter<B> = <B as IntoIterator>::IntoIter;

impl<B, Tag, D> NewType<B, Tag, D>
where
    D: Derives<tag::Iterable>,
{
    #[inline]
    pub fn iter<'a>(&'a self) -> Iter<'a, B>
    where
        &'a B: IntoIterator,
    {
        (&self.value).into_iter()
    }

    #[inline]
    pub fn iter_mut<'a>(&'a mut self) -> IterMut<'a, B>
    where
        &'a mut B: IntoIterator,
    {
        (&mut self.value).into_iter()
    }

    /// Shared iteration, back to front.
    #[inline]
    pub fn iter_rev<'a>(&'a self) -> Rev<Iter<'a, B>>
    where
        &'a B: IntoIterator<IntoIter: DoubleEndedIterator>,
    {
        self.iter().rev()
    }

    /// Exclusive iteration, back to front.
    #[inline]
    pub fn iter_mut_rev<'a>(&'a mut self) -> Rev<IterMut<'a, B>>
    where
        &'a mut B: IntoIterator<IntoIter: DoubleEndedIterator>,
    {
        self.iter_mut().rev()
    }
}

impl<B, Tag, D> IntoIterator for NewType<B, Tag, D>
where
    B: IntoIterator,
    D: Derives<tag::Iterable>,
{
    type Item = B::Item;
    type IntoIter = B::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, B, Tag, D> IntoIterator for &'a NewType<B, Tag, D>
where
    &'a B: IntoIterator,
    D: Derives<tag::Iterable>,
{
    type Item = <&'a B as IntoIterator>::Item;
    type IntoIter = <&'a B as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        (&self.value).into_iter()
    }
}

impl<'a, B, Tag, D> IntoIterator for &'a mut NewType<B, Tag, D>
where
    &'a mut B: IntoIterator,
    D: Derives<tag::Iterable>,
{
    type Item = <&'a mut B as IntoIterator>::Item;
    type IntoIter = <&'a mut B as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        (&mut self.value).into_iter()
    }
}
