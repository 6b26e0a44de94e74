//! Comparison operators.
//!
//! `==`/`!=` between two wrappers of the same type is always available.
//! `EqBase` adds comparison against the bare base value, in both directions
//! for the primitive bases. `Relational` adds the ordering operators.

use core::cmp::Ordering;

use super::NewType;
use crate::clause::Derives;
use crate::derivables as tag;

impl<B: PartialEq, Tag, D> PartialEq for NewType<B, Tag, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }

    #[allow(clippy::partialeq_ne_impl)]
    #[inline]
    fn ne(&self, other: &Self) -> bool {
        self.value != other.value
    }
}

impl<B: Eq, Tag, D> Eq for NewType<B, Tag, D> {}

impl<B, Tag, D> PartialEq<B> for NewType<B, Tag, D>
where
    B: PartialEq,
    D: Derives<tag::EqBase>,
{
    #[inline]
    fn eq(&self, other: &B) -> bool {
        self.value == *other
    }
}

// The orphan rule only admits `impl PartialEq<NewType<..>> for X` with a
// concrete foreign `X`, so the base-on-the-left form covers known bases.
macro_rules! base_eq_wrapper {
    ($($base:ty),* $(,)?) => {$(
        impl<Tag, D> PartialEq<NewType<$base, Tag, D>> for $base
        where
            D: Derives<tag::EqBase>,
        {
            #[inline]
            fn eq(&self, other: &NewType<$base, Tag, D>) -> bool {
                *self == other.value
            }
        }
    )*};
}

base_eq_wrapper!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

#[cfg(feature = "alloc")]
base_eq_wrapper!(alloc::string::String);

impl<B, Tag, D> PartialOrd for NewType<B, Tag, D>
where
    B: PartialOrd,
    D: Derives<tag::Relational>,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.value < other.value
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.value > other.value
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.value <= other.value
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.value >= other.value
    }
}

impl<B, Tag, D> Ord for NewType<B, Tag, D>
where
    B: Ord,
    D: Derives<tag::Relational>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
