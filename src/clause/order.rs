//! Clause equality and containment order.
//!
//! `a == b` when both hold the same tags. `a < b` when `a` is a proper subset
//! of `b`. Two clauses with disjoint extra tags are incomparable, so
//! `partial_cmp` returns `None` and every ordering operator is `false`.

use core::cmp::Ordering;

use super::list::{SubsetOf, TagList};
use super::Deriving;
use crate::primitives::Bool;

const fn subset<A: SubsetOf<B>, B>() -> bool {
    <A::Out as Bool>::VALUE
}

impl<L1, L2> PartialEq<Deriving<L2>> for Deriving<L1>
where
    L1: TagList + SubsetOf<L2>,
    L2: TagList,
{
    fn eq(&self, _other: &Deriving<L2>) -> bool {
        L1::LEN == L2::LEN && subset::<L1, L2>()
    }
}

impl<L> Eq for Deriving<L> where L: TagList + SubsetOf<L> {}

impl<L1, L2> PartialOrd<Deriving<L2>> for Deriving<L1>
where
    L1: TagList + SubsetOf<L2>,
    L2: TagList + SubsetOf<L1>,
{
    fn partial_cmp(&self, other: &Deriving<L2>) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }

    fn lt(&self, _other: &Deriving<L2>) -> bool {
        L1::LEN < L2::LEN && subset::<L1, L2>()
    }

    fn gt(&self, other: &Deriving<L2>) -> bool {
        other.lt(self)
    }

    fn le(&self, other: &Deriving<L2>) -> bool {
        self.lt(other) || self == other
    }

    fn ge(&self, other: &Deriving<L2>) -> bool {
        self.gt(other) || self == other
    }
}

#[cfg(test)]
mod tests {
    use crate::derivables::*;
    use crate::deriving;

    #[test]
    fn equality_ignores_order() {
        assert_eq!(<deriving![Show, Read]>::new(), <deriving![Read, Show]>::new());
        assert_ne!(<deriving![Show]>::new(), <deriving![Read]>::new());
    }

    #[test]
    fn proper_subset_is_less() {
        let small = <deriving![Show]>::new();
        let big = <deriving![Show, Read]>::new();
        assert!(small < big);
        assert!(small <= big);
        assert!(big > small);
        assert!(!(big < small));
    }

    #[test]
    fn disjoint_clauses_are_incomparable() {
        let a = <deriving![Show, Hash]>::new();
        let b = <deriving![Show, Read]>::new();
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b) && !(a > b) && !(a <= b) && !(a >= b));
    }
}
