//! Type-level tag lists and set algebra over them.
//!
//! A clause's tags are stored as an HList. Lists built through
//! [`deriving!`](crate::deriving) never hold the same tag twice.

use core::marker::PhantomData;

use crate::derivable::{Derivable, SameTag};
use crate::primitives::{Absent, Bool, Present};

/// Empty list.
pub struct HNil;

/// List cell.
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// A list of [`Derivable`] tags.
pub trait TagList: 'static {
    /// Number of tags in the list.
    const LEN: usize;

    /// Calls `f` with each tag name, head first.
    fn for_each_name<F: FnMut(&'static str)>(f: &mut F);
}

impl TagList for HNil {
    const LEN: usize = 0;

    fn for_each_name<F: FnMut(&'static str)>(_f: &mut F) {}
}

impl<H: Derivable, T: TagList> TagList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn for_each_name<F: FnMut(&'static str)>(f: &mut F) {
        f(H::NAME);
        T::for_each_name(f);
    }
}

// =============================================================================
// Membership
// =============================================================================

/// Does the list contain tag `Q`?
pub trait Contains<Q: Derivable> {
    type Out: Bool;
}

impl<Q: Derivable> Contains<Q> for HNil {
    type Out = Absent;
}

impl<Q, H, T> Contains<Q> for HCons<H, T>
where
    Q: Derivable + SameTag<H>,
    H: Derivable,
    T: Contains<Q>,
{
    type Out = <<Q as SameTag<H>>::Out as Bool>::Or<<T as Contains<Q>>::Out>;
}

// =============================================================================
// Insertion
// =============================================================================

/// Adds `Q` to the list unless it is already there.
pub trait Insert<Q: Derivable> {
    type Out;
}

impl<L, Q> Insert<Q> for L
where
    L: Contains<Q>,
    Q: Derivable,
    <L as Contains<Q>>::Out: InsertDispatch<L, Q>,
{
    type Out = <<L as Contains<Q>>::Out as InsertDispatch<L, Q>>::Out;
}

/// Picks the insertion result from the membership answer.
pub trait InsertDispatch<L, Q> {
    type Out;
}

impl<L, Q> InsertDispatch<L, Q> for Present {
    type Out = L;
}

impl<L, Q> InsertDispatch<L, Q> for Absent {
    type Out = HCons<Q, L>;
}

// =============================================================================
// Subset
// =============================================================================

/// Is every tag of `Self` also in `Other`?
pub trait SubsetOf<Other> {
    type Out: Bool;
}

impl<Other> SubsetOf<Other> for HNil {
    type Out = Present;
}

impl<H, T, Other> SubsetOf<Other> for HCons<H, T>
where
    H: Derivable,
    Other: Contains<H>,
    T: SubsetOf<Other>,
{
    type Out = <<Other as Contains<H>>::Out as Bool>::And<<T as SubsetOf<Other>>::Out>;
}

/// Builds a tag list from types, dropping duplicates.
#[doc(hidden)]
#[macro_export]
macro_rules! __tag_list {
    () => { $crate::clause::HNil };
    ($head:ty $(, $tail:ty)*) => {
        <$crate::__tag_list![$($tail),*] as $crate::clause::Insert<$head>>::Out
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivables::{Arithmetic, Read, Show};

    fn contains<L: Contains<Q>, Q: Derivable>() -> bool {
        <L::Out as Bool>::VALUE
    }

    fn subset<A: SubsetOf<B>, B>() -> bool {
        <A::Out as Bool>::VALUE
    }

    #[test]
    fn membership() {
        type L = HCons<Show, HCons<Read, HNil>>;
        assert!(contains::<L, Show>());
        assert!(contains::<L, Read>());
        assert!(!contains::<L, Arithmetic>());
        assert!(!contains::<HNil, Show>());
    }

    #[test]
    fn insert_skips_duplicates() {
        type Once = crate::__tag_list![Show];
        type Twice = crate::__tag_list![Show, Show];
        assert_eq!(<Once as TagList>::LEN, 1);
        assert_eq!(<Twice as TagList>::LEN, 1);
        assert_eq!(<crate::__tag_list![Show, Read, Show] as TagList>::LEN, 2);
    }

    #[test]
    fn subsets() {
        type Small = HCons<Show, HNil>;
        type Big = HCons<Read, HCons<Show, HNil>>;
        assert!(subset::<Small, Big>());
        assert!(!subset::<Big, Small>());
        assert!(subset::<HNil, Small>());
    }
}
