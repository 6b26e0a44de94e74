//! # Layer 1: Derivation Clauses
//!
//! A derivation clause is the set of capability tags a wrapper opts into.
//!
//! - `list.rs`: Tag lists, membership, duplicate-free insertion, subsets.
//! - `query.rs`: Boolean queries (`And`/`Or`/`Not`/`All`/`Any`), `Evaluate`, `Derives`.
//! - `order.rs`: Equality and the containment partial order between clauses.
//! - `inspect.rs`: Runtime listing of tag names.
//!
//! ```
//! use newtype::deriving;
//! use newtype::derivables::{Read, Show};
//!
//! let io = <deriving![Show, Read]>::new();
//! assert!(io.contains::<Show>());
//! assert!(<deriving![Show]>::new() < io);
//! ```

use core::fmt;
use core::marker::PhantomData;

pub mod inspect;
pub mod list;
pub mod order;
pub mod query;

pub use inspect::Inspect;
pub use list::{Contains, HCons, HNil, Insert, InsertDispatch, SubsetOf, TagList};
pub use query::{All, And, Any, Derives, Evaluate, IsTrue, Not, Or};

/// A derivation clause over the tag list `L`.
///
/// Zero-sized; usable both as a type parameter and as a value.
pub struct Deriving<L>(PhantomData<fn() -> L>);

impl<L> Deriving<L> {
    pub const fn new() -> Self {
        Deriving(PhantomData)
    }
}

impl<L: TagList> Deriving<L> {
    /// Number of distinct tags.
    pub const LEN: usize = L::LEN;

    pub const fn len(&self) -> usize {
        L::LEN
    }

    pub const fn is_empty(&self) -> bool {
        L::LEN == 0
    }

    /// Evaluates `Q` (a tag or a query) against this clause.
    pub const fn contains<Q>(&self) -> bool
    where
        Self: Evaluate<Q>,
    {
        <Self as Evaluate<Q>>::RESULT
    }
}

impl<L> Clone for Deriving<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Deriving<L> {}

impl<L> Default for Deriving<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TagList> fmt::Debug for Deriving<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deriving")?;
        let mut set = f.debug_set();
        L::for_each_name(&mut |name| {
            set.entry(&format_args!("{name}"));
        });
        set.finish()
    }
}

/// Implemented by every `Deriving<L>`; the bound used for wrapper clauses.
pub trait Clause: Copy + Default + fmt::Debug + Inspect + 'static {
    type Tags: TagList;

    /// Number of distinct tags.
    const LEN: usize;
}

impl<L: TagList> Clause for Deriving<L> {
    type Tags = L;
    const LEN: usize = L::LEN;
}

/// The clause type for a list of tags; duplicates collapse.
///
/// `deriving![]` is the empty clause.
#[macro_export]
macro_rules! deriving {
    ($($tag:ty),* $(,)?) => {
        $crate::clause::Deriving<$crate::__tag_list![$($tag),*]>
    };
}

/// Clause with no tags: construction and equality only.
pub type Bare = Deriving<HNil>;

#[cfg(test)]
mod tests {
    use crate::derivables::*;

    #[test]
    fn duplicates_collapse() {
        assert_eq!(<deriving![Show, Show, Read]>::LEN, 2);
        assert!(<deriving![]>::new().is_empty());
    }

    #[test]
    fn contains_tags_and_queries() {
        let c = <deriving![Show, Relational]>::new();
        assert!(c.contains::<Show>());
        assert!(!c.contains::<Hash>());
        assert!(c.contains::<crate::all![Show, Relational]>());
        assert!(c.contains::<crate::any![Hash, Relational]>());
        assert!(!c.contains::<crate::all![Show, Hash]>());
        assert!(c.contains::<crate::clause::Not<Arithmetic>>());
    }
}
