//! # Layer 3: The Wrapper
//!
//! `NewType<B, Tag, D>` stores a `B`, is distinguished from every other
//! wrapper by the phantom `Tag`, and exposes exactly the operators its
//! derivation clause `D` names.
//!
//! - `compare.rs`: Equality, `EqBase`, `Relational`.
//! - `arith.rs`: `Arithmetic`.
//! - `text.rs`: `Show` and `Read`.
//! - `iter.rs`: `Iterable`.
//! - `access.rs`: `Hash`, `Indirection`, `ImplicitConversion`.
//!
//! Construction (default, clone, copy, move) is never gated: it is available
//! exactly when the base type provides it.

use core::fmt;
use core::marker::PhantomData;

use crate::clause::{Bare, Clause};
use crate::introspect::{Nothrow, Operation};

mod access;
mod arith;
mod compare;
mod iter;
mod text;

pub use iter::{IntoIter, Iter, IterMut};

/// A distinct type wrapping a `B`.
///
/// ```
/// use newtype::{deriving, NewType};
/// use newtype::derivables::{Arithmetic, Show};
///
/// enum WidthTag {}
/// type Width = NewType<u32, WidthTag, deriving![Arithmetic, Show]>;
///
/// let w = Width::new(40) + Width::new(2);
/// assert_eq!(w.to_string(), "42");
/// ```
///
/// Operators missing from the clause do not exist:
///
/// ```compile_fail
/// use newtype::NewType;
///
/// enum Tag {}
/// let a = NewType::<i32, Tag>::new(1);
/// let _ = a + a;
/// ```
///
/// Wrappers with different tags do not mix:
///
/// ```compile_fail
/// use newtype::{deriving, NewType};
/// use newtype::derivables::Arithmetic;
///
/// enum A {}
/// enum B {}
/// let _ = NewType::<i32, A, deriving![Arithmetic]>::new(1)
///     + NewType::<i32, B, deriving![Arithmetic]>::new(1);
/// ```
///
/// Nor do wrappers and bare values, unless `EqBase` is derived:
///
/// ```compile_fail
/// use newtype::NewType;
///
/// enum Tag {}
/// assert!(NewType::<i32, Tag>::new(1) == 1);
/// ```
#[repr(transparent)]
pub struct NewType<B, Tag, D = Bare> {
    value: B,
    marker: PhantomData<fn() -> (Tag, D)>,
}

impl<B, Tag, D> NewType<B, Tag, D> {
    /// Wraps a base value.
    #[inline]
    pub const fn new(value: B) -> Self {
        NewType { value, marker: PhantomData }
    }

    /// Returns a copy of the stored value.
    #[inline]
    pub fn decay(&self) -> B
    where
        B: Clone,
    {
        self.value.clone()
    }

    /// Unwraps the stored value.
    #[inline]
    pub fn into_inner(self) -> B {
        self.value
    }

    /// The derivation clause as a value.
    #[inline]
    pub fn clause(&self) -> D
    where
        D: Clause,
    {
        D::default()
    }
}

impl<B, Tag, D> From<B> for NewType<B, Tag, D> {
    #[inline]
    fn from(value: B) -> Self {
        Self::new(value)
    }
}

impl<B: Default, Tag, D> Default for NewType<B, Tag, D> {
    #[inline]
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: Clone, Tag, D> Clone for NewType<B, Tag, D> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<B: Copy, Tag, D> Copy for NewType<B, Tag, D> {}

impl<B: fmt::Debug, Tag, D> fmt::Debug for NewType<B, Tag, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NewType").field(&self.value).finish()
    }
}

// Guarantees come from the base type.
impl<B, Tag, D, O> Nothrow<O> for NewType<B, Tag, D>
where
    B: Nothrow<O>,
    O: Operation,
{
}

/// Type-level view of a wrapper's parts.
pub trait Wrapped {
    type Base;
    type Tag;
    type Clause;
}

impl<B, Tag, D> Wrapped for NewType<B, Tag, D> {
    type Base = B;
    type Tag = Tag;
    type Clause = D;
}
