//! Query types and evaluation against a derivation clause.
//!
//! A query is a tag (`Show`), or a boolean combination of queries
//! (`And`, `Or`, `Not`, `All`, `Any`).

use core::marker::PhantomData;

use super::list::{Contains, HCons, HNil};
use super::Deriving;
use crate::derivable::Derivable;
use crate::primitives::{Absent, Bool, Present};

/// Conjunction: L AND R
pub struct And<L, R>(PhantomData<(L, R)>);

/// Disjunction: L OR R
pub struct Or<L, R>(PhantomData<(L, R)>);

/// Negation: NOT Q
pub struct Not<Q>(PhantomData<Q>);

/// All queries in the list must hold.
pub struct All<List>(PhantomData<List>);

/// At least one query in the list must hold.
pub struct Any<List>(PhantomData<List>);

/// Evaluate a boolean query on a derivation clause.
#[diagnostic::on_unimplemented(
    message = "`{Query}` is not a query over derivation clause `{Self}`",
    label = "cannot evaluate `{Query}` here",
    note = "queries are tags, or And/Or/Not/All/Any combinations of tags"
)]
pub trait Evaluate<Query> {
    type Out: Bool;
    /// The boolean result of the evaluation as a constant.
    const RESULT: bool = <Self::Out as Bool>::VALUE;
}

impl<L, Q> Evaluate<Q> for Deriving<L>
where
    Q: Derivable,
    L: Contains<Q>,
{
    type Out = <L as Contains<Q>>::Out;
}

impl<L, A, B> Evaluate<And<A, B>> for Deriving<L>
where
    Self: Evaluate<A> + Evaluate<B>,
{
    type Out = <<Self as Evaluate<A>>::Out as Bool>::And<<Self as Evaluate<B>>::Out>;
}

impl<L, A, B> Evaluate<Or<A, B>> for Deriving<L>
where
    Self: Evaluate<A> + Evaluate<B>,
{
    type Out = <<Self as Evaluate<A>>::Out as Bool>::Or<<Self as Evaluate<B>>::Out>;
}

impl<L, Q> Evaluate<Not<Q>> for Deriving<L>
where
    Self: Evaluate<Q>,
{
    type Out = <<Self as Evaluate<Q>>::Out as Bool>::Not;
}

impl<L> Evaluate<All<HNil>> for Deriving<L> {
    type Out = Present;
}

impl<L, H, T> Evaluate<All<HCons<H, T>>> for Deriving<L>
where
    Self: Evaluate<H> + Evaluate<All<T>>,
{
    type Out = <<Self as Evaluate<H>>::Out as Bool>::And<<Self as Evaluate<All<T>>>::Out>;
}

impl<L> Evaluate<Any<HNil>> for Deriving<L> {
    type Out = Absent;
}

impl<L, H, T> Evaluate<Any<HCons<H, T>>> for Deriving<L>
where
    Self: Evaluate<H> + Evaluate<Any<T>>,
{
    type Out = <<Self as Evaluate<H>>::Out as Bool>::Or<<Self as Evaluate<Any<T>>>::Out>;
}

// =============================================================================
// Derives (bound form)
// =============================================================================

/// Bound satisfied when the clause makes `Query` true.
///
/// Every gated operator of [`NewType`](crate::NewType) is written against
/// this bound, so a missing tag surfaces as a missing trait impl.
pub trait Derives<Query> {}

impl<C, Q> Derives<Q> for C
where
    C: Evaluate<Q>,
    <C as Evaluate<Q>>::Out: IsTrue<C, Q>,
{
}

/// Compile-time check that a query holds.
#[diagnostic::on_unimplemented(
    message = "derivation clause does not derive `{Query}`",
    label = "`{Query}` is missing from this clause",
    note = "Clause: {Set}\nAdd the tag to the wrapper's `deriving![...]` list."
)]
pub trait IsTrue<Set, Query: ?Sized> {}

impl<S, Q: ?Sized> IsTrue<S, Q> for Present {}

/// `all![A, B, ...]`: every listed query holds.
#[macro_export]
macro_rules! all {
    ($($q:ty),* $(,)?) => { $crate::clause::All<$crate::__query_list![$($q),*]> };
}

/// `any![A, B, ...]`: at least one listed query holds.
#[macro_export]
macro_rules! any {
    ($($q:ty),* $(,)?) => { $crate::clause::Any<$crate::__query_list![$($q),*]> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __query_list {
    () => { $crate::clause::HNil };
    ($head:ty $(, $tail:ty)*) => {
        $crate::clause::HCons<$head, $crate::__query_list![$($tail),*]>
    };
}
