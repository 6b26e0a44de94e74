//! Capability predicates as bounds.
//!
//! Each predicate is a trait with a blanket impl, so `T: Addable` reads the
//! same as the question "can two `T`s be added?". The `Nothrow*` forms also
//! require the [`Nothrow`] guarantee for the operation.

use core::fmt::Display;
use core::hash::Hash;
use core::ops;
use core::str::FromStr;

use super::nothrow::Nothrow;
use super::op;

macro_rules! predicate {
    ($($(#[$meta:meta])* $Name:ident: ($($bound:tt)+);)*) => {
        $(
            $(#[$meta])*
            pub trait $Name: $($bound)+ {}
            impl<T: ?Sized> $Name for T where T: $($bound)+ {}
        )*
    };
}

predicate! {
    /// `a == b` and `a != b`.
    EqualityComparable: (PartialEq);
    /// `a < b`.
    LessThanComparable: (PartialOrd);
    /// `a > b`.
    GreaterThanComparable: (PartialOrd);
    /// `a <= b`.
    LessEqualComparable: (PartialOrd);
    /// `a >= b`.
    GreaterEqualComparable: (PartialOrd);

    Addable: (ops::Add<Output = Self> + Sized);
    Subtractable: (ops::Sub<Output = Self> + Sized);
    Multipliable: (ops::Mul<Output = Self> + Sized);
    Divisible: (ops::Div<Output = Self> + Sized);
    CompoundAddable: (ops::AddAssign + Sized);
    CompoundSubtractable: (ops::SubAssign + Sized);
    CompoundMultipliable: (ops::MulAssign + Sized);
    CompoundDivisible: (ops::DivAssign + Sized);

    /// Parsable from a text token.
    InputStreamable: (FromStr);
    /// Formattable with `{}`.
    OutputStreamable: (Display);
    Hashable: (Hash);

    NothrowDefaultConstructible: (Default + Nothrow<op::DefaultConstruct>);
    NothrowCopyConstructible: (Clone + Nothrow<op::CopyConstruct>);
    NothrowCopyAssignable: (Clone + Nothrow<op::CopyAssign>);
    NothrowEqualityComparable: (PartialEq + Nothrow<op::Equal> + Nothrow<op::NotEqual>);
    NothrowLessThanComparable: (PartialOrd + Nothrow<op::Less>);
    NothrowGreaterThanComparable: (PartialOrd + Nothrow<op::Greater>);
    NothrowLessEqualComparable: (PartialOrd + Nothrow<op::LessEqual>);
    NothrowGreaterEqualComparable: (PartialOrd + Nothrow<op::GreaterEqual>);
    NothrowAddable: (Addable + Nothrow<op::Add>);
    NothrowSubtractable: (Subtractable + Nothrow<op::Sub>);
    NothrowMultipliable: (Multipliable + Nothrow<op::Mul>);
    NothrowDivisible: (Divisible + Nothrow<op::Div>);
    NothrowCompoundAddable: (ops::AddAssign + Sized + Nothrow<op::AddAssign>);
    NothrowCompoundSubtractable: (ops::SubAssign + Sized + Nothrow<op::SubAssign>);
    NothrowCompoundMultipliable: (ops::MulAssign + Sized + Nothrow<op::MulAssign>);
    NothrowCompoundDivisible: (ops::DivAssign + Sized + Nothrow<op::DivAssign>);
    NothrowInputStreamable: (FromStr + Nothrow<op::Input>);
    NothrowOutputStreamable: (Display + Nothrow<op::Output>);
    NothrowHashable: (Hash + Nothrow<op::Hashing>);
}

/// An `IntoIterator` whose iterator also runs back to front.
///
/// Implemented on the reference types, so the iterator type is named
/// without a higher-ranked projection.
pub trait IntoReverseIterator: IntoIterator {}

impl<I> IntoReverseIterator for I
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
{
}

/// `for x in &t`.
pub trait SharedIterable {}
impl<T: ?Sized> SharedIterable for T where for<'a> &'a T: IntoIterator {}

/// `for x in &mut t`.
pub trait ExclusiveIterable {}
impl<T: ?Sized> ExclusiveIterable for T where for<'a> &'a mut T: IntoIterator {}

/// `for x in t`.
pub trait OwnedIterable: IntoIterator {}
impl<T: IntoIterator> OwnedIterable for T {}

/// `(&t).into_iter().rev()`.
pub trait SharedReverseIterable {}
impl<T: ?Sized> SharedReverseIterable for T where for<'a> &'a T: IntoReverseIterator {}

/// `(&mut t).into_iter().rev()`.
pub trait ExclusiveReverseIterable {}
impl<T: ?Sized> ExclusiveReverseIterable for T where for<'a> &'a mut T: IntoReverseIterator {}
