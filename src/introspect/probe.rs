//! Value-level capability queries for concrete types.
//!
//! This module implements the "Inherent Const Fallback" pattern:
//!
//! 1. A fallback trait carries `const IS_X: bool = false` for every `Probe<T>`.
//! 2. An inherent impl carries `const IS_X: bool = true` for `Probe<T>` where `T`
//!    meets the predicate.
//!
//! Resolving `<Probe<Concrete>>::IS_X` picks the inherent const when it
//! applies and the trait const otherwise.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. Inside
//! `fn foo<T>()` every probe answers `false`; use the predicate traits as
//! bounds there instead.

use core::marker::PhantomData;

use super::predicates::*;

/// Probe wrapper type. Query it through [`probe!`](crate::probe).
pub struct Probe<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a predicate.
macro_rules! impl_probe {
    ($name:ident => $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$name:camel Fallback>] { const [<IS_ $name:upper>]: bool = false; }
            impl<T: ?Sized> [<$name:camel Fallback>] for Probe<T> {}
            impl<T: ?Sized> Probe<T> where $($bound)+ { pub const [<IS_ $name:upper>]: bool = true; }
        }
    };
}

// Construction
impl_probe!(default_constructible => T: Default);
impl_probe!(copy_constructible => T: Clone);
impl_probe!(copy_assignable => T: Clone);
impl_probe!(nothrow_default_constructible => T: NothrowDefaultConstructible);
impl_probe!(nothrow_copy_constructible => T: NothrowCopyConstructible);
impl_probe!(nothrow_copy_assignable => T: NothrowCopyAssignable);

// Comparison
impl_probe!(equality_comparable => T: EqualityComparable);
impl_probe!(less_than_comparable => T: LessThanComparable);
impl_probe!(greater_than_comparable => T: GreaterThanComparable);
impl_probe!(less_equal_comparable => T: LessEqualComparable);
impl_probe!(greater_equal_comparable => T: GreaterEqualComparable);
impl_probe!(nothrow_equality_comparable => T: NothrowEqualityComparable);
impl_probe!(nothrow_less_than_comparable => T: NothrowLessThanComparable);
impl_probe!(nothrow_greater_than_comparable => T: NothrowGreaterThanComparable);
impl_probe!(nothrow_less_equal_comparable => T: NothrowLessEqualComparable);
impl_probe!(nothrow_greater_equal_comparable => T: NothrowGreaterEqualComparable);

// Arithmetic
impl_probe!(addable => T: Addable);
impl_probe!(subtractable => T: Subtractable);
impl_probe!(multipliable => T: Multipliable);
impl_probe!(divisible => T: Divisible);
impl_probe!(compound_addable => T: CompoundAddable);
impl_probe!(compound_subtractable => T: CompoundSubtractable);
impl_probe!(compound_multipliable => T: CompoundMultipliable);
impl_probe!(compound_divisible => T: CompoundDivisible);
impl_probe!(nothrow_addable => T: NothrowAddable);
impl_probe!(nothrow_subtractable => T: NothrowSubtractable);
impl_probe!(nothrow_multipliable => T: NothrowMultipliable);
impl_probe!(nothrow_divisible => T: NothrowDivisible);
impl_probe!(nothrow_compound_addable => T: NothrowCompoundAddable);
impl_probe!(nothrow_compound_subtractable => T: NothrowCompoundSubtractable);
impl_probe!(nothrow_compound_multipliable => T: NothrowCompoundMultipliable);
impl_probe!(nothrow_compound_divisible => T: NothrowCompoundDivisible);

// Text and hashing
impl_probe!(input_streamable => T: InputStreamable);
impl_probe!(output_streamable => T: OutputStreamable);
impl_probe!(hashable => T: Hashable);
impl_probe!(nothrow_input_streamable => T: NothrowInputStreamable);
impl_probe!(nothrow_output_streamable => T: NothrowOutputStreamable);
impl_probe!(nothrow_hashable => T: NothrowHashable);

// Iteration
impl_probe!(shared_iterable => T: SharedIterable);
impl_probe!(exclusive_iterable => T: ExclusiveIterable);
impl_probe!(owned_iterable => T: OwnedIterable);
impl_probe!(shared_reverse_iterable => T: SharedReverseIterable);
impl_probe!(exclusive_reverse_iterable => T: ExclusiveReverseIterable);

/// Asks a capability question about a concrete type.
///
/// ```
/// use newtype::probe;
///
/// assert!(probe!(i32 => IS_HASHABLE));
/// assert!(!probe!(f64 => IS_HASHABLE));
/// assert!(probe!(f64 => IS_NOTHROW_ADDABLE));
/// assert!(!probe!(i32 => IS_NOTHROW_ADDABLE));
/// ```
#[macro_export]
macro_rules! probe {
    ($t:ty => $konst:ident) => {{
        #[allow(unused_imports)]
        use $crate::introspect::probe::*;
        <$crate::introspect::Probe<$t>>::$konst
    }};
}

#[cfg(test)]
mod tests {
    struct Opaque;

    #[test]
    fn answers_follow_trait_impls() {
        assert!(probe!(u32 => IS_DEFAULT_CONSTRUCTIBLE));
        assert!(!probe!(Opaque => IS_DEFAULT_CONSTRUCTIBLE));
        assert!(!probe!(Opaque => IS_EQUALITY_COMPARABLE));
        assert!(probe!(str => IS_OUTPUT_STREAMABLE));
        assert!(probe!([u8] => IS_SHARED_ITERABLE));
        assert!(!probe!([u8] => IS_OWNED_ITERABLE));
        assert!(probe!([u8] => IS_SHARED_REVERSE_ITERABLE));
    }

    #[test]
    fn compound_assignment_on_sized_bases() {
        assert!(probe!(i32 => IS_COMPOUND_ADDABLE));
        assert!(probe!(f64 => IS_NOTHROW_COMPOUND_DIVISIBLE));
        assert!(!probe!(i32 => IS_NOTHROW_COMPOUND_DIVISIBLE));
        assert!(!probe!(str => IS_COMPOUND_ADDABLE));
    }

    #[test]
    fn nothrow_requires_availability() {
        assert!(probe!(i64 => IS_ADDABLE));
        assert!(!probe!(i64 => IS_NOTHROW_ADDABLE));
        assert!(!probe!(Opaque => IS_NOTHROW_HASHABLE));
    }
}
