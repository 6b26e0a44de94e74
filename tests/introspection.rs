use newtype::introspect::op;
use newtype::introspect::{
    Addable, EqualityComparable, Hashable, NothrowAddable, NothrowEqualityComparable,
    OutputStreamable,
};
use newtype::prelude::*;

enum Tag {}

fn equality<T: EqualityComparable>() {}
fn nothrow_equality<T: NothrowEqualityComparable>() {}
fn addable<T: Addable>() {}
fn nothrow_addable<T: NothrowAddable>() {}
fn hashable<T: Hashable>() {}
fn printable<T: OutputStreamable>() {}

#[test]
fn test_predicates_as_bounds() {
    equality::<NewType<i32, Tag>>();
    nothrow_equality::<NewType<i32, Tag>>();
    addable::<NewType<i32, Tag, deriving![Arithmetic]>>();
    nothrow_addable::<NewType<f32, Tag, deriving![Arithmetic]>>();
    hashable::<NewType<char, Tag, deriving![Hash]>>();
    printable::<NewType<bool, Tag, deriving![Show]>>();
}

#[derive(Clone, PartialEq)]
struct Money(i64);

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Nothrow<op::Add> for Money {}

#[test]
fn test_user_declared_nothrow_forwards() {
    type Wallet = NewType<Money, Tag, deriving![Arithmetic]>;
    assert!(probe!(Money => IS_NOTHROW_ADDABLE));
    assert!(probe!(Wallet => IS_NOTHROW_ADDABLE));
    assert!(!probe!(Wallet => IS_NOTHROW_EQUALITY_COMPARABLE));
    assert!(probe!(Wallet => IS_EQUALITY_COMPARABLE));
}

#[test]
fn test_nothing_derived_means_nothing_exposed() {
    type Bare = NewType<i32, Tag>;
    assert!(probe!(Bare => IS_EQUALITY_COMPARABLE));
    assert!(!probe!(Bare => IS_LESS_THAN_COMPARABLE));
    assert!(!probe!(Bare => IS_ADDABLE));
    assert!(!probe!(Bare => IS_HASHABLE));
    assert!(!probe!(Bare => IS_OUTPUT_STREAMABLE));
    assert!(!probe!(Bare => IS_INPUT_STREAMABLE));
    assert!(!probe!(Bare => IS_SHARED_ITERABLE));
}

#[test]
fn test_tags_are_distinct_types() {
    enum Other {}
    assert_ne!(
        core::any::TypeId::of::<NewType<i32, Tag>>(),
        core::any::TypeId::of::<NewType<i32, Other>>()
    );
}
