use newtype::prelude::*;

enum Tag {}

type Plain = NewType<i32, Tag>;
type WithBase = NewType<i32, Tag, deriving![EqBase]>;
type Name = NewType<String, Tag, deriving![EqBase]>;

#[test]
fn test_equality_without_tags() {
    assert_eq!(Plain::new(42), Plain::new(42));
    assert_ne!(Plain::new(42), Plain::new(43));
    assert!(Plain::new(1) != Plain::new(2));
}

#[test]
fn test_eq_base_both_directions() {
    let w = WithBase::new(42);
    assert!(w == 42i32);
    assert!(42i32 == w);
    assert!(w != 41i32);
    assert!(41i32 != w);
}

#[test]
fn test_eq_base_with_string() {
    let n = Name::new("ada".to_owned());
    assert!(n == "ada".to_owned());
    assert!("ada".to_owned() == n);
}

#[test]
fn test_equality_probes() {
    assert!(probe!(Plain => IS_EQUALITY_COMPARABLE));
    assert!(probe!(Plain => IS_NOTHROW_EQUALITY_COMPARABLE));

    struct Opaque;
    assert!(!probe!(NewType<Opaque, Tag> => IS_EQUALITY_COMPARABLE));
}

#[test]
fn test_float_equality() {
    let nan = NewType::<f64, Tag>::new(f64::NAN);
    let same = nan;
    assert!(nan != same);
}
