use std::borrow::Borrow;
use std::collections::HashMap;

use newtype::prelude::*;

enum Tag {}

type Name = NewType<String, Tag, deriving![Indirection]>;
type Label = NewType<String, Tag, deriving![ImplicitConversion, Hash]>;

#[test]
fn test_indirection_reaches_base_methods() {
    let mut n = Name::new("ada".to_owned());
    assert_eq!(n.len(), 3);
    n.push_str(" lovelace");
    assert_eq!(&*n, "ada lovelace");
}

fn length(s: impl AsRef<String>) -> usize {
    s.as_ref().len()
}

#[test]
fn test_implicit_conversion_traits() {
    let l = Label::new("x".to_owned());
    assert_eq!(length(&l), 1);
    let b: &String = l.borrow();
    assert_eq!(b, "x");
}

#[test]
fn test_lookup_by_base_value() {
    let mut map = HashMap::new();
    map.insert(Label::new("k".to_owned()), 1);
    assert_eq!(map.get(&"k".to_owned()), Some(&1));
}

#[test]
fn test_explicit_conversion_always_available() {
    let plain = NewType::<String, Tag>::new("y".to_owned());
    assert_eq!(plain.decay(), "y");
    assert_eq!(plain.into_inner(), "y");
}
