use std::cmp::Ordering;

use newtype::prelude::*;

enum Tag {}

type Rank = NewType<u32, Tag, deriving![Relational]>;
type Score = NewType<f64, Tag, deriving![Relational]>;

#[test]
fn test_operators_delegate() {
    let (a, b) = (Rank::new(1), Rank::new(2));
    assert!(a < b);
    assert!(b > a);
    assert!(a <= b && a <= a);
    assert!(b >= a && b >= b);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(a.max(b), b);
}

#[test]
fn test_sorting() {
    let mut ranks: Vec<Rank> = [3, 1, 2].into_iter().map(Rank::new).collect();
    ranks.sort();
    let plain: Vec<u32> = ranks.into_iter().map(NewType::into_inner).collect();
    assert_eq!(plain, [1, 2, 3]);
}

#[test]
fn test_partial_order_of_floats() {
    let nan = Score::new(f64::NAN);
    let one = Score::new(1.0);
    assert_eq!(nan.partial_cmp(&one), None);
    assert!(!(nan < one) && !(nan > one) && !(nan <= one) && !(nan >= one));
    assert!(one < Score::new(2.0));
}

#[test]
fn test_relational_requires_tag() {
    assert!(!probe!(NewType<u32, Tag> => IS_LESS_THAN_COMPARABLE));
    assert!(probe!(Rank => IS_LESS_THAN_COMPARABLE));
    assert!(probe!(Rank => IS_GREATER_EQUAL_COMPARABLE));
    assert!(probe!(Rank => IS_NOTHROW_LESS_THAN_COMPARABLE));
}
