use newtype::prelude::*;
use newtype::ReadError;

enum Tag {}

type Shown = NewType<i32, Tag, deriving![Show]>;
type Parsed = NewType<i32, Tag, deriving![Read]>;
type Both = NewType<u32, Tag, deriving![Show, Read]>;

#[test]
fn test_show_formats_like_base() {
    assert_eq!(Shown::new(42).to_string(), "42");
    assert_eq!(format!("{:>5}", Shown::new(42)), "   42");
    assert_eq!(format!("{:+}", Shown::new(7)), "+7");
}

#[test]
fn test_from_str() {
    let p: Parsed = "42".parse().unwrap();
    assert_eq!(p.decay(), 42);
    assert!("forty-two".parse::<Parsed>().is_err());
}

#[test]
fn test_read_from_stream() {
    let mut input: &[u8] = b"  17\n\t25 ";
    let mut a = Parsed::default();
    let mut b = Parsed::default();
    a.read_from(&mut input).unwrap();
    b.read_from(&mut input).unwrap();
    assert_eq!((a.decay(), b.decay()), (17, 25));
}

#[test]
fn test_read_failure_keeps_value() {
    let mut input: &[u8] = b"abc";
    let mut p = Parsed::new(9);
    let err = p.read_from(&mut input).unwrap_err();
    assert!(matches!(err, ReadError::Parse(_)));
    assert_eq!(p.decay(), 9);
}

#[test]
fn test_read_takes_whole_token() {
    let mut input: &[u8] = b"42abc 7";
    let mut p = Parsed::new(1);
    let err = p.read_from(&mut input).unwrap_err();
    assert!(matches!(err, ReadError::Parse(_)));
    assert_eq!(p.decay(), 1);
    assert_eq!(input, b" 7");

    p.read_from(&mut input).unwrap();
    assert_eq!(p.decay(), 7);
}

#[test]
fn test_read_exhausted() {
    let mut input: &[u8] = b" \n ";
    let mut p = Parsed::new(3);
    let err = p.read_from(&mut input).unwrap_err();
    assert!(matches!(err, ReadError::Exhausted));
    assert_eq!(p.decay(), 3);
    assert_eq!(err.to_string(), "stream ended before a value could be read");
}

#[test]
fn test_round_trip_through_text() {
    let b = Both::new(1234);
    let back: Both = b.to_string().parse().unwrap();
    assert_eq!(back, b);
}

#[test]
fn test_streaming_requires_tags() {
    assert!(!probe!(NewType<i32, Tag> => IS_OUTPUT_STREAMABLE));
    assert!(!probe!(NewType<i32, Tag> => IS_INPUT_STREAMABLE));
    assert!(!probe!(Parsed => IS_OUTPUT_STREAMABLE));
    assert!(probe!(Shown => IS_OUTPUT_STREAMABLE));
    assert!(probe!(Parsed => IS_INPUT_STREAMABLE));
    assert!(probe!(Both => IS_NOTHROW_OUTPUT_STREAMABLE));
}
