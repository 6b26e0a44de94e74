use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, RandomState};

use newtype::prelude::*;

enum Tag {}

type Key = NewType<u32, Tag, deriving![Hash]>;

#[test]
fn test_usable_as_map_key() {
    let mut map = HashMap::new();
    map.insert(Key::new(42), "answer");
    assert_eq!(map.get(&Key::new(42)), Some(&"answer"));
    assert_eq!(map.get(&Key::new(7)), None);
}

#[test]
fn test_hash_matches_base() {
    let state = RandomState::new();
    assert_eq!(state.hash_one(Key::new(42)), state.hash_one(42u32));
}

#[test]
fn test_set_deduplicates() {
    let set: HashSet<Key> = [1, 2, 1, 3].into_iter().map(Key::new).collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_hash_requires_tag_and_base() {
    struct NotHashable;

    assert!(probe!(Key => IS_HASHABLE));
    assert!(probe!(Key => IS_NOTHROW_HASHABLE));
    assert!(!probe!(NewType<u32, Tag> => IS_HASHABLE));
    assert!(!probe!(NewType<f64, Tag, deriving![Hash]> => IS_HASHABLE));
    assert!(!probe!(NewType<NotHashable, Tag, deriving![Hash]> => IS_HASHABLE));
}
