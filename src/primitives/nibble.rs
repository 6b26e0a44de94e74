//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the digits of a tag's identity stream.

use super::bool::{Absent, Present, Bool};

/// Iterate over all 16 nibbles (X0..XF).
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0); $mac!(X1); $mac!(X2); $mac!(X3);
        $mac!(X4); $mac!(X5); $mac!(X6); $mac!(X7);
        $mac!(X8); $mac!(X9); $mac!(XA); $mac!(XB);
        $mac!(XC); $mac!(XD); $mac!(XE); $mac!(XF);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

macro_rules! define_nibble {
    ($n:ident) => {
        #[doc = concat!("Nibble `", stringify!($n), "`.")]
        pub struct $n;
    };
}
for_each_nibble!(define_nibble);

macro_rules! impl_nibble_value {
    ($($n:ident = $v:literal),* $(,)?) => {
        $(impl Nibble for $n { const VALUE: u8 = $v; })*
    };
}
impl_nibble_value!(
    X0 = 0, X1 = 1, X2 = 2, X3 = 3, X4 = 4, X5 = 5, X6 = 6, X7 = 7,
    X8 = 8, X9 = 9, XA = 10, XB = 11, XC = 12, XD = 13, XE = 14, XF = 15,
);

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// X == X -> Present (16 impls)
macro_rules! impl_eq_self {
    ($n:ident) => { impl NibbleEq<$n> for $n { type Out = Present; } };
}
for_each_nibble!(impl_eq_self);

// X != Y -> Absent (240 impls)
macro_rules! impl_neq {
    ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = Absent; } };
}
for_distinct_pairs!(impl_neq);
