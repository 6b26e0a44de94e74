//! Hash streams: the type-level identity of a tag.
//!
//! A tag's path hash becomes a stream of nibbles; two tags are the same tag
//! when their streams agree to `IdentityDepth`.

use core::marker::PhantomData;

use super::bool::{Absent, Bool, Present};
use super::nibble::{Nibble, NibbleEq};
use super::nibble::{X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};

// =============================================================================
// Hash Stream trait
// =============================================================================

/// Infinite stream of nibbles via recursive type
pub trait HashStream: 'static {
    type Head: Nibble;
    type Tail: HashStream;
}

// =============================================================================
// Const-to-Stream conversion
// =============================================================================

/// Select the nibble type for a const value.
pub trait SelectNibble<const N: u8> {
    type Out: Nibble;
}

macro_rules! impl_select_nibble {
    ($($val:literal => $nib:ident),* $(,)?) => {
        $(
            impl SelectNibble<$val> for () {
                type Out = $nib;
            }
        )*
    };
}

impl_select_nibble!(
    0 => X0, 1 => X1, 2 => X2, 3 => X3,
    4 => X4, 5 => X5, 6 => X6, 7 => X7,
    8 => X8, 9 => X9, 10 => XA, 11 => XB,
    12 => XC, 13 => XD, 14 => XE, 15 => XF,
);

/// A 64-bit hash as 16 const nibbles; the stream cycles through them.
///
/// Built by `routing_stream!`, not by hand.
pub struct HashStream16<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>(PhantomData<()>);

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> HashStream for HashStream16<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): SelectNibble<N0> + SelectNibble<N1> + SelectNibble<N2> + SelectNibble<N3>
      + SelectNibble<N4> + SelectNibble<N5> + SelectNibble<N6> + SelectNibble<N7>
      + SelectNibble<N8> + SelectNibble<N9> + SelectNibble<N10> + SelectNibble<N11>
      + SelectNibble<N12> + SelectNibble<N13> + SelectNibble<N14> + SelectNibble<N15>,
{
    type Head = <() as SelectNibble<N0>>::Out;
    type Tail = HashStream16<N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N0>;
}

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait
pub trait Peano {}

/// Zero (base case)
pub struct Z;
impl Peano for Z {}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {}

macros::peano!(16);

/// Comparison depth for tag identity (16 nibbles = 64 bits).
pub type IdentityDepth = D16;

// =============================================================================
// Stream comparison
// =============================================================================

/// Compare two hash streams up to a depth limit
pub trait StreamEq<Other: HashStream, Limit> {
    type Out: Bool;
}

impl<A: HashStream, B: HashStream> StreamEq<B, Z> for A {
    type Out = Present;
}

impl<A, B, L> StreamEq<B, S<L>> for A
where
    A: HashStream,
    B: HashStream,
    A::Head: NibbleEq<B::Head>,
    <A::Head as NibbleEq<B::Head>>::Out: StreamEqDispatch<A::Tail, B::Tail, L>,
{
    type Out = <<A::Head as NibbleEq<B::Head>>::Out as StreamEqDispatch<A::Tail, B::Tail, L>>::Out;
}

/// Continue the comparison only while the heads matched.
pub trait StreamEqDispatch<TailA, TailB, Limit> {
    type Out: Bool;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Absent {
    type Out = Absent;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Present
where
    TailA: HashStream + StreamEq<TailB, L>,
    TailB: HashStream,
{
    type Out = <TailA as StreamEq<TailB, L>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;

    type A = HashStream16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0>;
    type B = HashStream16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 1>;

    #[test]
    fn streams_compare_to_full_depth() {
        assert!(<<A as StreamEq<A, IdentityDepth>>::Out as Bool>::VALUE);
        // Differ only in the last nibble.
        assert!(!<<A as StreamEq<B, IdentityDepth>>::Out as Bool>::VALUE);
        assert!(<<A as StreamEq<B, D15>>::Out as Bool>::VALUE);
    }

    #[test]
    fn stream_yields_nibbles_in_order() {
        assert_eq!(<<A as HashStream>::Head as Nibble>::VALUE, 1);
        assert_eq!(<<<A as HashStream>::Tail as HashStream>::Head as Nibble>::VALUE, 2);
    }
}
