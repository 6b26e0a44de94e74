//! Capability tags.
//!
//! A tag is a unit struct implementing [`Derivable`]. Its identity is the
//! 64-bit FNV-1a hash of its full path, carried as a type-level nibble stream,
//! so tags declared in different crates never need a central registry.

use crate::primitives::{Bool, HashStream, IdentityDepth, StreamEq};

/// A capability that a derivation clause can name.
///
/// Implement with `#[derive(Derivable)]`; the impl is generated from the
/// declaring module's path.
pub trait Derivable: 'static {
    /// Short name, for inspection and diagnostics.
    const NAME: &'static str;

    /// Routing identity: hash of `module_path!()::NAME`.
    type Stream: HashStream;
}

/// Type-level tag equality.
pub trait SameTag<Other: Derivable>: Derivable {
    type Out: Bool;
}

impl<A, B> SameTag<B> for A
where
    A: Derivable,
    B: Derivable,
    A::Stream: StreamEq<B::Stream, IdentityDepth>,
{
    type Out = <A::Stream as StreamEq<B::Stream, IdentityDepth>>::Out;
}

/// The built-in capability tags.
pub mod derivables {
    use crate::Derivable;

    /// `+`, `-`, `*`, `/` and their compound assignments.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Arithmetic;

    /// Comparison against a bare base value.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct EqBase;

    /// `core::hash::Hash`, when the base type is hashable.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Hash;

    /// `AsRef` and `Borrow` access to the base value.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct ImplicitConversion;

    /// Pointer-like access through `Deref`/`DerefMut`.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Indirection;

    /// Iteration over the base container.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Iterable;

    /// Parsing from text (`FromStr`, stream extraction).
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Read;

    /// `<`, `>`, `<=`, `>=`.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Relational;

    /// `Display`.
    #[derive(Debug, Clone, Copy, Default, Derivable)]
    pub struct Show;
}

#[cfg(test)]
mod tests {
    use super::derivables::*;
    use super::*;

    fn same<A: SameTag<B>, B: Derivable>() -> bool {
        <A::Out as Bool>::VALUE
    }

    #[test]
    fn tags_compare_by_identity() {
        assert!(same::<Show, Show>());
        assert!(same::<Read, Read>());
        assert!(!same::<Show, Read>());
        assert!(!same::<Relational, Arithmetic>());
    }

    #[test]
    fn names_are_short() {
        assert_eq!(Show::NAME, "Show");
        assert_eq!(ImplicitConversion::NAME, "ImplicitConversion");
    }
}
