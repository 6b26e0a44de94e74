#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and stream extraction (`read_from`)
// - alloc: enables `String` as a base type in no_std

//! # newtype
//!
//! Strong type aliases whose operators are opted into one capability at a time.
//!
//! `NewType<u32, WidthTag>` stores a `u32` but is a distinct type: it does not
//! mix with a bare `u32` or with `NewType<u32, HeightTag>`. Out of the box it
//! can be constructed, copied, moved and compared for equality, whatever the
//! base type allows. Everything else is listed in a **derivation clause**:
//!
//! ```
//! use newtype::{deriving, NewType};
//! use newtype::derivables::{Arithmetic, Relational, Show};
//!
//! enum WidthTag {}
//! type Width = NewType<u32, WidthTag, deriving![Arithmetic, Relational, Show]>;
//!
//! let w = Width::new(24) + Width::new(18);
//! assert!(w > Width::new(41));
//! assert_eq!(format!("{w}"), "42");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Type-level Bool, Nibble (X0-XF), Hash streams, StreamEq        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Derivation Clauses                                      |
//! |  - Derivable tags, Deriving<L>, deriving![..]                     |
//! |  - Contains, Evaluate, Derives (Logic), containment order         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Capability Introspection                                |
//! |  - Predicates, Nothrow<Op>, probe!, construction_matrix!          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: NewType<B, Tag, D>                                      |
//! |  - Construction, gated operators, iteration, text I/O             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ### Tag identity
//! A tag's identity is the **64-bit FNV-1a hash** of `module_path!()::Name`,
//! carried as a stream of 16 type-level nibbles. Two tags are the same when
//! their streams compare equal, which lets `Contains` answer with an
//! associated type instead of an overlapping impl.
//!
//! ```text
//! Tag path -> FNV Hash (u64) -> Nibble Stream -> StreamEq (Present/Absent)
//! ```
//!
//! ### Gating
//! Each optional operator impl carries a `D: Derives<Tag>` bound. A clause
//! that lacks the tag leaves the impl inapplicable, so using the operator
//! is a compile error naming the missing tag.
//!
//! ## Custom tags
//!
//! ```
//! use newtype::{deriving, Derivable};
//!
//! #[derive(Derivable)]
//! struct Audited;
//!
//! let c = <deriving![Audited]>::new();
//! assert!(c.contains::<Audited>());
//! ```

// Allow `::newtype` to work inside the crate itself
extern crate self as newtype;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Derivation Clauses
// =============================================================================
pub mod derivable;
pub mod clause;

// =============================================================================
// Layer 2: Capability Introspection
// =============================================================================
pub mod introspect;

// =============================================================================
// Layer 3: The Wrapper
// =============================================================================
pub mod new_type;

#[cfg(feature = "std")]
pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use clause::{Bare, Clause, Derives, Deriving, Evaluate, Inspect};
pub use derivable::{derivables, Derivable};
pub use new_type::{NewType, Wrapped};
pub use primitives::bool::{Absent, Bool, Present};

#[cfg(feature = "std")]
pub use error::ReadError;

// Re-export proc-macros
pub use macros::Derivable;

#[doc(hidden)]
pub use macros::routing_stream as __routing_stream;

/// Crate version, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub name: &'static str,
}

pub const VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
    name: "newtype",
};

pub mod prelude {
    pub use crate::derivables::*;
    pub use crate::introspect::{ConstructionMatrix, IterCaps, Nothrow};
    pub use crate::{construction_matrix, deriving, iter_caps, probe};
    pub use crate::{Clause, Derivable, Derives, Deriving, Inspect, NewType, Wrapped};
}

// =============================================================================
// Declarative Macro Bridge for #[derive(Derivable)]
// =============================================================================
//
// Three-layer macro architecture to get module_path!() into the identity:
// 1. #[derive(Derivable)] (proc-macro) generates __impl_derivable! call
// 2. __impl_derivable! (this decl-macro) builds concat!(module_path!(), ...)
// 3. routing_stream! (proc-macro) emits a HashStream16 whose nibbles are
//    const-evaluated from that string

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Derivable)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_derivable {
    ($ty:ident, $name:literal) => {
        impl $crate::Derivable for $ty {
            const NAME: &'static str = $name;
            type Stream = $crate::__routing_stream!(concat!(module_path!(), "::", $name));
        }
    };
}
