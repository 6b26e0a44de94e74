//! # Layer 0: Primitives
//!
//! Basic building blocks of tag identity:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Hash streams, Peano depths, stream equality.
//! - `hash.rs`: Const FNV-1a hashing of tag paths.

pub mod bool;
pub mod hash;
pub mod nibble;
pub mod stream;

pub use bool::{Absent, Bool, Present};
pub use nibble::{Nibble, NibbleEq};
pub use stream::{HashStream, HashStream16, IdentityDepth, Peano, S, StreamEq, Z};
