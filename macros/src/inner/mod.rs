//! Macros used by `newtype` itself.

pub mod peano;
