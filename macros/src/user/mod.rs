//! User-facing macro implementations.

pub mod derivable;
