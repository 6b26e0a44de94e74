//! # Layer 2: Capability Introspection
//!
//! Answers "can `T` do X?" and "is X on `T` guaranteed not to panic?".
//!
//! - `op.rs`: One marker per operation.
//! - `nothrow.rs`: `Nothrow<Op>` guarantees, declared for primitives.
//! - `predicates.rs`: Blanket predicate traits usable as bounds.
//! - `probe.rs`: `probe!` for answers as `bool` constants.
//! - `matrix.rs`: Construction matrix and iteration summaries.

pub mod matrix;
pub mod nothrow;
pub mod op;
pub mod predicates;
pub mod probe;

pub use matrix::{Axis, ConstructionMatrix, IterCaps};
pub use nothrow::Nothrow;
pub use op::Operation;
pub use predicates::*;
pub use probe::Probe;
