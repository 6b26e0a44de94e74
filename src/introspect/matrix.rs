//! Summaries of a type's construction and iteration capabilities.

use core::fmt;

use super::op::{self, Operation};

/// Availability of one operation, and whether it is guaranteed not to panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axis {
    pub available: bool,
    pub nothrow: bool,
}

impl Axis {
    /// Moves in Rust are bitwise copies: always available, never panicking.
    pub const ALWAYS: Axis = Axis { available: true, nothrow: true };

    pub const fn new(available: bool, nothrow: bool) -> Self {
        Axis { available, nothrow: available && nothrow }
    }
}

/// The construction propagation matrix of a type.
///
/// Build one with [`construction_matrix!`](crate::construction_matrix). A
/// wrapper's matrix equals its base type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstructionMatrix {
    pub default_construct: Axis,
    pub copy_construct: Axis,
    pub move_construct: Axis,
    pub copy_assign: Axis,
    pub move_assign: Axis,
}

impl fmt::Display for ConstructionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            (op::DefaultConstruct::NAME, self.default_construct),
            (op::CopyConstruct::NAME, self.copy_construct),
            (op::MoveConstruct::NAME, self.move_construct),
            (op::CopyAssign::NAME, self.copy_assign),
            (op::MoveAssign::NAME, self.move_assign),
        ];
        for (name, axis) in rows {
            writeln!(f, "{name:<20} available={:<5} nothrow={}", axis.available, axis.nothrow)?;
        }
        Ok(())
    }
}

/// Which iteration forms a type supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IterCaps {
    /// `for x in &value`
    pub shared: bool,
    /// `for x in &mut value`
    pub exclusive: bool,
    /// `for x in value`
    pub owned: bool,
    /// `(&value).into_iter().rev()`
    pub shared_rev: bool,
    /// `(&mut value).into_iter().rev()`
    pub exclusive_rev: bool,
}

/// Builds the [`ConstructionMatrix`] of a concrete type.
///
/// ```
/// use newtype::construction_matrix;
///
/// let m = construction_matrix!(String);
/// assert!(m.copy_construct.available);
/// assert!(!m.copy_construct.nothrow);
/// ```
#[macro_export]
macro_rules! construction_matrix {
    ($t:ty) => {
        $crate::introspect::ConstructionMatrix {
            default_construct: $crate::introspect::Axis::new(
                $crate::probe!($t => IS_DEFAULT_CONSTRUCTIBLE),
                $crate::probe!($t => IS_NOTHROW_DEFAULT_CONSTRUCTIBLE),
            ),
            copy_construct: $crate::introspect::Axis::new(
                $crate::probe!($t => IS_COPY_CONSTRUCTIBLE),
                $crate::probe!($t => IS_NOTHROW_COPY_CONSTRUCTIBLE),
            ),
            move_construct: $crate::introspect::Axis::ALWAYS,
            copy_assign: $crate::introspect::Axis::new(
                $crate::probe!($t => IS_COPY_ASSIGNABLE),
                $crate::probe!($t => IS_NOTHROW_COPY_ASSIGNABLE),
            ),
            move_assign: $crate::introspect::Axis::ALWAYS,
        }
    };
}

/// Builds the [`IterCaps`] of a concrete type.
#[macro_export]
macro_rules! iter_caps {
    ($t:ty) => {
        $crate::introspect::IterCaps {
            shared: $crate::probe!($t => IS_SHARED_ITERABLE),
            exclusive: $crate::probe!($t => IS_EXCLUSIVE_ITERABLE),
            owned: $crate::probe!($t => IS_OWNED_ITERABLE),
            shared_rev: $crate::probe!($t => IS_SHARED_REVERSE_ITERABLE),
            exclusive_rev: $crate::probe!($t => IS_EXCLUSIVE_REVERSE_ITERABLE),
        }
    };
}
