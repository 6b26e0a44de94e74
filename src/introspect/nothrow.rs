//! Non-panicking operation guarantees.
//!
//! `T: Nothrow<Op>` promises that `Op` on `T` cannot panic. The guarantee is
//! opt-in: base types declare it, and wrappers forward it from their base.

use super::op::{self, Operation};

/// `Op` on `Self` never panics.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not guarantee that `{Op}` cannot panic",
    note = "implement `Nothrow<{Op}>` for the base type to declare the guarantee"
)]
pub trait Nothrow<Op: Operation> {}

macro_rules! nothrow {
    ([$($ty:ty),* $(,)?] => $ops:tt) => {
        $( nothrow!(@one $ty => $ops); )*
    };
    (@one $ty:ty => [$($op:ident),* $(,)?]) => {
        $( impl Nothrow<op::$op> for $ty {} )*
    };
}

// Integer arithmetic can overflow or divide by zero.
nothrow!([i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char] => [
    DefaultConstruct, CopyConstruct, CopyAssign,
    Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual,
    Input, Output, Hashing,
]);

nothrow!([f32, f64] => [
    DefaultConstruct, CopyConstruct, CopyAssign,
    Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual,
    Add, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign,
    Input, Output,
]);

nothrow!([()] => [DefaultConstruct, CopyConstruct, CopyAssign, Equal, NotEqual, Hashing]);

// Cloning allocates.
#[cfg(feature = "alloc")]
nothrow!([alloc::string::String] => [
    DefaultConstruct,
    Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual,
    Input, Output, Hashing,
]);
