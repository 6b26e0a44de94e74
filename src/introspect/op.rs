//! Operation markers.
//!
//! One zero-sized type per operation whose availability or non-panicking
//! guarantee can be asked about. Used as the parameter of
//! [`Nothrow`](super::Nothrow).

/// An operation that can be introspected.
pub trait Operation: 'static {
    /// Human-readable name, used in capability reports.
    const NAME: &'static str;
}

macro_rules! operations {
    ($($(#[$meta:meta])* $Name:ident => $text:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $Name;

            impl Operation for $Name {
                const NAME: &'static str = $text;
            }
        )*
    };
}

operations! {
    /// `T::default()`
    DefaultConstruct => "default construction";
    /// `x.clone()`
    CopyConstruct => "copy construction";
    /// `let y = x;`
    MoveConstruct => "move construction";
    /// `x.clone_from(&y)`
    CopyAssign => "copy assignment";
    /// `y = x;`
    MoveAssign => "move assignment";
    /// `a == b`
    Equal => "==";
    /// `a != b`
    NotEqual => "!=";
    /// `a < b`
    Less => "<";
    /// `a > b`
    Greater => ">";
    /// `a <= b`
    LessEqual => "<=";
    /// `a >= b`
    GreaterEqual => ">=";
    Add => "+";
    Sub => "-";
    Mul => "*";
    Div => "/";
    AddAssign => "+=";
    SubAssign => "-=";
    MulAssign => "*=";
    DivAssign => "/=";
    /// Parsing from text.
    Input => "input";
    /// Formatting with `Display`.
    Output => "output";
    /// Feeding a `Hasher`.
    Hashing => "hash";
}
