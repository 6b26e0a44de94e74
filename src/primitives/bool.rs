//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_tables() {
        assert!(<<Present as Bool>::And<Present> as Bool>::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Absent as Bool>::Or<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Not as Bool>::VALUE);
    }
}
