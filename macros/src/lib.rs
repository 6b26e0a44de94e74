//! Procedural macros for the `newtype` derivation system.
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Derivable)]` | unit struct | Declare a capability tag |
//! | `routing_stream!` | - | Hash a tag path into a type-level nibble stream |
//! | `peano!` | - | Generate Peano depth aliases `D0..Dn` |
//!
//! The derive cannot see `module_path!()` of its call site, so tag identity is
//! built in three steps:
//!
//! 1. `#[derive(Derivable)]` emits a call to the `__impl_derivable!` bridge.
//! 2. `__impl_derivable!` (declarative, in `newtype`) passes
//!    `concat!(module_path!(), "::", Name)` on.
//! 3. `routing_stream!` turns that string into a `HashStream16` type.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod inner;
mod user;

/// Generate Peano number type aliases D0..Dn.
///
/// ```ignore
/// peano!(16);  // D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Declare a capability tag usable in `deriving![...]`.
///
/// Only unit structs qualify: a tag carries identity, never data.
///
/// ```ignore
/// use newtype::Derivable;
///
/// #[derive(Derivable)]
/// struct Audited;
///
/// type Ledger = NewType<u64, LedgerTag, deriving![Show, Audited]>;
/// ```
#[proc_macro_derive(Derivable)]
pub fn derive_derivable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::derivable::expand_derive_derivable(input).into()
}

/// Internal: compute the routing stream type for a tag path.
///
/// Accepts a string literal (hashed here) or an expression such as
/// `concat!(module_path!(), ...)` (hashed by const fn after expansion).
#[doc(hidden)]
#[proc_macro]
pub fn routing_stream(input: TokenStream) -> TokenStream {
    user::derivable::expand_routing_stream(input.into()).into()
}
