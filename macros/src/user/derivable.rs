use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// `#[derive(Derivable)]` hands the tag name to the `__impl_derivable!` bridge,
/// which expands `module_path!()` before `routing_stream!` sees the string.
pub fn expand_derive_derivable(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "a Derivable tag cannot be generic")
            .to_compile_error();
    }

    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return syn::Error::new_spanned(ident, "Derivable can only be derived for unit structs")
                .to_compile_error();
        }
    }

    let ident_str = ident.to_string();
    quote! {
        ::newtype::__impl_derivable!(#ident, #ident_str);
    }
}

pub fn expand_routing_stream(input: TokenStream2) -> TokenStream2 {
    // Literal path: hash now.
    if let Ok(lit) = syn::parse2::<syn::LitStr>(input.clone()) {
        let hash = fnv1a_64(&lit.value());
        let nibbles = (0..16).map(|i| ((hash >> (i * 4)) & 0xF) as u8);

        return quote! {
            ::newtype::primitives::stream::HashStream16<#(#nibbles),*>
        };
    }

    // concat!(module_path!(), ...): hash in const context once it has expanded.
    let nibbles = (0u8..16).map(|i| {
        quote! { { ::newtype::primitives::hash::hash_nibble(#input, #i) } }
    });

    quote! {
        ::newtype::primitives::stream::HashStream16<#(#nibbles),*>
    }
}

// Must agree with `newtype::primitives::hash::fnv1a_64`.
fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv_matches_reference_vectors() {
        assert_eq!(fnv1a_64(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn rejects_non_unit_struct() {
        let input: DeriveInput = syn::parse_quote! { struct Tagged(u8); };
        let out = expand_derive_derivable(input).to_string();
        assert!(out.contains("compile_error"));
    }

    #[test]
    fn literal_path_is_hashed_eagerly() {
        let out = expand_routing_stream(quote! { "crate::Show" }).to_string();
        assert!(out.contains("HashStream16"));
        assert!(!out.contains("hash_nibble"));
    }
}
