//! Peano depth alias generation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{LitInt, parse::Parse, parse::ParseStream};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let mut types = vec![quote! {
        #[doc = "Depth zero."]
        pub type D0 = Z;
    }];

    for n in 1..=input.max {
        let curr = syn::Ident::new(&format!("D{n}"), proc_macro2::Span::call_site());
        let prev = syn::Ident::new(&format!("D{}", n - 1), proc_macro2::Span::call_site());
        let doc = format!("Depth {n}.");
        types.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    quote! { #(#types)* }
}
