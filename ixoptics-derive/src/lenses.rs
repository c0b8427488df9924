//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! For every named field this generates two associated functions: a plain
//! lens (`<field>_lens`) and a lens indexed by the field name
//! (`<field>_ilens`).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Generics, Ident};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_lenses(name, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

/// Generates lens functions for a struct's fields.
fn generate_struct_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let lens_functions: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| field_lenses(ident, field)))
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#lens_functions)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Lenses cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

fn field_lenses(field_name: &Ident, field: &Field) -> TokenStream2 {
    let field_type = &field.ty;
    let lens_name = format_ident!("{}_lens", field_name);
    let ilens_name = format_ident!("{}_ilens", field_name);
    let label = field_name.to_string();
    let lens_doc = format!("Returns a lens focusing on the `{label}` field.");
    let ilens_doc =
        format!("Returns a lens focusing on the `{label}` field, indexed by the field name.");

    // The higher-ranked bound keeps a non-`Clone` field from failing the whole
    // derive: it is checked where the lens is called, not where it is defined.
    quote! {
        #[doc = #lens_doc]
        #[inline]
        #[must_use]
        pub fn #lens_name() -> ::ixoptics::optics::PlainLens<
            impl ::ixoptics::optics::IxLensVl<
                Index = (),
                Source = Self,
                Target = Self,
                Focus = #field_type,
                Replacement = #field_type,
            > + ::core::marker::Copy,
        >
        where
            for<'__lens> #field_type: ::core::clone::Clone,
        {
            ::ixoptics::optics::lens(
                |source: &Self| ::core::clone::Clone::clone(&source.#field_name),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }

        #[doc = #ilens_doc]
        #[inline]
        #[must_use]
        pub fn #ilens_name() -> ::ixoptics::optics::IxLens<
            &'static str,
            impl ::ixoptics::optics::IxLensVl<
                Index = &'static str,
                Source = Self,
                Target = Self,
                Focus = #field_type,
                Replacement = #field_type,
            > + ::core::marker::Copy,
        >
        where
            for<'__lens> #field_type: ::core::clone::Clone,
        {
            ::ixoptics::optics::ilens(
                |source: &Self| (#label, ::core::clone::Clone::clone(&source.#field_name)),
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    }
}
