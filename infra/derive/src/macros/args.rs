//! Attribute-argument helpers shared by the attribute macros.

use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use syn::parse::Parser;
use syn::{Attribute, Lit, LitStr, Meta, MetaNameValue};

/// Parses `key = "value", ...` attribute arguments.
pub fn parse_name_values(args: TokenStream) -> Result<Vec<MetaNameValue>, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;
    metas.into_iter().map(expect_name_value).collect()
}

fn expect_name_value(meta: Meta) -> Result<MetaNameValue, TokenStream> {
    match meta {
        Meta::NameValue(name_value) => Ok(name_value),
        other => Err(syn::Error::new_spanned(
            other,
            "Expected name-value arguments like `name = \"...\"`",
        )
        .to_compile_error()),
    }
}

pub fn parse_string_literal(name_value: &MetaNameValue, label: &str) -> Result<LitStr, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Str(lit) = &expr_lit.lit
    {
        return Ok(lit.clone());
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a string literal"))
        .to_compile_error())
}

pub fn set_once<T>(current: Option<T>, token: &MetaNameValue, value: T) -> Result<T, TokenStream> {
    if current.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument").to_compile_error());
    }
    Ok(value)
}

/// Collects the trait names already listed in `#[derive(...)]` attributes.
pub fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last().map(|seg| seg.ident.to_string()) {
                traits.insert(ident);
            }
            Ok(())
        });
    }

    traits
}
