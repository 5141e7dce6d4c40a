//! companion-macros - the `#[custom_lombok]` marker attribute
//!
//! The attribute itself generates nothing: companions are written by the
//! `companion` generator, which discovers structs carrying this attribute.
//! The macro only makes the marker legal on structs and rejects it, with a
//! compile error, everywhere else.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::{Fields, Item, spanned::Spanned};

/// Marks a struct for companion generation.
///
/// # Example
///
/// ```ignore
/// use companion_macros::custom_lombok;
///
/// #[custom_lombok]
/// pub struct User {
///     id: Long,
/// }
/// // `companion generate` writes `UserData` with `getId` / `setId`.
/// ```
#[proc_macro_attribute]
pub fn custom_lombok(attr: TokenStream, item: TokenStream) -> TokenStream {
    TokenStream::from(expand(attr.into(), item.into()))
}

/// Expand the attribute on `item`.
///
/// Structs with named fields (or no fields) pass through unchanged. Any other
/// item is kept and followed by a `compile_error!` naming it.
fn expand(attr: TokenStream2, item: TokenStream2) -> TokenStream2 {
    if !attr.is_empty() {
        let err = syn::Error::new(attr.span(), "custom_lombok takes no arguments");
        return with_error(item, err);
    }

    let parsed: Item = match syn::parse2(item.clone()) {
        Ok(parsed) => parsed,
        Err(err) => return with_error(item, err),
    };

    match &parsed {
        Item::Struct(s) if !matches!(s.fields, Fields::Unnamed(_)) => item,
        other => {
            let err = syn::Error::new_spanned(
                item_name_tokens(other),
                format!("CustomLombok can not be used on {}", item_name(other)),
            );
            with_error(item, err)
        }
    }
}

fn with_error(item: TokenStream2, err: syn::Error) -> TokenStream2 {
    let mut out = item;
    out.extend(err.to_compile_error());
    out
}

fn item_name(item: &Item) -> String {
    let ident = match item {
        Item::Struct(i) => Some(&i.ident),
        Item::Enum(i) => Some(&i.ident),
        Item::Trait(i) => Some(&i.ident),
        Item::Union(i) => Some(&i.ident),
        Item::Fn(i) => Some(&i.sig.ident),
        Item::Const(i) => Some(&i.ident),
        Item::Static(i) => Some(&i.ident),
        Item::Type(i) => Some(&i.ident),
        Item::Mod(i) => Some(&i.ident),
        _ => None,
    };
    match ident {
        Some(ident) => syn::ext::IdentExt::unraw(ident).to_string(),
        None => "this item".to_string(),
    }
}

fn item_name_tokens(item: &Item) -> TokenStream2 {
    match item {
        Item::Struct(i) => i.ident.to_token_stream(),
        Item::Enum(i) => i.ident.to_token_stream(),
        Item::Trait(i) => i.ident.to_token_stream(),
        Item::Union(i) => i.ident.to_token_stream(),
        Item::Fn(i) => i.sig.ident.to_token_stream(),
        other => other.to_token_stream(),
    }
}

#[cfg(test)]
mod lib_tests;
