#![allow(non_snake_case)]

use quote::quote;

use super::*;

fn expand_item(item: TokenStream2) -> String {
    expand(TokenStream2::new(), item).to_string()
}

// expand tests

#[test]
fn expand___named_struct___passes_through_unchanged() {
    let item = quote! {
        pub struct User {
            id: Long,
        }
    };
    assert_eq!(expand(TokenStream2::new(), item.clone()).to_string(), item.to_string());
}

#[test]
fn expand___unit_struct___passes_through_unchanged() {
    let item = quote! { struct Marker; };
    assert_eq!(expand_item(item.clone()), item.to_string());
}

#[test]
fn expand___empty_struct___passes_through_unchanged() {
    let item = quote! { struct Marker {} };
    assert_eq!(expand_item(item.clone()), item.to_string());
}

#[test]
fn expand___enum___emits_compile_error() {
    let out = expand_item(quote! { enum Shape { Circle } });
    assert!(out.starts_with("enum Shape"));
    assert!(out.contains("compile_error"));
    assert!(out.contains("\"CustomLombok can not be used on Shape\""));
}

#[test]
fn expand___trait___emits_compile_error() {
    let out = expand_item(quote! { trait Named {} });
    assert!(out.contains("\"CustomLombok can not be used on Named\""));
}

#[test]
fn expand___tuple_struct___emits_compile_error() {
    let out = expand_item(quote! { struct Pair(u8, u8); });
    assert!(out.contains("\"CustomLombok can not be used on Pair\""));
}

#[test]
fn expand___function___emits_compile_error() {
    let out = expand_item(quote! { fn helper() {} });
    assert!(out.contains("\"CustomLombok can not be used on helper\""));
}

#[test]
fn expand___impl_block___uses_generic_name() {
    let out = expand_item(quote! { impl User {} });
    assert!(out.contains("\"CustomLombok can not be used on this item\""));
}

#[test]
fn expand___arguments___are_rejected() {
    let out = expand(quote! { strict }, quote! { struct User { id: u8 } }).to_string();
    assert!(out.contains("\"custom_lombok takes no arguments\""));
}

// item_name tests

#[test]
fn item_name___raw_identifier___is_unescaped() {
    let item: Item = syn::parse_quote! { fn r#type() {} };
    assert_eq!(item_name(&item), "type");
}
