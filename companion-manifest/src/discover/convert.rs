//! Convert `syn` types into [`TypeRef`]s.

use companion_core::TypeRef;
use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Convert a field type.
///
/// Plain paths become [`TypeRef::Named`], paths whose last segment carries
/// only type arguments become [`TypeRef::Generic`], anything else is kept as
/// normalized source text in [`TypeRef::Verbatim`].
pub fn type_ref(ty: &Type) -> TypeRef {
    match ty {
        Type::Path(path) => path_ref(path).unwrap_or_else(|| verbatim(ty)),
        Type::Paren(inner) => type_ref(&inner.elem),
        Type::Group(inner) => type_ref(&inner.elem),
        _ => verbatim(ty),
    }
}

fn path_ref(ty: &TypePath) -> Option<TypeRef> {
    if ty.qself.is_some() {
        return None;
    }

    let segments: Vec<_> = ty.path.segments.iter().collect();
    let (last, init) = segments.split_last()?;
    if init.iter().any(|seg| !seg.arguments.is_none()) {
        return None;
    }

    let mut base = if ty.path.leading_colon.is_some() {
        "::".to_string()
    } else {
        String::new()
    };
    for seg in init {
        base.push_str(&seg.ident.to_string());
        base.push_str("::");
    }
    base.push_str(&last.ident.to_string());

    match &last.arguments {
        PathArguments::None => Some(TypeRef::named(base)),
        PathArguments::AngleBracketed(generics) => {
            let args = generics
                .args
                .iter()
                .map(|arg| match arg {
                    GenericArgument::Type(ty) => Some(type_ref(ty)),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?;
            Some(TypeRef::generic(base, args))
        }
        PathArguments::Parenthesized(_) => None,
    }
}

fn verbatim(ty: &Type) -> TypeRef {
    TypeRef::verbatim(normalize(ty.to_token_stream()))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    /// Start of input, or a token that binds to what follows (`&`, `<`, `::`).
    Open,
    Word,
    /// A keyword that is followed by a space even before a group (`mut [u8]`).
    Keyword,
    /// A separator that wants a space before the next token (`,`, `+`, `->`).
    Spaced,
}

/// Render a token stream the way rustfmt would for a type.
pub fn normalize(tokens: TokenStream) -> String {
    let mut out = String::new();
    write_tokens(tokens, &mut out);
    out
}

fn write_tokens(tokens: TokenStream, out: &mut String) {
    let mut prev = Prev::Open;
    let mut arrow = false;

    for tree in tokens {
        match tree {
            TokenTree::Ident(ident) => {
                if prev != Prev::Open {
                    out.push(' ');
                }
                let word = ident.to_string();
                prev = if matches!(word.as_str(), "mut" | "const" | "dyn" | "impl") {
                    Prev::Keyword
                } else {
                    Prev::Word
                };
                out.push_str(&word);
            }
            TokenTree::Literal(lit) => {
                if prev != Prev::Open {
                    out.push(' ');
                }
                out.push_str(&lit.to_string());
                prev = Prev::Word;
            }
            TokenTree::Group(group) => {
                if matches!(prev, Prev::Keyword | Prev::Spaced) {
                    out.push(' ');
                }
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                write_tokens(group.stream(), out);
                out.push_str(close);
                prev = Prev::Word;
            }
            TokenTree::Punct(punct) => {
                let ch = punct.as_char();
                match ch {
                    ',' | ';' => {
                        out.push(ch);
                        prev = Prev::Spaced;
                    }
                    '+' | '=' => {
                        if prev != Prev::Open {
                            out.push(' ');
                        }
                        out.push(ch);
                        prev = Prev::Spaced;
                    }
                    '-' if punct.spacing() == Spacing::Joint => {
                        if prev != Prev::Open {
                            out.push(' ');
                        }
                        out.push(ch);
                        arrow = true;
                        prev = Prev::Open;
                    }
                    '>' if arrow => {
                        out.push(ch);
                        arrow = false;
                        prev = Prev::Spaced;
                    }
                    '>' => {
                        out.push(ch);
                        prev = Prev::Word;
                    }
                    _ => {
                        if prev == Prev::Spaced {
                            out.push(' ');
                        }
                        out.push(ch);
                        prev = Prev::Open;
                    }
                }
            }
        }
    }
}
