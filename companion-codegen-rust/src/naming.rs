//! Rust-specific naming conventions.

use companion_core::{Namespace, to_snake_case};

/// Words that cannot appear as plain identifiers in Rust source.
pub const RUST_RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Reserved words that stay invalid even as raw identifiers.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

pub fn is_reserved(name: &str) -> bool {
    RUST_RESERVED.contains(&name)
}

/// Escape `name` as a raw identifier when it is a keyword (`type` -> `r#type`).
pub fn safe_ident(name: &str) -> String {
    if is_reserved(name) && !NOT_RAW.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Module name of a companion (`UserData` -> `user_data`).
pub fn companion_module(companion_name: &str) -> String {
    to_snake_case(companion_name)
}

/// File name of a companion module (`UserData` -> `user_data.rs`).
pub fn companion_file_name(companion_name: &str) -> String {
    format!("{}.rs", companion_module(companion_name))
}

/// Absolute path of the source module (`crate::com::example`).
pub fn crate_path(namespace: &Namespace) -> String {
    std::iter::once("crate".to_string())
        .chain(namespace.segments().iter().map(String::as_str).map(safe_ident))
        .collect::<Vec<_>>()
        .join("::")
}

/// Directory segments for `namespace`, with raw-identifier prefixes removed
/// (`r#type` lives in `type/`).
pub fn namespace_dirs(namespace: &Namespace) -> impl Iterator<Item = &str> {
    namespace
        .segments()
        .iter()
        .map(|segment| segment.strip_prefix("r#").unwrap_or(segment))
}
