//! Shared utility functions for code generation.

/// Uppercase the first character and leave the rest untouched
/// (e.g., "age" -> "Age", "firstName" -> "FirstName", "_id" -> "_id")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "UserData" -> "user_data")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Check that `s` is lexically an identifier: a letter or `_` followed by
/// letters, digits or `_`, and not `_` alone.
///
/// Keywords are not rejected here; language renderers escape them.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_alphanumeric() || c == '_')
}
