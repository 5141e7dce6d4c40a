//! Pre-emission checks on extracted fields.
//!
//! Names and types flow verbatim into generated source, so anything that
//! could break out of its position (a field name that is not an identifier,
//! type text with statement delimiters) is rejected before synthesis.

use companion_core::{TypeRef, is_valid_identifier};
use indexmap::IndexMap;

use super::{AccessorDescriptor, FieldDescriptor};

/// Path keywords that cannot be used as field names even when escaped.
const UNESCAPABLE: &[&str] = &["self", "Self", "super", "crate"];

/// Fragments never allowed in verbatim type text.
const FORBIDDEN_TYPE_TEXT: &[&str] = &["{", "}", "\"", "//", "/*", "\n", "\r"];

/// A field that cannot be turned into a companion member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field name '{name}' is not a valid identifier")]
    InvalidFieldName { name: String },

    #[error("field '{field}' has unsupported type '{ty}'")]
    InvalidType { field: String, ty: String },

    #[error("accessor '{method}' would be generated for both '{first}' and '{second}'")]
    AccessorCollision {
        method: String,
        first: String,
        second: String,
    },
}

/// Check a single field's name and type.
pub fn validate_field(field: &FieldDescriptor) -> Result<(), ValidationError> {
    if !is_valid_identifier(&field.name) || UNESCAPABLE.contains(&field.name.as_str()) {
        return Err(ValidationError::InvalidFieldName {
            name: field.name.clone(),
        });
    }

    if !is_valid_type(&field.ty) {
        return Err(ValidationError::InvalidType {
            field: field.name.clone(),
            ty: field.ty.to_string(),
        });
    }

    Ok(())
}

/// Reject accessor sets where two fields map onto the same method name
/// (`name` and `Name` both yield `getName`).
pub fn check_collisions(accessors: &[AccessorDescriptor]) -> Result<(), ValidationError> {
    let mut seen: IndexMap<&str, &str> = IndexMap::new();

    for accessor in accessors {
        let field = accessor.field.name.as_str();
        if let Some(first) = seen.insert(accessor.method_name.as_str(), field) {
            return Err(ValidationError::AccessorCollision {
                method: accessor.method_name.clone(),
                first: first.to_string(),
                second: field.to_string(),
            });
        }
    }

    Ok(())
}

fn is_valid_type(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Primitive(_) => true,
        TypeRef::Named(path) => is_valid_path(path),
        TypeRef::Generic { base, args } => is_valid_path(base) && args.iter().all(is_valid_type),
        TypeRef::Verbatim(text) => is_valid_verbatim(text),
    }
}

/// `Long`, `std::path::PathBuf`, `::core::time::Duration`.
fn is_valid_path(path: &str) -> bool {
    let path = path.strip_prefix("::").unwrap_or(path);
    !path.is_empty()
        && path
            .split("::")
            .all(|segment| is_valid_identifier(segment.strip_prefix("r#").unwrap_or(segment)))
}

fn is_valid_verbatim(text: &str) -> bool {
    if text.trim().is_empty() || FORBIDDEN_TYPE_TEXT.iter().any(|f| text.contains(f)) {
        return false;
    }

    let mut stack = Vec::new();
    let mut prev = None;
    for c in text.chars() {
        match c {
            '(' | '[' | '<' => stack.push(c),
            // `->` in fn pointer types closes nothing
            '>' if prev == Some('-') => {}
            ')' | ']' | '>' => {
                let open = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '<',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            // only array lengths may carry a semicolon
            ';' if stack.last() != Some(&'[') => return false,
            _ => {}
        }
        prev = Some(c);
    }
    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companion::synthesize;

    fn field(name: &str, ty: TypeRef) -> FieldDescriptor {
        FieldDescriptor::new(name, ty)
    }

    #[test]
    fn test_accepts_plain_fields() {
        assert!(validate_field(&field("age", TypeRef::int())).is_ok());
        assert!(validate_field(&field("_id", TypeRef::named("Long"))).is_ok());
        assert!(validate_field(&field("type", TypeRef::string())).is_ok());
        assert!(validate_field(&field("path", TypeRef::named("std::path::PathBuf"))).is_ok());
        assert!(
            validate_field(&field(
                "tags",
                TypeRef::generic("Vec", vec![TypeRef::string()])
            ))
            .is_ok()
        );
    }

    #[test]
    fn test_rejects_bad_field_names() {
        for name in ["", "_", "1st", "first-name", "a b", "self", "Self", "crate"] {
            assert_eq!(
                validate_field(&field(name, TypeRef::int())),
                Err(ValidationError::InvalidFieldName { name: name.into() }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_verbatim_types() {
        for ok in [
            "(i32, String)",
            "&'static str",
            "[u8; 4]",
            "fn(i32) -> i32",
            "Box<dyn Fn(u8) -> bool>",
        ] {
            assert!(
                validate_field(&field("x", TypeRef::verbatim(ok))).is_ok(),
                "{ok:?} should be accepted"
            );
        }

        for bad in [
            "",
            "i32; fn evil() {}",
            "Vec<i32",
            "(i32, String))",
            "String /* hi */",
            "\"str\"",
            "i32\nfn x()",
        ] {
            assert!(
                matches!(
                    validate_field(&field("x", TypeRef::verbatim(bad))),
                    Err(ValidationError::InvalidType { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_bad_named_types() {
        for bad in ["", "Vec<i32>", "a::", "std::1x", "Foo Bar"] {
            assert!(
                validate_field(&field("x", TypeRef::named(bad))).is_err(),
                "{bad:?} should be rejected"
            );
        }
        let nested = TypeRef::generic("Vec", vec![TypeRef::verbatim("i32;")]);
        assert!(validate_field(&field("x", nested)).is_err());
    }

    #[test]
    fn test_collision_between_case_variants() {
        let accessors: Vec<_> = [field("name", TypeRef::string()), field("Name", TypeRef::string())]
            .iter()
            .map(synthesize)
            .flat_map(|pair| [pair.getter, pair.setter])
            .collect();

        assert_eq!(
            check_collisions(&accessors),
            Err(ValidationError::AccessorCollision {
                method: "getName".into(),
                first: "name".into(),
                second: "Name".into(),
            })
        );
    }

    #[test]
    fn test_distinct_fields_do_not_collide() {
        let accessors: Vec<_> = [field("id", TypeRef::int()), field("name", TypeRef::string())]
            .iter()
            .map(synthesize)
            .flat_map(|pair| [pair.getter, pair.setter])
            .collect();

        assert!(check_collisions(&accessors).is_ok());
    }
}
