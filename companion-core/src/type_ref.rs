//! Language-agnostic type references.
//!
//! A [`TypeRef`] is carried unmodified from a source field to the generated
//! accessor signatures. The generator never inspects what a type means, it
//! only renders it back through a language-specific type mapper.

use serde::Serialize;

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeRef {
    /// A primitive type (string, int, bool, etc.).
    Primitive(PrimitiveType),
    /// A named type, possibly path-qualified (e.g., `Long`, `std::path::PathBuf`).
    Named(String),
    /// A parameterized type with type arguments.
    Generic {
        /// Base type name (e.g., "Vec", "HashMap").
        base: String,
        /// Type arguments (e.g., [String, Int] for `HashMap<String, i64>`).
        args: Vec<TypeRef>,
    },
    /// Source text of a type that has no structured form (tuples, references,
    /// arrays, function pointers).
    Verbatim(String),
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a generic type reference.
    pub fn generic(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Generic {
            base: base.into(),
            args,
        }
    }

    /// Create a verbatim type reference.
    pub fn verbatim(text: impl Into<String>) -> Self {
        Self::Verbatim(text.into())
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: Int type.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: Float type.
    pub fn float() -> Self {
        Self::Primitive(PrimitiveType::Float)
    }

    /// Convenience: Bool type.
    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }
}

/// Primitive types supported across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    /// String type (Rust: String).
    String,
    /// Integer type (Rust: i64).
    Int,
    /// Unsigned integer (Rust: u64).
    UInt,
    /// Float type (Rust: f64).
    Float,
    /// Boolean type (Rust: bool).
    Bool,
    /// Character type (Rust: char).
    Char,
    /// Byte type (Rust: u8).
    Byte,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Byte => "byte",
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Named(name) | Self::Verbatim(name) => f.write_str(name),
            Self::Generic { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_type_as_str() {
        assert_eq!(PrimitiveType::String.as_str(), "string");
        assert_eq!(PrimitiveType::Int.as_str(), "int");
        assert_eq!(PrimitiveType::Bool.as_str(), "bool");
    }

    #[test]
    fn test_type_ref_constructors() {
        assert_eq!(TypeRef::string(), TypeRef::Primitive(PrimitiveType::String));
        assert_eq!(TypeRef::named("Long"), TypeRef::Named("Long".into()));
        assert_eq!(
            TypeRef::verbatim("&'static str"),
            TypeRef::Verbatim("&'static str".into())
        );
    }

    #[test]
    fn test_display_generic() {
        let map = TypeRef::generic(
            "HashMap",
            vec![
                TypeRef::named("String"),
                TypeRef::generic("Vec", vec![TypeRef::named("u8")]),
            ],
        );
        assert_eq!(map.to_string(), "HashMap<String, Vec<u8>>");
    }
}
