//! Declarations handed to the generator by a discovery round.

use serde::Serialize;

use crate::TypeRef;

/// The kind of an annotated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// A struct with named fields (or no fields at all).
    Class,
    /// A tuple struct.
    TupleStruct,
    /// An enum.
    Enum,
    /// A trait.
    Interface,
    /// A union.
    Union,
    /// A free function.
    Function,
    /// Anything else carrying the annotation.
    Other,
}

impl DeclarationKind {
    /// Returns true if accessors can be generated for this kind.
    pub fn is_class(&self) -> bool {
        matches!(self, Self::Class)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::TupleStruct => "tuple struct",
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Function => "function",
            Self::Other => "item",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a member inside a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum MemberKind {
    /// A stored field and its declared type.
    Field(TypeRef),
    Method,
    Constructor,
    Constant(TypeRef),
    TypeAlias,
}

impl MemberKind {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}

/// A single member of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDeclaration {
    /// Simple name of the member.
    pub name: String,
    /// Member kind tag.
    #[serde(flatten)]
    pub kind: MemberKind,
}

impl MemberDeclaration {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a field member.
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Field(ty))
    }

    /// Create a method member.
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    /// Create a constructor member.
    pub fn constructor(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Constructor)
    }

    /// Create a constant member.
    pub fn constant(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, MemberKind::Constant(ty))
    }

    /// Create an associated type member.
    pub fn type_alias(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::TypeAlias)
    }
}

/// Module path a declaration lives in.
///
/// The root namespace has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Namespace(Vec<String>);

impl Namespace {
    /// The root namespace.
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a namespace from path segments.
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a `::` or `.` separated path (`com::example`, `com.example`).
    ///
    /// Leading `crate` segments and empty segments are ignored.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split("::")
                .flat_map(|part| part.split('.'))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .enumerate()
                .filter(|(i, s)| !(*i == 0 && *s == "crate"))
                .map(|(_, s)| s.to_string())
                .collect(),
        )
    }

    /// Return a new namespace with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("crate")
        } else {
            f.write_str(&self.0.join("::"))
        }
    }
}

/// An annotated type declaration discovered in a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDeclaration {
    /// Simple name of the type.
    pub name: String,
    /// Namespace the type is declared in.
    pub namespace: Namespace,
    /// Declaration kind.
    pub kind: DeclarationKind,
    /// Members in declaration order.
    pub members: Vec<MemberDeclaration>,
}

impl TypeDeclaration {
    /// Create a declaration with no members.
    pub fn new(name: impl Into<String>, namespace: Namespace, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            namespace,
            kind,
            members: Vec::new(),
        }
    }

    /// Shortcut for a `Class` declaration.
    pub fn class(name: impl Into<String>, namespace: Namespace) -> Self {
        Self::new(name, namespace, DeclarationKind::Class)
    }

    /// Add a member.
    pub fn member(mut self, member: MemberDeclaration) -> Self {
        self.members.push(member);
        self
    }

    /// Add a field member.
    pub fn field(self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.member(MemberDeclaration::field(name, ty))
    }

    /// Fully qualified name (`com::example::User`).
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_root() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_parse() {
        assert_eq!(
            Namespace::parse("com.example").segments(),
            ["com", "example"]
        );
        assert_eq!(
            Namespace::parse("crate::com::example").segments(),
            ["com", "example"]
        );
        assert!(Namespace::parse("").is_root());
        assert!(Namespace::parse("crate").is_root());
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::parse("com.example").to_string(), "com::example");
        assert_eq!(Namespace::root().to_string(), "crate");
        assert_eq!(Namespace::root().child("model").to_string(), "model");
    }

    #[test]
    fn test_declaration_builder() {
        let decl = TypeDeclaration::class("User", Namespace::parse("com.example"))
            .field("id", TypeRef::named("Long"))
            .member(MemberDeclaration::method("describe"));

        assert_eq!(decl.members.len(), 2);
        assert!(decl.members[0].kind.is_field());
        assert_eq!(decl.members[1].kind, MemberKind::Method);
        assert_eq!(decl.qualified_name(), "com::example::User");
        assert!(decl.kind.is_class());
    }

    #[test]
    fn test_root_qualified_name() {
        let decl = TypeDeclaration::new("Shape", Namespace::root(), DeclarationKind::Enum);
        assert_eq!(decl.qualified_name(), "Shape");
        assert!(!decl.kind.is_class());
        assert_eq!(decl.kind.to_string(), "enum");
    }
}
