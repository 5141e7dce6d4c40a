//! Descriptors for a generated companion type.
//!
//! Every descriptor is a plain value built in one go; nothing is mutated
//! after construction.

use companion_core::TypeRef;
use serde::Serialize;

use crate::builder::Visibility;

/// Suffix appended to the source type name to form the companion name.
pub const COMPANION_SUFFIX: &str = "Data";

/// Name of the companion generated for `source_name`.
pub fn companion_name(source_name: &str) -> String {
    format!("{}{}", source_name, COMPANION_SUFFIX)
}

/// Metadata for one source field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field name, without any raw-identifier prefix.
    pub name: String,
    /// Declared type, carried through untouched.
    pub ty: TypeRef,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Companion fields are always private.
    pub fn visibility(&self) -> Visibility {
        Visibility::Private
    }
}

/// Getter or setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl AccessorKind {
    /// Method name prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Getter => "get",
            Self::Setter => "set",
        }
    }
}

/// The single statement making up an accessor body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum AccessorBody {
    /// Return the stored value of `field`.
    ReturnField { field: String },
    /// Assign parameter `param` into the receiver's `field`.
    ///
    /// The target is always qualified with the receiver, since `param` and
    /// `field` share a name.
    AssignField { field: String, param: String },
}

/// A getter or setter generated for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorDescriptor {
    pub kind: AccessorKind,
    pub method_name: String,
    pub field: FieldDescriptor,
    pub body: AccessorBody,
}

impl AccessorDescriptor {
    /// Accessors are always public.
    pub fn visibility(&self) -> Visibility {
        Visibility::Public
    }

    /// Return type: the field type for getters, nothing for setters.
    pub fn return_type(&self) -> Option<&TypeRef> {
        match self.kind {
            AccessorKind::Getter => Some(&self.field.ty),
            AccessorKind::Setter => None,
        }
    }

    /// The single `(name, type)` parameter of a setter.
    pub fn param(&self) -> Option<(&str, &TypeRef)> {
        match &self.body {
            AccessorBody::AssignField { param, .. } => Some((param.as_str(), &self.field.ty)),
            AccessorBody::ReturnField { .. } => None,
        }
    }

    pub fn is_getter(&self) -> bool {
        matches!(self.kind, AccessorKind::Getter)
    }

    pub fn is_setter(&self) -> bool {
        matches!(self.kind, AccessorKind::Setter)
    }
}

/// The getter/setter pair synthesized for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorPair {
    pub getter: AccessorDescriptor,
    pub setter: AccessorDescriptor,
}

/// The full description of one companion type.
///
/// Built only by [`emit`](super::emit), which guarantees exactly one getter
/// and one setter per field, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanionTypeDescriptor {
    name: String,
    source_name: String,
    fields: Vec<FieldDescriptor>,
    accessors: Vec<AccessorDescriptor>,
}

impl CompanionTypeDescriptor {
    pub(crate) fn new(
        source_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        accessors: Vec<AccessorDescriptor>,
    ) -> Self {
        let source_name = source_name.into();
        Self {
            name: companion_name(&source_name),
            source_name,
            fields,
            accessors,
        }
    }

    /// Companion type name (`UserData`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the annotated source type (`User`).
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn accessors(&self) -> &[AccessorDescriptor] {
        &self.accessors
    }

    /// The companion type itself is always public.
    pub fn visibility(&self) -> Visibility {
        Visibility::Public
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_name() {
        assert_eq!(companion_name("User"), "UserData");
        assert_eq!(companion_name("Data"), "DataData");
    }

    #[test]
    fn test_accessor_kind_prefix() {
        assert_eq!(AccessorKind::Getter.prefix(), "get");
        assert_eq!(AccessorKind::Setter.prefix(), "set");
    }

    #[test]
    fn test_field_is_private() {
        let field = FieldDescriptor::new("id", TypeRef::named("Long"));
        assert!(field.visibility().is_private());
    }

    #[test]
    fn test_setter_param_and_return_type() {
        let field = FieldDescriptor::new("age", TypeRef::int());
        let setter = AccessorDescriptor {
            kind: AccessorKind::Setter,
            method_name: "setAge".into(),
            field: field.clone(),
            body: AccessorBody::AssignField {
                field: "age".into(),
                param: "age".into(),
            },
        };

        assert!(setter.visibility().is_public());
        assert!(setter.return_type().is_none());
        assert_eq!(setter.param(), Some(("age", &TypeRef::int())));
    }
}
