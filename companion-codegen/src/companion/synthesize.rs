//! Accessor synthesis: one getter and one setter per field.

use companion_core::capitalize;

use super::{AccessorBody, AccessorDescriptor, AccessorKind, AccessorPair, FieldDescriptor};

/// Method name for an accessor of `field_name` (`age` -> `getAge`).
///
/// Only the first character is uppercased; `_id` yields `get_id`.
pub fn accessor_name(kind: AccessorKind, field_name: &str) -> String {
    format!("{}{}", kind.prefix(), capitalize(field_name))
}

/// Build the getter and setter for `field`.
///
/// Pure and total. Name collisions between fields are not detected here.
pub fn synthesize(field: &FieldDescriptor) -> AccessorPair {
    let getter = AccessorDescriptor {
        kind: AccessorKind::Getter,
        method_name: accessor_name(AccessorKind::Getter, &field.name),
        field: field.clone(),
        body: AccessorBody::ReturnField {
            field: field.name.clone(),
        },
    };

    let setter = AccessorDescriptor {
        kind: AccessorKind::Setter,
        method_name: accessor_name(AccessorKind::Setter, &field.name),
        field: field.clone(),
        body: AccessorBody::AssignField {
            field: field.name.clone(),
            param: field.name.clone(),
        },
    };

    AccessorPair { getter, setter }
}
