//! Field extraction: project a declaration's members onto field descriptors.

use companion_core::{MemberKind, TypeDeclaration};

use super::FieldDescriptor;

/// Collect the fields of `decl` in declaration order.
///
/// Methods, constructors, constants and associated types are skipped.
pub fn extract_fields(decl: &TypeDeclaration) -> Vec<FieldDescriptor> {
    decl.members
        .iter()
        .filter_map(|member| match &member.kind {
            MemberKind::Field(ty) => Some(FieldDescriptor::new(&member.name, ty.clone())),
            _ => None,
        })
        .collect()
}
