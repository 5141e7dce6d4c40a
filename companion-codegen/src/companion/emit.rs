//! Type emission: assemble a companion and hand it to the source sink.

use companion_core::{DeclarationKind, TypeDeclaration};

use super::{
    CompanionTypeDescriptor, extract_fields, synthesize,
    validate::{ValidationError, check_collisions, validate_field},
};
use crate::pipeline::SourceSink;

/// Why a companion was not produced for an element.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The annotation was placed on something other than a class.
    #[error("CustomLombok can not be used on {name}")]
    NotAClass { name: String, kind: DeclarationKind },

    /// A field cannot be rendered safely.
    #[error("cannot generate companion for {name}: {source}")]
    Invalid {
        name: String,
        source: ValidationError,
    },

    /// The source sink failed to write the generated unit.
    #[error("FATAL ERROR: {0:#}")]
    Sink(eyre::Report),
}

impl EmitError {
    /// Sink failures are fatal for the element; everything else is a
    /// rejected declaration.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}

/// Build the companion descriptor for `decl` without writing it.
///
/// Fails if `decl` is not a class or one of its fields cannot be rendered.
pub fn build_companion(decl: &TypeDeclaration) -> Result<CompanionTypeDescriptor, EmitError> {
    if !decl.kind.is_class() {
        return Err(EmitError::NotAClass {
            name: decl.name.clone(),
            kind: decl.kind,
        });
    }

    let invalid = |source| EmitError::Invalid {
        name: decl.name.clone(),
        source,
    };

    let fields = extract_fields(decl);
    for field in &fields {
        validate_field(field).map_err(invalid)?;
    }

    let accessors: Vec<_> = fields
        .iter()
        .map(synthesize)
        .flat_map(|pair| [pair.getter, pair.setter])
        .collect();
    check_collisions(&accessors).map_err(invalid)?;

    Ok(CompanionTypeDescriptor::new(&decl.name, fields, accessors))
}

/// Build the companion for `decl` and write it to `sink` exactly once,
/// addressed by the declaration's namespace.
pub fn emit(
    decl: &TypeDeclaration,
    sink: &mut dyn SourceSink,
) -> Result<CompanionTypeDescriptor, EmitError> {
    let companion = build_companion(decl)?;
    sink.write(&decl.namespace, &companion)
        .map_err(EmitError::Sink)?;
    Ok(companion)
}
