//! The companion model and the three generation steps.
//!
//! - [`extract_fields`] projects a declaration onto its fields.
//! - [`synthesize`] builds the getter/setter pair for one field.
//! - [`emit`] assembles the [`CompanionTypeDescriptor`] and writes it once.

mod descriptor;
mod emit;
mod extract;
mod synthesize;
pub mod validate;

pub use descriptor::{
    AccessorBody, AccessorDescriptor, AccessorKind, AccessorPair, COMPANION_SUFFIX,
    CompanionTypeDescriptor, FieldDescriptor, companion_name,
};
pub use emit::{EmitError, build_companion, emit};
pub use extract::extract_fields;
pub use synthesize::{accessor_name, synthesize};
pub use validate::ValidationError;
