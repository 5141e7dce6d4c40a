//! Core utilities and types for the companion generator.
//!
//! This crate provides the declaration model handed to the generation
//! pipeline, the opaque [`TypeRef`] carried from source to output, and
//! shared helpers for naming and writing generated files.

mod file;
mod type_ref;
mod types;
mod utils;

// File operations
pub use file::{File, GENERATED_MARKER, GeneratedFile, WriteResult};
// Fundamental types
pub use type_ref::{PrimitiveType, TypeRef};
pub use types::{DeclarationKind, MemberDeclaration, MemberKind, Namespace, TypeDeclaration};
// String utilities
pub use utils::{capitalize, is_valid_identifier, to_snake_case};
