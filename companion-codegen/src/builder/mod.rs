//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`TypeMapper`] - Trait for language-specific rendering of [`TypeRef`]

mod code_builder;
mod indent;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use companion_core::{PrimitiveType, TypeRef};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use types::{TypeMapper, Visibility};
