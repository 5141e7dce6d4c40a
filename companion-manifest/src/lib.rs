//! Configuration and source discovery for the companion generator.
//!
//! - [`CompanionToml`] / [`Config`] load `companion.toml`.
//! - [`discover`] walks a source tree and yields annotated declarations.
//!
//! Every error is a [`miette`] diagnostic with the offending file and span.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
pub mod discover;
mod error;
mod file;

pub use config::{Config, DEFAULT_ANNOTATION, GeneratorConfig};
pub use discover::{discover, parse_source};
pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE, CompanionToml};
