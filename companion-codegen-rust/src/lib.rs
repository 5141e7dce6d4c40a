//! Rust rendering for companion types.
//!
//! [`Generator`] runs a discovery round through the shared pipeline and
//! writes one module per companion with [`DirectorySink`], or renders them
//! in memory with [`PreviewSink`]. Each companion imports its source module,
//! and a `mod.rs` chain under the output directory declares every companion.

mod generator;
mod naming;
mod rust_file;
mod sink;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Field, Fn, Impl, Mod, Param, Receiver, Struct, Use};
pub use generator::{DEFAULT_DERIVES, GenerateResult, Generator, GeneratorOptions};
pub use naming::{RUST_RESERVED, crate_path, is_reserved, safe_ident};
pub use rust_file::RustFile;
pub use sink::{DirectorySink, PreviewFile, PreviewSink};
pub use type_mapper::RustCodeTypeMapper;
