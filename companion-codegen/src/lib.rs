//! Companion type generation.
//!
//! This crate turns annotated declarations into companion descriptors and
//! drives a round of them through pluggable sinks. Rendering into a target
//! language lives in language crates (e.g., `companion-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`companion`] - Companion descriptors and the extract/synthesize/emit steps
//! - [`pipeline`] - Round processing, diagnostics and sink traits
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod companion;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
