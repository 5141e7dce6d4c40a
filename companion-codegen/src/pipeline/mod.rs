//! Round processing for annotated declarations.
//!
//! A [`Processor`] walks one discovery round and, for every declaration:
//!
//! - reports a note when a class is picked up
//! - rejects non-class elements and unrenderable fields with an error
//! - writes each built companion to a [`SourceSink`] exactly once
//!
//! Failures never abort the round; they surface as [`Diagnostic`]s and in
//! the returned [`RoundReport`].
//!
//! # Example
//!
//! ```ignore
//! use companion_codegen::pipeline::Processor;
//!
//! let report = Processor::new().process(&declarations, &mut console, &mut sink);
//! if report.has_errors() {
//!     std::process::exit(1);
//! }
//! ```

mod diagnostic;
mod processor;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use processor::{Processor, RoundReport};
pub use sink::{DiagnosticSink, DiscardSink, SourceSink};
