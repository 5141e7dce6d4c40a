//! The two collaborators a round writes to.

use companion_core::Namespace;
use eyre::Result;

use super::Diagnostic;
use crate::companion::CompanionTypeDescriptor;

/// Receives diagnostics as they are produced.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Turns a companion descriptor into a compilable unit.
///
/// Implementations decide the target language and where the unit lands;
/// the processor only guarantees one call per successfully built companion.
pub trait SourceSink {
    /// Write `companion` into `namespace`.
    ///
    /// # Errors
    ///
    /// Any error is reported as a fatal diagnostic for the element; the
    /// round continues with the next declaration.
    fn write(&mut self, namespace: &Namespace, companion: &CompanionTypeDescriptor) -> Result<()>;
}

/// A sink that accepts every companion and writes nothing.
///
/// Used to validate a round without producing output.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl SourceSink for DiscardSink {
    fn write(&mut self, _namespace: &Namespace, _companion: &CompanionTypeDescriptor) -> Result<()> {
        Ok(())
    }
}
