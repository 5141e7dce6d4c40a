//! Round orchestrator.

use companion_core::TypeDeclaration;
use serde::Serialize;

use super::{Diagnostic, DiagnosticSink, SourceSink};
use crate::companion::{EmitError, emit};

/// Summary of one processed round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// Qualified names of the companions handed to the source sink.
    pub generated: Vec<String>,
    /// Qualified names of elements rejected before generation.
    pub skipped: Vec<String>,
    /// Qualified names of elements whose companion could not be written.
    pub failed: Vec<String>,
}

impl RoundReport {
    /// Total number of elements seen in the round.
    pub fn processed(&self) -> usize {
        self.generated.len() + self.skipped.len() + self.failed.len()
    }

    /// Returns true if any element produced an error diagnostic.
    pub fn has_errors(&self) -> bool {
        !self.skipped.is_empty() || !self.failed.is_empty()
    }
}

/// Runs the extract, synthesize and emit steps over a discovery round.
///
/// Each declaration is handled independently: a rejected or failed element
/// is reported and the round moves on.
///
/// # Example
///
/// ```
/// use companion_codegen::pipeline::{Diagnostic, DiscardSink, Processor};
/// use companion_core::{Namespace, TypeDeclaration, TypeRef};
///
/// let user = TypeDeclaration::class("User", Namespace::parse("com.example"))
///     .field("id", TypeRef::named("Long"));
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let report = Processor::new().process([&user], &mut diagnostics, &mut DiscardSink);
///
/// assert_eq!(report.generated, ["com::example::UserData"]);
/// assert_eq!(diagnostics[0].message, "Processing User");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Processor;

impl Processor {
    pub fn new() -> Self {
        Self
    }

    /// Process every declaration in `declarations`, in iteration order.
    pub fn process<'a>(
        &self,
        declarations: impl IntoIterator<Item = &'a TypeDeclaration>,
        diagnostics: &mut dyn DiagnosticSink,
        sources: &mut dyn SourceSink,
    ) -> RoundReport {
        let mut report = RoundReport::default();

        for decl in declarations {
            let element = decl.qualified_name();
            let _span = tracing::debug_span!("element", %element).entered();

            if decl.kind.is_class() {
                diagnostics.report(Diagnostic::note(format!("Processing {}", decl.name)).at(&element));
            }

            match emit(decl, sources) {
                Ok(companion) => {
                    tracing::debug!(companion = companion.name(), "companion written");
                    report.generated.push(qualify(decl, companion.name()));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "element not generated");
                    diagnostics.report(Diagnostic::error(err.to_string()).at(&element));
                    match err {
                        EmitError::Sink(_) => report.failed.push(element),
                        EmitError::NotAClass { .. } | EmitError::Invalid { .. } => {
                            report.skipped.push(element)
                        }
                    }
                }
            }
        }

        tracing::info!(
            generated = report.generated.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "round complete"
        );
        report
    }
}

fn qualify(decl: &TypeDeclaration, name: &str) -> String {
    if decl.namespace.is_root() {
        name.to_string()
    } else {
        format!("{}::{}", decl.namespace, name)
    }
}

#[cfg(test)]
mod tests {
    use companion_core::{DeclarationKind, Namespace, TypeRef};

    use super::*;
    use crate::{
        pipeline::Severity,
        testing::{FailingSink, MemorySink},
    };

    fn user() -> TypeDeclaration {
        TypeDeclaration::class("User", Namespace::parse("com.example"))
            .field("id", TypeRef::named("Long"))
            .field("age", TypeRef::int())
    }

    fn shape() -> TypeDeclaration {
        TypeDeclaration::new("Shape", Namespace::root(), DeclarationKind::Interface)
    }

    #[test]
    fn test_single_class() {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut sink = MemorySink::new();
        let report = Processor::new().process([&user()], &mut diagnostics, &mut sink);

        assert_eq!(report.generated, ["com::example::UserData"]);
        assert!(!report.has_errors());
        assert_eq!(
            diagnostics,
            [Diagnostic::note("Processing User").at("com::example::User")]
        );
        assert_eq!(sink.names(), ["UserData"]);
    }

    #[test]
    fn test_non_class_reports_one_error_and_batch_continues() {
        let decls = [shape(), user()];
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut sink = MemorySink::new();
        let report = Processor::new().process(&decls, &mut diagnostics, &mut sink);

        let errors: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "CustomLombok can not be used on Shape");
        assert_eq!(errors[0].element.as_deref(), Some("Shape"));

        assert_eq!(report.skipped, ["Shape"]);
        assert_eq!(report.generated, ["com::example::UserData"]);
        assert_eq!(sink.names(), ["UserData"]);
        assert_eq!(report.processed(), 2);
    }

    #[test]
    fn test_sink_failure_is_isolated_to_element() {
        let other = TypeDeclaration::class("Account", Namespace::root())
            .field("balance", TypeRef::float());
        let decls = [user(), other];
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut sink = FailingSink::on("UserData");
        let report = Processor::new().process(&decls, &mut diagnostics, &mut sink);

        assert_eq!(report.failed, ["com::example::User"]);
        assert_eq!(report.generated, ["AccountData"]);
        assert!(report.has_errors());

        let fatal: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .collect();
        assert_eq!(fatal.len(), 1);
        assert!(fatal[0].message.starts_with("FATAL ERROR: "));
        assert_eq!(sink.names(), ["AccountData"]);
    }

    #[test]
    fn test_rounds_are_deterministic() {
        let decls = [user(), shape()];

        let run = || {
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            let mut sink = MemorySink::new();
            let report = Processor::new().process(&decls, &mut diagnostics, &mut sink);
            (report, diagnostics, sink.into_written())
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_empty_round() {
        let decls: [TypeDeclaration; 0] = [];
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let report = Processor::new().process(&decls, &mut diagnostics, &mut MemorySink::new());

        assert_eq!(report, RoundReport::default());
        assert!(diagnostics.is_empty());
    }
}
