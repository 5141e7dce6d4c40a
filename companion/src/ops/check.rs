//! Check operation - discovery and validation without output.

use companion_codegen::pipeline::{Diagnostic, DiscardSink, Processor};
use companion_manifest::discover;

use super::Settings;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the full pipeline against a sink that discards every companion, so
/// the diagnostics match what `generate` would report.
pub fn check(settings: &Settings) -> companion_manifest::Result<CheckReport> {
    let declarations = discover(&settings.source, &settings.annotation)?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let round = Processor::new().process(&declarations, &mut diagnostics, &mut DiscardSink);

    Ok(CheckReport {
        source: settings.source.clone(),
        declarations: declarations.len(),
        round,
        diagnostics,
    })
}
