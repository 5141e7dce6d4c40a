//! Check command report data structures.

use std::path::PathBuf;

use companion_codegen::pipeline::{Diagnostic, RoundReport};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from a validation round.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Scanned source directory.
    pub source: PathBuf,
    /// Number of annotated declarations found.
    pub declarations: usize,
    pub round: RoundReport,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.round.has_errors()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} companion{})",
                self.source.display(),
                self.round.generated.len(),
                if self.round.generated.len() == 1 { "" } else { "s" }
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} of {} declarations rejected",
                self.round.skipped.len() + self.round.failed.len(),
                self.declarations
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(skipped: Vec<String>) -> CheckReport {
        CheckReport {
            source: PathBuf::from("src"),
            declarations: 2,
            round: RoundReport {
                generated: vec!["UserData".into()],
                skipped,
                failed: Vec::new(),
            },
            diagnostics: vec![Diagnostic::note("Processing User").at("User")],
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = BufferOutput::default();
        report(Vec::new()).render(&mut out);
        assert_eq!(out.lines, ["✓ src is valid (1 companion)"]);
    }

    #[test]
    fn test_render_invalid() {
        let mut out = BufferOutput::default();
        report(vec!["Shape".into()]).render(&mut out);
        assert_eq!(out.lines, ["✗ 1 of 2 declarations rejected"]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report(Vec::new())).unwrap();
        assert_eq!(json["declarations"], 2);
        assert_eq!(json["round"]["generated"][0], "UserData");
        assert_eq!(json["diagnostics"][0]["severity"], "note");
        assert_eq!(json["diagnostics"][0]["element"], "User");
    }
}
