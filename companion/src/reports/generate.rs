//! Generate command report data structures.

use std::path::{Path, PathBuf};

use companion_codegen::pipeline::RoundReport;
use companion_codegen_rust::PreviewFile;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// What happened to each discovered declaration.
    pub round: RoundReport,
    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        written: Vec<PathBuf>,
        unchanged: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { written, unchanged } => {
                self.render_written(out, written, unchanged)
            }
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &[PathBuf], unchanged: &[PathBuf]) {
        out.key_value("Generated", &self.output_dir.display().to_string());
        for path in written {
            out.added_item(&self.relative(path));
        }
        if !unchanged.is_empty() {
            out.key_value("Unchanged", &unchanged.len().to_string());
        }
        self.render_rejected(out);
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        ));
        self.render_rejected(out);
    }

    fn render_rejected(&self, out: &mut dyn Output) {
        if !self.round.skipped.is_empty() {
            out.newline();
            out.key_value("Skipped", &self.round.skipped.len().to_string());
            for name in &self.round.skipped {
                out.list_item(name);
            }
        }

        if !self.round.failed.is_empty() {
            out.newline();
            out.key_value("Failed", &self.round.failed.len().to_string());
            for name in &self.round.failed {
                out.list_item(name);
            }
        }
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.output_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            output_dir: PathBuf::from("gen"),
            round: RoundReport {
                generated: vec!["UserData".into()],
                skipped: vec!["Shape".into()],
                failed: Vec::new(),
            },
            result: GenerationResult::Written {
                written: vec![PathBuf::from("gen").join("user_data.rs")],
                unchanged: Vec::new(),
            },
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "Generated: gen",
                "  + user_data.rs",
                "",
                "Skipped: 1",
                "  - Shape"
            ]
        );
    }

    #[test]
    fn test_render_preview_summary() {
        let report = GenerateReport {
            output_dir: PathBuf::from("gen"),
            round: RoundReport::default(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "user_data.rs".into(),
                content: "pub struct UserData {}".into(),
            }]),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "── user_data.rs ──",
                "pub struct UserData {}",
                "── Summary ──",
                "1 file would be generated"
            ]
        );
    }
}
