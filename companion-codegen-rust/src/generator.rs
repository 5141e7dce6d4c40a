use std::path::{Path, PathBuf};

use companion_codegen::{
    builder::Indent,
    pipeline::{Diagnostic, DiagnosticSink, Processor, RoundReport},
};
use companion_core::TypeDeclaration;

use crate::{DirectorySink, PreviewFile, PreviewSink};

/// Default derives placed on every companion struct.
pub const DEFAULT_DERIVES: &[&str] = &["Debug", "Clone", "Default"];

/// Rendering options for generated companions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Traits listed in `#[derive(..)]`; empty omits the attribute.
    pub derives: Vec<String>,
    pub indent: Indent,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            derives: DEFAULT_DERIVES.iter().map(|d| d.to_string()).collect(),
            indent: Indent::RUST,
        }
    }
}

impl GeneratorOptions {
    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

/// Outcome of writing a round to disk.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub report: RoundReport,
    /// Files created or overwritten.
    pub written: Vec<PathBuf>,
    /// Files that already had the generated content.
    pub unchanged: Vec<PathBuf>,
}

/// Rust companion generator.
///
/// One call processes a whole discovery round, so it can be driven from a
/// build script as well as from the CLI:
///
/// ```ignore
/// let declarations = companion_manifest::discover(Path::new("src"), "custom_lombok")?;
/// let mut diagnostics = Vec::new();
/// Generator::default().generate(&declarations, &out_dir, &mut diagnostics);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate companions for `declarations` into `output_dir`.
    ///
    /// Companions import their source module through `crate::`, so the
    /// source directory is expected to be the crate's `src`.
    pub fn generate(
        &self,
        declarations: &[TypeDeclaration],
        output_dir: &Path,
        diagnostics: &mut dyn DiagnosticSink,
    ) -> GenerateResult {
        let mut sink = DirectorySink::new(output_dir, self.options.clone());
        let report = Processor::new().process(declarations, diagnostics, &mut sink);
        if let Err(err) = sink.finish() {
            tracing::warn!(error = %err, "module files not written");
            diagnostics.report(Diagnostic::error(format!("FATAL ERROR: {err:#}")));
        }
        let (written, unchanged) = sink.into_paths();

        GenerateResult {
            report,
            written,
            unchanged,
        }
    }

    /// Render companions for `declarations` without touching the disk.
    pub fn preview(
        &self,
        declarations: &[TypeDeclaration],
        diagnostics: &mut dyn DiagnosticSink,
    ) -> (RoundReport, Vec<PreviewFile>) {
        let mut sink = PreviewSink::new(self.options.clone());
        let report = Processor::new().process(declarations, diagnostics, &mut sink);
        (report, sink.into_files())
    }
}

#[cfg(test)]
mod tests {
    use companion_core::{DeclarationKind, Namespace, TypeRef};

    use super::*;

    fn round() -> Vec<TypeDeclaration> {
        vec![
            TypeDeclaration::class("User", Namespace::parse("com.example"))
                .field("id", TypeRef::named("Long")),
            TypeDeclaration::new("Shape", Namespace::root(), DeclarationKind::Interface),
        ]
    }

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert_eq!(options.derives, ["Debug", "Clone", "Default"]);
        assert_eq!(options.indent, Indent::RUST);
    }

    #[test]
    fn test_generate_writes_only_classes() {
        let dir = tempfile::tempdir().unwrap();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let result = Generator::default().generate(&round(), dir.path(), &mut diagnostics);

        assert_eq!(result.report.generated, ["com::example::UserData"]);
        assert_eq!(result.report.skipped, ["Shape"]);
        assert_eq!(
            result.written,
            [
                dir.path().join("com/example/user_data.rs"),
                dir.path().join("mod.rs"),
                dir.path().join("com/mod.rs"),
                dir.path().join("com/example/mod.rs"),
            ]
        );
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_generate_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("com/example/user_data.rs");

        Generator::default().generate(&round(), dir.path(), &mut Vec::<Diagnostic>::new());
        let first = std::fs::read(&path).unwrap();
        let again = Generator::default().generate(&round(), dir.path(), &mut Vec::<Diagnostic>::new());
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert!(again.written.is_empty());
        assert_eq!(again.unchanged.len(), 4);
        assert_eq!(again.unchanged[0], path);
    }

    #[test]
    fn test_preview_matches_generate() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(GeneratorOptions::default().derives(["Debug"]));

        generator.generate(&round(), dir.path(), &mut Vec::<Diagnostic>::new());
        let (report, files) = generator.preview(&round(), &mut Vec::<Diagnostic>::new());

        assert_eq!(report.generated.len(), 1);
        assert_eq!(files.len(), 4);
        for file in &files {
            let on_disk = std::fs::read_to_string(dir.path().join(&file.path)).unwrap();
            assert_eq!(on_disk, file.content);
        }
        assert!(files[0].content.contains("#[derive(Debug)]\n"));
    }

    #[test]
    fn test_module_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the root mod.rs should be
        std::fs::create_dir_all(dir.path().join("mod.rs")).unwrap();

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let result = Generator::default().generate(&round(), dir.path(), &mut diagnostics);

        assert_eq!(result.report.generated, ["com::example::UserData"]);
        let last = diagnostics.last().unwrap();
        assert!(last.severity.is_error());
        assert!(last.message.starts_with("FATAL ERROR: failed to write"));
    }
}
