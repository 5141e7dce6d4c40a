//! Generate operation - discovery plus companion writing.

use companion_codegen::pipeline::DiagnosticSink;
use companion_codegen_rust::Generator;
use companion_manifest::discover;

use super::Settings;
use crate::reports::{GenerateReport, GenerationResult};

/// Execute the generate operation.
///
/// Discovers annotated declarations under the source directory and writes
/// their companions, or renders them in memory when `dry_run` is set.
pub fn generate(
    settings: &Settings,
    dry_run: bool,
    diagnostics: &mut dyn DiagnosticSink,
) -> companion_manifest::Result<GenerateReport> {
    tracing::debug!(
        source = %settings.source.display(),
        output = %settings.output.display(),
        dry_run,
        "generate"
    );
    let declarations = discover(&settings.source, &settings.annotation)?;
    let generator = Generator::new(settings.options.clone());

    let (round, result) = if dry_run {
        let (round, files) = generator.preview(&declarations, diagnostics);
        (round, GenerationResult::Preview(files))
    } else {
        let result = generator.generate(&declarations, &settings.output, diagnostics);
        (
            result.report,
            GenerationResult::Written {
                written: result.written,
                unchanged: result.unchanged,
            },
        )
    };

    Ok(GenerateReport {
        output_dir: settings.output.clone(),
        round,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use companion_codegen::pipeline::Diagnostic;
    use companion_codegen_rust::GeneratorOptions;

    use super::*;

    fn settings(root: &Path) -> Settings {
        Settings {
            source: root.join("src"),
            output: root.join("gen"),
            annotation: "custom_lombok".to_string(),
            options: GeneratorOptions::default(),
        }
    }

    fn write_source(root: &Path) {
        let src = root.join("src/com/example");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(
            src.join("mod.rs"),
            "#[custom_lombok]\npub struct User { id: Long }\n#[custom_lombok]\npub enum Shape { Circle }\n",
        )
        .unwrap();
    }

    #[test]
    fn test_generate_writes_companions() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path());

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let report = generate(&settings(dir.path()), false, &mut diagnostics).unwrap();

        assert_eq!(report.round.generated, ["com::example::UserData"]);
        assert_eq!(report.round.skipped, ["com::example::Shape"]);
        let GenerationResult::Written { written, .. } = &report.result else {
            panic!("expected written result");
        };
        assert_eq!(written[0], dir.path().join("gen/com/example/user_data.rs"));
        assert!(written.contains(&dir.path().join("gen/com/example/mod.rs")));
        assert!(dir.path().join("gen/com/example/user_data.rs").exists());
    }

    #[test]
    fn test_companion_sees_source_module_types() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        std::fs::write(src.join("lib.rs"), "pub mod generated;\npub mod models;\n").unwrap();
        std::fs::write(
            src.join("models.rs"),
            "pub struct Address;\n#[custom_lombok]\npub struct User { pub id: u64, pub address: Address }\n",
        )
        .unwrap();

        let settings = Settings {
            source: src.clone(),
            output: src.join("generated"),
            annotation: "custom_lombok".to_string(),
            options: GeneratorOptions::default(),
        };
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let report = generate(&settings, false, &mut diagnostics).unwrap();
        assert_eq!(report.round.generated, ["models::UserData"]);

        let read = |rel: &str| std::fs::read_to_string(src.join("generated").join(rel)).unwrap();
        let companion = read("models/user_data.rs");
        assert!(companion.contains("\nuse crate::models::*;\n"));
        assert!(companion.contains("    address: Address,\n"));
        assert!(read("mod.rs").ends_with("\npub mod models;\n"));
        assert!(read("models/mod.rs").ends_with("\npub mod user_data;\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_source(dir.path());

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let report = generate(&settings(dir.path()), true, &mut diagnostics).unwrap();

        let GenerationResult::Preview(files) = &report.result else {
            panic!("expected preview result");
        };
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "com/example/user_data.rs",
                "mod.rs",
                "com/mod.rs",
                "com/example/mod.rs",
            ]
        );
        assert!(files[0].content.contains("pub fn getId(&self) -> Long"));
        assert!(!dir.path().join("gen").exists());
    }
}
