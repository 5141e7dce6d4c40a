use std::path::PathBuf;

use companion_codegen::builder::Indent;
use companion_codegen_rust::GeneratorOptions;
use companion_manifest::CompanionToml;

/// Resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub output: PathBuf,
    pub annotation: String,
    pub options: GeneratorOptions,
}

impl Settings {
    pub fn from_file(file: &CompanionToml) -> Self {
        let generator = &file.config().generator;
        Self {
            source: file.source_dir(),
            output: file.output_dir(),
            annotation: generator.annotation.clone(),
            options: GeneratorOptions::default()
                .derives(generator.derives.iter().cloned())
                .indent(Indent::from_rustfmt(generator.hard_tabs, generator.tab_spaces)),
        }
    }
}
