//! Source sinks that render companions as Rust modules.

use std::path::{Path, PathBuf};

use companion_codegen::{companion::CompanionTypeDescriptor, pipeline::SourceSink};
use companion_core::{GeneratedFile, Namespace, WriteResult};
use eyre::Result;

use crate::{
    GeneratorOptions,
    files::{CompanionRs, ModuleTree},
};

/// Writes each companion to `<root>/<namespace dirs>/<snake name>.rs`.
///
/// [`DirectorySink::finish`] then writes the `mod.rs` chain declaring every
/// companion of the round. Files whose content is already up to date are
/// left untouched.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    options: GeneratorOptions,
    modules: ModuleTree,
    written: Vec<PathBuf>,
    unchanged: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>, options: GeneratorOptions) -> Self {
        Self {
            root: root.into(),
            options,
            modules: ModuleTree::new(),
            written: Vec::new(),
            unchanged: Vec::new(),
        }
    }

    /// Write the `mod.rs` files for every companion written so far.
    pub fn finish(&mut self) -> Result<()> {
        for file in self.modules.files() {
            let path = file.path(&self.root);
            match file.write(&self.root)? {
                WriteResult::Written => self.written.push(path),
                WriteResult::Unchanged => self.unchanged.push(path),
            }
        }
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files created or overwritten so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Files that already had the generated content.
    pub fn unchanged(&self) -> &[PathBuf] {
        &self.unchanged
    }

    pub fn into_paths(self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        (self.written, self.unchanged)
    }
}

impl SourceSink for DirectorySink {
    fn write(&mut self, namespace: &Namespace, companion: &CompanionTypeDescriptor) -> Result<()> {
        let file = CompanionRs::new(namespace, companion, &self.options);
        let path = file.path(&self.root);

        match file.write(&self.root)? {
            WriteResult::Written => {
                tracing::debug!(path = %path.display(), "wrote companion");
                self.written.push(path);
            }
            WriteResult::Unchanged => {
                tracing::debug!(path = %path.display(), "companion up to date");
                self.unchanged.push(path);
            }
        }
        self.modules.insert(namespace, companion.name());
        Ok(())
    }
}

/// A generated file that has not been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub content: String,
}

/// Renders companions in memory instead of writing them.
///
/// The `mod.rs` chain follows the companions in [`PreviewSink::into_files`].
#[derive(Debug, Default)]
pub struct PreviewSink {
    options: GeneratorOptions,
    modules: ModuleTree,
    files: Vec<PreviewFile>,
}

impl PreviewSink {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            modules: ModuleTree::new(),
            files: Vec::new(),
        }
    }

    /// Companions rendered so far.
    pub fn files(&self) -> &[PreviewFile] {
        &self.files
    }

    /// Companions followed by the `mod.rs` files that declare them.
    pub fn into_files(self) -> Vec<PreviewFile> {
        let mut files = self.files;
        files.extend(self.modules.files().map(|file| PreviewFile {
            path: slash_path(&file.relative_path()),
            content: file.render(),
        }));
        files
    }
}

fn slash_path(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

impl SourceSink for PreviewSink {
    fn write(&mut self, namespace: &Namespace, companion: &CompanionTypeDescriptor) -> Result<()> {
        let file = CompanionRs::new(namespace, companion, &self.options);
        self.files.push(PreviewFile {
            path: slash_path(&file.relative_path()),
            content: file.render(),
        });
        self.modules.insert(namespace, companion.name());
        Ok(())
    }
}
