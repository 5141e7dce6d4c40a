use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use companion_codegen::builder::Indent;
use companion_core::{GENERATED_MARKER, GeneratedFile, Namespace};

use crate::{
    Mod, RustFile,
    naming::{companion_module, safe_ident},
};

/// The module tree under an output directory.
///
/// Every directory that holds companions, or leads to one, gets a `mod.rs`
/// declaring its children, so a single `mod generated;` in the host crate
/// reaches every companion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModuleTree {
    dirs: BTreeMap<PathBuf, BTreeSet<String>>,
}

impl ModuleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the companion named `companion_name` in `namespace`.
    pub fn insert(&mut self, namespace: &Namespace, companion_name: &str) {
        let mut dir = PathBuf::new();
        for segment in namespace.segments() {
            let segment = segment.strip_prefix("r#").unwrap_or(segment);
            self.dirs
                .entry(dir.clone())
                .or_default()
                .insert(segment.to_string());
            dir.push(segment);
        }
        self.dirs
            .entry(dir)
            .or_default()
            .insert(companion_module(companion_name));
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// One `mod.rs` per directory, parents first.
    pub fn files(&self) -> impl Iterator<Item = ModRs<'_>> {
        self.dirs
            .iter()
            .map(|(dir, modules)| ModRs { dir, modules })
    }
}

/// A `mod.rs` declaring the modules of one output directory.
#[derive(Debug)]
pub struct ModRs<'a> {
    dir: &'a Path,
    modules: &'a BTreeSet<String>,
}

impl ModRs<'_> {
    /// Path relative to the output directory (`com/mod.rs`).
    pub fn relative_path(&self) -> PathBuf {
        self.dir.join("mod.rs")
    }
}

impl GeneratedFile for ModRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        RustFile::new()
            .add_group(self.modules.iter().map(|m| Mod::new(safe_ident(m))))
            .render_with_header(
                &format!("{}. Do not edit by hand.", GENERATED_MARKER),
                Indent::RUST,
            )
    }
}
