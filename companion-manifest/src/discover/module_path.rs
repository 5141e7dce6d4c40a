//! Map source file paths onto module namespaces.

use std::path::Path;

use companion_core::Namespace;

/// Module namespace of `file`, relative to the source `root`.
///
/// `lib.rs`, `main.rs` and `mod.rs` name their directory's module; any
/// other file adds its stem as the last segment.
pub fn module_namespace(root: &Path, file: &Path) -> Namespace {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|dir| dir.components())
        .filter_map(|c| c.as_os_str().to_str())
        .map(String::from)
        .collect();

    match relative.file_stem().and_then(|s| s.to_str()) {
        Some("lib" | "main" | "mod") | None => {}
        Some(stem) => segments.push(stem.to_string()),
    }

    Namespace::new(segments)
}
