//! Discovery of annotated declarations in Rust sources.
//!
//! A discovery round walks a source directory in sorted order, parses every
//! `.rs` file with `syn`, and yields the annotated items as
//! [`TypeDeclaration`]s in a deterministic order: files by path, items in
//! source order within a file.

mod convert;
mod module_path;
mod scan;

use std::path::{Path, PathBuf};

use companion_core::{Namespace, TypeDeclaration};
pub use convert::type_ref;
pub use module_path::module_namespace;

use crate::{Error, Result, SourceContext};

/// Discover annotated declarations under `root`.
///
/// # Errors
///
/// Fails if `root` does not exist, a file cannot be read, or a file is not
/// valid Rust. Syntax errors carry the file name and span.
pub fn discover(root: &Path, annotation: &str) -> Result<Vec<TypeDeclaration>> {
    if !root.is_dir() {
        return Err(Box::new(Error::MissingSource {
            path: root.to_path_buf(),
        }));
    }

    let files = rust_files(root)?;
    let mut found = Vec::new();
    for file in &files {
        let src = std::fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
        let namespace = module_namespace(root, file);
        let filename = file.display().to_string();
        found.extend(parse_source(&src, &filename, &namespace, annotation)?);
    }

    tracing::info!(
        root = %root.display(),
        files = files.len(),
        declarations = found.len(),
        "discovery complete"
    );
    Ok(found)
}

/// Parse one source file and collect its annotated declarations.
pub fn parse_source(
    src: &str,
    filename: &str,
    namespace: &Namespace,
    annotation: &str,
) -> Result<Vec<TypeDeclaration>> {
    let file = syn::parse_file(src).map_err(|e| SourceContext::new(src, filename).syntax_error(e))?;

    let mut scanner = scan::Scanner::new(annotation);
    scanner.scan(&file.items, namespace);
    Ok(scanner.finish())
}

/// All `.rs` files below `dir`, sorted by path.
fn rust_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(())
}
