use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// First line of every file written by the generator.
pub const GENERATED_MARKER: &str = "// @generated by companion";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    ///
    /// Generated files are always regenerated from scratch. A file whose
    /// content is already identical is left untouched so build tools do not
    /// see a spurious modification.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render()).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, skipping the write when the content is unchanged
    pub fn write(&self) -> Result<WriteResult> {
        let unchanged = std::fs::read_to_string(&self.path)
            .map(|existing| existing == self.content)
            .unwrap_or(false);
        if unchanged {
            tracing::debug!(path = %self.path.display(), "generated file unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)?;
        tracing::debug!(path = %self.path.display(), "generated file written");
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.rs");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("com").join("example").join("user_data.rs");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.rs");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_unchanged_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.rs");

        let file = File::new(&path, "same");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "same");
    }

    #[test]
    fn test_file_write_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("com");
        fs::write(&blocker, "not a directory").unwrap();

        let file = File::new(blocker.join("user_data.rs"), "content");
        let err = file.write().unwrap_err();

        assert!(err.to_string().contains("failed to create directory"));
    }

    #[test]
    fn test_generated_file_trait_writes_under_base() {
        struct Hello;

        impl GeneratedFile for Hello {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("hello.rs")
            }

            fn render(&self) -> String {
                format!("{GENERATED_MARKER}\n")
            }
        }

        let temp = TempDir::new().unwrap();
        assert_eq!(Hello.write(temp.path()).unwrap(), WriteResult::Written);
        assert!(
            fs::read_to_string(temp.path().join("hello.rs"))
                .unwrap()
                .starts_with(GENERATED_MARKER)
        );
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.rs");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
