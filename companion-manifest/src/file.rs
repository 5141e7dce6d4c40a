use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Conventional config file name.
pub const CONFIG_FILE: &str = "companion.toml";

/// Represents a companion.toml file with both raw content and parsed config.
///
/// Relative `source` and `output` directories resolve against the directory
/// holding the file.
#[derive(Debug, Clone)]
pub struct CompanionToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl CompanionToml {
    /// Open and parse a companion.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path` if it exists, otherwise fall back to the default config
    /// rooted next to where the file would be.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(Self {
            path: path.to_path_buf(),
            content: String::new(),
            config: Config::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative paths in the config resolve against.
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Resolved source directory.
    pub fn source_dir(&self) -> PathBuf {
        self.root().join(&self.config.generator.source)
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root().join(&self.config.generator.output)
    }
}
