//! Test utilities for companion generation.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use companion_core::Namespace;
use eyre::{Result, eyre};

use crate::{companion::CompanionTypeDescriptor, pipeline::SourceSink};

/// A source sink that keeps every companion it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    written: Vec<(Namespace, CompanionTypeDescriptor)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Companions written so far with their namespaces.
    pub fn written(&self) -> &[(Namespace, CompanionTypeDescriptor)] {
        &self.written
    }

    /// Names of the companions written so far.
    pub fn names(&self) -> Vec<&str> {
        self.written.iter().map(|(_, c)| c.name()).collect()
    }

    pub fn into_written(self) -> Vec<(Namespace, CompanionTypeDescriptor)> {
        self.written
    }
}

impl SourceSink for MemorySink {
    fn write(&mut self, namespace: &Namespace, companion: &CompanionTypeDescriptor) -> Result<()> {
        self.written.push((namespace.clone(), companion.clone()));
        Ok(())
    }
}

/// A source sink that fails for selected companions and records the rest.
#[derive(Debug, Default, Clone)]
pub struct FailingSink {
    /// Companion name to fail on; `None` fails every write.
    target: Option<String>,
    inner: MemorySink,
}

impl FailingSink {
    /// Fail every write.
    pub fn always() -> Self {
        Self::default()
    }

    /// Fail only writes of the companion named `name`.
    pub fn on(name: impl Into<String>) -> Self {
        Self {
            target: Some(name.into()),
            inner: MemorySink::new(),
        }
    }

    /// Names of the companions that were written successfully.
    pub fn names(&self) -> Vec<&str> {
        self.inner.names()
    }
}

impl SourceSink for FailingSink {
    fn write(&mut self, namespace: &Namespace, companion: &CompanionTypeDescriptor) -> Result<()> {
        match &self.target {
            Some(target) if target != companion.name() => self.inner.write(namespace, companion),
            _ => Err(eyre!("cannot write {}: no space left on device", companion.name())),
        }
    }
}

/// Run `generate` against a fresh temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}
