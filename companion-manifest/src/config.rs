use std::{path::Path, str::FromStr};

use companion_core::is_valid_identifier;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Default annotation name recognised by discovery.
pub const DEFAULT_ANNOTATION: &str = "custom_lombok";

/// Root schema for companion.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory scanned for annotated declarations.
    pub source: String,
    /// Directory companions are written into.
    pub output: String,
    /// Attribute name that marks a declaration.
    pub annotation: String,
    /// Derives placed on every companion struct.
    pub derives: Vec<String>,
    /// Indent generated files with tabs.
    pub hard_tabs: bool,
    /// Spaces per indent level when `hard_tabs` is off.
    pub tab_spaces: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: "src".to_string(),
            output: "src/generated".to_string(),
            annotation: DEFAULT_ANNOTATION.to_string(),
            derives: ["Debug", "Clone", "Default"].map(String::from).to_vec(),
            hard_tabs: false,
            tab_spaces: 4,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "companion.toml")
    }
}

impl Config {
    /// Parse a companion.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a companion.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let generator = &self.generator;

        if !is_valid_identifier(&generator.annotation) {
            return Err(at_value(
                ctx,
                "annotation",
                format!("annotation '{}' is not a valid identifier", generator.annotation),
            ));
        }

        for derive in &generator.derives {
            if !is_derive_path(derive) {
                return Err(at_value(
                    ctx,
                    "derives",
                    format!("derive '{}' is not a valid path", derive),
                ));
            }
        }

        if !generator.hard_tabs && !matches!(generator.tab_spaces, 2 | 4 | 8) {
            return Err(at_value(ctx, "tab_spaces", "tab_spaces must be 2, 4 or 8"));
        }

        if generator.output.trim().is_empty() {
            return Err(at_value(ctx, "output", "output directory cannot be empty"));
        }

        Ok(())
    }
}

fn is_derive_path(derive: &str) -> bool {
    let path = derive.strip_prefix("::").unwrap_or(derive);
    !path.is_empty() && path.split("::").all(is_valid_identifier)
}

fn at_value(ctx: &SourceContext, key: &str, message: impl Into<String>) -> Box<Error> {
    match find_key_span(ctx.src(), key) {
        Some(span) => ctx.validation_error_at(message, span),
        None => ctx.validation_error(message),
    }
}

/// Locate the value of `key = ...` on its line.
fn find_key_span(src: &str, key: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        if let Some((lhs, rhs)) = line.split_once('=')
            && lhs.trim() == key
        {
            let value = rhs.split(" #").next().unwrap_or(rhs);
            let leading = value.len() - value.trim_start().len();
            let start = offset + lhs.len() + 1 + leading;
            return Some((start, value.trim().len()));
        }
        offset += line.len();
    }
    None
}
