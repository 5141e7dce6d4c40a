use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use proc_macro2::LineColumn;
use thiserror::Error;

/// Result type for companion-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "companion.toml");
/// ctx.validation_error("missing [generator] section");
/// ctx.validation_error_at("tab_spaces must be 2, 4 or 8", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create a syntax error from a `syn` parse failure.
    pub fn syntax_error(&self, source: syn::Error) -> Box<Error> {
        let start = byte_offset(&self.src, source.span().start());
        let end = byte_offset(&self.src, source.span().end()).max(start);
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: SourceSpan::from((start, end - start)),
            file: self.filename.clone(),
            source,
        })
    }
}

/// Convert a 1-based line / 0-based char column into a byte offset of `src`.
///
/// Positions past the end of the source clamp to `src.len()`.
pub(crate) fn byte_offset(src: &str, at: LineColumn) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(at.line.saturating_sub(1))
        .map(str::len)
        .sum();
    let line_start = line_start.min(src.len());
    let column: usize = src[line_start..]
        .chars()
        .take_while(|c| *c != '\n')
        .take(at.column)
        .map(char::len_utf8)
        .sum();
    line_start + column
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(companion::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source directory '{path}' does not exist")]
    #[diagnostic(
        code(companion::missing_source),
        help("set [generator].source in companion.toml or pass --source")
    )]
    MissingSource { path: PathBuf },

    #[error("failed to parse companion.toml")]
    #[diagnostic(code(companion::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(companion::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to parse '{file}'")]
    #[diagnostic(
        code(companion::syntax_error),
        help("the file must be valid Rust before accessors can be generated")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: SourceSpan,
        file: String,
        #[source]
        source: syn::Error,
    },
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
