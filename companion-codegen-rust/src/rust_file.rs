//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files from a header
//! comment and a sequence of items.

use companion_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a Rust file.
///
/// # Example
///
/// ```ignore
/// let file = RustFile::new()
///     .add(companion_struct)
///     .add(accessor_impl)
///     .render_with_header("// @generated", Indent::RUST);
/// ```
#[derive(Default)]
pub struct RustFile {
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add several items rendered without blank lines between them.
    pub fn add_group<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        let fragments: Vec<_> = nodes.into_iter().flat_map(|n| n.to_fragments()).collect();
        if !fragments.is_empty() {
            self.body.push(fragments);
        }
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::RUST)
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str, indent: Indent) -> String {
        let content = self.render_with_indent(indent);
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        // Blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
