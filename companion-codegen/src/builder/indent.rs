//! Indentation configuration for code generation.

/// Indentation style for generated code.
///
/// Mirrors rustfmt's `hard_tabs` / `tab_spaces` pair so generated files can
/// follow the host crate's formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2, 4 or 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (rustfmt default).
    pub const RUST: Self = Self::Spaces(4);

    /// Build from rustfmt-style settings.
    pub fn from_rustfmt(hard_tabs: bool, tab_spaces: u8) -> Self {
        if hard_tabs {
            Self::Tab
        } else {
            Self::Spaces(tab_spaces)
        }
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::RUST
    }
}
