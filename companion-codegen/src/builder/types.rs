//! Visibility and type rendering for code generation.
//!
//! [`TypeRef`] itself lives in `companion-core` because declarations carry
//! it; this module only knows how to turn it into target-language text.

use companion_core::{PrimitiveType, TypeRef};

/// Visibility/access level for types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Public (Rust: pub).
    #[default]
    Public,
    /// Private (Rust: no modifier).
    Private,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is a private visibility.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map a generic type with arguments.
    fn map_generic(&self, base: &str, args: &[String]) -> String {
        if args.is_empty() {
            base.to_string()
        } else {
            format!("{}<{}>", base, args.join(", "))
        }
    }

    /// Render a complete TypeRef to a string.
    ///
    /// Named and verbatim types pass through untouched.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Named(name) | TypeRef::Verbatim(name) => name.clone(),
            TypeRef::Generic { base, args } => {
                let arg_strs: Vec<_> = args.iter().map(|a| self.render_type(a)).collect();
                self.map_generic(base, &arg_strs)
            }
        }
    }
}
