//! Rust type mapper implementation.

use companion_codegen::builder::{PrimitiveType, TypeMapper};

/// Maps language-agnostic TypeRef types to Rust type syntax.
///
/// Named, generic and verbatim types are emitted exactly as written in the
/// source declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCodeTypeMapper;

impl TypeMapper for RustCodeTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        match ty {
            PrimitiveType::String => "String".to_string(),
            PrimitiveType::Int => "i64".to_string(),
            PrimitiveType::UInt => "u64".to_string(),
            PrimitiveType::Float => "f64".to_string(),
            PrimitiveType::Bool => "bool".to_string(),
            PrimitiveType::Char => "char".to_string(),
            PrimitiveType::Byte => "u8".to_string(),
        }
    }
}
