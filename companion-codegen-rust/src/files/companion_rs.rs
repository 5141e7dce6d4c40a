use std::path::{Path, PathBuf};

use companion_codegen::{
    builder::{TypeMapper, TypeRef},
    companion::{AccessorBody, AccessorDescriptor, CompanionTypeDescriptor},
};
use companion_core::{GENERATED_MARKER, GeneratedFile, Namespace};

use crate::{
    Field, Fn, GeneratorOptions, Impl, Param, Receiver, RustCodeTypeMapper, RustFile, Struct, Use,
    naming::{companion_file_name, crate_path, namespace_dirs, safe_ident},
};

/// The Rust module holding one companion type.
///
/// Field types are written as they appear in the source, so the module
/// glob-imports its source module to resolve them.
pub struct CompanionRs<'a> {
    namespace: &'a Namespace,
    companion: &'a CompanionTypeDescriptor,
    options: &'a GeneratorOptions,
}

impl<'a> CompanionRs<'a> {
    pub fn new(
        namespace: &'a Namespace,
        companion: &'a CompanionTypeDescriptor,
        options: &'a GeneratorOptions,
    ) -> Self {
        Self {
            namespace,
            companion,
            options,
        }
    }

    /// Path relative to the output directory (`com/example/user_data.rs`).
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = namespace_dirs(self.namespace).collect();
        path.push(companion_file_name(self.companion.name()));
        path
    }

    fn header(&self) -> String {
        format!(
            "{} from `{}`. Do not edit by hand.",
            GENERATED_MARKER,
            self.companion.source_name()
        )
    }

    fn source_import(&self) -> Use {
        Use::glob(crate_path(self.namespace)).attr("allow(unused_imports)")
    }

    fn companion_struct(&self) -> Struct {
        self.companion.fields().iter().fold(
            Struct::new(self.companion.name()).derives(&self.options.derives),
            |s, field| {
                s.field(
                    Field::new(safe_ident(&field.name), type_name(&field.ty))
                        .vis(field.visibility()),
                )
            },
        )
    }

    fn accessor_impl(&self) -> Impl {
        let imp = Impl::new(self.companion.name());
        let imp = if self.companion.has_fields() {
            imp.attr("allow(non_snake_case)")
        } else {
            imp
        };
        imp.methods(self.companion.accessors().iter().map(accessor_fn))
    }
}

impl GeneratedFile for CompanionRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        RustFile::new()
            .add(self.source_import())
            .add(self.companion_struct())
            .add(self.accessor_impl())
            .render_with_header(&self.header(), self.options.indent)
    }
}

fn type_name(ty: &TypeRef) -> String {
    RustCodeTypeMapper.render_type(ty)
}

fn accessor_fn(accessor: &AccessorDescriptor) -> Fn {
    let f = Fn::new(&accessor.method_name).vis(accessor.visibility());

    match &accessor.body {
        AccessorBody::ReturnField { field } => f
            .receiver(Receiver::Ref)
            .returns(type_name(&accessor.field.ty))
            .body_line(format!("self.{}.clone()", safe_ident(field))),
        AccessorBody::AssignField { field, param } => f
            .receiver(Receiver::RefMut)
            .param(Param::new(safe_ident(param), type_name(&accessor.field.ty)))
            .body_line(format!(
                "self.{} = {};",
                safe_ident(field),
                safe_ident(param)
            )),
    }
}

#[cfg(test)]
mod tests {
    use companion_codegen::companion::build_companion;
    use companion_core::TypeDeclaration;

    use super::*;

    fn companion(decl: TypeDeclaration) -> CompanionTypeDescriptor {
        build_companion(&decl).unwrap()
    }

    #[test]
    fn test_relative_path() {
        let ns = Namespace::parse("com.example");
        let c = companion(TypeDeclaration::class("User", ns.clone()));
        let options = GeneratorOptions::default();

        let file = CompanionRs::new(&ns, &c, &options);
        assert_eq!(file.relative_path(), Path::new("com/example/user_data.rs"));
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/com/example/user_data.rs")
        );
    }

    #[test]
    fn test_root_namespace_path() {
        let ns = Namespace::root();
        let c = companion(TypeDeclaration::class("Account", ns.clone()));
        let options = GeneratorOptions::default();

        let file = CompanionRs::new(&ns, &c, &options);
        assert_eq!(file.relative_path(), Path::new("account_data.rs"));
    }

    #[test]
    fn test_keyword_field_is_escaped() {
        let ns = Namespace::root();
        let c = companion(TypeDeclaration::class("Token", ns.clone()).field("type", TypeRef::string()));
        let options = GeneratorOptions::default();

        let code = CompanionRs::new(&ns, &c, &options).render();
        assert!(code.contains("    r#type: String,\n"));
        assert!(code.contains("pub fn getType(&self) -> String {\n        self.r#type.clone()\n"));
        assert!(code.contains("pub fn setType(&mut self, r#type: String) {\n        self.r#type = r#type;\n"));
    }

    #[test]
    fn test_no_derives() {
        let ns = Namespace::root();
        let c = companion(TypeDeclaration::class("Marker", ns.clone()));
        let options = GeneratorOptions::default().derives(Vec::<String>::new());

        let code = CompanionRs::new(&ns, &c, &options).render();
        assert!(!code.contains("#[derive"));
        assert!(code.ends_with("pub struct MarkerData {}\n\nimpl MarkerData {}\n"));
    }

    #[test]
    fn test_imports_source_module() {
        let ns = Namespace::parse("com.example");
        let c = companion(
            TypeDeclaration::class("User", ns.clone()).field("address", TypeRef::named("Address")),
        );
        let options = GeneratorOptions::default();

        let code = CompanionRs::new(&ns, &c, &options).render();
        assert!(code.contains(
            "Do not edit by hand.\n\n#[allow(unused_imports)]\nuse crate::com::example::*;\n\n#[derive("
        ));
        assert!(code.contains("    address: Address,\n"));
    }

    #[test]
    fn test_root_namespace_imports_crate_root() {
        let ns = Namespace::root();
        let c = companion(TypeDeclaration::class("Account", ns.clone()));
        let options = GeneratorOptions::default();

        let code = CompanionRs::new(&ns, &c, &options).render();
        assert!(code.contains("\nuse crate::*;\n"));
    }
}
