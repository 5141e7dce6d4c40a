//! Builders for module-level items: `use` and `mod` declarations.

use companion_codegen::builder::{CodeFragment, Renderable, Visibility};

use super::structs::vis_prefix;

/// Builder for a `use` declaration.
#[derive(Debug, Clone)]
pub struct Use {
    path: String,
    attrs: Vec<String>,
}

impl Use {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            attrs: Vec::new(),
        }
    }

    /// Glob import of every item in `module`.
    pub fn glob(module: impl AsRef<str>) -> Self {
        Self::new(format!("{}::*", module.as_ref()))
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.attrs
            .iter()
            .map(|attr| CodeFragment::line(format!("#[{}]", attr)))
            .chain(std::iter::once(CodeFragment::line(format!("use {};", self.path))))
            .collect()
    }
}

/// Builder for an out-of-line `mod` declaration.
#[derive(Debug, Clone)]
pub struct Mod {
    name: String,
    vis: Visibility,
}

impl Mod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vis: Visibility::Public,
        }
    }

    pub fn vis(mut self, vis: Visibility) -> Self {
        self.vis = vis;
        self
    }
}

impl Renderable for Mod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "{}mod {};",
            vis_prefix(self.vis),
            self.name
        ))]
    }
}

#[cfg(test)]
mod tests {
    use companion_codegen::builder::CodeBuilder;

    use super::*;

    fn build(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_glob_use_with_attr() {
        let code = build(&Use::glob("crate::models").attr("allow(unused_imports)"));
        assert_eq!(code, "#[allow(unused_imports)]\nuse crate::models::*;\n");
    }

    #[test]
    fn test_mod_declaration() {
        assert_eq!(build(&Mod::new("user_data")), "pub mod user_data;\n");
        assert_eq!(
            build(&Mod::new("helpers").vis(Visibility::Private)),
            "mod helpers;\n"
        );
    }
}
