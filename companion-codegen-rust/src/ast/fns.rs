//! Rust function builder.

use companion_codegen::builder::{CodeBuilder, CodeFragment, Renderable, Visibility};

use super::structs::vis_prefix;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The `self` receiver of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// `&self`
    Ref,
    /// `&mut self`
    RefMut,
    /// `self`
    Value,
}

impl Receiver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ref => "&self",
            Self::RefMut => "&mut self",
            Self::Value => "self",
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    vis: Visibility,
    receiver: Option<Receiver>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            vis: Visibility::Public,
            receiver: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn vis(mut self, vis: Visibility) -> Self {
        self.vis = vis;
        self
    }

    pub fn private(self) -> Self {
        self.vis(Visibility::Private)
    }

    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let params_str = self
            .receiver
            .map(|r| r.as_str().to_string())
            .into_iter()
            .chain(self.params.iter().map(|p| format!("{}: {}", p.name, p.ty)))
            .collect::<Vec<_>>()
            .join(", ");

        let vis = vis_prefix(self.vis);
        match &self.return_type {
            Some(ret) => format!("{}fn {}({}) -> {} {{", vis, self.name, params_str, ret),
            None => format!("{}fn {}({}) {{", vis, self.name, params_str),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::rust_doc(doc.as_str()));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("greet").build();
        assert_eq!(f, "pub fn greet() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("add")
            .param(Param::new("a", "i32"))
            .param(Param::new("b", "i32"))
            .returns("i32")
            .body_line("a + b")
            .build();
        assert!(f.contains("pub fn add(a: i32, b: i32) -> i32 {"));
        assert!(f.contains("    a + b\n"));
    }

    #[test]
    fn test_getter_shape() {
        let f = Fn::new("getAge")
            .receiver(Receiver::Ref)
            .returns("i64")
            .body_line("self.age.clone()")
            .build();
        assert_eq!(
            f,
            "pub fn getAge(&self) -> i64 {\n    self.age.clone()\n}\n"
        );
    }

    #[test]
    fn test_setter_shape() {
        let f = Fn::new("setAge")
            .receiver(Receiver::RefMut)
            .param(Param::new("age", "i64"))
            .body_line("self.age = age;")
            .build();
        assert_eq!(
            f,
            "pub fn setAge(&mut self, age: i64) {\n    self.age = age;\n}\n"
        );
    }

    #[test]
    fn test_private_fn() {
        let f = Fn::new("helper").receiver(Receiver::Value).private().build();
        assert!(f.starts_with("fn helper(self) {"));
    }

    #[test]
    fn test_fn_with_doc_and_attr() {
        let f = Fn::new("run")
            .doc("Execute the command")
            .attr("inline")
            .build();
        assert!(f.starts_with("/// Execute the command\n#[inline]\npub fn run() {"));
    }
}
