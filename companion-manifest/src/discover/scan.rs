//! Collect annotated declarations from a parsed file.

use companion_core::{DeclarationKind, MemberDeclaration, Namespace, TypeDeclaration};
use quote::ToTokens;
use syn::{Attribute, Fields, ImplItem, Item, ReturnType, Type, ext::IdentExt};

use super::convert::{normalize, type_ref};

/// Walks a module's items in source order.
pub(super) struct Scanner<'a> {
    annotation: &'a str,
    found: Vec<TypeDeclaration>,
}

impl<'a> Scanner<'a> {
    pub fn new(annotation: &'a str) -> Self {
        Self {
            annotation,
            found: Vec::new(),
        }
    }

    pub fn finish(self) -> Vec<TypeDeclaration> {
        self.found
    }

    /// Scan the items of one module.
    pub fn scan(&mut self, items: &[Item], namespace: &Namespace) {
        for item in items {
            if is_annotated(item_attrs(item), self.annotation) {
                let mut decl = declaration(item, namespace.clone());
                if decl.kind.is_class() {
                    decl.members.extend(inherent_members(items, &decl.name));
                }
                tracing::debug!(
                    element = %decl.qualified_name(),
                    kind = %decl.kind,
                    "found annotated declaration"
                );
                self.found.push(decl);
            }

            if let Item::Mod(module) = item
                && let Some((_, content)) = &module.content
            {
                let child = namespace.child(module.ident.unraw().to_string());
                self.scan(content, &child);
            }
        }
    }
}

/// An item is annotated when an attribute path ends in `annotation`.
fn is_annotated(attrs: &[Attribute], annotation: &str) -> bool {
    attrs.iter().any(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|seg| seg.ident == annotation)
    })
}

fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::ExternCrate(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::ForeignMod(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Macro(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::TraitAlias(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

fn declaration(item: &Item, namespace: Namespace) -> TypeDeclaration {
    match item {
        Item::Struct(s) => {
            let kind = match s.fields {
                Fields::Named(_) | Fields::Unit => DeclarationKind::Class,
                Fields::Unnamed(_) => DeclarationKind::TupleStruct,
            };
            let mut decl = TypeDeclaration::new(s.ident.unraw().to_string(), namespace, kind);
            if let Fields::Named(named) = &s.fields {
                for field in &named.named {
                    if let Some(ident) = &field.ident {
                        decl = decl.field(ident.unraw().to_string(), type_ref(&field.ty));
                    }
                }
            }
            decl
        }
        Item::Enum(e) => named(&e.ident, namespace, DeclarationKind::Enum),
        Item::Trait(t) => named(&t.ident, namespace, DeclarationKind::Interface),
        Item::Union(u) => named(&u.ident, namespace, DeclarationKind::Union),
        Item::Fn(f) => named(&f.sig.ident, namespace, DeclarationKind::Function),
        other => TypeDeclaration::new(other_name(other), namespace, DeclarationKind::Other),
    }
}

fn named(ident: &syn::Ident, namespace: Namespace, kind: DeclarationKind) -> TypeDeclaration {
    TypeDeclaration::new(ident.unraw().to_string(), namespace, kind)
}

fn other_name(item: &Item) -> String {
    let ident = match item {
        Item::Const(i) => Some(&i.ident),
        Item::Mod(i) => Some(&i.ident),
        Item::Static(i) => Some(&i.ident),
        Item::Type(i) => Some(&i.ident),
        Item::TraitAlias(i) => Some(&i.ident),
        Item::Macro(i) => i.ident.as_ref(),
        _ => None,
    };
    match (ident, item) {
        (Some(ident), _) => ident.unraw().to_string(),
        (None, Item::Impl(i)) => normalize(i.self_ty.to_token_stream()),
        (None, _) => "item".to_string(),
    }
}

/// Members declared in inherent `impl <name>` blocks of the same module.
fn inherent_members(items: &[Item], name: &str) -> Vec<MemberDeclaration> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Impl(block) if block.trait_.is_none() && is_self_type(&block.self_ty, name) => {
                Some(&block.items)
            }
            _ => None,
        })
        .flatten()
        .filter_map(|item| impl_member(item, name))
        .collect()
}

fn is_self_type(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident(name),
        _ => false,
    }
}

fn impl_member(item: &ImplItem, name: &str) -> Option<MemberDeclaration> {
    match item {
        ImplItem::Fn(f) => {
            let ident = f.sig.ident.unraw().to_string();
            if f.sig.receiver().is_none() && returns_self(&f.sig.output, name) {
                Some(MemberDeclaration::constructor(ident))
            } else {
                Some(MemberDeclaration::method(ident))
            }
        }
        ImplItem::Const(c) => Some(MemberDeclaration::constant(
            c.ident.unraw().to_string(),
            type_ref(&c.ty),
        )),
        ImplItem::Type(t) => Some(MemberDeclaration::type_alias(t.ident.unraw().to_string())),
        _ => None,
    }
}

fn returns_self(output: &ReturnType, name: &str) -> bool {
    match output {
        ReturnType::Type(_, ty) => is_self_type(ty, "Self") || is_self_type(ty, name),
        ReturnType::Default => false,
    }
}
