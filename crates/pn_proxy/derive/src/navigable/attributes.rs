use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, Type};

use crate::NAVIGABLE_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Arguments of `#[navigable(...)]` on an `impl` block or trait.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `extends = Parent`
    pub extends: Option<Type>,
    /// `sealed`
    pub sealed: Option<Span>,
    /// `proxy = Name`, overriding `{Type}Proxy`.
    pub proxy: Option<Ident>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("extends") {
            if self.extends.is_some() {
                return Err(meta.error("duplicate `extends`"));
            }
            self.extends = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("proxy") {
            if self.proxy.is_some() {
                return Err(meta.error("duplicate `proxy`"));
            }
            self.proxy = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("sealed") {
            set_flag(&mut self.sealed, &meta)?;
        } else if meta.path.is_ident("auto_register") {
            set_flag(&mut self.auto_register, &meta)?;
        } else {
            return Err(meta.error(
                "unsupported argument, expected `extends`, `proxy`, `sealed` or `auto_register`",
            ));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// MethodAttributes

/// Arguments of `#[navigable(...)]` on a method.
#[derive(Default)]
pub(crate) struct MethodAttributes {
    /// `sealed`: the stand-in refuses to intercept the method.
    pub sealed: Option<Span>,
    /// `skip`: the method is left out entirely.
    pub skip: Option<Span>,
}

impl MethodAttributes {
    /// Parses and removes every `#[navigable(...)]` in `attrs`.
    pub fn take_from(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let mut this = Self::default();
        let mut result = Ok(());

        attrs.retain(|attr| {
            if !attr.path().is_ident(NAVIGABLE_ATTRIBUTE_NAME) {
                return true;
            }
            if result.is_ok() {
                result = attr.parse_nested_meta(|meta| this.parse_meta(meta));
            }
            false
        });

        result.map(|()| this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("sealed") {
            set_flag(&mut self.sealed, &meta)
        } else if meta.path.is_ident("skip") {
            set_flag(&mut self.skip, &meta)
        } else {
            Err(meta.error("unsupported argument, expected `sealed` or `skip`"))
        }
    }
}

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if flag.is_some() {
        return Err(meta.error("duplicate flag"));
    }
    *flag = Some(meta.path.get_ident().map_or_else(Span::call_site, Ident::span));
    Ok(())
}
