//! `#[navigable]`: stand-in facades for entity types.

mod attributes;
mod expand;
mod methods;
mod normalize;

pub(crate) use attributes::TypeAttributes;

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Generics, Ident, ImplItem, Item, ItemImpl, ItemTrait, TraitItem, Type, parse_quote};

use attributes::MethodAttributes;
use methods::{NavMethod, requires_sized};

// -----------------------------------------------------------------------------
// NavTarget

#[derive(Clone, Copy)]
pub(crate) enum NavKind {
    Concrete,
    Interface,
}

/// Everything the expansion needs to know about one navigable type.
pub(crate) struct NavTarget {
    pub attrs: TypeAttributes,
    pub kind: NavKind,
    /// `Contract`, `Batch<T>` or `dyn Shipment`.
    pub self_ty: Type,
    /// Type-level generics, lifetimes excluded.
    pub generics: Generics,
    pub proxy: Ident,
    pub proxy_vis: syn::Visibility,
    pub methods: Vec<NavMethod>,
}

impl NavTarget {
    fn proxy_ident(attrs: &TypeAttributes, name: &Ident) -> Ident {
        attrs
            .proxy
            .clone()
            .unwrap_or_else(|| format_ident!("{}Proxy", name))
    }

    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
            || self.generics.const_params().next().is_some()
    }
}

// -----------------------------------------------------------------------------
// Entry

pub(crate) fn expand(attrs: TypeAttributes, item: Item) -> syn::Result<TokenStream> {
    match item {
        Item::Impl(item) => from_impl(attrs, item),
        Item::Trait(item) => from_trait(attrs, item),
        other => Err(syn::Error::new_spanned(
            other,
            "`#[navigable]` applies to an inherent `impl` block or a trait",
        )),
    }
}

fn from_impl(attrs: TypeAttributes, mut item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`#[navigable]` applies to inherent `impl` blocks, not trait implementations",
        ));
    }
    if let Some(lifetime) = item.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "navigable types cannot have lifetime parameters",
        ));
    }

    let self_ty = (*item.self_ty).clone();
    let name = match &self_ty {
        Type::Path(ty) if ty.qself.is_none() => ty.path.segments.last().map(|seg| &seg.ident),
        _ => None,
    }
    .cloned()
    .ok_or_else(|| syn::Error::new_spanned(&self_ty, "expected a named type"))?;

    check_extends(&attrs, &self_ty)?;

    let mut methods = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let method_attrs = MethodAttributes::take_from(&mut method.attrs)?;
        let exposed = !matches!(method.vis, syn::Visibility::Inherited);
        methods.extend(NavMethod::analyze(
            &method.sig,
            method.vis.clone(),
            exposed,
            method_attrs,
            &self_ty,
        ));
    }

    let target = NavTarget {
        proxy: NavTarget::proxy_ident(&attrs, &name),
        proxy_vis: parse_quote!(pub),
        kind: NavKind::Concrete,
        generics: item.generics.clone(),
        self_ty,
        methods,
        attrs,
    };
    let generated = expand::generate(&target);

    Ok(quote! {
        #item
        #generated
    })
}

// A parent naming the type itself would make the parent chain endless.
fn check_extends(attrs: &TypeAttributes, self_ty: &Type) -> syn::Result<()> {
    let Some(parent) = &attrs.extends else {
        return Ok(());
    };
    let names_self = match parent {
        Type::Path(ty) => ty.qself.is_none() && ty.path.is_ident("Self"),
        _ => false,
    };
    if names_self || parent.to_token_stream().to_string() == self_ty.to_token_stream().to_string() {
        return Err(syn::Error::new_spanned(
            parent,
            "a navigable type cannot extend itself",
        ));
    }
    Ok(())
}

fn from_trait(attrs: TypeAttributes, mut item: ItemTrait) -> syn::Result<TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "navigable traits cannot be generic",
        ));
    }

    let name = item.ident.clone();
    let self_ty: Type = parse_quote!(dyn #name);
    check_extends(&attrs, &self_ty)?;

    let mut methods = Vec::new();
    for trait_item in &mut item.items {
        let TraitItem::Fn(method) = trait_item else {
            continue;
        };
        let method_attrs = MethodAttributes::take_from(&mut method.attrs)?;
        if requires_sized(&method.sig) {
            continue;
        }
        methods.extend(NavMethod::analyze(
            &method.sig,
            item.vis.clone(),
            true,
            method_attrs,
            &self_ty,
        ));
    }

    let target = NavTarget {
        proxy: NavTarget::proxy_ident(&attrs, &name),
        proxy_vis: item.vis.clone(),
        kind: NavKind::Interface,
        generics: Generics::default(),
        self_ty,
        methods,
        attrs,
    };
    let generated = expand::generate(&target);

    Ok(quote! {
        #item
        #generated
    })
}

#[cfg(test)]
mod tests {
    use syn::{Type, parse_quote};

    use super::{TypeAttributes, check_extends};

    fn extending(parent: Type) -> TypeAttributes {
        TypeAttributes {
            extends: Some(parent),
            ..TypeAttributes::default()
        }
    }

    #[test]
    fn self_parent() {
        let contract: Type = parse_quote!(Contract);
        assert!(check_extends(&TypeAttributes::default(), &contract).is_ok());
        assert!(check_extends(&extending(parse_quote!(AbstractEntity)), &contract).is_ok());
        assert!(check_extends(&extending(parse_quote!(Self)), &contract).is_err());
        assert!(check_extends(&extending(parse_quote!(Contract)), &contract).is_err());

        let shipment: Type = parse_quote!(dyn Shipment);
        assert!(check_extends(&extending(parse_quote!(dyn Shipment)), &shipment).is_err());
    }
}
