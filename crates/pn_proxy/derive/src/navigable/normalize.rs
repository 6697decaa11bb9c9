//! Rewrites declared types so they can be named outside their method.

use proc_macro2::Span;
use syn::visit::Visit;
use syn::visit_mut::VisitMut;
use syn::{Ident, Lifetime, Type, TypeImplTrait, TypePath, TypeReference};

// -----------------------------------------------------------------------------
// Self replacement

/// Replaces `Self` with the navigable type.
pub(crate) struct ReplaceSelf<'a>(pub &'a Type);

impl VisitMut for ReplaceSelf<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(TypePath { qself: None, path }) = ty
            && path.is_ident("Self")
        {
            *ty = self.0.clone();
            return;
        }
        syn::visit_mut::visit_type_mut(self, ty);
    }
}

// -----------------------------------------------------------------------------
// Lifetimes

struct StaticLifetimes;

impl VisitMut for StaticLifetimes {
    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        lifetime.ident = Ident::new("static", lifetime.ident.span());
    }

    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(Lifetime::new("'static", Span::call_site()));
        }
        syn::visit_mut::visit_type_reference_mut(self, reference);
    }
}

// -----------------------------------------------------------------------------
// Describability

// Finds what keeps a type from being named outside its method.
struct Opaque<'a> {
    method_params: &'a [Ident],
    found: bool,
}

impl<'ast> Visit<'ast> for Opaque<'_> {
    fn visit_type_impl_trait(&mut self, _: &'ast TypeImplTrait) {
        self.found = true;
    }

    fn visit_type(&mut self, ty: &'ast Type) {
        match ty {
            Type::Infer(_) | Type::Never(_) | Type::Macro(_) | Type::Verbatim(_) => {
                self.found = true;
            }
            Type::Path(TypePath { qself: None, path })
                if path
                    .get_ident()
                    .is_some_and(|ident| self.method_params.contains(ident)) =>
            {
                self.found = true;
            }
            _ => syn::visit::visit_type(self, ty),
        }
    }
}

/// Returns the type a stand-in records for the declared return type `ty`.
///
/// Top-level references are looked through, `Self` becomes `self_ty`, and
/// every lifetime becomes `'static`. `None` for `()` and for types that cannot
/// be named outside the method: `impl Trait` and the method's own type
/// parameters.
pub(crate) fn return_type(ty: &Type, self_ty: &Type, method_params: &[Ident]) -> Option<Type> {
    let mut ty = ty;
    loop {
        match ty {
            Type::Reference(reference) => ty = &reference.elem,
            Type::Paren(paren) => ty = &paren.elem,
            Type::Group(group) => ty = &group.elem,
            _ => break,
        }
    }
    if let Type::Tuple(tuple) = ty
        && tuple.elems.is_empty()
    {
        return None;
    }

    let mut opaque = Opaque {
        method_params,
        found: false,
    };
    opaque.visit_type(ty);
    if opaque.found {
        return None;
    }

    let mut ty = ty.clone();
    ReplaceSelf(self_ty).visit_type_mut(&mut ty);
    StaticLifetimes.visit_type_mut(&mut ty);
    Some(ty)
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;
    use syn::{Ident, Type, parse_quote};

    use super::return_type;

    fn normalized(ty: Type) -> Option<String> {
        let self_ty: Type = parse_quote!(Contract);
        let params: [Ident; 1] = [parse_quote!(T)];
        return_type(&ty, &self_ty, &params).map(|ty| ty.to_token_stream().to_string())
    }

    #[test]
    fn looks_through_references() {
        assert_eq!(normalized(parse_quote!(&'a str)).unwrap(), "str");
        assert_eq!(
            normalized(parse_quote!(Option<&Address>)).unwrap(),
            "Option < & 'static Address >"
        );
        assert_eq!(normalized(parse_quote!(Vec<Self>)).unwrap(), "Vec < Contract >");
    }

    #[test]
    fn undescribable() {
        assert!(normalized(parse_quote!(())).is_none());
        assert!(normalized(parse_quote!(impl Iterator<Item = u8>)).is_none());
        assert!(normalized(parse_quote!(Vec<T>)).is_none());
    }
}
