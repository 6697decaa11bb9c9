use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::visit_mut::VisitMut;
use syn::{FnArg, Generics, Ident, ReturnType, Signature, Type, TypeParamBound, WherePredicate};

use super::attributes::MethodAttributes;
use super::normalize::{ReplaceSelf, return_type};

// -----------------------------------------------------------------------------
// Receiver

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Receiver {
    None,
    Ref,
    Mut,
    Value,
}

impl Receiver {
    fn of(sig: &Signature) -> Self {
        match sig.receiver() {
            None => Self::None,
            Some(receiver) if receiver.colon_token.is_some() => Self::Value,
            Some(receiver) => match (&receiver.reference, &receiver.mutability) {
                (Some(_), Some(_)) => Self::Mut,
                (Some(_), None) => Self::Ref,
                (None, _) => Self::Value,
            },
        }
    }

    fn variant(self) -> Ident {
        let name = match self {
            Self::None => "None",
            Self::Ref => "Ref",
            Self::Mut => "Mut",
            Self::Value => "Value",
        };
        Ident::new(name, Span::call_site())
    }
}

// -----------------------------------------------------------------------------
// NavMethod

/// A method of a navigable type, as the stand-in sees it.
pub(crate) struct NavMethod {
    pub ident: Ident,
    /// Visibility of the generated stand-in method.
    pub vis: syn::Visibility,
    /// Whether the method can be reached from outside its module.
    pub exposed: bool,
    pub receiver: Receiver,
    pub sealed: bool,
    /// Generics with `Self` replaced.
    pub generics: Generics,
    /// Parameter types with `Self` replaced, receiver excluded.
    pub inputs: Vec<Type>,
    /// Normalized return type, `None` if it cannot be recorded.
    pub returns: Option<Type>,
}

impl NavMethod {
    /// Analyzes a method of `self_ty`.
    ///
    /// `None` for methods the stand-in leaves out: `skip`ped, `async` and
    /// `unsafe` ones.
    pub fn analyze(
        sig: &Signature,
        vis: syn::Visibility,
        exposed: bool,
        attrs: MethodAttributes,
        self_ty: &Type,
    ) -> Option<Self> {
        if attrs.skip.is_some() || sig.asyncness.is_some() || sig.unsafety.is_some() {
            return None;
        }

        let mut replace = ReplaceSelf(self_ty);

        let mut generics = sig.generics.clone();
        replace.visit_generics_mut(&mut generics);

        let inputs = sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                FnArg::Typed(arg) => {
                    let mut ty = (*arg.ty).clone();
                    replace.visit_type_mut(&mut ty);
                    Some(ty)
                }
                FnArg::Receiver(_) => None,
            })
            .collect();

        let method_params: Vec<Ident> = sig
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();
        let returns = match &sig.output {
            ReturnType::Default => None,
            ReturnType::Type(_, ty) => return_type(ty, self_ty, &method_params),
        };

        Some(Self {
            ident: sig.ident.clone(),
            vis,
            exposed,
            receiver: Receiver::of(sig),
            sealed: attrs.sealed.is_some(),
            generics,
            inputs,
            returns,
        })
    }

    /// Whether a stand-in method is generated.
    pub fn has_shim(&self) -> bool {
        self.exposed && self.receiver != Receiver::None
    }

    /// The recorded return type of an accessor candidate: a parameterless
    /// method with a receiver and a describable return type.
    pub fn accessor_return(&self) -> Option<&Type> {
        if self.has_shim() && self.inputs.is_empty() {
            self.returns.as_ref()
        } else {
            None
        }
    }

    /// `MethodInfo` expression describing this method.
    pub fn info_tokens(&self, pn_proxy_path: &syn::Path) -> TokenStream {
        let method_info_ = crate::path::method_info_(pn_proxy_path);
        let receiver_ = crate::path::receiver_(pn_proxy_path);
        let visibility_ = crate::path::visibility_(pn_proxy_path);

        let name = self.ident.to_string();
        let receiver = self.receiver.variant();
        let arity = self.inputs.len();
        let visibility = match (&self.vis, self.exposed) {
            (_, false) => quote!(Private),
            (syn::Visibility::Public(_), true) => quote!(Public),
            _ => quote!(Restricted),
        };
        let sealed = self.sealed;
        let returning = self
            .accessor_return()
            .map(|ty| quote!(.returning::<#ty>()));

        quote! {
            #method_info_::new(#name)
                .with_receiver(#receiver_::#receiver)
                .with_arity(#arity)
                .with_visibility(#visibility_::#visibility)
                .with_sealed(#sealed)
                #returning
        }
    }
}

/// Whether a trait method declares `where Self: Sized`, which keeps it off
/// `dyn Trait`.
pub(crate) fn requires_sized(sig: &Signature) -> bool {
    let Some(where_clause) = &sig.generics.where_clause else {
        return false;
    };
    where_clause.predicates.iter().any(|predicate| {
        let WherePredicate::Type(predicate) = predicate else {
            return false;
        };
        let is_self = matches!(
            &predicate.bounded_ty,
            Type::Path(ty) if ty.qself.is_none() && ty.path.is_ident("Self")
        );
        is_self
            && predicate.bounds.iter().any(|bound| {
                matches!(bound, TypeParamBound::Trait(bound)
                    if bound.path.segments.last().is_some_and(|seg| seg.ident == "Sized"))
            })
    })
}

#[cfg(test)]
mod tests {
    use syn::{ImplItemFn, TraitItemFn, Type, parse_quote};

    use super::{NavMethod, Receiver, requires_sized};
    use crate::navigable::attributes::MethodAttributes;

    fn analyze(item: ImplItemFn) -> Option<NavMethod> {
        let self_ty: Type = parse_quote!(Contract);
        let mut item = item;
        let attrs = MethodAttributes::take_from(&mut item.attrs).unwrap();
        let exposed = !matches!(item.vis, syn::Visibility::Inherited);
        NavMethod::analyze(&item.sig, item.vis.clone(), exposed, attrs, &self_ty)
    }

    #[test]
    fn accessors() {
        let method = analyze(parse_quote! {
            pub fn get_customer(&self) -> &BusinessPartner { todo!() }
        })
        .unwrap();
        assert!(method.receiver == Receiver::Ref);
        assert!(method.accessor_return().is_some());

        let method = analyze(parse_quote! {
            pub fn is_valid(&self, strict: bool) -> bool { todo!() }
        })
        .unwrap();
        assert_eq!(method.inputs.len(), 1);
        assert!(method.accessor_return().is_none());

        let method = analyze(parse_quote! {
            fn get_secret(&self) -> String { todo!() }
        })
        .unwrap();
        assert!(!method.has_shim());
        assert!(method.accessor_return().is_none());
    }

    #[test]
    fn left_out() {
        assert!(
            analyze(parse_quote! {
                #[navigable(skip)]
                pub fn get_raw(&self) -> RawHandle { todo!() }
            })
            .is_none()
        );
        assert!(
            analyze(parse_quote! {
                pub async fn get_remote(&self) -> String { todo!() }
            })
            .is_none()
        );
    }

    #[test]
    fn sized_trait_methods() {
        let item: TraitItemFn = parse_quote! {
            fn into_parts(self) -> (u8, u8) where Self: Sized;
        };
        assert!(requires_sized(&item.sig));

        let item: TraitItemFn = parse_quote! {
            fn get_carrier(&self) -> String;
        };
        assert!(!requires_sized(&item.sig));
    }
}
