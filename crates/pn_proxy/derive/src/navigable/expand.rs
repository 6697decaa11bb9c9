use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, parse_quote};

use super::methods::NavMethod;
use super::{NavKind, NavTarget};

pub(crate) fn generate(target: &NavTarget) -> TokenStream {
    let pn_proxy_path = crate::path::pn_proxy();

    let facade = facade(target, &pn_proxy_path);
    let typed = typed_impl(target, &pn_proxy_path);
    let navigable = navigable_impls(target, &pn_proxy_path);
    let shims = shims(target, &pn_proxy_path);
    let auto_register = auto_register(target, &pn_proxy_path);

    quote! {
        #facade
        #typed
        #navigable
        #shims
        #auto_register
    }
}

fn parent(target: &NavTarget, pn_proxy_path: &syn::Path) -> TokenStream {
    match &target.attrs.extends {
        Some(parent) => parent.to_token_stream(),
        None => crate::path::any_entity_(pn_proxy_path),
    }
}

// Type parameters must be `'static`, every stand-in type is.
fn static_generics(target: &NavTarget) -> syn::Generics {
    let mut generics = target.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    generics
}

// -----------------------------------------------------------------------------
// Facade

fn facade(target: &NavTarget, pn_proxy_path: &syn::Path) -> TokenStream {
    let navigable_ = crate::path::navigable_(pn_proxy_path);
    let proxy_ = crate::path::proxy_(pn_proxy_path);
    let stand_in_ = crate::path::stand_in_(pn_proxy_path);

    let parent = parent(target, pn_proxy_path);
    let self_ty = &target.self_ty;
    let proxy = &target.proxy;
    let proxy_vis = &target.proxy_vis;
    let proxy_name = proxy.to_string();

    let generics = static_generics(target);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let doc = format!(
        "Stand-in facade of `{}`, generated by `#[navigable]`.",
        self_ty.to_token_stream()
    );
    let (marker_field, marker_init) = if target.is_generic() {
        (
            quote!(__marker: ::core::marker::PhantomData<fn() -> #self_ty>,),
            quote!(__marker: ::core::marker::PhantomData,),
        )
    } else {
        (TokenStream::new(), TokenStream::new())
    };

    quote! {
        #[doc = #doc]
        #proxy_vis struct #proxy #generics #where_clause {
            __base: <#parent as #navigable_>::Proxy,
            #marker_field
        }

        impl #impl_generics ::core::ops::Deref for #proxy #ty_generics #where_clause {
            type Target = <#parent as #navigable_>::Proxy;

            #[inline]
            fn deref(&self) -> &<#parent as #navigable_>::Proxy {
                &self.__base
            }
        }

        impl #impl_generics #proxy_ for #proxy #ty_generics #where_clause {
            type Target = #self_ty;

            #[inline]
            fn from_stand_in(stand_in: #stand_in_) -> Self {
                Self {
                    __base: <<#parent as #navigable_>::Proxy as #proxy_>::from_stand_in(stand_in),
                    #marker_init
                }
            }

            #[inline]
            fn stand_in(&self) -> &#stand_in_ {
                <<#parent as #navigable_>::Proxy as #proxy_>::stand_in(&self.__base)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::cmp::PartialEq for #proxy #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                <Self as #proxy_>::stand_in(self) == <Self as #proxy_>::stand_in(other)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::cmp::Eq for #proxy #ty_generics #where_clause {}

        #[automatically_derived]
        impl #impl_generics ::core::hash::Hash for #proxy #ty_generics #where_clause {
            #[inline]
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                ::core::hash::Hash::hash(<Self as #proxy_>::stand_in(self), state);
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::fmt::Debug for #proxy #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(#proxy_name)
                    .field(<Self as #proxy_>::stand_in(self))
                    .finish()
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Typed

fn typed_impl(target: &NavTarget, pn_proxy_path: &syn::Path) -> TokenStream {
    let typed_ = crate::path::typed_(pn_proxy_path);
    let type_info_ = crate::path::type_info_(pn_proxy_path);
    let entity_info_ = crate::path::entity_info_(pn_proxy_path);
    let entity_kind_ = crate::path::entity_kind_(pn_proxy_path);

    let parent = parent(target, pn_proxy_path);
    let self_ty = &target.self_ty;
    let sealed = target.attrs.sealed.is_some();
    let kind = match target.kind {
        NavKind::Concrete => Ident::new("Concrete", proc_macro2::Span::call_site()),
        NavKind::Interface => Ident::new("Interface", proc_macro2::Span::call_site()),
    };
    let methods = target
        .methods
        .iter()
        .map(|method| method.info_tokens(pn_proxy_path));

    let info = quote! {
        #type_info_::Entity(
            #entity_info_::new::<Self>(#entity_kind_::#kind)
                .with_parent::<#parent>()
                .with_sealed(#sealed)
                .with_methods(&[#(#methods),*])
        )
    };

    let generics = static_generics(target);
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let body = if target.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(pn_proxy_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| #info)
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(pn_proxy_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| #info)
        }
    };

    quote! {
        impl #impl_generics #typed_ for #self_ty #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Shape & Navigable

fn navigable_impls(target: &NavTarget, pn_proxy_path: &syn::Path) -> TokenStream {
    let shape_ = crate::path::shape_(pn_proxy_path);
    let navigable_ = crate::path::navigable_(pn_proxy_path);
    let outcome_ = crate::path::outcome_(pn_proxy_path);

    let self_ty = &target.self_ty;
    let proxy = &target.proxy;

    let generics = static_generics(target);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #shape_ for #self_ty #where_clause {
            type Output = #proxy #ty_generics;

            #[inline]
            fn materialize(outcome: #outcome_) -> #proxy #ty_generics {
                #outcome_::into_proxy(outcome)
            }
        }

        impl #impl_generics #navigable_ for #self_ty #where_clause {
            type Proxy = #proxy #ty_generics;
        }
    }
}

// -----------------------------------------------------------------------------
// Stand-in methods

fn shims(target: &NavTarget, pn_proxy_path: &syn::Path) -> TokenStream {
    let proxy = &target.proxy;

    let generics = static_generics(target);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let methods = target
        .methods
        .iter()
        .filter(|method| method.has_shim())
        .map(|method| shim(target, method, pn_proxy_path));

    quote! {
        impl #impl_generics #proxy #ty_generics #where_clause {
            #(#methods)*
        }
    }
}

fn shim(target: &NavTarget, method: &NavMethod, pn_proxy_path: &syn::Path) -> TokenStream {
    let proxy_ = crate::path::proxy_(pn_proxy_path);
    let stand_in_ = crate::path::stand_in_(pn_proxy_path);
    let member_ref_ = crate::path::member_ref_(pn_proxy_path);

    let self_ty = &target.self_ty;
    let ident = &method.ident;
    let vis = &method.vis;
    let name = ident.to_string();

    let invoke = quote! {
        #stand_in_::invoke(
            <Self as #proxy_>::stand_in(self),
            #member_ref_::new::<#self_ty>(#name),
        )
    };

    match method.accessor_return() {
        Some(returns) => {
            let shape_ = crate::path::shape_(pn_proxy_path);
            let doc = format!("Records `{name}` and continues from what it returns.");
            quote! {
                #[doc = #doc]
                #vis fn #ident(&self) -> <#returns as #shape_>::Output {
                    <#returns as #shape_>::materialize(#invoke)
                }
            }
        }
        None => {
            let outcome_ = crate::path::outcome_(pn_proxy_path);
            let property_error_ = crate::path::property_error_(pn_proxy_path);
            let generics = &method.generics;
            let where_clause = &generics.where_clause;
            let inputs = &method.inputs;
            let doc = format!("`{name}` is not an accessor: always fails.");
            quote! {
                #[doc = #doc]
                #vis fn #ident #generics (&self, #(_: #inputs),*)
                    -> ::core::result::Result<::core::convert::Infallible, #property_error_>
                #where_clause
                {
                    #outcome_::into_rejection(#invoke)
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Auto register

#[cfg(feature = "auto_register")]
fn auto_register(target: &NavTarget, pn_proxy_path: &syn::Path) -> TokenStream {
    let Some(span) = target.attrs.auto_register else {
        return crate::utils::empty();
    };
    // Invalid for generic types.
    if target.is_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(pn_proxy_path);
    let typed_ = crate::path::typed_(pn_proxy_path);
    let self_ty = &target.self_ty;

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(<#self_ty as #typed_>::type_info)
        }
    }
}

#[cfg(not(feature = "auto_register"))]
fn auto_register(_: &NavTarget, _: &syn::Path) -> TokenStream {
    crate::utils::empty()
}
