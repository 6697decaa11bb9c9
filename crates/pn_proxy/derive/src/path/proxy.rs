use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn shape_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::proxy::Shape
    }
}

#[inline(always)]
pub(crate) fn navigable_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::proxy::Navigable
    }
}

#[inline(always)]
pub(crate) fn proxy_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::proxy::Proxy
    }
}

#[inline(always)]
pub(crate) fn member_ref_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::proxy::MemberRef
    }
}

#[inline(always)]
pub(crate) fn any_entity_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::proxy::AnyEntity
    }
}
