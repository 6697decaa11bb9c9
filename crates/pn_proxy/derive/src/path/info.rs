use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn typed_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn entity_info_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::EntityInfo
    }
}

#[inline(always)]
pub(crate) fn entity_kind_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::EntityKind
    }
}

#[inline(always)]
pub(crate) fn method_info_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::MethodInfo
    }
}

#[inline(always)]
pub(crate) fn receiver_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::Receiver
    }
}

#[inline(always)]
pub(crate) fn visibility_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::Visibility
    }
}

#[inline(always)]
pub(crate) fn terminal_info_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::TerminalInfo
    }
}

#[inline(always)]
pub(crate) fn terminal_kind_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::info::TerminalKind
    }
}
