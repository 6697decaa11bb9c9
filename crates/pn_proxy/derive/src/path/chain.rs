use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn stand_in_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::chain::StandIn
    }
}

#[inline(always)]
pub(crate) fn outcome_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::chain::Outcome
    }
}
