//! Paths generated code uses to reach `pn_proxy`.
//!
//! Kept in one place so the generated code follows `pn_proxy` when its
//! modules move.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `pn_proxy` crate.
///
/// 1. For crates that depend on `pn_proxy`, `::pn_proxy` is returned.
/// 2. For crates that depend on `propname`, `::propname::proxy` is returned.
/// 3. Otherwise `::pn_proxy` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is called once per expansion
/// and the result passed around.
pub(crate) fn pn_proxy() -> syn::Path {
    pn_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pn_proxy"))
}

// -----------------------------------------------------------------------------
// Modules

mod chain;
mod info;
mod proxy;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use chain::*;
pub(crate) use info::*;
pub(crate) use proxy::*;

#[inline(always)]
pub(crate) fn property_error_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::PropertyError
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::impls::GenericTypeInfoCell
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(pn_proxy_path: &syn::Path) -> TokenStream {
    quote! {
        #pn_proxy_path::__macro_exports::auto_register
    }
}
