use proc_macro2::TokenStream;

/// An empty token stream, for expansions that generate nothing.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
