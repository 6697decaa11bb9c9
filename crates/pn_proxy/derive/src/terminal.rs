//! `#[derive(Terminal)]`: user types that end a path.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Ident, LitStr, parse_quote};

static TERMINAL_ATTRIBUTE_NAME: &str = "terminal";

const KINDS: &[(&str, &str)] = &[
    ("text", "Text"),
    ("numeric", "Numeric"),
    ("boolean", "Boolean"),
    ("temporal", "Temporal"),
    ("enumeration", "Enumeration"),
    ("map", "Map"),
    ("opaque", "Opaque"),
];

fn parse_kind(ast: &DeriveInput) -> syn::Result<Ident> {
    let mut kind = None;

    for attr in &ast.attrs {
        if !attr.path().is_ident(TERMINAL_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("kind") {
                return Err(meta.error("unsupported argument, expected `kind`"));
            }
            if kind.is_some() {
                return Err(meta.error("duplicate `kind`"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            let value = lit.value();
            let Some((_, variant)) = KINDS.iter().find(|(name, _)| *name == value) else {
                return Err(syn::Error::new(
                    lit.span(),
                    "unknown terminal kind, expected one of `text`, `numeric`, `boolean`, \
                     `temporal`, `enumeration`, `map` or `opaque`",
                ));
            };
            kind = Some(Ident::new(variant, lit.span()));
            Ok(())
        })?;
    }

    Ok(kind.unwrap_or_else(|| {
        let default = match ast.data {
            Data::Enum(_) => "Enumeration",
            Data::Struct(_) | Data::Union(_) => "Opaque",
        };
        Ident::new(default, Span::call_site())
    }))
}

pub(crate) fn impl_terminal(mut ast: DeriveInput) -> syn::Result<TokenStream> {
    if let Some(lifetime) = ast.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "terminal types cannot have lifetime parameters",
        ));
    }
    let kind = parse_kind(&ast)?;

    let pn_proxy_path = crate::path::pn_proxy();
    let typed_ = crate::path::typed_(&pn_proxy_path);
    let shape_ = crate::path::shape_(&pn_proxy_path);
    let outcome_ = crate::path::outcome_(&pn_proxy_path);
    let type_info_ = crate::path::type_info_(&pn_proxy_path);
    let terminal_info_ = crate::path::terminal_info_(&pn_proxy_path);
    let terminal_kind_ = crate::path::terminal_kind_(&pn_proxy_path);

    let generic = ast.generics.type_params().next().is_some()
        || ast.generics.const_params().next().is_some();
    for param in ast.generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }

    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let info = quote! {
        #type_info_::Terminal(#terminal_info_::new::<Self>(#terminal_kind_::#kind))
    };
    let body = if generic {
        let cell_ = crate::path::generic_type_info_cell_(&pn_proxy_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| #info)
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(&pn_proxy_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| #info)
        }
    };

    Ok(quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }

        impl #impl_generics #shape_ for #ident #ty_generics #where_clause {
            type Output = ::core::option::Option<Self>;

            #[inline]
            fn materialize(_: #outcome_) -> ::core::option::Option<Self> {
                ::core::option::Option::None
            }
        }
    })
}
