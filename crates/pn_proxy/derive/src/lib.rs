//! See following macros:
//!
//! - [`navigable`]
//! - [`Terminal`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, Item, parse_macro_input};

static NAVIGABLE_ATTRIBUTE_NAME: &str = "navigable";

// -----------------------------------------------------------------------------
// Modules

mod navigable;
mod path;
mod terminal;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Navigable Entities
///
/// Put on an inherent `impl` block, `#[navigable]` describes the type to the
/// stand-in engine and generates its stand-in facade `{Type}Proxy`:
///
/// - `Typed`, with one `MethodInfo` per method of the block.
/// - `Shape` and `Navigable`.
/// - The facade struct, implementing `Proxy`, `Deref` to the parent's facade,
///   and `PartialEq`, `Eq`, `Hash`, `Debug` by stand-in identity.
///
/// Every public method taking `self` gets a facade method of the same name:
///
/// - A parameterless method returns what its declared return type
///   materializes to: the next facade for an entity, `Elements` for a
///   collection, a default value for a terminal.
/// - Any other method returns `Result<Infallible, PropertyError>` and always
///   fails: it is not an accessor.
///
/// ```rust, ignore
/// pub struct Contract { /* ... */ }
///
/// #[navigable]
/// impl Contract {
///     pub fn get_customer(&self) -> &BusinessPartner { /* ... */ }
///     pub fn get_positions(&self) -> &[ContractPosition] { /* ... */ }
///     pub fn is_valid(&self, at: SystemTime) -> bool { /* ... */ }
/// }
///
/// // ContractProxy::get_customer(&self) -> BusinessPartnerProxy
/// // ContractProxy::get_positions(&self) -> Elements<ContractPositionProxy>
/// // ContractProxy::is_valid(&self, _: SystemTime) -> Result<Infallible, PropertyError>
/// ```
///
/// The navigable type and the types named in accessor return types must be
/// public: the facade exposes them.
///
/// Put on a non-generic trait, the same is generated for `dyn Trait`, as an
/// interface. Methods declared `where Self: Sized` are left out.
///
/// ```rust, ignore
/// #[navigable]
/// pub trait Shipment {
///     fn get_carrier(&self) -> String;
/// }
///
/// // ShipmentProxy::get_carrier(&self) -> String
/// ```
///
/// ## Type Arguments
///
/// - `extends = Parent`: the parent type, `AnyEntity` by default. The facade
///   derefs to the parent's facade, so inherited accessors are reachable.
///   A type cannot extend itself.
/// - `sealed`: stand-ins are never synthesized for the type.
/// - `proxy = Name`: names the facade, instead of `{Type}Proxy`.
/// - `auto_register`: submits the type for `ProxyRegistry::auto_register`.
///   Ignored on generic types.
///
/// ```rust, ignore
/// #[navigable(extends = Contract, proxy = SalesProxy)]
/// impl SalesContract {
///     pub fn get_discount(&self) -> f64 { /* ... */ }
/// }
/// ```
///
/// Types with lifetime parameters are rejected. Type parameters must be
/// `'static`.
///
/// ## Method Arguments
///
/// - `#[navigable(sealed)]`: the stand-in refuses to intercept the method.
/// - `#[navigable(skip)]`: the method is left out entirely, for example
///   when its return type cannot be described.
///
/// `async` and `unsafe` methods are always left out. Only parameterless
/// methods have their return type described, which then must implement
/// `Shape`.
#[proc_macro_attribute]
pub fn navigable(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut attrs = navigable::TypeAttributes::default();
    let parser = syn::meta::parser(|meta| attrs.parse_meta(meta));
    parse_macro_input!(args with parser);

    let item = parse_macro_input!(input as Item);

    navigable::expand(attrs, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// # Terminal Types
///
/// Marks a user type as a path terminal: an accessor returning it ends the
/// path, and its facade method returns `None`.
///
/// The kind defaults to `enumeration` for enums and `opaque` otherwise.
///
/// ```rust, ignore
/// #[derive(Terminal)]
/// enum Status { Open, Closed }
///
/// #[derive(Terminal)]
/// #[terminal(kind = "numeric")]
/// struct Money(i64);
/// ```
///
/// Available kinds: `text`, `numeric`, `boolean`, `temporal`,
/// `enumeration`, `map`, `opaque`. Accessors named `is_*` only count as
/// accessors when they return a `boolean` terminal.
#[proc_macro_derive(Terminal, attributes(terminal))]
pub fn derive_terminal(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    terminal::impl_terminal(ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
