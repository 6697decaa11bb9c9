#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Code generated by `#[navigable]` names this crate `pn_proxy`, including in
// this crate's own tests.
extern crate self as pn_proxy;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod chain;
pub mod impls;
pub mod info;
pub mod proxy;
pub mod registry;
pub mod synth;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use chain::{Elements, PathChain, any};
pub use error::{ConstructionError, PropertyError};
pub use registry::ProxyRegistry;
pub use synth::{AccessorConvention, NameStyle, ProxyConfig};

pub use pn_proxy_derive as derive;
pub use pn_proxy_derive::{Terminal, navigable};

/// The items most navigations need.
pub mod prelude {
    pub use crate::chain::{Elements, PathChain, any};
    pub use crate::proxy::{Navigable, Proxy, Shape};
    pub use crate::{PropertyError, ProxyRegistry, Terminal, navigable};
}
