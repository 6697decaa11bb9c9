//! Synthesis of stand-in dispatch tables and instances.
//!
//! A [`ProxyClass`] is built once per navigable type from its declared
//! [`EntityInfo`](crate::info::EntityInfo): every declared method of the type
//! and its ancestors is classified into an [`Intercept`]. A [`ProxyInstance`]
//! is the single live instance of a class a registry hands out.

// -----------------------------------------------------------------------------
// Modules

mod class;
mod classify;
mod config;
mod instance;

// -----------------------------------------------------------------------------
// Exports

pub use class::{Intercept, Navigation, ProxyClass};
pub use config::{AccessorConvention, NameStyle, ProxyConfig};
pub use instance::ProxyInstance;
