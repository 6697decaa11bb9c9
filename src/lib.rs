#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use pn_proxy as proxy;
pub use pn_utils as utils;

use std::sync::LazyLock;

use pn_proxy::proxy::Proxy;
use pn_proxy::{PathChain, PropertyError, ProxyRegistry};

static REGISTRY: LazyLock<ProxyRegistry> = LazyLock::new(|| {
    let registry = ProxyRegistry::new();
    if registry.auto_register() {
        log::debug!(
            "default registry starts with {} stand-in classes",
            registry.cached_classes()
        );
    }
    registry
});

/// The process-wide registry behind [`chain`] and [`name_of`].
///
/// Created with the default [`ProxyConfig`](pn_proxy::ProxyConfig) on first
/// use. With the `auto_register` feature, every type marked
/// `#[navigable(auto_register)]` is synthesized at that point.
#[inline]
pub fn registry() -> &'static ProxyRegistry {
    &REGISTRY
}

/// Starts a new chain on the default [`registry`].
#[inline]
pub fn chain() -> PathChain {
    registry().chain()
}

/// Returns the path recorded by a single accessor call, using the default
/// [`registry`].
///
/// # Errors
///
/// See [`ProxyRegistry::name_of`].
#[inline]
pub fn name_of<P, R, F>(accessor: F) -> Result<String, PropertyError>
where
    P: Proxy,
    F: Fn(&P) -> R + 'static,
{
    registry().name_of(accessor)
}

pub mod prelude {
    pub use crate::{chain, name_of, registry};
    pub use pn_proxy::prelude::*;
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    pub struct Customer;

    #[navigable(auto_register)]
    impl Customer {
        pub fn get_legal_name(&self) -> String {
            String::new()
        }
    }

    pub struct Contract;

    #[navigable(auto_register)]
    impl Contract {
        pub fn get_customer(&self) -> Customer {
            Customer
        }
    }

    #[test]
    fn default_registry() {
        assert_eq!(name_of(ContractProxy::get_customer).unwrap(), "customer");

        let chain = chain();
        let name = chain.of(ContractProxy::get_customer).unwrap().get_legal_name();
        assert_eq!(chain.name(name).unwrap(), "customer.legalName");

        assert!(core::ptr::eq(registry(), registry()));
        #[cfg(feature = "auto_register")]
        assert!(registry().cached_classes() >= 2);
    }
}
