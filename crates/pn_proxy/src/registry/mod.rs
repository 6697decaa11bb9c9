//! The owner of every cache a navigation relies on.
//!
//! A [`ProxyRegistry`] memoizes, per type:
//!
//! - resolved accessor targets, keyed by the accessor's own type;
//! - synthesized [`ProxyClass`]es and their single [`ProxyInstance`];
//! - final paths computed by [`name_of`](ProxyRegistry::name_of).
//!
//! Entries live as long as the registry. Cloning a registry shares them.

// -----------------------------------------------------------------------------
// Modules

mod resolver;

// -----------------------------------------------------------------------------
// ProxyRegistry

use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use pn_utils::TypeIdMap;

use crate::chain::PathChain;
use crate::info::TypeInfo;
use crate::proxy::Proxy;
use crate::synth::{ProxyClass, ProxyConfig, ProxyInstance};
use crate::{ConstructionError, PropertyError};

struct RegistryInner {
    config: ProxyConfig,
    resolved: RwLock<TypeIdMap<&'static TypeInfo>>,
    classes: RwLock<TypeIdMap<Arc<ProxyClass>>>,
    instances: RwLock<TypeIdMap<Arc<ProxyInstance>>>,
    names: RwLock<TypeIdMap<Arc<str>>>,
}

/// Shared caches of resolved types, stand-in classes and instances.
///
/// Cheap to clone and safe to share between threads. Lookups take a read
/// lock; new entries are built outside any lock and published under the
/// write lock, so every caller observes the same class and instance for a
/// type.
///
/// # Examples
///
/// ```
/// use pn_proxy::{navigable, ProxyRegistry};
///
/// pub struct Contract;
///
/// #[navigable]
/// impl Contract {
///     pub fn get_version(&self) -> u32 { 1 }
///     pub fn is_archived(&self) -> bool { false }
/// }
///
/// let registry = ProxyRegistry::new();
/// assert_eq!(registry.name_of(ContractProxy::get_version).unwrap(), "version");
/// assert_eq!(registry.name_of(ContractProxy::is_archived).unwrap(), "archived");
/// ```
#[derive(Clone)]
pub struct ProxyRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for ProxyRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyRegistry {
    /// Creates an empty registry with the default [`ProxyConfig`].
    #[inline]
    pub fn new() -> Self {
        Self::with_config(ProxyConfig::new())
    }

    /// Creates an empty registry.
    pub fn with_config(config: ProxyConfig) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                config,
                resolved: RwLock::new(TypeIdMap::new()),
                classes: RwLock::new(TypeIdMap::new()),
                instances: RwLock::new(TypeIdMap::new()),
                names: RwLock::new(TypeIdMap::new()),
            }),
        }
    }

    #[inline]
    pub fn config(&self) -> &ProxyConfig {
        &self.inner.config
    }

    /// Starts a new, empty [`PathChain`] on this registry.
    #[inline]
    pub fn chain(&self) -> PathChain {
        PathChain::new(self)
    }

    /// Returns the stand-in class of `info`, synthesizing it on first use.
    ///
    /// # Errors
    ///
    /// Fails if `info` is not a navigable entity.
    pub fn stand_in_class(&self, info: &'static TypeInfo) -> Result<Arc<ProxyClass>, PropertyError> {
        let type_id = info.ty_id();

        let cached = self
            .inner
            .classes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned();
        if let Some(class) = cached {
            return Ok(class);
        }

        let class = Arc::new(ProxyClass::synthesize(info, &self.inner.config)?);

        let mut classes = self
            .inner
            .classes
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let published = classes.get_or_insert(type_id, || Arc::clone(&class));
        if !Arc::ptr_eq(published, &class) {
            log::warn!(
                "discarding a redundant stand-in class for `{}`",
                info.type_path()
            );
        }
        Ok(Arc::clone(published))
    }

    /// Returns the stand-in instance of `info`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Fails if `info` is not a navigable entity, or with
    /// [`PropertyError::ProxyConstructionFailure`] once the configured
    /// [`max_stand_ins`](ProxyConfig::max_stand_ins) is reached.
    pub fn instance(&self, info: &'static TypeInfo) -> Result<Arc<ProxyInstance>, PropertyError> {
        let type_id = info.ty_id();

        let cached = self
            .inner
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned();
        if let Some(instance) = cached {
            return Ok(instance);
        }

        let class = self.stand_in_class(info)?;

        let mut instances = self
            .inner
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(instance) = instances.get(&type_id) {
            return Ok(Arc::clone(instance));
        }
        if let Some(limit) = self.inner.config.max_stand_ins()
            && instances.len() >= limit
        {
            return Err(PropertyError::ProxyConstructionFailure {
                type_path: info.type_path(),
                source: ConstructionError::PoolExhausted { limit },
            });
        }

        let instance = Arc::new(ProxyInstance::new(class));
        instances.insert(type_id, Arc::clone(&instance));
        Ok(instance)
    }

    /// Returns the path recorded by a single accessor call.
    ///
    /// With [`cache_names`](ProxyConfig::cache_names) enabled, the result is
    /// remembered per accessor type and later calls return it without
    /// resolving or invoking anything.
    ///
    /// # Errors
    ///
    /// Any failure of [`PathChain::of`] or [`PathChain::name`].
    pub fn name_of<P, R, F>(&self, accessor: F) -> Result<String, PropertyError>
    where
        P: Proxy,
        F: Fn(&P) -> R + 'static,
    {
        let cache = self.inner.config.cache_names();
        let key = TypeId::of::<F>();

        if cache
            && let Some(name) = self
                .inner
                .names
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&key)
        {
            return Ok(name.to_string());
        }

        let chain = self.chain();
        let name = chain.name(chain.of(accessor)?)?;

        if cache {
            self.inner
                .names
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .get_or_insert(key, || Arc::from(name.as_str()));
        }
        Ok(name)
    }

    /// Synthesizes the stand-in classes of every type registered with
    /// `#[navigable(auto_register)]`.
    ///
    /// Returns `false` when the `auto_register` feature is disabled, in which
    /// case nothing happens. Types that fail to synthesize are logged and
    /// skipped.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&self) -> bool {
        register_submitted(self)
    }

    /// Forgets every path remembered by [`name_of`](Self::name_of).
    pub fn clear_name_cache(&self) {
        self.inner
            .names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// The number of paths remembered by [`name_of`](Self::name_of).
    pub fn cached_names(&self) -> usize {
        read_len(&self.inner.names)
    }

    /// The number of synthesized stand-in classes.
    pub fn cached_classes(&self) -> usize {
        read_len(&self.inner.classes)
    }

    /// The number of live stand-in instances.
    pub fn cached_stand_ins(&self) -> usize {
        read_len(&self.inner.instances)
    }
}

#[cfg(feature = "auto_register")]
fn register_submitted(registry: &ProxyRegistry) -> bool {
    use crate::__macro_exports::auto_register::{__AutoRegisterFunc, inventory};

    for entry in inventory::iter::<__AutoRegisterFunc> {
        let info = (entry.0)();
        if let Err(error) = registry.stand_in_class(info) {
            log::warn!("skipping auto-registered `{}`: {error}", info.type_path());
        }
    }
    true
}

#[cfg(not(feature = "auto_register"))]
#[inline(always)]
fn register_submitted(_registry: &ProxyRegistry) -> bool {
    false
}

fn read_len<V>(table: &RwLock<TypeIdMap<V>>) -> usize {
    table.read().unwrap_or_else(PoisonError::into_inner).len()
}

impl fmt::Debug for ProxyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyRegistry")
            .field("config", &self.inner.config)
            .field("classes", &self.cached_classes())
            .field("stand_ins", &self.cached_stand_ins())
            .field("names", &self.cached_names())
            .finish()
    }
}
