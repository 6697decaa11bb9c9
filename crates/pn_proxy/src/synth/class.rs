use core::fmt;

use pn_utils::StrMap;

use crate::PropertyError;
use crate::info::{Type, TypeInfo};
use crate::synth::ProxyConfig;
use crate::synth::classify::classify;

// -----------------------------------------------------------------------------
// Intercept

/// What a stand-in does when one of its methods is invoked.
#[derive(Debug, Clone)]
pub enum Intercept {
    /// An accessor: records `property`, then navigates.
    Record {
        property: Box<str>,
        navigation: Navigation,
    },
    /// A method that is not an accessor. Fails with
    /// [`PropertyError::NonAccessorInvoked`].
    Reject,
    /// A sealed method. Fails with [`PropertyError::UnsupportedTarget`].
    Sealed,
    /// An accessor whose return type cannot be navigated. Fails with the
    /// stored error.
    Faulty(PropertyError),
}

/// Where an accessor leads after recording its property.
#[derive(Debug, Clone, Copy)]
pub enum Navigation {
    /// Navigation stops.
    Terminal,
    /// A stand-in of `target`, memoized in child slot `slot`.
    Entity {
        target: &'static TypeInfo,
        slot: usize,
    },
    /// A container holding a stand-in of `element`, memoized in child slot
    /// `slot`.
    Elements {
        element: &'static TypeInfo,
        slot: usize,
    },
}

// -----------------------------------------------------------------------------
// ProxyClass

/// The dispatch table of one navigable type.
///
/// Methods are keyed by name over the type and its ancestors; the most
/// derived declaration of a name wins.
pub struct ProxyClass {
    info: &'static TypeInfo,
    lineage: Box<[Type]>,
    dispatch: StrMap<Intercept>,
    slots: usize,
}

impl ProxyClass {
    /// Builds the dispatch table of `info` under `config`.
    ///
    /// # Errors
    ///
    /// Fails with [`PropertyError::UnsupportedTarget`] if `info` is not an
    /// entity, or is the root type or sealed.
    pub fn synthesize(
        info: &'static TypeInfo,
        config: &ProxyConfig,
    ) -> Result<Self, PropertyError> {
        let type_path = info.type_path();
        let Ok(entity) = info.as_entity() else {
            return Err(PropertyError::unsupported(
                type_path,
                "only entity types can be navigated",
            ));
        };
        if entity.is_root() {
            return Err(PropertyError::unsupported(
                type_path,
                "the root type cannot be navigated",
            ));
        }
        if entity.is_sealed() {
            return Err(PropertyError::unsupported(
                type_path,
                "sealed types cannot be navigated",
            ));
        }

        let mut lineage = Vec::new();
        let mut dispatch = StrMap::with_capacity(entity.method_len());
        let mut slots = 0;

        let levels = core::iter::once(entity)
            .chain(entity.ancestors())
            .take_while(|level| !level.is_root());

        for level in levels {
            lineage.push(*level.ty());
            for method in level.methods() {
                if dispatch.contains(method.name()) {
                    continue;
                }
                if let Some(intercept) = classify(level, method, config, &mut slots) {
                    dispatch.insert_if_absent(method.name(), intercept);
                }
            }
        }

        log::debug!(
            "synthesized stand-in class for `{type_path}`: {} members, {slots} child slots",
            dispatch.len(),
        );

        Ok(Self {
            info,
            lineage: lineage.into_boxed_slice(),
            dispatch,
            slots,
        })
    }

    /// The type this class stands in for.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    /// The target type followed by its ancestors, excluding the root type.
    #[inline]
    pub fn lineage(&self) -> &[Type] {
        &self.lineage
    }

    /// Returns `true` if the target type is, or extends, `ty`.
    pub fn extends(&self, ty: &Type) -> bool {
        self.lineage.contains(ty)
    }

    /// Returns how the method `name` is handled, or `None` if the stand-in
    /// does not intercept it.
    #[inline]
    pub fn intercept(&self, name: &str) -> Option<&Intercept> {
        self.dispatch.get(name)
    }

    /// The number of intercepted methods.
    #[inline]
    pub fn len(&self) -> usize {
        self.dispatch.len()
    }

    /// The number of child slots an instance of this class needs.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Iterates over the recorded property names.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.dispatch.iter().filter_map(|(_, intercept)| match intercept {
            Intercept::Record { property, .. } => Some(&**property),
            _ => None,
        })
    }
}

impl fmt::Debug for ProxyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyClass")
            .field("type_path", &self.type_path())
            .field("lineage", &self.lineage)
            .field("members", &self.dispatch.len())
            .field("slots", &self.slots)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ProxyClass;
    use crate::PropertyError;
    use crate::info::Typed;
    use crate::proxy::AnyEntity;
    use crate::synth::ProxyConfig;

    #[test]
    fn rejects_non_entities() {
        let config = ProxyConfig::new();

        let err = ProxyClass::synthesize(String::type_info(), &config).unwrap_err();
        assert!(matches!(err, PropertyError::UnsupportedTarget { .. }));

        let err = ProxyClass::synthesize(AnyEntity::type_info(), &config).unwrap_err();
        assert_eq!(
            err,
            PropertyError::UnsupportedTarget {
                type_path: AnyEntity::type_info().type_path(),
                reason: "the root type cannot be navigated",
            }
        );
    }
}
