use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure raised while resolving, synthesizing or navigating a stand-in.
///
/// Every variant is reported synchronously at the point it happens, and the
/// chain it happened on is poisoned: [`PathChain::name`] returns the first
/// failure instead of a partial path.
///
/// [`PathChain::name`]: crate::chain::PathChain::name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PropertyError {
    /// The accessor or stand-in leads to a type or member that cannot be
    /// navigated, such as a root-type member, a sealed type or method, or a
    /// call made past a terminal value.
    #[error("unsupported navigation target `{type_path}`: {reason}")]
    UnsupportedTarget {
        type_path: &'static str,
        reason: &'static str,
    },

    /// A collection-valued property does not describe its element type.
    #[error("cannot determine the element type of collection property `{property}` on `{type_path}`")]
    UnsupportedElementShape {
        type_path: &'static str,
        property: String,
    },

    /// A method that is not a readable property was invoked on a stand-in.
    #[error("`{type_path}::{method}` is not a readable property")]
    NonAccessorInvoked {
        type_path: &'static str,
        method: &'static str,
    },

    /// A stand-in instance could not be created.
    #[error("failed to construct a stand-in for `{type_path}`")]
    ProxyConstructionFailure {
        type_path: &'static str,
        #[source]
        source: ConstructionError,
    },

    /// The chain was read before any accessor recorded a property.
    #[error("no property was recorded on this chain")]
    NoPropertyRecorded,
}

/// Why a stand-in instance could not be created.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructionError {
    #[error("stand-in pool is exhausted (limit {limit})")]
    PoolExhausted { limit: usize },
}

impl PropertyError {
    #[inline]
    pub(crate) const fn unsupported(type_path: &'static str, reason: &'static str) -> Self {
        Self::UnsupportedTarget { type_path, reason }
    }
}
