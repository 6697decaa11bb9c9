use core::fmt;

use crate::info::{Type, impl_type_fn};

/// The closed value kinds where navigation stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    Text,
    Numeric,
    Boolean,
    Temporal,
    Enumeration,
    Map,
    /// Any other closed type, e.g. a user struct marked `#[derive(Terminal)]`.
    Opaque,
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.pad("Text"),
            Self::Numeric => f.pad("Numeric"),
            Self::Boolean => f.pad("Boolean"),
            Self::Temporal => f.pad("Temporal"),
            Self::Enumeration => f.pad("Enumeration"),
            Self::Map => f.pad("Map"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Compile-time description of a terminal value type.
#[derive(Clone, Debug)]
pub struct TerminalInfo {
    ty: Type,
    kind: TerminalKind,
}

impl TerminalInfo {
    impl_type_fn!(ty);

    /// Creates a [`TerminalInfo`] for `T`.
    #[inline]
    pub fn new<T: ?Sized + 'static>(kind: TerminalKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the [`TerminalKind`].
    #[inline]
    pub const fn kind(&self) -> TerminalKind {
        self.kind
    }

    /// Returns `true` for booleans, the only type an `is_` accessor may return.
    #[inline]
    pub const fn is_boolean(&self) -> bool {
        matches!(self.kind, TerminalKind::Boolean)
    }
}
