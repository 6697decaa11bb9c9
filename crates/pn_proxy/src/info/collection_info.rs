use core::fmt;

use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// CollectionKind

/// The container shape a stand-in hands back for a collection property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Ordered: `Vec`, `VecDeque`, `LinkedList`, slices and arrays.
    List,
    /// Unordered, unique: `HashSet`, `BTreeSet`.
    Set,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.pad("List"),
            Self::Set => f.pad("Set"),
        }
    }
}

// -----------------------------------------------------------------------------
// CollectionInfo

/// Compile-time description of a list- or set-shaped container.
///
/// # Examples
///
/// ```
/// use pn_proxy::info::{CollectionKind, InfoKind, Typed};
///
/// let info = <Vec<u32>>::type_info().as_collection().unwrap();
/// assert_eq!(info.kind(), CollectionKind::List);
/// assert_eq!(info.element().unwrap().kind(), InfoKind::Terminal);
/// ```
#[derive(Clone, Debug)]
pub struct CollectionInfo {
    ty: Type,
    kind: CollectionKind,
    element: Option<fn() -> &'static TypeInfo>,
}

impl CollectionInfo {
    impl_type_fn!(ty);

    /// Creates a [`CollectionInfo`] for container `C` holding `E`.
    pub fn new<C: ?Sized + 'static, E: ?Sized + Typed>(kind: CollectionKind) -> Self {
        Self {
            ty: Type::of::<C>(),
            kind,
            element: Some(E::type_info),
        }
    }

    /// Creates a [`CollectionInfo`] for a container whose element type is
    /// unknown.
    ///
    /// Navigating into a property of such a type fails with
    /// [`PropertyError::UnsupportedElementShape`].
    ///
    /// [`PropertyError::UnsupportedElementShape`]: crate::PropertyError::UnsupportedElementShape
    pub fn untyped<C: ?Sized + 'static>(kind: CollectionKind) -> Self {
        Self {
            ty: Type::of::<C>(),
            kind,
            element: None,
        }
    }

    /// Returns the [`CollectionKind`].
    #[inline]
    pub const fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Returns the element info, if known.
    #[inline]
    pub fn element(&self) -> Option<&'static TypeInfo> {
        self.element.map(|element| element())
    }
}
