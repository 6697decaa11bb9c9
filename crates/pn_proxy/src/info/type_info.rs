use core::{error, fmt};

use crate::info::{CollectionInfo, EntityInfo, TerminalInfo, Type};

// -----------------------------------------------------------------------------
// InfoKind

/// The three shapes a described type can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    /// A type with accessors that can be navigated into.
    Entity,
    /// A list- or set-shaped container.
    Collection,
    /// A closed value where navigation stops.
    Terminal,
}

impl fmt::Display for InfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity => f.pad("Entity"),
            Self::Collection => f.pad("Collection"),
            Self::Terminal => f.pad("Terminal"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not of the expected [`InfoKind`].
#[derive(Debug)]
pub struct InfoKindError {
    pub expected: InfoKind,
    pub received: InfoKind,
}

impl fmt::Display for InfoKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type info kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for InfoKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static description of a type's navigable shape.
///
/// Obtained through [`Typed::type_info`]. The same type always yields the
/// same `&'static TypeInfo`, so references can be compared by address and the
/// contained [`Type`] can key caches.
///
/// # Examples
///
/// ```
/// use pn_proxy::info::{Typed, InfoKind, TerminalKind};
///
/// let info = String::type_info();
/// assert_eq!(info.kind(), InfoKind::Terminal);
/// assert_eq!(info.as_terminal().unwrap().kind(), TerminalKind::Text);
///
/// // Wrappers report the type they wrap.
/// assert!(core::ptr::eq(Option::<String>::type_info(), info));
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Entity(EntityInfo),
    Collection(CollectionInfo),
    Terminal(TerminalInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Converts to the specific info, failing on a kind mismatch.
        pub const fn $name(&self) -> Result<&$info, InfoKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(InfoKindError {
                    expected: InfoKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_entity: Entity => EntityInfo);
    impl_cast_method!(as_collection: Collection => CollectionInfo);
    impl_cast_method!(as_terminal: Terminal => TerminalInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Entity(info) => info.ty(),
            Self::Collection(info) => info.ty(),
            Self::Terminal(info) => info.ty(),
        }
    }

    /// Returns the `TypeId` of the described type.
    #[inline]
    pub const fn ty_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    /// Returns the full path of the described type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the [`InfoKind`] of this info.
    pub const fn kind(&self) -> InfoKind {
        match self {
            Self::Entity(_) => InfoKind::Entity,
            Self::Collection(_) => InfoKind::Collection,
            Self::Terminal(_) => InfoKind::Terminal,
        }
    }

    /// Returns `true` if a stand-in can be synthesized for this type.
    ///
    /// Only entities qualify, and among them neither the universal root nor
    /// sealed types do.
    pub fn is_navigable(&self) -> bool {
        match self {
            Self::Entity(info) => info.is_navigable(),
            _ => false,
        }
    }
}
