use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a described type: its [`TypeId`] and its path.
///
/// Equality and hashing only look at the `TypeId`.
///
/// # Example
///
/// ```
/// # use core::any::TypeId;
/// # use pn_proxy::info::Type;
/// let ty = Type::of::<String>();
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    type_id: TypeId,
    type_path: fn() -> &'static str,
}

impl Type {
    /// Creates a [`Type`] describing `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path: core::any::type_name::<T>,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this describes `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// The full path of the type, as reported by [`core::any::type_name`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// The path without its module prefix or generic arguments.
    ///
    /// `dyn my_crate::Shipment` becomes `Shipment`,
    /// `alloc::vec::Vec<u8>` becomes `Vec`.
    pub fn name(&self) -> &'static str {
        let path = self.path();
        let head = match path.find('<') {
            Some(index) => &path[..index],
            None => path,
        };
        match head.rfind("::") {
            Some(index) => &head[index + 2..],
            None => head.trim_start_matches("dyn "),
        }
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns the `TypeId` of the described type.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        /// Returns the full path of the described type.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::Type;

    trait Marker {}

    #[test]
    fn short_names() {
        assert_eq!(Type::of::<u64>().name(), "u64");
        assert_eq!(Type::of::<alloc::vec::Vec<u8>>().name(), "Vec");
        assert_eq!(Type::of::<dyn Marker>().name(), "Marker");
        assert_eq!(Type::of::<str>().name(), "str");
    }

    #[test]
    fn identity_only() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
        assert!(Type::of::<str>().is::<str>());
    }
}
