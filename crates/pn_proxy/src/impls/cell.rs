//! Containers for static storage of [`TypeInfo`].
//!
//! Used to implement [`Typed`](crate::info::Typed) so that every call returns
//! the same `&'static TypeInfo`.
//!
//! - [`NonGenericTypeInfoCell`]: one `OnceLock`, for non-generic types.
//! - [`GenericTypeInfoCell`]: a `static` inside a generic function is shared by
//!   every instantiation, so this cell keys its entries by [`TypeId`].

use core::any::TypeId;
use std::sync::{OnceLock, PoisonError, RwLock};

use pn_utils::TypeIdMap;

use crate::info::TypeInfo;

/// Static storage of a non-generic type's [`TypeInfo`].
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first use.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

/// Static storage of a generic type's [`TypeInfo`], one entry per
/// instantiation.
///
/// ## Example
///
/// ```
/// use pn_proxy::info::{Typed, TypeInfo, CollectionInfo, CollectionKind};
/// use pn_proxy::impls::GenericTypeInfoCell;
///
/// struct Batch<T>(Vec<T>);
///
/// impl<T: Typed> Typed for Batch<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Collection(
///             CollectionInfo::new::<Self, T>(CollectionKind::List)
///         ))
///     }
/// }
///
/// assert_ne!(
///     <Batch<u8>>::type_info().ty_id(),
///     <Batch<u16>>::type_info().ty_id(),
/// );
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the info stored for `G`, building it with `f` on first use.
    ///
    /// Racing first uses may each run `f`; only one result is kept.
    #[inline(always)]
    pub fn get_or_insert<G: ?Sized + 'static>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        let cached = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();
        match cached {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}
