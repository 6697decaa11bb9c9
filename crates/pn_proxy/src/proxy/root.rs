use core::fmt;
use core::hash::{Hash, Hasher};

use crate::chain::{Outcome, StandIn};
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{EntityInfo, EntityKind, MethodInfo, TypeInfo, Typed};
use crate::proxy::{MemberRef, Navigable, Proxy, Shape};

// -----------------------------------------------------------------------------
// AnyEntity

/// The universal root type.
///
/// Every entity without an explicit parent extends `AnyEntity`. Its members
/// are identity introspection, never properties: an accessor that resolves to
/// one of them fails with [`PropertyError::UnsupportedTarget`].
///
/// [`PropertyError::UnsupportedTarget`]: crate::PropertyError::UnsupportedTarget
pub enum AnyEntity {}

impl Typed for AnyEntity {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| {
            TypeInfo::Entity(EntityInfo::new::<Self>(EntityKind::Root).with_methods(&[
                MethodInfo::new("get_type_path").returning::<Option<&'static str>>(),
                MethodInfo::new("identity").returning::<usize>(),
            ]))
        })
    }
}

impl Shape for AnyEntity {
    type Output = RootProxy;

    #[inline]
    fn materialize(outcome: Outcome) -> Self::Output {
        outcome.into_proxy()
    }
}

impl Navigable for AnyEntity {
    type Proxy = RootProxy;
}

// -----------------------------------------------------------------------------
// RootProxy

/// The facade of [`AnyEntity`], at the bottom of every facade's deref chain.
///
/// Its members keep an identity-based implementation on live stand-ins.
/// Equality, hashing and formatting of every facade delegate here.
pub struct RootProxy {
    stand_in: StandIn,
}

impl RootProxy {
    /// Path of the type the stand-in was synthesized for.
    ///
    /// `None` for a stand-in that is not backed by a synthesized instance.
    pub fn get_type_path(&self) -> Option<&'static str> {
        self.stand_in
            .touch_root(MemberRef::new::<AnyEntity>("get_type_path"));
        self.stand_in.target_info().map(TypeInfo::type_path)
    }

    /// Address-based identity of the stand-in.
    pub fn identity(&self) -> usize {
        self.stand_in
            .touch_root(MemberRef::new::<AnyEntity>("identity"));
        self.stand_in.identity()
    }
}

impl Proxy for RootProxy {
    type Target = AnyEntity;

    #[inline]
    fn from_stand_in(stand_in: StandIn) -> Self {
        Self { stand_in }
    }

    #[inline]
    fn stand_in(&self) -> &StandIn {
        &self.stand_in
    }
}

impl PartialEq for RootProxy {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.stand_in == other.stand_in
    }
}

impl Eq for RootProxy {}

impl Hash for RootProxy {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stand_in.hash(state);
    }
}

impl fmt::Debug for RootProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.stand_in, f)
    }
}
