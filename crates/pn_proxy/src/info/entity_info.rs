use core::fmt;

use pn_utils::StrMap;

use crate::info::{MethodInfo, Type, TypeInfo, Typed, impl_type_fn};

// -----------------------------------------------------------------------------
// EntityKind

/// What kind of declaration an entity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A concrete type, described from its inherent `impl` block.
    Concrete,
    /// A trait object type, the analogue of an interface.
    Interface,
    /// The universal root every entity descends from.
    Root,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete => f.pad("Concrete"),
            Self::Interface => f.pad("Interface"),
            Self::Root => f.pad("Root"),
        }
    }
}

// -----------------------------------------------------------------------------
// EntityInfo

/// Compile-time description of a navigable type.
///
/// Holds the declared methods (in declaration order), the parent type this
/// one extends, and whether the type is sealed.
///
/// # Examples
///
/// ```
/// use pn_proxy::info::{EntityInfo, EntityKind, MethodInfo, Typed};
///
/// struct Invoice;
///
/// let info = EntityInfo::new::<Invoice>(EntityKind::Concrete).with_methods(&[
///     MethodInfo::new("get_number").returning::<u64>(),
///     MethodInfo::new("is_paid").returning::<bool>(),
/// ]);
///
/// assert_eq!(info.method_len(), 2);
/// assert!(info.method("get_number").is_some());
/// assert!(info.parent().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct EntityInfo {
    ty: Type,
    kind: EntityKind,
    sealed: bool,
    parent: Option<fn() -> &'static TypeInfo>,
    methods: Box<[MethodInfo]>,
    index: StrMap<usize>,
}

impl EntityInfo {
    impl_type_fn!(ty);

    /// Creates an [`EntityInfo`] for `T` without methods or parent.
    pub fn new<T: ?Sized + 'static>(kind: EntityKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            sealed: false,
            parent: None,
            methods: Box::new([]),
            index: StrMap::new(),
        }
    }

    /// Sets the type this entity extends.
    pub fn with_parent<P: ?Sized + Typed>(mut self) -> Self {
        self.parent = Some(P::type_info);
        self
    }

    /// Marks the entity as sealed, which forbids synthesizing a stand-in.
    pub const fn with_sealed(mut self, sealed: bool) -> Self {
        self.sealed = sealed;
        self
    }

    /// Sets the declared methods.
    ///
    /// When a name appears twice, lookups by name return the first one.
    pub fn with_methods(mut self, methods: &[MethodInfo]) -> Self {
        let mut index = StrMap::with_capacity(methods.len());
        for (position, method) in methods.iter().enumerate() {
            index.insert_if_absent(method.name(), position);
        }
        self.methods = methods.into();
        self.index = index;
        self
    }

    /// Returns the [`EntityKind`].
    #[inline]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns `true` for the universal root type.
    #[inline]
    pub const fn is_root(&self) -> bool {
        matches!(self.kind, EntityKind::Root)
    }

    /// Returns `true` if the entity is sealed.
    #[inline]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns `true` if a stand-in can be synthesized for this entity.
    #[inline]
    pub const fn is_navigable(&self) -> bool {
        !self.sealed && !self.is_root()
    }

    /// Returns the info of the type this entity extends.
    #[inline]
    pub fn parent(&self) -> Option<&'static TypeInfo> {
        self.parent.map(|parent| parent())
    }

    /// Walks the parent chain, nearest ancestor first.
    ///
    /// The walk stops at the first ancestor that is not an entity, and
    /// before any type it already passed, so a cyclic `extends` ends it.
    pub fn ancestors(&self) -> impl Iterator<Item = &'static EntityInfo> {
        let mut seen = vec![self.ty];
        core::iter::successors(
            self.parent().and_then(|info| info.as_entity().ok()),
            |entity| entity.parent().and_then(|info| info.as_entity().ok()),
        )
        .take_while(move |entity| {
            if seen.contains(entity.ty()) {
                log::warn!("cyclic parent chain through `{}`", entity.type_path());
                return false;
            }
            seen.push(*entity.ty());
            true
        })
    }

    /// Returns `true` if `other` is this type or one of its ancestors.
    pub fn extends(&self, other: &Type) -> bool {
        self.ty == *other || self.ancestors().any(|entity| entity.ty() == other)
    }

    /// Returns the method declared under `name`.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.get(*self.index.get(name)?)
    }

    /// Returns the declared methods in declaration order.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Returns the number of declared methods.
    #[inline]
    pub fn method_len(&self) -> usize {
        self.methods.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{EntityInfo, EntityKind, Type, TypeInfo, Typed};

    struct Ping;
    struct Pong;

    impl Typed for Ping {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Entity(EntityInfo::new::<Self>(EntityKind::Concrete).with_parent::<Pong>())
            })
        }
    }

    impl Typed for Pong {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Entity(EntityInfo::new::<Self>(EntityKind::Concrete).with_parent::<Ping>())
            })
        }
    }

    #[test]
    fn cyclic_parents() {
        let ping = Ping::type_info().as_entity().unwrap();

        let ancestors: Vec<_> = ping.ancestors().map(EntityInfo::ty).collect();
        assert_eq!(ancestors.len(), 1);
        assert!(ancestors[0].is::<Pong>());

        assert!(ping.extends(&Type::of::<Pong>()));
        assert!(!ping.extends(&Type::of::<String>()));
    }
}
