use core::any::TypeId;
use std::sync::PoisonError;

use crate::PropertyError;
use crate::chain::{PathChain, StandIn};
use crate::info::{EntityInfo, MethodInfo, TypeInfo, Typed};
use crate::proxy::{MemberRef, Proxy};
use crate::registry::ProxyRegistry;

impl ProxyRegistry {
    /// Returns the type a stand-in must be built for so `accessor` can run
    /// on it.
    ///
    /// The accessor is invoked once on a probe stand-in which records
    /// nothing; the first member it calls tells where the accessed property
    /// is declared. The result is the most specific non-sealed type between
    /// the accessor's parameter type and that declaring type. It is cached
    /// per accessor type.
    ///
    /// # Errors
    ///
    /// Fails with [`PropertyError::UnsupportedTarget`] if the accessor calls
    /// nothing, calls a member of the root type, or calls a sealed member or
    /// a member of a sealed type.
    pub fn resolve<P, R, F>(&self, accessor: &F) -> Result<&'static TypeInfo, PropertyError>
    where
        P: Proxy,
        F: Fn(&P) -> R + 'static,
    {
        let key = TypeId::of::<F>();

        let cached = self
            .inner
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();
        if let Some(target) = cached {
            return Ok(target);
        }

        let hint = P::Target::type_info();
        let member = probe(self, accessor).ok_or_else(|| {
            PropertyError::unsupported(
                hint.type_path(),
                "the accessor invoked no member of its parameter",
            )
        })?;
        let target = refine(hint, member)?;

        log::debug!(
            "resolved accessor `{}` to `{}` through `{member:?}`",
            core::any::type_name::<F>(),
            target.type_path(),
        );

        Ok(*self
            .inner
            .resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(key, || target))
    }
}

// Runs `accessor` on a stand-in bound to a private chain and reports the
// first member it invoked.
fn probe<P, R, F>(registry: &ProxyRegistry, accessor: &F) -> Option<MemberRef>
where
    P: Proxy,
    F: Fn(&P) -> R,
{
    let chain = PathChain::probe(registry);
    let proxy = P::from_stand_in(StandIn::probe(chain.clone()));
    drop(accessor(&proxy));
    chain.probed()
}

fn refine(hint: &'static TypeInfo, member: MemberRef) -> Result<&'static TypeInfo, PropertyError> {
    let declared = member.owner();
    let owner_path = declared.type_path();
    let Ok(owner) = declared.as_entity() else {
        return Err(PropertyError::unsupported(
            owner_path,
            "the invoked member is not declared by an entity",
        ));
    };

    if owner.is_root() {
        return Err(PropertyError::unsupported(
            owner_path,
            "methods declared by the root type are unsupported",
        ));
    }
    if owner.is_sealed() {
        return Err(PropertyError::unsupported(
            owner_path,
            "sealed types cannot be navigated",
        ));
    }
    if owner.method(member.name()).is_some_and(MethodInfo::is_sealed) {
        return Err(PropertyError::unsupported(
            owner_path,
            "sealed methods cannot be navigated",
        ));
    }

    let descends = hint
        .as_entity()
        .is_ok_and(|entity| entity.extends(owner.ty()));
    if !descends {
        return Ok(declared);
    }

    // Most specific first; the declaring type itself is navigable.
    let lineage = core::iter::successors(Some(hint), |info| {
        info.as_entity().ok().and_then(EntityInfo::parent)
    });
    for info in lineage {
        if info.is_navigable() {
            return Ok(info);
        }
        if info.ty() == owner.ty() {
            break;
        }
    }
    Ok(declared)
}

#[cfg(test)]
mod tests {
    use super::refine;
    use crate::PropertyError;
    use crate::impls::NonGenericTypeInfoCell;
    use crate::info::{EntityInfo, EntityKind, MethodInfo, TypeInfo, Typed};
    use crate::proxy::{AnyEntity, MemberRef};

    struct Base;
    struct Locked;
    struct Leaf;

    impl Typed for Base {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Entity(
                    EntityInfo::new::<Self>(EntityKind::Concrete)
                        .with_parent::<AnyEntity>()
                        .with_methods(&[
                            MethodInfo::new("get_id").returning::<u64>(),
                            MethodInfo::new("get_key")
                                .with_sealed(true)
                                .returning::<u64>(),
                        ]),
                )
            })
        }
    }

    impl Typed for Locked {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Entity(
                    EntityInfo::new::<Self>(EntityKind::Concrete)
                        .with_parent::<Base>()
                        .with_sealed(true),
                )
            })
        }
    }

    impl Typed for Leaf {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Entity(EntityInfo::new::<Self>(EntityKind::Concrete).with_parent::<Locked>())
            })
        }
    }

    #[test]
    fn most_specific_open_type() {
        let id = MemberRef::new::<Base>("get_id");

        let target = refine(Leaf::type_info(), id).unwrap();
        assert!(target.ty().is::<Leaf>());

        // A sealed hint falls back to the nearest open ancestor.
        let target = refine(Locked::type_info(), id).unwrap();
        assert!(target.ty().is::<Base>());

        // Unrelated hint: the declaring type.
        let target = refine(String::type_info(), id).unwrap();
        assert!(target.ty().is::<Base>());
    }

    #[test]
    fn unsupported_members() {
        let root = MemberRef::new::<AnyEntity>("identity");
        let err = refine(Leaf::type_info(), root).unwrap_err();
        assert_eq!(
            err,
            PropertyError::UnsupportedTarget {
                type_path: AnyEntity::type_info().type_path(),
                reason: "methods declared by the root type are unsupported",
            }
        );

        let sealed = MemberRef::new::<Base>("get_key");
        assert!(matches!(
            refine(Leaf::type_info(), sealed),
            Err(PropertyError::UnsupportedTarget { .. })
        ));

        let on_sealed_type = MemberRef::new::<Locked>("get_id");
        assert!(matches!(
            refine(Leaf::type_info(), on_sealed_type),
            Err(PropertyError::UnsupportedTarget { .. })
        ));
    }
}
