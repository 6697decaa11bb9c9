use crate::PropertyError;
use crate::info::{EntityInfo, MethodInfo, TypeInfo};
use crate::synth::{Intercept, Navigation, ProxyConfig};

/// Decides how a stand-in of `owner` handles `method`.
///
/// `None` means the method gets no stand-in behavior at all (private or
/// associated functions). `next_slot` hands out child slots to the
/// properties that navigate further.
pub(super) fn classify(
    owner: &EntityInfo,
    method: &MethodInfo,
    config: &ProxyConfig,
    next_slot: &mut usize,
) -> Option<Intercept> {
    if method.is_private() || method.is_static() {
        return None;
    }
    if method.is_sealed() {
        return Some(Intercept::Sealed);
    }

    let accessor = (method.arity() == 0)
        .then(|| method.returns())
        .flatten()
        .and_then(|returns| {
            let stem = config.convention().property_stem(method.name(), returns)?;
            Some((returns, config.naming().apply(stem)))
        });

    let Some((returns, property)) = accessor else {
        return Some(Intercept::Reject);
    };

    let navigation = match navigation_of(returns, next_slot) {
        Ok(navigation) => navigation,
        Err(()) => {
            return Some(Intercept::Faulty(PropertyError::UnsupportedElementShape {
                type_path: owner.type_path(),
                property,
            }));
        }
    };

    Some(Intercept::Record {
        property: property.into_boxed_str(),
        navigation,
    })
}

// `Err` for a collection that does not describe its elements.
fn navigation_of(returns: &'static TypeInfo, next_slot: &mut usize) -> Result<Navigation, ()> {
    let mut take_slot = || {
        let slot = *next_slot;
        *next_slot += 1;
        slot
    };

    Ok(match returns {
        TypeInfo::Entity(entity) if entity.is_navigable() => Navigation::Entity {
            target: returns,
            slot: take_slot(),
        },
        TypeInfo::Collection(collection) => match collection.element() {
            None => return Err(()),
            Some(element) if element.is_navigable() => Navigation::Elements {
                element,
                slot: take_slot(),
            },
            Some(_) => Navigation::Terminal,
        },
        _ => Navigation::Terminal,
    })
}

#[cfg(test)]
mod tests {
    use super::classify;
    use crate::info::{
        CollectionInfo, CollectionKind, EntityInfo, EntityKind, MethodInfo, Receiver, TypeInfo,
        Visibility,
    };
    use crate::synth::{Intercept, Navigation, ProxyConfig};

    struct Owner;

    fn owner() -> EntityInfo {
        EntityInfo::new::<Owner>(EntityKind::Concrete)
    }

    fn run(method: MethodInfo) -> Option<Intercept> {
        let mut slot = 0;
        classify(&owner(), &method, &ProxyConfig::new(), &mut slot)
    }

    #[test]
    fn skipped_methods() {
        let private = MethodInfo::new("get_secret")
            .with_visibility(Visibility::Private)
            .returning::<String>();
        let associated = MethodInfo::new("get_default")
            .with_receiver(Receiver::None)
            .returning::<String>();

        assert!(run(private).is_none());
        assert!(run(associated).is_none());
    }

    #[test]
    fn rejected_methods() {
        let with_argument = MethodInfo::new("get_price_in")
            .with_arity(1)
            .returning::<f64>();
        let unit = MethodInfo::new("get_nothing");
        let plain = MethodInfo::new("recalculate").returning::<f64>();

        assert!(matches!(run(with_argument), Some(Intercept::Reject)));
        assert!(matches!(run(unit), Some(Intercept::Reject)));
        assert!(matches!(run(plain), Some(Intercept::Reject)));
    }

    #[test]
    fn terminal_record() {
        let getter = MethodInfo::new("get_legal_name").returning::<String>();
        match run(getter) {
            Some(Intercept::Record {
                property,
                navigation: Navigation::Terminal,
            }) => assert_eq!(&*property, "legalName"),
            other => panic!("unexpected intercept: {other:?}"),
        }
    }

    #[test]
    fn untyped_collection_is_faulty() {
        struct Bag;

        impl crate::info::Typed for Bag {
            fn type_info() -> &'static TypeInfo {
                static CELL: crate::impls::NonGenericTypeInfoCell =
                    crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Collection(CollectionInfo::untyped::<Self>(CollectionKind::List))
                })
            }
        }

        let getter = MethodInfo::new("get_items").returning::<Bag>();
        let mut slot = 0;
        let intercept = classify(&owner(), &getter, &ProxyConfig::new(), &mut slot);
        assert!(matches!(intercept, Some(Intercept::Faulty(_))));
        assert_eq!(slot, 0);
    }
}
