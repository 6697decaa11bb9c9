use alloc::sync::{Arc, Weak};
use core::fmt;
use std::sync::OnceLock;

use crate::PropertyError;
use crate::chain::{Outcome, OutcomeKind, PathChain};
use crate::info::TypeInfo;
use crate::proxy::MemberRef;
use crate::registry::ProxyRegistry;
use crate::synth::{Intercept, Navigation, ProxyClass};

/// The live stand-in instance of a [`ProxyClass`].
///
/// A registry creates at most one per class. Each navigable property owns a
/// child slot which remembers the instance it led to, so later calls skip
/// the registry lookup. Slots hold weak references; the registry keeps the
/// instances alive.
pub struct ProxyInstance {
    class: Arc<ProxyClass>,
    slots: Box<[OnceLock<Weak<ProxyInstance>>]>,
}

impl ProxyInstance {
    pub(crate) fn new(class: Arc<ProxyClass>) -> Self {
        let slots = (0..class.slots()).map(|_| OnceLock::new()).collect();
        Self { class, slots }
    }

    #[inline]
    pub fn class(&self) -> &ProxyClass {
        &self.class
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        self.class.type_info()
    }

    /// Dispatches `member` through the class and records on `chain`.
    pub(crate) fn invoke(&self, chain: &PathChain, member: MemberRef) -> Outcome {
        #[cfg(all(debug_assertions, feature = "debug"))]
        if !self.class.extends(member.owner().ty()) {
            log::warn!(
                "`{member:?}` dispatched on a stand-in of unrelated type `{}`",
                self.class.type_path(),
            );
        }

        let fail = |error: PropertyError| {
            chain.fail(error.clone());
            Outcome::failed(chain.clone(), member, error)
        };

        match self.class.intercept(member.name()) {
            Some(Intercept::Record {
                property,
                navigation,
            }) => {
                chain.append(property);
                let child = match *navigation {
                    Navigation::Terminal => return Outcome::value(chain.clone(), member),
                    Navigation::Entity { target, slot } => {
                        self.child(chain.registry(), slot, target).map(OutcomeKind::Entity)
                    }
                    Navigation::Elements { element, slot } => self
                        .child(chain.registry(), slot, element)
                        .map(OutcomeKind::Elements),
                };
                match child {
                    Ok(kind) => Outcome::new(chain.clone(), member, kind),
                    Err(error) => fail(error),
                }
            }
            Some(Intercept::Reject) => {
                log::error!("`{member:?}` is not an accessor but was invoked on a stand-in");
                fail(PropertyError::NonAccessorInvoked {
                    type_path: member.owner_path(),
                    method: member.name(),
                })
            }
            Some(Intercept::Sealed) => fail(PropertyError::unsupported(
                member.owner_path(),
                "sealed methods cannot be navigated",
            )),
            Some(Intercept::Faulty(error)) => fail(error.clone()),
            None => fail(PropertyError::unsupported(
                member.owner_path(),
                "the member is not intercepted by this stand-in",
            )),
        }
    }

    fn child(
        &self,
        registry: &ProxyRegistry,
        slot: usize,
        target: &'static TypeInfo,
    ) -> Result<Arc<ProxyInstance>, PropertyError> {
        let cell = self.slots.get(slot);
        if let Some(child) = cell.and_then(OnceLock::get).and_then(Weak::upgrade) {
            return Ok(child);
        }
        let child = registry.instance(target)?;
        if let Some(cell) = cell {
            // A racing caller may have filled the slot with the same instance.
            let _ = cell.set(Arc::downgrade(&child));
        }
        Ok(child)
    }
}

impl fmt::Debug for ProxyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.slots.iter().filter(|slot| slot.get().is_some()).count();
        f.debug_struct("ProxyInstance")
            .field("type_path", &self.class.type_path())
            .field("slots", &format_args!("{filled}/{}", self.slots.len()))
            .finish()
    }
}
