use alloc::sync::Arc;
use core::convert::Infallible;

use crate::PropertyError;
use crate::chain::{Elements, PathChain, StandIn};
use crate::info::{CollectionInfo, CollectionKind, TypeInfo};
use crate::proxy::{MemberRef, Proxy, Shape};
use crate::synth::ProxyInstance;

pub(crate) enum OutcomeKind {
    Entity(Arc<ProxyInstance>),
    Elements(Arc<ProxyInstance>),
    Value,
    Failed(PropertyError),
}

/// The runtime result of invoking a member on a [`StandIn`].
///
/// Facade methods turn it into their declared output through
/// [`Shape::materialize`], which calls one of the `into_*` conversions.
pub struct Outcome {
    chain: PathChain,
    member: MemberRef,
    kind: OutcomeKind,
}

impl Outcome {
    #[inline]
    pub(crate) fn new(chain: PathChain, member: MemberRef, kind: OutcomeKind) -> Self {
        Self {
            chain,
            member,
            kind,
        }
    }

    #[inline]
    pub(crate) fn value(chain: PathChain, member: MemberRef) -> Self {
        Self::new(chain, member, OutcomeKind::Value)
    }

    #[inline]
    pub(crate) fn failed(chain: PathChain, member: MemberRef, error: PropertyError) -> Self {
        Self::new(chain, member, OutcomeKind::Failed(error))
    }

    /// The member whose invocation produced this outcome.
    #[inline]
    pub fn member(&self) -> MemberRef {
        self.member
    }

    /// The failure raised by the invocation, if any.
    pub fn error(&self) -> Option<&PropertyError> {
        match &self.kind {
            OutcomeKind::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Converts into a stand-in: live for an entity outcome, detached
    /// otherwise.
    pub fn into_stand_in(self) -> StandIn {
        match self.kind {
            OutcomeKind::Entity(instance) => StandIn::live(self.chain, instance),
            _ => StandIn::detached(self.chain),
        }
    }

    /// Converts into the facade `P`.
    #[inline]
    pub fn into_proxy<P: Proxy>(self) -> P {
        P::from_stand_in(self.into_stand_in())
    }

    /// Converts into the container handed back for a collection property.
    ///
    /// `collection` describes the declared container type. The result holds
    /// one element stand-in when the element type is navigable and is empty
    /// otherwise. While probing, the element stand-in records nothing.
    pub fn into_elements<T: ?Sized + Shape>(
        self,
        collection: &'static TypeInfo,
    ) -> Elements<T::Output> {
        let kind = collection
            .as_collection()
            .map_or(CollectionKind::List, CollectionInfo::kind);
        let items = match self.kind {
            OutcomeKind::Elements(instance) => {
                let element = Outcome::new(
                    self.chain.clone(),
                    self.member,
                    OutcomeKind::Entity(instance),
                );
                vec![T::materialize(element)]
            }
            OutcomeKind::Value if self.chain.is_probe() && T::type_info().is_navigable() => {
                let element = Outcome::value(self.chain.clone(), self.member);
                vec![T::materialize(element)]
            }
            _ => Vec::new(),
        };
        Elements::new(kind, collection.type_path(), items, self.chain)
    }

    /// Converts into the result of a method that can never be a property.
    ///
    /// Always an error: the failure raised on the chain, or
    /// [`PropertyError::NonAccessorInvoked`] while probing.
    pub fn into_rejection(self) -> Result<Infallible, PropertyError> {
        Err(match self.kind {
            OutcomeKind::Failed(error) => error,
            _ => PropertyError::NonAccessorInvoked {
                type_path: self.member.owner_path(),
                method: self.member.name(),
            },
        })
    }
}
