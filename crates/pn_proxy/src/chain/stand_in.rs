use alloc::rc::Rc;
use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::PropertyError;
use crate::chain::{Outcome, PathChain};
use crate::info::TypeInfo;
use crate::proxy::MemberRef;
use crate::synth::ProxyInstance;

#[derive(Clone)]
enum Target {
    // Used while resolving an accessor: calls are noted, nothing is recorded.
    Probe,
    // Returned where navigation cannot continue, e.g. from a terminal value.
    Detached,
    Live(Arc<ProxyInstance>),
}

/// The untyped stand-in behind every facade.
///
/// Bound to one [`PathChain`]; invoking a member through it records on that
/// chain only.
#[derive(Clone)]
pub struct StandIn {
    chain: PathChain,
    target: Target,
}

impl StandIn {
    #[inline]
    pub(crate) fn live(chain: PathChain, instance: Arc<ProxyInstance>) -> Self {
        Self {
            chain,
            target: Target::Live(instance),
        }
    }

    #[inline]
    pub(crate) fn probe(chain: PathChain) -> Self {
        Self {
            chain,
            target: Target::Probe,
        }
    }

    #[inline]
    pub(crate) fn detached(chain: PathChain) -> Self {
        Self {
            chain,
            target: Target::Detached,
        }
    }

    /// The chain this stand-in records on.
    #[inline]
    pub fn chain(&self) -> &PathChain {
        &self.chain
    }

    /// Returns `true` if backed by a synthesized instance.
    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self.target, Target::Live(_))
    }

    /// The type the backing instance was synthesized for.
    pub fn target_info(&self) -> Option<&'static TypeInfo> {
        match &self.target {
            Target::Live(instance) => Some(instance.class().type_info()),
            _ => None,
        }
    }

    /// Invokes `member` on the stand-in.
    ///
    /// A live stand-in dispatches through its synthesized class. A detached
    /// one poisons the chain, since nothing can be navigated past a terminal
    /// value.
    pub fn invoke(&self, member: MemberRef) -> Outcome {
        match &self.target {
            Target::Live(instance) => instance.invoke(&self.chain, member),
            Target::Probe => {
                self.chain.note(member);
                Outcome::value(self.chain.clone(), member)
            }
            Target::Detached if self.chain.is_probe() => Outcome::value(self.chain.clone(), member),
            Target::Detached => {
                let error = PropertyError::unsupported(
                    member.owner_path(),
                    "navigation continued past a terminal value",
                );
                self.chain.fail(error.clone());
                Outcome::failed(self.chain.clone(), member, error)
            }
        }
    }

    /// Marks a root-type member as invoked.
    ///
    /// Root members never record; while probing they are noted so the
    /// resolver can reject them.
    pub(crate) fn touch_root(&self, member: MemberRef) {
        if let Target::Probe = self.target {
            self.chain.note(member);
        }
    }

    /// Address-based identity: the backing instance, or the chain for
    /// stand-ins without one.
    pub fn identity(&self) -> usize {
        match &self.target {
            Target::Live(instance) => Arc::as_ptr(instance) as usize,
            _ => Rc::as_ptr(self.chain.inner()) as usize,
        }
    }
}

impl PartialEq for StandIn {
    fn eq(&self, other: &Self) -> bool {
        match (&self.target, &other.target) {
            (Target::Live(a), Target::Live(b)) => Arc::ptr_eq(a, b),
            (Target::Probe, Target::Probe) | (Target::Detached, Target::Detached) => {
                self.chain.same_chain(&other.chain)
            }
            _ => false,
        }
    }
}

impl Eq for StandIn {}

impl Hash for StandIn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for StandIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Target::Live(instance) => write!(
                f,
                "StandIn<{}>@{:#x}",
                instance.class().type_path(),
                self.identity()
            ),
            Target::Probe => f.write_str("StandIn<probe>"),
            Target::Detached => f.write_str("StandIn<detached>"),
        }
    }
}
