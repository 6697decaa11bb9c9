//! Chains of recorded accessor calls.
//!
//! A [`PathChain`] is the context one navigation runs in. It owns the
//! [`PathAccumulator`] every stand-in created from it appends to, so two
//! chains never see each other's path.
//!
//! ```
//! # use pn_proxy::{navigable, ProxyRegistry};
//! pub struct Customer;
//!
//! #[navigable]
//! impl Customer {
//!     pub fn get_legal_name(&self) -> String { String::new() }
//! }
//!
//! pub struct Contract;
//!
//! #[navigable]
//! impl Contract {
//!     pub fn get_customer(&self) -> Customer { Customer }
//! }
//!
//! let registry = ProxyRegistry::new();
//! let chain = registry.chain();
//! let path = chain.name(chain.of(ContractProxy::get_customer).unwrap().get_legal_name());
//! assert_eq!(path.unwrap(), "customer.legalName");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accumulator;
mod elements;
mod outcome;
mod stand_in;

// -----------------------------------------------------------------------------
// Exports

pub use accumulator::PathAccumulator;
pub use elements::Elements;
pub use outcome::Outcome;
pub use stand_in::StandIn;

pub(crate) use outcome::OutcomeKind;

// -----------------------------------------------------------------------------
// PathChain

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::PropertyError;
use crate::proxy::{MemberRef, Navigable, Proxy};
use crate::registry::ProxyRegistry;

enum Mode {
    Live,
    // Private chain of the resolver: keeps the first member invoked on it.
    Probe(Cell<Option<MemberRef>>),
}

pub(crate) struct ChainInner {
    registry: ProxyRegistry,
    mode: Mode,
    acc: RefCell<PathAccumulator>,
}

/// The context of one navigation.
///
/// Created by [`ProxyRegistry::chain`]. Cloning yields another handle to the
/// same chain. A chain is confined to the thread that created it.
#[derive(Clone)]
pub struct PathChain {
    inner: Rc<ChainInner>,
}

impl PathChain {
    /// Creates an empty chain on `registry`.
    pub fn new(registry: &ProxyRegistry) -> Self {
        Self::with_mode(registry, Mode::Live)
    }

    pub(crate) fn probe(registry: &ProxyRegistry) -> Self {
        Self::with_mode(registry, Mode::Probe(Cell::new(None)))
    }

    fn with_mode(registry: &ProxyRegistry, mode: Mode) -> Self {
        Self {
            inner: Rc::new(ChainInner {
                registry: registry.clone(),
                mode,
                acc: RefCell::new(PathAccumulator::new()),
            }),
        }
    }

    #[inline]
    pub(crate) fn inner(&self) -> &Rc<ChainInner> {
        &self.inner
    }

    #[inline]
    pub(crate) fn same_chain(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    #[inline]
    pub(crate) fn is_probe(&self) -> bool {
        matches!(self.inner.mode, Mode::Probe(_))
    }

    pub(crate) fn note(&self, member: MemberRef) {
        if let Mode::Probe(noted) = &self.inner.mode
            && noted.get().is_none()
        {
            noted.set(Some(member));
        }
    }

    pub(crate) fn probed(&self) -> Option<MemberRef> {
        match &self.inner.mode {
            Mode::Probe(noted) => noted.get(),
            Mode::Live => None,
        }
    }

    pub(crate) fn append(&self, name: &str) {
        log::trace!("recording property `{name}`");
        self.inner.acc.borrow_mut().append(name);
    }

    pub(crate) fn fail(&self, error: PropertyError) {
        if !self.is_probe() {
            self.inner.acc.borrow_mut().fail(error);
        }
    }

    /// The registry this chain synthesizes stand-ins from.
    #[inline]
    pub fn registry(&self) -> &ProxyRegistry {
        &self.inner.registry
    }

    /// Returns `true` if nothing has been recorded since the last drain.
    pub fn is_empty(&self) -> bool {
        self.inner.acc.borrow().is_empty()
    }

    /// Returns a copy of the path recorded so far, without draining it.
    pub fn peek(&self) -> Option<String> {
        self.inner.acc.borrow().peek().map(ToOwned::to_owned)
    }

    /// Invokes `accessor` on a stand-in of the type it reads from.
    ///
    /// The accessor's own property is recorded on this chain. If it returns a
    /// stand-in, further calls on it continue the same path.
    ///
    /// # Errors
    ///
    /// Fails if the accessor cannot be resolved to a navigable type or no
    /// stand-in can be built for it. The chain is poisoned with the same
    /// error.
    pub fn of<P, R, F>(&self, accessor: F) -> Result<R, PropertyError>
    where
        P: Proxy,
        F: Fn(&P) -> R + 'static,
    {
        let proxy = self.stand_in_for::<P, R, F>(&accessor)?;
        Ok(accessor(&proxy))
    }

    fn stand_in_for<P, R, F>(&self, accessor: &F) -> Result<P, PropertyError>
    where
        P: Proxy,
        F: Fn(&P) -> R + 'static,
    {
        let registry = self.registry();
        let built = registry
            .resolve::<P, R, F>(accessor)
            .and_then(|target| registry.instance(target));
        match built {
            Ok(instance) => {
                if let Some(unread) = self.inner.acc.borrow().peek() {
                    log::debug!("navigation started on a chain still holding `{unread}`");
                }
                Ok(P::from_stand_in(StandIn::live(self.clone(), instance)))
            }
            Err(error) => {
                self.fail(error.clone());
                Err(error)
            }
        }
    }

    /// Returns a stand-in for `T` bound to this chain, without recording.
    ///
    /// # Errors
    ///
    /// Fails if `T` is not navigable or its stand-in cannot be built.
    pub fn of_type<T: ?Sized + Navigable>(&self) -> Result<T::Proxy, PropertyError> {
        match self.registry().instance(T::type_info()) {
            Ok(instance) => Ok(T::Proxy::from_stand_in(StandIn::live(
                self.clone(),
                instance,
            ))),
            Err(error) => {
                self.fail(error.clone());
                Err(error)
            }
        }
    }

    /// Ends the navigation and returns the recorded path.
    ///
    /// `last` is the value of the final call; it only sequences the calls
    /// before draining. The chain is empty afterwards and can be reused.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised on the chain, or
    /// [`PropertyError::NoPropertyRecorded`] if nothing was recorded.
    pub fn name<R>(&self, last: R) -> Result<String, PropertyError> {
        drop(last);
        self.inner.acc.borrow_mut().drain()
    }

    /// Shorthand for [`ProxyRegistry::name_of`] on this chain's registry.
    #[inline]
    pub fn name_of<P, R, F>(&self, accessor: F) -> Result<String, PropertyError>
    where
        P: Proxy,
        F: Fn(&P) -> R + 'static,
    {
        self.registry().name_of(accessor)
    }
}

impl fmt::Debug for PathChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let acc = self.inner.acc.borrow();
        f.debug_struct("PathChain")
            .field("path", &acc.peek())
            .field("failure", &acc.failure())
            .field("probe", &self.is_probe())
            .finish()
    }
}

/// Continues a chain through the element of a collection property.
///
/// # Errors
///
/// Fails with [`PropertyError::UnsupportedTarget`] if the elements are
/// terminal values.
#[inline]
pub fn any<P>(elements: Elements<P>) -> Result<P, PropertyError> {
    elements.any()
}
