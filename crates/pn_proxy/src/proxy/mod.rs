//! The traits tying a described type to its typed stand-in facade.
//!
//! - [`Shape`]: every type an accessor may return. It says what the facade
//!   method hands back and how to build it from an [`Outcome`].
//! - [`Navigable`]: entity types, which own a stand-in facade.
//! - [`Proxy`]: the facade itself, a thin typed wrapper over a [`StandIn`].
//!
//! `#[navigable]` implements all three for user types.
//!
//! [`Outcome`]: crate::chain::Outcome
//! [`StandIn`]: crate::chain::StandIn

// -----------------------------------------------------------------------------
// Modules

mod member;
mod root;

// -----------------------------------------------------------------------------
// Exports

pub use member::MemberRef;
pub use root::{AnyEntity, RootProxy};

use crate::chain::{Outcome, StandIn};
use crate::info::Typed;

// -----------------------------------------------------------------------------
// Shape

/// A type that may be returned by an accessor.
///
/// `Output` is what the matching stand-in method returns instead:
///
/// | declared type | `Output` |
/// |---|---|
/// | navigable entity `T` | `T`'s stand-in facade |
/// | `Vec<T>`, `HashSet<T>`, ... | [`Elements`] of `T`'s output |
/// | `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`, `&T` | `T`'s output |
/// | terminal value | a default value |
///
/// [`Elements`]: crate::chain::Elements
pub trait Shape: Typed {
    /// The value a stand-in method returns for this declared type.
    type Output;

    /// Builds the stand-in's return value from the runtime outcome.
    fn materialize(outcome: Outcome) -> Self::Output;
}

// -----------------------------------------------------------------------------
// Navigable

/// An entity type with a stand-in facade.
pub trait Navigable: Shape {
    /// The facade type, usually named `{Type}Proxy`.
    type Proxy: Proxy;
}

// -----------------------------------------------------------------------------
// Proxy

/// A typed stand-in facade.
///
/// A facade declares the same method names as its target. Each method
/// forwards to [`StandIn::invoke`] and converts the [`Outcome`] back into a
/// typed value. Facades of derived entities dereference to their parent's
/// facade, so inherited methods stay callable.
pub trait Proxy: Sized + 'static {
    /// The entity this facade stands in for.
    type Target: ?Sized + Navigable;

    /// Wraps a runtime stand-in.
    fn from_stand_in(stand_in: StandIn) -> Self;

    /// Returns the runtime stand-in.
    fn stand_in(&self) -> &StandIn;
}
