//! Static descriptions of navigable shapes.
//!
//! A [`TypeInfo`] is one of three kinds:
//!
//! - [`EntityInfo`]: a type with declared methods that a stand-in can be
//!   synthesized for. Entities form a single-inheritance tree rooted at
//!   [`AnyEntity`](crate::proxy::AnyEntity).
//! - [`CollectionInfo`]: a list or set, optionally knowing its element type.
//! - [`TerminalInfo`]: a closed value where navigation stops.
//!
//! Each declared method of an entity is described by a [`MethodInfo`].

// -----------------------------------------------------------------------------
// Modules

mod collection_info;
mod entity_info;
mod method_info;
mod terminal_info;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use ty::impl_type_fn;

pub use collection_info::{CollectionInfo, CollectionKind};
pub use entity_info::{EntityInfo, EntityKind};
pub use method_info::{MethodInfo, Receiver, Visibility};
pub use terminal_info::{TerminalInfo, TerminalKind};
pub use ty::Type;
pub use type_info::{InfoKind, InfoKindError, TypeInfo};
pub use typed::Typed;
