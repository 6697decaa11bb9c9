//! [`Typed`] and [`Shape`] for standard types.
//!
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - terminals:
//!     - `bool`, `char`, `i8`-`i128`, `isize`, `u8`-`u128`, `usize`, `f32`, `f64`
//!     - `NonZero` integers
//!     - `String`, `str`, `Cow<'static, str>`
//!     - `Duration`, `SystemTime`, `Instant`
//!     - `PathBuf`, `Path`
//!     - `HashMap<K, V, S>`, `BTreeMap<K, V>` (maps are never navigated)
//! - collections:
//!     - `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `[T]`, `[T; N]`
//!     - `HashSet<T, S>`, `BTreeSet<T>`
//! - transparent wrappers, reporting the info of `T`:
//!     - `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>`, `&'static T`
//!
//! [`Typed`]: crate::info::Typed
//! [`Shape`]: crate::proxy::Shape

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod collections;
mod terminal;
mod wrappers;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
