use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to a type's navigable shape.
///
/// Implemented by `#[navigable]` for entities, by `#[derive(Terminal)]` for
/// closed user types, and by this crate for the standard library types that
/// can appear as accessor return types.
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] or [`GenericTypeInfoCell`] so every call
/// returns the same reference:
///
/// ```
/// use pn_proxy::info::{Typed, TypeInfo, TerminalInfo, TerminalKind};
/// use pn_proxy::impls::NonGenericTypeInfoCell;
///
/// struct Currency;
///
/// impl Typed for Currency {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Terminal(
///             TerminalInfo::new::<Self>(TerminalKind::Enumeration)
///         ))
///     }
/// }
///
/// assert!(core::ptr::eq(Currency::type_info(), Currency::type_info()));
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the static description of `Self`.
    fn type_info() -> &'static TypeInfo;
}
