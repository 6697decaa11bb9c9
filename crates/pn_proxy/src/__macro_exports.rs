//! Items the code generated by `#[navigable]` refers to.
//!
//! Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::TypeInfo;

    /// One `#[navigable(auto_register)]` type, submitted to `inventory`.
    pub struct __AutoRegisterFunc(pub fn() -> &'static TypeInfo);

    inventory::collect!(__AutoRegisterFunc);
}
