use core::fmt;

use crate::info::{TypeInfo, Typed};

/// A method named on its declaring type.
///
/// Stand-in methods hand one of these to [`StandIn::invoke`] so the runtime
/// knows which declared member was called.
///
/// [`StandIn::invoke`]: crate::chain::StandIn::invoke
#[derive(Clone, Copy)]
pub struct MemberRef {
    owner: fn() -> &'static TypeInfo,
    name: &'static str,
}

impl MemberRef {
    /// Names method `name` declared on `T`.
    #[inline]
    pub fn new<T: ?Sized + Typed>(name: &'static str) -> Self {
        Self {
            owner: T::type_info,
            name,
        }
    }

    /// Returns the info of the declaring type.
    #[inline]
    pub fn owner(&self) -> &'static TypeInfo {
        (self.owner)()
    }

    /// Returns the path of the declaring type.
    #[inline]
    pub fn owner_path(&self) -> &'static str {
        self.owner().type_path()
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for MemberRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.owner().ty_id() == other.owner().ty_id()
    }
}

impl Eq for MemberRef {}

impl fmt::Debug for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner_path(), self.name)
    }
}
