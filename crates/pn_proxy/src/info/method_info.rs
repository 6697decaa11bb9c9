use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// Receiver

/// How a method takes its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// No receiver: an associated (static) function.
    None,
    /// `&self`
    Ref,
    /// `&mut self`
    Mut,
    /// `self`
    Value,
}

/// Visibility of a declared method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)` or `pub(in path)`.
    Restricted,
    /// Private to its module.
    Private,
}

// -----------------------------------------------------------------------------
// MethodInfo

/// The declared shape of one method.
///
/// Only the shape is recorded: name, receiver, number of parameters,
/// visibility, return type and whether the method is sealed.
/// A method without a recorded return type either returns `()` or returns a
/// type that cannot be described statically (generic or `impl Trait`).
///
/// # Examples
///
/// ```
/// use pn_proxy::info::{MethodInfo, Receiver, InfoKind};
///
/// let getter = MethodInfo::new("get_name").returning::<String>();
/// assert_eq!(getter.receiver(), Receiver::Ref);
/// assert_eq!(getter.arity(), 0);
/// assert_eq!(getter.returns().unwrap().kind(), InfoKind::Terminal);
///
/// let setter = MethodInfo::new("set_name").with_receiver(Receiver::Mut).with_arity(1);
/// assert!(setter.returns().is_none());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MethodInfo {
    name: &'static str,
    receiver: Receiver,
    arity: usize,
    visibility: Visibility,
    returns: Option<fn() -> &'static TypeInfo>,
    sealed: bool,
}

impl MethodInfo {
    /// Creates a public `&self` method without parameters or return type.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            receiver: Receiver::Ref,
            arity: 0,
            visibility: Visibility::Public,
            returns: None,
            sealed: false,
        }
    }

    #[inline]
    pub const fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    /// Sets the number of parameters, not counting the receiver.
    #[inline]
    pub const fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the method as sealed: a stand-in refuses to intercept it.
    #[inline]
    pub const fn with_sealed(mut self, sealed: bool) -> Self {
        self.sealed = sealed;
        self
    }

    /// Records `T` as the return type.
    #[inline]
    pub fn returning<T: ?Sized + Typed>(mut self) -> Self {
        self.returns = Some(T::type_info);
        self
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn receiver(&self) -> Receiver {
        self.receiver
    }

    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns `true` for associated functions without a receiver.
    #[inline]
    pub const fn is_static(&self) -> bool {
        matches!(self.receiver, Receiver::None)
    }

    /// Returns `true` for module-private methods.
    #[inline]
    pub const fn is_private(&self) -> bool {
        matches!(self.visibility, Visibility::Private)
    }

    /// Returns the recorded return type.
    #[inline]
    pub fn returns(&self) -> Option<&'static TypeInfo> {
        self.returns.map(|returns| returns())
    }
}
