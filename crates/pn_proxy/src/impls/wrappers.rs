use alloc::rc::Rc;
use alloc::sync::Arc;

use crate::chain::Outcome;
use crate::info::{TypeInfo, Typed};
use crate::proxy::Shape;

// These wrappers are looked through: they report the info of `T` and a stand-in
// returns whatever it returns for `T`.
macro_rules! impl_transparent {
    ($($ty:ty $([$($unsized:tt)*])?),+ $(,)?) => {
        $(
            impl<T: $($($unsized)*)? Shape> Typed for $ty {
                #[inline]
                fn type_info() -> &'static TypeInfo {
                    T::type_info()
                }
            }

            impl<T: $($($unsized)*)? Shape> Shape for $ty {
                type Output = T::Output;

                #[inline]
                fn materialize(outcome: Outcome) -> Self::Output {
                    T::materialize(outcome)
                }
            }
        )+
    };
}

impl_transparent!(
    Option<T>,
    Box<T> [?Sized +],
    Rc<T> [?Sized +],
    Arc<T> [?Sized +],
    &'static T [?Sized +],
);

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use crate::info::Typed;

    #[test]
    fn looks_through() {
        assert!(core::ptr::eq(<Option<String>>::type_info(), String::type_info()));
        assert!(core::ptr::eq(<Box<str>>::type_info(), str::type_info()));
        assert!(core::ptr::eq(<Rc<Option<u8>>>::type_info(), u8::type_info()));
    }
}
