use alloc::collections::{BTreeSet, LinkedList, VecDeque};
use std::collections::HashSet;

use crate::chain::{Elements, Outcome};
use crate::impls::GenericTypeInfoCell;
use crate::info::{CollectionInfo, CollectionKind, TypeInfo, Typed};
use crate::proxy::Shape;

// A stand-in returns `Elements` holding one element stand-in when `T` is
// navigable, or nothing when it is terminal.
macro_rules! impl_collection {
    ($kind:ident: $($ty:ty $([$($bounds:tt)*])?),+ $(,)?) => {
        $(
            impl<T: Shape $(, $($bounds)*)?> Typed for $ty {
                fn type_info() -> &'static TypeInfo {
                    static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                    CELL.get_or_insert::<Self>(|| {
                        TypeInfo::Collection(CollectionInfo::new::<Self, T>(CollectionKind::$kind))
                    })
                }
            }

            impl<T: Shape $(, $($bounds)*)?> Shape for $ty {
                type Output = Elements<T::Output>;

                #[inline]
                fn materialize(outcome: Outcome) -> Self::Output {
                    outcome.into_elements::<T>(Self::type_info())
                }
            }
        )+
    };
}

impl_collection!(List:
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    [T],
    [T; N] [const N: usize],
);

impl_collection!(Set:
    HashSet<T, S> [S: 'static],
    BTreeSet<T>,
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::info::{CollectionKind, Typed};

    #[test]
    fn element_info() {
        let list = <Vec<u32>>::type_info().as_collection().unwrap();
        assert_eq!(list.kind(), CollectionKind::List);
        assert!(list.element().unwrap().ty().is::<u32>());

        let set = <HashSet<String>>::type_info().as_collection().unwrap();
        assert_eq!(set.kind(), CollectionKind::Set);

        let array = <[u8; 4]>::type_info();
        assert!(array.ty().is::<[u8; 4]>());
        assert!(!core::ptr::eq(array, <[u8; 5]>::type_info()));
    }
}
