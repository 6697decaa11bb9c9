use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use core::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};
use core::time::Duration;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use crate::chain::Outcome;
use crate::impls::{GenericTypeInfoCell, NonGenericTypeInfoCell};
use crate::info::{TerminalInfo, TerminalKind, TypeInfo, Typed};
use crate::proxy::Shape;

// A stand-in returns `$default` for these, and navigation ends there.
macro_rules! impl_terminal {
    ($kind:ident: $($ty:ty => $default:expr),+ $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> &'static TypeInfo {
                    static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                    CELL.get_or_init(|| {
                        TypeInfo::Terminal(TerminalInfo::new::<Self>(TerminalKind::$kind))
                    })
                }
            }

            impl Shape for $ty {
                type Output = $ty;

                #[inline]
                fn materialize(_: Outcome) -> Self::Output {
                    $default
                }
            }
        )+
    };
}

impl_terminal!(Boolean: bool => false);

impl_terminal!(Text:
    char => '\0',
    String => String::new(),
    Cow<'static, str> => Cow::Borrowed(""),
);

impl_terminal!(Numeric:
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    f32 => 0.0, f64 => 0.0,
    NonZeroU8 => NonZeroU8::MIN,
    NonZeroU16 => NonZeroU16::MIN,
    NonZeroU32 => NonZeroU32::MIN,
    NonZeroU64 => NonZeroU64::MIN,
    NonZeroU128 => NonZeroU128::MIN,
    NonZeroUsize => NonZeroUsize::MIN,
    NonZeroI8 => NonZeroI8::MIN,
    NonZeroI16 => NonZeroI16::MIN,
    NonZeroI32 => NonZeroI32::MIN,
    NonZeroI64 => NonZeroI64::MIN,
    NonZeroI128 => NonZeroI128::MIN,
    NonZeroIsize => NonZeroIsize::MIN,
);

impl_terminal!(Temporal:
    Duration => Duration::ZERO,
    SystemTime => SystemTime::UNIX_EPOCH,
    Instant => Instant::now(),
);

impl_terminal!(Opaque: PathBuf => PathBuf::new());

// -----------------------------------------------------------------------------
// Unsized

impl Typed for str {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Terminal(TerminalInfo::new::<Self>(TerminalKind::Text)))
    }
}

impl Shape for str {
    type Output = &'static str;

    #[inline]
    fn materialize(_: Outcome) -> Self::Output {
        ""
    }
}

impl Typed for Path {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Terminal(TerminalInfo::new::<Self>(TerminalKind::Opaque)))
    }
}

impl Shape for Path {
    type Output = &'static Path;

    #[inline]
    fn materialize(_: Outcome) -> Self::Output {
        Path::new("")
    }
}

// -----------------------------------------------------------------------------
// Maps

impl<K: 'static, V: 'static, S: Default + 'static> Typed for HashMap<K, V, S> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Terminal(TerminalInfo::new::<Self>(TerminalKind::Map))
        })
    }
}

impl<K: 'static, V: 'static, S: Default + 'static> Shape for HashMap<K, V, S> {
    type Output = Self;

    #[inline]
    fn materialize(_: Outcome) -> Self::Output {
        HashMap::default()
    }
}

impl<K: 'static, V: 'static> Typed for BTreeMap<K, V> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Terminal(TerminalInfo::new::<Self>(TerminalKind::Map))
        })
    }
}

impl<K: 'static, V: 'static> Shape for BTreeMap<K, V> {
    type Output = Self;

    #[inline]
    fn materialize(_: Outcome) -> Self::Output {
        BTreeMap::new()
    }
}

#[cfg(test)]
mod tests {
    use core::num::{NonZeroI32, NonZeroU32};
    use std::collections::HashMap;

    use crate::info::{TerminalKind, Typed};

    #[test]
    fn terminal_kinds() {
        let kind = |info: &crate::info::TypeInfo| info.as_terminal().unwrap().kind();

        assert_eq!(kind(bool::type_info()), TerminalKind::Boolean);
        assert_eq!(kind(str::type_info()), TerminalKind::Text);
        assert_eq!(kind(f64::type_info()), TerminalKind::Numeric);
        assert_eq!(kind(NonZeroU32::type_info()), TerminalKind::Numeric);
        assert_eq!(kind(NonZeroI32::type_info()), TerminalKind::Numeric);
        assert_eq!(kind(<HashMap<String, u8>>::type_info()), TerminalKind::Map);
        assert!(!String::type_info().is_navigable());
    }

    #[test]
    fn same_info_per_type() {
        assert!(core::ptr::eq(u32::type_info(), u32::type_info()));
        assert!(!core::ptr::eq(
            <HashMap<String, u8>>::type_info(),
            <HashMap<String, u16>>::type_info(),
        ));
    }
}
