//! `FieldType` implementations for standard types.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{FieldKind, FieldType, Peek, ReflectError, Scalar, ScalarRef, ScalarType, Slot};

macro_rules! impl_scalar_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                #[inline]
                fn kind() -> FieldKind {
                    FieldKind::Scalar(ScalarType::$variant)
                }

                #[inline]
                fn peek(&self) -> Peek<'_> {
                    Peek::Scalar(ScalarRef::$variant(*self))
                }

                fn from_slot(slot: Slot) -> Result<Self, ReflectError> {
                    match slot {
                        Slot::Scalar(Scalar::$variant(v)) => Ok(v),
                        other => Err(ReflectError::WrongShape {
                            expected: ScalarType::$variant.name(),
                            got: other.describe(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_scalar_field! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

impl FieldType for String {
    #[inline]
    fn kind() -> FieldKind {
        FieldKind::Scalar(ScalarType::String)
    }

    #[inline]
    fn peek(&self) -> Peek<'_> {
        Peek::Scalar(ScalarRef::Str(self.as_str()))
    }

    fn from_slot(slot: Slot) -> Result<Self, ReflectError> {
        match slot {
            Slot::Scalar(Scalar::String(s)) => Ok(s),
            other => Err(ReflectError::WrongShape {
                expected: ScalarType::String.name(),
                got: other.describe(),
            }),
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn kind() -> FieldKind {
        FieldKind::Option(Box::new(T::kind()))
    }

    fn peek(&self) -> Peek<'_> {
        match self {
            Some(inner) => inner.peek(),
            None => Peek::None,
        }
    }

    fn from_slot(slot: Slot) -> Result<Self, ReflectError> {
        match slot {
            Slot::None => Ok(None),
            other => T::from_slot(other).map(Some),
        }
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::List(Box::new(T::kind()))
    }

    fn peek(&self) -> Peek<'_> {
        Peek::List(self.iter().map(FieldType::peek).collect())
    }

    fn from_slot(slot: Slot) -> Result<Self, ReflectError> {
        match slot {
            Slot::List(items) => items.into_iter().map(T::from_slot).collect(),
            other => Err(ReflectError::WrongShape {
                expected: "list",
                got: other.describe(),
            }),
        }
    }
}

// Types without a tree representation. They can be declared so that records
// mirror their Rust structs, but encoding them fails.
macro_rules! impl_opaque_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn kind() -> FieldKind {
                    FieldKind::Opaque(stringify!($ty))
                }

                fn peek(&self) -> Peek<'_> {
                    Peek::Opaque(stringify!($ty))
                }

                fn from_slot(slot: Slot) -> Result<Self, ReflectError> {
                    Err(ReflectError::WrongShape {
                        expected: stringify!($ty),
                        got: slot.describe(),
                    })
                }
            }
        )*
    };
}

impl_opaque_field!(char, i128, u128, isize, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_match_their_width() {
        assert_eq!(i8::kind(), FieldKind::Scalar(ScalarType::I8));
        assert_eq!(u16::kind(), FieldKind::Scalar(ScalarType::U16));
        assert_eq!(String::kind(), FieldKind::Scalar(ScalarType::String));
        assert_eq!(
            <Option<u32>>::kind(),
            FieldKind::Option(Box::new(FieldKind::Scalar(ScalarType::U32)))
        );
        assert_eq!(<Vec<bool>>::kind().to_string(), "List<bool>");
    }

    #[test]
    fn from_slot_refuses_other_widths() {
        let err = u16::from_slot(Slot::Scalar(Scalar::U32(3))).unwrap_err();
        assert_eq!(
            err,
            ReflectError::WrongShape {
                expected: "u16",
                got: "u32"
            }
        );
        assert_eq!(u16::from_slot(Slot::Scalar(Scalar::U16(3))), Ok(3));
    }

    #[test]
    fn option_maps_absence() {
        assert_eq!(<Option<String>>::from_slot(Slot::None), Ok(None));
        assert_eq!(
            <Option<String>>::from_slot(Slot::Scalar(Scalar::String(String::new()))),
            Ok(Some(String::new()))
        );
        assert!(matches!(None::<i8>.peek(), Peek::None));
        assert!(matches!(Some(-1i8).peek(), Peek::Scalar(ScalarRef::I8(-1))));
    }

    #[test]
    fn opaque_types_have_no_slot() {
        assert_eq!(char::kind(), FieldKind::Opaque("char"));
        assert!(char::from_slot(Slot::None).is_err());
    }
}
