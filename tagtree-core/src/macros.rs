/// Declares a record: a struct plus its [`Record`](crate::Record) and
/// [`FieldType`](crate::FieldType) implementations, generated from the field
/// list as written.
///
/// A record may extend one base record. The base instance is embedded as a
/// named field, placed first, and encoded under the reserved `"super"` key.
///
/// # Example
///
/// ```
/// use tagtree_core::{Record, record};
///
/// record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Person {
///         pub name: String,
///         pub age: Option<u8>,
///     }
/// }
///
/// record! {
///     /// A person with a badge.
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Employee extends person: Person {
///         pub badge: u32,
///     }
/// }
///
/// let layout = Employee::layout();
/// assert_eq!(layout.type_name, "Employee");
/// assert_eq!(layout.fields.len(), 1);
/// assert_eq!(layout.base_layout().unwrap().type_name, "Person");
///
/// let e = Employee {
///     person: Person { name: "Ada".into(), age: None },
///     badge: 7,
/// };
/// assert!(e.base().is_some());
/// ```
///
/// Field types must implement [`FieldType`](crate::FieldType). Generic
/// records are not supported. A raw identifier field such as `r#type` is
/// keyed without its `r#` prefix.
#[macro_export]
macro_rules! record {
    (@field_type $name:ident) => {
        impl $crate::FieldType for $name {
            #[inline]
            fn kind() -> $crate::FieldKind {
                $crate::FieldKind::Record(<$name as $crate::Record>::layout)
            }

            #[inline]
            fn peek(&self) -> $crate::Peek<'_> {
                $crate::Peek::Record(self)
            }

            fn from_slot(
                slot: $crate::Slot,
            ) -> ::core::result::Result<Self, $crate::ReflectError> {
                match slot {
                    $crate::Slot::Record(partial) => <$name as $crate::Record>::build(partial),
                    other => ::core::result::Result::Err($crate::ReflectError::WrongShape {
                        expected: ::core::stringify!($name),
                        got: other.describe(),
                    }),
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident extends $base_field:ident : $base:ty {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            /// Embedded base record.
            $vis $base_field: $base,
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Record for $name {
            fn layout() -> &'static $crate::Layout {
                static LAYOUT: ::std::sync::LazyLock<$crate::Layout> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::Layout::builder(::core::stringify!($name))
                            .base(<$base as $crate::Record>::layout)
                            $(
                                .with(
                                    ::core::stringify!($field).trim_start_matches("r#"),
                                    <$field_ty as $crate::FieldType>::kind(),
                                )
                            )*
                            .build()
                    });
                &LAYOUT
            }

            fn peek_fields(&self) -> ::std::vec::Vec<$crate::Peek<'_>> {
                ::std::vec![$($crate::FieldType::peek(&self.$field)),*]
            }

            fn base(&self) -> ::core::option::Option<&dyn $crate::DynRecord> {
                ::core::option::Option::Some(&self.$base_field)
            }

            #[allow(unused_mut)]
            fn build(
                mut partial: $crate::Partial,
            ) -> ::core::result::Result<Self, $crate::ReflectError> {
                partial.expect_layout::<Self>()?;
                ::core::result::Result::Ok(Self {
                    $base_field: partial.take_base::<$base>()?,
                    $(
                        $field: partial.take::<$field_ty>(
                            ::core::stringify!($field).trim_start_matches("r#"),
                        )?,
                    )*
                })
            }
        }

        $crate::record!(@field_type $name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Record for $name {
            fn layout() -> &'static $crate::Layout {
                static LAYOUT: ::std::sync::LazyLock<$crate::Layout> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::Layout::builder(::core::stringify!($name))
                            $(
                                .with(
                                    ::core::stringify!($field).trim_start_matches("r#"),
                                    <$field_ty as $crate::FieldType>::kind(),
                                )
                            )*
                            .build()
                    });
                &LAYOUT
            }

            fn peek_fields(&self) -> ::std::vec::Vec<$crate::Peek<'_>> {
                ::std::vec![$($crate::FieldType::peek(&self.$field)),*]
            }

            fn base(&self) -> ::core::option::Option<&dyn $crate::DynRecord> {
                ::core::option::Option::None
            }

            #[allow(unused_mut)]
            fn build(
                mut partial: $crate::Partial,
            ) -> ::core::result::Result<Self, $crate::ReflectError> {
                partial.expect_layout::<Self>()?;
                ::core::result::Result::Ok(Self {
                    $(
                        $field: partial.take::<$field_ty>(
                            ::core::stringify!($field).trim_start_matches("r#"),
                        )?,
                    )*
                })
            }
        }

        $crate::record!(@field_type $name);
    };
}
