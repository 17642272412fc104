//! Read-only views of field values, used by the encoder.

use alloc::vec::Vec;
use core::fmt;

use crate::{DynRecord, ScalarType};

/// A borrowed scalar value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ScalarRef<'a> {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// `bool`
    Bool(bool),
    /// text
    Str(&'a str),
}

impl ScalarRef<'_> {
    /// The scalar type of this value.
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarRef::I8(_) => ScalarType::I8,
            ScalarRef::I16(_) => ScalarType::I16,
            ScalarRef::I32(_) => ScalarType::I32,
            ScalarRef::I64(_) => ScalarType::I64,
            ScalarRef::U8(_) => ScalarType::U8,
            ScalarRef::U16(_) => ScalarType::U16,
            ScalarRef::U32(_) => ScalarType::U32,
            ScalarRef::U64(_) => ScalarType::U64,
            ScalarRef::F32(_) => ScalarType::F32,
            ScalarRef::F64(_) => ScalarType::F64,
            ScalarRef::Bool(_) => ScalarType::Bool,
            ScalarRef::Str(_) => ScalarType::String,
        }
    }
}

/// A read-only view of one field value.
///
/// A [`Record`](crate::Record) hands out one `Peek` per declared field; the
/// encoder checks each against the field's [`FieldKind`](crate::FieldKind)
/// before emitting a tree node.
pub enum Peek<'a> {
    /// A scalar leaf
    Scalar(ScalarRef<'a>),
    /// An optional value that is absent
    None,
    /// Elements of a sequence
    List(Vec<Peek<'a>>),
    /// A nested record
    Record(&'a dyn DynRecord),
    /// A value of a type that has no tree representation
    Opaque(&'static str),
}

impl Peek<'_> {
    /// Short description of what this view holds, for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Peek::Scalar(scalar) => scalar.scalar_type().name(),
            Peek::None => "absent value",
            Peek::List(_) => "list",
            Peek::Record(record) => record.dyn_layout().type_name,
            Peek::Opaque(name) => *name,
        }
    }
}

impl fmt::Debug for Peek<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Peek::Scalar(scalar) => fmt::Debug::fmt(scalar, f),
            Peek::None => f.write_str("None"),
            Peek::List(items) => f.debug_list().entries(items).finish(),
            Peek::Record(record) => write!(f, "{} {{ .. }}", record.dyn_layout().type_name),
            Peek::Opaque(name) => write!(f, "<opaque {name}>"),
        }
    }
}
