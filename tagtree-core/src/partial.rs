//! Owned, write-side views used by the decoder.
//!
//! The decoder fills a [`Partial`] field by field. A record is only built once
//! every slot is present, so a half-filled value never escapes.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{FieldType, Layout, Record, ReflectError, ScalarType};

/// An owned scalar value.
#[derive(Clone, PartialEq, Debug)]
pub enum Scalar {
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
    String(String),
}

impl Scalar {
    /// The scalar type of this value.
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::I8(_) => ScalarType::I8,
            Scalar::I16(_) => ScalarType::I16,
            Scalar::I32(_) => ScalarType::I32,
            Scalar::I64(_) => ScalarType::I64,
            Scalar::U8(_) => ScalarType::U8,
            Scalar::U16(_) => ScalarType::U16,
            Scalar::U32(_) => ScalarType::U32,
            Scalar::U64(_) => ScalarType::U64,
            Scalar::F32(_) => ScalarType::F32,
            Scalar::F64(_) => ScalarType::F64,
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::String(_) => ScalarType::String,
        }
    }
}

/// One decoded field value, waiting to be moved into a record.
#[derive(Debug)]
pub enum Slot {
    /// A scalar leaf
    Scalar(Scalar),
    /// An absent optional value
    None,
    /// Elements of a sequence
    List(Vec<Slot>),
    /// A nested record, itself fully decoded
    Record(Partial),
}

impl Slot {
    /// Short description of what this slot holds, for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Slot::Scalar(scalar) => scalar.scalar_type().name(),
            Slot::None => "absent value",
            Slot::List(_) => "list",
            Slot::Record(partial) => partial.layout().type_name,
        }
    }
}

/// A record layer being filled in by the decoder.
#[derive(Debug)]
pub struct Partial {
    layout: &'static Layout,
    slots: Vec<Option<Slot>>,
    base: Option<Box<Partial>>,
}

impl Partial {
    /// Creates an empty partial for the given layout.
    pub fn new(layout: &'static Layout) -> Self {
        let mut slots = Vec::with_capacity(layout.fields.len());
        slots.resize_with(layout.fields.len(), || None);
        Self {
            layout,
            slots,
            base: None,
        }
    }

    /// The layout this partial is filled against.
    #[inline]
    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Fills the slot of the field at `index`, replacing any earlier value.
    pub fn set(&mut self, index: usize, slot: Slot) -> Result<(), ReflectError> {
        let target = self
            .slots
            .get_mut(index)
            .ok_or(ReflectError::FieldIndexOutOfRange {
                type_name: self.layout.type_name,
                index,
            })?;
        *target = Some(slot);
        Ok(())
    }

    /// Fills the base layer.
    pub fn set_base(&mut self, base: Partial) {
        self.base = Some(Box::new(base));
    }

    /// The filled slot of a field, if any.
    pub fn get(&self, name: &str) -> Option<&Slot> {
        let idx = self.layout.field_index(name)?;
        self.slots[idx].as_ref()
    }

    /// The filled base layer, if any.
    pub fn base(&self) -> Option<&Partial> {
        self.base.as_deref()
    }

    /// Returns `true` once every field of this layer and of all base layers
    /// is filled.
    pub fn is_complete(&self) -> bool {
        let own = self.slots.iter().all(Option::is_some);
        let base = match (&self.base, self.layout.base) {
            (Some(base), Some(_)) => base.is_complete(),
            (None, None) => true,
            _ => false,
        };
        own && base
    }

    /// Moves a field out of the partial and converts it to `T`.
    pub fn take<T: FieldType>(&mut self, name: &'static str) -> Result<T, ReflectError> {
        let idx = self
            .layout
            .field_index(name)
            .ok_or(ReflectError::NoSuchField {
                type_name: self.layout.type_name,
                field: name,
            })?;
        let slot = self.slots[idx].take().ok_or(ReflectError::Uninitialized {
            type_name: self.layout.type_name,
            field: name,
        })?;
        T::from_slot(slot)
    }

    /// Moves the base layer out of the partial and builds it as `B`.
    pub fn take_base<B: Record>(&mut self) -> Result<B, ReflectError> {
        let base = self.base.take().ok_or(ReflectError::MissingBase {
            type_name: self.layout.type_name,
        })?;
        B::build(*base)
    }

    /// Checks that this partial was filled against `R`'s layout.
    pub fn expect_layout<R: Record>(&self) -> Result<(), ReflectError> {
        let expected = R::layout();
        if core::ptr::eq(expected, self.layout) {
            Ok(())
        } else {
            Err(ReflectError::LayoutMismatch {
                expected: expected.type_name,
                actual: self.layout.type_name,
            })
        }
    }
}
