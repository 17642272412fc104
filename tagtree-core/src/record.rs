use alloc::vec::Vec;

use crate::{FieldKind, Layout, Partial, Peek, ReflectError, Slot};

/// A type that can appear as a record field.
///
/// Implemented for the fixed-width integers, `f32`, `f64`, `bool`, `String`,
/// `Option<T>`, `Vec<T>` and every record declared with [`record!`](crate::record).
pub trait FieldType: Sized {
    /// The declared semantic type of a field of this type.
    ///
    /// Must not call [`Record::layout`]; record kinds refer to their layout
    /// through a function pointer so that self-referential layouts can be
    /// built lazily.
    fn kind() -> FieldKind;

    /// A read-only view of this value.
    fn peek(&self) -> Peek<'_>;

    /// Converts a decoded slot back into a value.
    fn from_slot(slot: Slot) -> Result<Self, ReflectError>;
}

/// A structured value with a fixed, named, typed set of fields and an optional
/// embedded base record.
///
/// Usually implemented through [`record!`](crate::record).
pub trait Record: Sized + 'static {
    /// The field structure of this record's own layer.
    fn layout() -> &'static Layout;

    /// Views of this layer's own field values, in the order of
    /// [`Layout::fields`].
    fn peek_fields(&self) -> Vec<Peek<'_>>;

    /// The embedded base record instance, if this record extends one.
    fn base(&self) -> Option<&dyn DynRecord>;

    /// Builds the record from a partial filled against [`Record::layout`].
    fn build(partial: Partial) -> Result<Self, ReflectError>;
}

/// Object-safe view of a [`Record`], used for base layers and nested records.
pub trait DynRecord {
    /// The layout of this record's own layer.
    fn dyn_layout(&self) -> &'static Layout;

    /// See [`Record::peek_fields`].
    fn dyn_peek_fields(&self) -> Vec<Peek<'_>>;

    /// See [`Record::base`].
    fn dyn_base(&self) -> Option<&dyn DynRecord>;
}

impl<R: Record> DynRecord for R {
    #[inline]
    fn dyn_layout(&self) -> &'static Layout {
        R::layout()
    }

    #[inline]
    fn dyn_peek_fields(&self) -> Vec<Peek<'_>> {
        self.peek_fields()
    }

    #[inline]
    fn dyn_base(&self) -> Option<&dyn DynRecord> {
        self.base()
    }
}
