use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{Layout, LayoutFn, ScalarType};

/// Describes a field in a record layer
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// key for the field in the encoded tree
    pub name: &'static str,

    /// declared semantic type of the field
    pub kind: FieldKind,
}

impl Field {
    /// Creates a field descriptor.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Returns true if the field may be absent in the encoded tree.
    #[inline]
    pub fn is_optional(&self) -> bool {
        matches!(self.kind, FieldKind::Option(_))
    }
}

/// The declared semantic type of a field.
#[derive(Clone)]
pub enum FieldKind {
    /// A leaf value of exactly this scalar type
    Scalar(ScalarType),

    /// A value that may be absent
    Option(Box<FieldKind>),

    /// An ordered sequence of values of the inner kind
    List(Box<FieldKind>),

    /// A nested record
    ///
    /// the layer of indirection allows for recursive record definitions
    Record(LayoutFn),

    /// A type that has no tree representation; encoding it always fails
    Opaque(&'static str),
}

impl FieldKind {
    /// Returns the layout of a nested record kind.
    pub fn record_layout(&self) -> Option<&'static Layout> {
        match self {
            FieldKind::Record(layout) => Some(layout()),
            _ => None,
        }
    }

    /// Returns `true` if every value of this kind has a tree form.
    ///
    /// Fails for opaque types, nested options, and any kind that can contain
    /// one, including through the fields and bases of nested records. The
    /// answer depends only on the declaration, so an absent option or an
    /// empty list of an opaque type is still unrepresentable.
    pub fn is_representable(&self) -> bool {
        self.representable(&mut Vec::new())
    }

    fn representable(&self, seen: &mut Vec<&'static Layout>) -> bool {
        match self {
            FieldKind::Scalar(_) => true,
            FieldKind::Option(inner) => {
                !matches!(**inner, FieldKind::Option(_)) && inner.representable(seen)
            }
            FieldKind::List(inner) => inner.representable(seen),
            FieldKind::Record(layout) => {
                let mut current = Some(layout());
                while let Some(layer) = current {
                    // Already being checked further up, or a base cycle
                    if seen.iter().any(|l| core::ptr::eq(*l, layer)) {
                        return true;
                    }
                    seen.push(layer);
                    if !layer.fields.iter().all(|f| f.kind.representable(seen)) {
                        return false;
                    }
                    current = layer.base_layout();
                }
                true
            }
            FieldKind::Opaque(_) => false,
        }
    }

    /// Human-readable name of this kind, e.g. `Option<u16>` or `List<Person>`.
    pub fn describe(&self) -> String {
        alloc::format!("{self}")
    }
}

impl PartialEq for FieldKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldKind::Scalar(a), FieldKind::Scalar(b)) => a == b,
            (FieldKind::Option(a), FieldKind::Option(b)) => a == b,
            (FieldKind::List(a), FieldKind::List(b)) => a == b,
            // Layouts are statics, so identity is address identity
            (FieldKind::Record(a), FieldKind::Record(b)) => core::ptr::eq(a(), b()),
            (FieldKind::Opaque(a), FieldKind::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Scalar(scalar) => write!(f, "{scalar}"),
            FieldKind::Option(inner) => write!(f, "Option<{inner}>"),
            FieldKind::List(inner) => write!(f, "List<{inner}>"),
            FieldKind::Record(layout) => f.write_str(layout().type_name),
            FieldKind::Opaque(name) => write!(f, "opaque {name}"),
        }
    }
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
