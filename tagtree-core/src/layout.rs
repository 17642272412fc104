//! Record layouts: the compile-time declared field list of one record layer
//! plus an optional link to the base layer it extends.

use alloc::vec::Vec;
use core::fmt;

use crate::{Field, FieldKind};

/// Reserved key under which a derived layer stores its base layer's encoding.
pub const SUPER_KEY: &str = "super";

/// Upper bound on the length of a base chain.
pub const MAX_INHERITANCE_DEPTH: usize = 64;

/// Returns the layout of a record type.
///
/// Layouts are referenced through a function pointer so that records can be
/// declared in any order, including records that contain themselves.
pub type LayoutFn = fn() -> &'static Layout;

/// The field structure of one record layer.
#[derive(Debug)]
pub struct Layout {
    /// Name of the record type, for diagnostics
    pub type_name: &'static str,

    /// This layer's own fields, in declaration order
    pub fields: Vec<Field>,

    /// The base layer this record extends, if any
    pub base: Option<LayoutFn>,
}

impl Layout {
    /// Returns a builder for a layout of the named type.
    pub const fn builder(type_name: &'static str) -> LayoutBuilder {
        LayoutBuilder {
            type_name,
            fields: Vec::new(),
            base: None,
        }
    }

    /// Returns the base layout, if this layer extends one.
    #[inline]
    pub fn base_layout(&self) -> Option<&'static Layout> {
        self.base.map(|base| base())
    }

    /// Looks up one of this layer's own fields by key.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of one of this layer's own fields.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Walks the base chain starting at this layer.
    ///
    /// Returns the layers from most derived to the root base. Fails if a layout
    /// appears twice in its own chain or the chain exceeds
    /// [`MAX_INHERITANCE_DEPTH`].
    pub fn chain(&'static self) -> Result<Vec<&'static Layout>, LayoutError> {
        let mut chain: Vec<&'static Layout> = Vec::new();
        let mut current = Some(self);
        while let Some(layout) = current {
            if chain.iter().any(|seen| core::ptr::eq(*seen, layout)) {
                return Err(LayoutError::CyclicInheritance {
                    type_name: layout.type_name,
                });
            }
            if chain.len() == MAX_INHERITANCE_DEPTH {
                return Err(LayoutError::CyclicInheritance {
                    type_name: self.type_name,
                });
            }
            chain.push(layout);
            current = layout.base_layout();
        }
        Ok(chain)
    }

    /// Checks that keys are unique within this layer and none of them is
    /// [`SUPER_KEY`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (idx, field) in self.fields.iter().enumerate() {
            if field.name == SUPER_KEY {
                return Err(LayoutError::ReservedKey {
                    type_name: self.type_name,
                });
            }
            if self.fields[..idx].iter().any(|f| f.name == field.name) {
                return Err(LayoutError::DuplicateKey {
                    type_name: self.type_name,
                    key: field.name,
                });
            }
        }
        Ok(())
    }
}

/// Builder for [`Layout`].
///
/// ```
/// use tagtree_core::{Field, FieldKind, Layout, ScalarType};
///
/// let layout = Layout::builder("Point")
///     .field(Field::new("x", FieldKind::Scalar(ScalarType::I32)))
///     .field(Field::new("y", FieldKind::Scalar(ScalarType::I32)))
///     .build();
/// assert_eq!(layout.fields.len(), 2);
/// assert!(layout.base.is_none());
/// ```
#[derive(Debug)]
pub struct LayoutBuilder {
    type_name: &'static str,
    fields: Vec<Field>,
    base: Option<LayoutFn>,
}

impl LayoutBuilder {
    /// Sets the base layer.
    pub fn base(mut self, base: LayoutFn) -> Self {
        self.base = Some(base);
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a field built from a key and a kind.
    pub fn with(self, name: &'static str, kind: FieldKind) -> Self {
        self.field(Field::new(name, kind))
    }

    /// Builds the layout.
    pub fn build(self) -> Layout {
        Layout {
            type_name: self.type_name,
            fields: self.fields,
            base: self.base,
        }
    }
}

/// A structural problem with a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The base chain revisits a layout (or is implausibly long)
    CyclicInheritance {
        /// The layout at which the cycle was detected
        type_name: &'static str,
    },
    /// A field uses the reserved [`SUPER_KEY`]
    ReservedKey {
        /// The offending layout
        type_name: &'static str,
    },
    /// Two fields of one layer share a key
    DuplicateKey {
        /// The offending layout
        type_name: &'static str,
        /// The duplicated key
        key: &'static str,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::CyclicInheritance { type_name } => {
                write!(f, "cyclic inheritance at `{type_name}`")
            }
            LayoutError::ReservedKey { type_name } => {
                write!(f, "`{type_name}` declares a field named `{SUPER_KEY}`, which is reserved")
            }
            LayoutError::DuplicateKey { type_name, key } => {
                write!(f, "`{type_name}` declares field `{key}` more than once")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;
    use std::sync::LazyLock;

    static ROOT: LazyLock<Layout> = LazyLock::new(|| {
        Layout::builder("Root")
            .with("id", FieldKind::Scalar(ScalarType::U32))
            .build()
    });
    static MIDDLE: LazyLock<Layout> = LazyLock::new(|| {
        Layout::builder("Middle")
            .base(|| &*ROOT)
            .with("id", FieldKind::Scalar(ScalarType::U32))
            .build()
    });
    static LEAF: LazyLock<Layout> =
        LazyLock::new(|| Layout::builder("Leaf").base(|| &*MIDDLE).build());

    static LOOP_A: LazyLock<Layout> =
        LazyLock::new(|| Layout::builder("LoopA").base(|| &*LOOP_B).build());
    static LOOP_B: LazyLock<Layout> =
        LazyLock::new(|| Layout::builder("LoopB").base(|| &*LOOP_A).build());

    #[test]
    fn chain_lists_layers_from_derived_to_root() {
        let chain = LEAF.chain().unwrap();
        let names: Vec<_> = chain.iter().map(|l| l.type_name).collect();
        assert_eq!(names, ["Leaf", "Middle", "Root"]);
    }

    #[test]
    fn chain_detects_cycles() {
        assert_eq!(
            LOOP_A.chain().unwrap_err(),
            LayoutError::CyclicInheritance { type_name: "LoopA" }
        );
    }

    #[test]
    fn same_key_in_two_layers_is_allowed() {
        assert!(ROOT.validate().is_ok());
        assert!(MIDDLE.validate().is_ok());
    }

    #[test]
    fn validate_rejects_reserved_and_duplicate_keys() {
        let reserved = Layout::builder("Bad")
            .with(SUPER_KEY, FieldKind::Scalar(ScalarType::Bool))
            .build();
        assert_eq!(
            reserved.validate(),
            Err(LayoutError::ReservedKey { type_name: "Bad" })
        );

        let duplicate = Layout::builder("Dup")
            .with("a", FieldKind::Scalar(ScalarType::Bool))
            .with("a", FieldKind::Scalar(ScalarType::I8))
            .build();
        assert_eq!(
            duplicate.validate(),
            Err(LayoutError::DuplicateKey {
                type_name: "Dup",
                key: "a"
            })
        );
    }
}
