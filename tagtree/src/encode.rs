//! Record → tree.

use alloc::vec::Vec;

use tagtree_core::{
    DynRecord, FieldKind, Layout, Peek, Record, SUPER_KEY, ScalarRef,
};
use tagtree_value::{Keyed, Node};

use crate::{EncodeError, EncodeErrorKind, PathSegment, debug, trace};

/// Default bound on how deeply records and sequences may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Encodes records into tagged-value trees.
///
/// An `Encoder` is immutable configuration; one value can be shared by any
/// number of threads.
///
/// ```
/// use tagtree::{Encoder, Node, record};
///
/// record! {
///     pub struct Point {
///         pub x: i16,
///         pub y: i16,
///     }
/// }
///
/// let node = Encoder::new().encode(&Point { x: -1, y: 2 }).unwrap();
/// assert_eq!(node.get("x"), Some(&Node::I16(-1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an encoder with the default depth limit.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets how many levels of nested records and sequences are allowed
    /// below the root record.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The configured depth limit.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Encodes a record.
    pub fn encode<R: Record>(&self, value: &R) -> Result<Node, EncodeError> {
        self.encode_dyn(value)
    }

    /// Encodes a record whose type is only known through its layout.
    pub fn encode_dyn(&self, value: &dyn DynRecord) -> Result<Node, EncodeError> {
        debug!("encoding {}", value.dyn_layout().type_name);
        self.encode_record(value, 0)
    }

    fn check_depth(&self, depth: usize) -> Result<(), EncodeError> {
        if depth > self.max_depth {
            return Err(EncodeError::new(EncodeErrorKind::DepthLimitExceeded {
                max_depth: self.max_depth,
            }));
        }
        Ok(())
    }

    fn encode_record(&self, record: &dyn DynRecord, depth: usize) -> Result<Node, EncodeError> {
        self.check_depth(depth)?;
        let chain = record
            .dyn_layout()
            .chain()
            .map_err(EncodeError::from_layout)?;
        self.encode_layer(record, chain.get(1..).unwrap_or_default(), depth)
    }

    /// Encodes one layer and, under `"super"`, the layers it extends.
    /// `bases` is the rest of the already-validated base chain.
    fn encode_layer(
        &self,
        record: &dyn DynRecord,
        bases: &[&'static Layout],
        depth: usize,
    ) -> Result<Node, EncodeError> {
        let layout = record.dyn_layout();
        layout.validate().map_err(EncodeError::from_layout)?;
        trace!("encoding layer {}", layout.type_name);

        let mut keyed = Keyed::with_capacity(layout.fields.len() + usize::from(!bases.is_empty()));

        match (bases.split_first(), record.dyn_base()) {
            (Some((&base_layout, rest)), Some(base)) => {
                if !core::ptr::eq(base.dyn_layout(), base_layout) {
                    return Err(invalid(
                        layout,
                        alloc::format!(
                            "base instance is `{}` but the layout extends `{}`",
                            base.dyn_layout().type_name,
                            base_layout.type_name
                        ),
                    ));
                }
                let node = self
                    .encode_layer(base, rest, depth)
                    .map_err(|e| e.with_path(PathSegment::Super))?;
                keyed.insert(SUPER_KEY, node);
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err(invalid(
                    layout,
                    "the layout extends a base but the record has no base instance".into(),
                ));
            }
            (None, Some(_)) => {
                return Err(invalid(
                    layout,
                    "the record has a base instance but the layout extends none".into(),
                ));
            }
        }

        let values = record.dyn_peek_fields();
        if values.len() != layout.fields.len() {
            return Err(invalid(
                layout,
                alloc::format!(
                    "the layout declares {} fields but the record exposes {}",
                    layout.fields.len(),
                    values.len()
                ),
            ));
        }

        for (field, value) in layout.fields.iter().zip(values) {
            let node = self
                .encode_value(&field.kind, value, depth)
                .map_err(|e| e.with_path(PathSegment::Field(field.name)))?;
            keyed.insert(field.name, node);
        }

        Ok(Node::Keyed(keyed))
    }

    fn encode_value(
        &self,
        kind: &FieldKind,
        value: Peek<'_>,
        depth: usize,
    ) -> Result<Node, EncodeError> {
        match (kind, value) {
            (FieldKind::Scalar(ty), Peek::Scalar(scalar)) if scalar.scalar_type() == *ty => {
                Ok(scalar_node(scalar))
            }
            // Decided by the declaration, so `None` and `[]` fail too
            (FieldKind::Option(_) | FieldKind::List(_), value) if !kind.is_representable() => {
                Err(unsupported(kind, value.describe()))
            }
            (FieldKind::Option(_), Peek::None) => Ok(Node::Null),
            (FieldKind::Option(inner), value) => self.encode_value(inner, value, depth),
            (FieldKind::List(inner), Peek::List(items)) => {
                self.check_depth(depth + 1)?;
                let mut nodes = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    let node = self
                        .encode_value(inner, item, depth + 1)
                        .map_err(|e| e.with_path(PathSegment::Index(i)))?;
                    nodes.push(node);
                }
                Ok(Node::Sequence(nodes))
            }
            (FieldKind::Record(layout), Peek::Record(record)) => {
                let declared = layout();
                if !core::ptr::eq(declared, record.dyn_layout()) {
                    return Err(invalid(
                        declared,
                        alloc::format!(
                            "field holds a `{}` record",
                            record.dyn_layout().type_name
                        ),
                    ));
                }
                self.encode_record(record, depth + 1)
            }
            (kind, value) => Err(unsupported(kind, value.describe())),
        }
    }
}

fn scalar_node(scalar: ScalarRef<'_>) -> Node {
    match scalar {
        ScalarRef::I8(v) => Node::I8(v),
        ScalarRef::I16(v) => Node::I16(v),
        ScalarRef::I32(v) => Node::I32(v),
        ScalarRef::I64(v) => Node::I64(v),
        ScalarRef::U8(v) => Node::U8(v),
        ScalarRef::U16(v) => Node::U16(v),
        ScalarRef::U32(v) => Node::U32(v),
        ScalarRef::U64(v) => Node::U64(v),
        ScalarRef::F32(v) => Node::F32(v),
        ScalarRef::F64(v) => Node::F64(v),
        ScalarRef::Bool(v) => Node::Bool(v),
        ScalarRef::Str(s) => Node::String(s.into()),
    }
}

fn unsupported(kind: &FieldKind, found: &'static str) -> EncodeError {
    EncodeError::new(EncodeErrorKind::UnsupportedType {
        declared: kind.describe(),
        found,
    })
}

fn invalid(layout: &Layout, reason: alloc::string::String) -> EncodeError {
    EncodeError::new(EncodeErrorKind::InvalidLayout {
        type_name: layout.type_name,
        reason,
    })
}

/// Encodes a record with the default [`Encoder`].
///
/// ```
/// use tagtree::{Node, record, to_node};
///
/// record! {
///     pub struct Tag {
///         pub label: Option<String>,
///     }
/// }
///
/// let node = to_node(&Tag { label: None }).unwrap();
/// assert_eq!(node.get("label"), Some(&Node::Null));
/// ```
pub fn to_node<R: Record>(value: &R) -> Result<Node, EncodeError> {
    Encoder::new().encode(value)
}
