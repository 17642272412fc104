//! Tree → record.
//!
//! Decoding fills a [`Partial`] per record layer and only builds the target
//! value once every layer is complete, so a failed decode never produces a
//! half-initialized record.

use alloc::vec::Vec;

use tagtree_core::{FieldKind, Layout, Partial, Record, SUPER_KEY, Scalar, ScalarType, Slot};
use tagtree_value::Node;

use crate::{DecodeError, DecodeErrorKind, PathSegment, debug, encode::DEFAULT_MAX_DEPTH, trace};

/// Decodes tagged-value trees into records.
///
/// Like [`Encoder`](crate::Encoder), a `Decoder` is immutable configuration
/// and holds no state between calls.
///
/// ```
/// use tagtree::{Decoder, DecodeErrorKind, node, record};
///
/// record! {
///     #[derive(Debug, PartialEq)]
///     pub struct Port {
///         pub number: u16,
///     }
/// }
///
/// let port: Port = Decoder::new().decode(&node!({ "number": 8080u16 })).unwrap();
/// assert_eq!(port, Port { number: 8080 });
///
/// let err = Decoder::new()
///     .decode::<Port>(&node!({ "number": 8080u32 }))
///     .unwrap_err();
/// assert!(matches!(err.kind, DecodeErrorKind::TypeMismatch { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
    deny_unknown_keys: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Creates a decoder that ignores unknown keys and uses the default depth
    /// limit.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            deny_unknown_keys: false,
        }
    }

    /// Sets how many levels of nested records and sequences are allowed
    /// below the root node.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Rejects keys that match no field of the layer being decoded.
    ///
    /// The `"super"` entry is only accepted in layers that extend a base.
    pub const fn deny_unknown_keys(mut self) -> Self {
        self.deny_unknown_keys = true;
        self
    }

    /// The configured depth limit.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decodes a tree into a record of type `R`.
    pub fn decode<R: Record>(&self, node: &Node) -> Result<R, DecodeError> {
        let partial = self.decode_partial(node, R::layout())?;
        Ok(R::build(partial)?)
    }

    /// Decodes a tree against a layout, without a concrete target type.
    ///
    /// The returned partial is complete: every field of every layer is filled.
    pub fn decode_partial(
        &self,
        node: &Node,
        layout: &'static Layout,
    ) -> Result<Partial, DecodeError> {
        debug!("decoding {}", layout.type_name);
        self.decode_record(node, layout, 0)
    }

    fn check_depth(&self, depth: usize) -> Result<(), DecodeError> {
        if depth > self.max_depth {
            return Err(DecodeError::new(DecodeErrorKind::DepthLimitExceeded {
                max_depth: self.max_depth,
            }));
        }
        Ok(())
    }

    fn decode_record(
        &self,
        node: &Node,
        layout: &'static Layout,
        depth: usize,
    ) -> Result<Partial, DecodeError> {
        self.check_depth(depth)?;
        let chain = layout.chain().map_err(DecodeError::from_layout)?;
        self.decode_layer(node, layout, chain.get(1..).unwrap_or_default(), depth)
    }

    /// Decodes one layer, its base layers first. `bases` is the rest of the
    /// already-validated base chain.
    fn decode_layer(
        &self,
        node: &Node,
        layout: &'static Layout,
        bases: &[&'static Layout],
        depth: usize,
    ) -> Result<Partial, DecodeError> {
        layout.validate().map_err(DecodeError::from_layout)?;
        trace!("decoding layer {}", layout.type_name);

        let keyed = node
            .as_keyed()
            .ok_or_else(|| DecodeError::type_mismatch(layout.type_name, node.node_type()))?;
        let mut partial = Partial::new(layout);

        if let Some((&base_layout, rest)) = bases.split_first() {
            let base_node = keyed.get(SUPER_KEY).ok_or_else(|| {
                DecodeError::new(DecodeErrorKind::MissingSuperSlot {
                    type_name: layout.type_name,
                })
            })?;
            let base = self
                .decode_layer(base_node, base_layout, rest, depth)
                .map_err(|e| e.with_path(PathSegment::Super))?;
            partial.set_base(base);
        }

        if self.deny_unknown_keys {
            for key in keyed.keys() {
                let is_super_slot = key == SUPER_KEY && !bases.is_empty();
                if !is_super_slot && layout.field(key).is_none() {
                    return Err(DecodeError::new(DecodeErrorKind::UnknownKey {
                        key: key.into(),
                        type_name: layout.type_name,
                    }));
                }
            }
        }

        for (index, field) in layout.fields.iter().enumerate() {
            let slot = match keyed.get(field.name) {
                Some(child) => self.decode_value(child, &field.kind, depth),
                None if field.is_optional() => self.decode_value(&Node::Null, &field.kind, depth),
                None => {
                    return Err(DecodeError::new(DecodeErrorKind::KeyNotFound {
                        key: field.name,
                        type_name: layout.type_name,
                    }));
                }
            }
            .map_err(|e| e.with_path(PathSegment::Field(field.name)))?;
            partial.set(index, slot)?;
        }

        Ok(partial)
    }

    fn decode_value(&self, node: &Node, kind: &FieldKind, depth: usize) -> Result<Slot, DecodeError> {
        match kind {
            FieldKind::Scalar(ty) => decode_scalar(node, *ty).map(Slot::Scalar),
            FieldKind::Option(_) | FieldKind::List(_) if !kind.is_representable() => {
                Err(DecodeError::new(DecodeErrorKind::UnsupportedType {
                    declared: kind.describe(),
                }))
            }
            FieldKind::Option(inner) => {
                if node.is_null() {
                    Ok(Slot::None)
                } else {
                    self.decode_value(node, inner, depth)
                }
            }
            FieldKind::List(inner) => {
                let items = node
                    .as_sequence()
                    .ok_or_else(|| DecodeError::type_mismatch(kind, node.node_type()))?;
                self.check_depth(depth + 1)?;
                let mut slots = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let slot = self
                        .decode_value(item, inner, depth + 1)
                        .map_err(|e| e.with_path(PathSegment::Index(i)))?;
                    slots.push(slot);
                }
                Ok(Slot::List(slots))
            }
            FieldKind::Record(layout) => self
                .decode_record(node, layout(), depth + 1)
                .map(Slot::Record),
            FieldKind::Opaque(_) => Err(DecodeError::new(DecodeErrorKind::UnsupportedType {
                declared: kind.describe(),
            })),
        }
    }
}

/// Reads a leaf of exactly the declared scalar type. Other widths, other
/// signedness and `Null` are all mismatches.
fn decode_scalar(node: &Node, ty: ScalarType) -> Result<Scalar, DecodeError> {
    let scalar = match (ty, node) {
        (ScalarType::I8, Node::I8(v)) => Scalar::I8(*v),
        (ScalarType::I16, Node::I16(v)) => Scalar::I16(*v),
        (ScalarType::I32, Node::I32(v)) => Scalar::I32(*v),
        (ScalarType::I64, Node::I64(v)) => Scalar::I64(*v),
        (ScalarType::U8, Node::U8(v)) => Scalar::U8(*v),
        (ScalarType::U16, Node::U16(v)) => Scalar::U16(*v),
        (ScalarType::U32, Node::U32(v)) => Scalar::U32(*v),
        (ScalarType::U64, Node::U64(v)) => Scalar::U64(*v),
        (ScalarType::F32, Node::F32(v)) => Scalar::F32(*v),
        (ScalarType::F64, Node::F64(v)) => Scalar::F64(*v),
        (ScalarType::Bool, Node::Bool(v)) => Scalar::Bool(*v),
        (ScalarType::String, Node::String(s)) => Scalar::String(s.clone()),
        _ => return Err(DecodeError::scalar_mismatch(ty, node.node_type())),
    };
    Ok(scalar)
}

/// Decodes a tree with the default [`Decoder`].
pub fn from_node<R: Record>(node: &Node) -> Result<R, DecodeError> {
    Decoder::new().decode(node)
}
