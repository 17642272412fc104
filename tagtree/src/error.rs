//! Encode and decode errors, with the path at which they occurred.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tagtree_core::{LayoutError, ReflectError, ScalarType};
use tagtree_value::NodeType;

/// A segment in the path from the root record to the failing location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A field of a record layer
    Field(&'static str),
    /// The base layer of a record
    Super,
    /// An element of a sequence
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Super => f.write_str(".super"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

fn write_path(f: &mut fmt::Formatter<'_>, path: &[PathSegment]) -> fmt::Result {
    for seg in path {
        write!(f, "{seg}")?;
    }
    Ok(())
}

/// What went wrong while encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeErrorKind {
    /// The field's type, or the value it held, has no tree representation.
    UnsupportedType {
        /// The declared kind of the field
        declared: String,
        /// What the record actually handed out
        found: &'static str,
    },

    /// The record's base chain revisits a layout.
    CyclicInheritance {
        /// Where the cycle was detected
        type_name: &'static str,
    },

    /// The layout is malformed, or the record disagrees with its own layout.
    InvalidLayout {
        /// The offending record
        type_name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Records or sequences are nested deeper than the encoder allows.
    DepthLimitExceeded {
        /// The configured limit
        max_depth: usize,
    },
}

impl fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeErrorKind::UnsupportedType { declared, found } => {
                write!(f, "unsupported type: field declared as {declared} holds {found}")
            }
            EncodeErrorKind::CyclicInheritance { type_name } => {
                write!(f, "cyclic inheritance at `{type_name}`")
            }
            EncodeErrorKind::InvalidLayout { type_name, reason } => {
                write!(f, "invalid layout for `{type_name}`: {reason}")
            }
            EncodeErrorKind::DepthLimitExceeded { max_depth } => {
                write!(f, "nesting exceeds the maximum depth of {max_depth}")
            }
        }
    }
}

/// Error returned by [`Encoder`](crate::Encoder) and [`to_node`](crate::to_node).
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeError {
    /// The specific kind of error
    pub kind: EncodeErrorKind,
    /// Path from the root record to the failing field
    pub path: Vec<PathSegment>,
}

impl EncodeError {
    /// Creates an error at the root.
    pub fn new(kind: EncodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// Prepends a path segment; used while unwinding out of nested values.
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    pub(crate) fn from_layout(err: LayoutError) -> Self {
        Self::new(match err {
            LayoutError::CyclicInheritance { type_name } => {
                EncodeErrorKind::CyclicInheritance { type_name }
            }
            other => EncodeErrorKind::InvalidLayout {
                type_name: layout_error_type(&other),
                reason: alloc::format!("{other}"),
            },
        })
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            f.write_str("at ")?;
            write_path(f, &self.path)?;
            f.write_str(": ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl core::error::Error for EncodeError {}

/// What went wrong while decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeErrorKind {
    /// A required key is absent from a keyed node.
    KeyNotFound {
        /// The missing key
        key: &'static str,
        /// The record layer that declares it
        type_name: &'static str,
    },

    /// The node's kind or width differs from the declared type.
    TypeMismatch {
        /// The declared type
        expected: String,
        /// The kind of node found
        got: NodeType,
    },

    /// A record with a base has no `"super"` entry.
    MissingSuperSlot {
        /// The derived record
        type_name: &'static str,
    },

    /// The target layout's base chain revisits a layout.
    CyclicInheritance {
        /// Where the cycle was detected
        type_name: &'static str,
    },

    /// The target field type has no tree representation.
    UnsupportedType {
        /// The declared kind of the field
        declared: String,
    },

    /// A key matches no field (only with [`Decoder::deny_unknown_keys`](crate::Decoder::deny_unknown_keys)).
    UnknownKey {
        /// The unexpected key
        key: String,
        /// The record layer being decoded
        type_name: &'static str,
    },

    /// The target layout is malformed.
    InvalidLayout {
        /// The offending record
        type_name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Records or sequences are nested deeper than the decoder allows.
    DepthLimitExceeded {
        /// The configured limit
        max_depth: usize,
    },

    /// The decoded slots could not be moved into the target type.
    Reflect(ReflectError),
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::KeyNotFound { key, type_name } => {
                write!(f, "missing required key `{key}` of `{type_name}`")
            }
            DecodeErrorKind::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            DecodeErrorKind::MissingSuperSlot { type_name } => {
                write!(f, "`{type_name}` has a base record but no `super` entry")
            }
            DecodeErrorKind::CyclicInheritance { type_name } => {
                write!(f, "cyclic inheritance at `{type_name}`")
            }
            DecodeErrorKind::UnsupportedType { declared } => {
                write!(f, "unsupported type: {declared} cannot be decoded")
            }
            DecodeErrorKind::UnknownKey { key, type_name } => {
                write!(f, "unknown key `{key}` for `{type_name}`")
            }
            DecodeErrorKind::InvalidLayout { type_name, reason } => {
                write!(f, "invalid layout for `{type_name}`: {reason}")
            }
            DecodeErrorKind::DepthLimitExceeded { max_depth } => {
                write!(f, "nesting exceeds the maximum depth of {max_depth}")
            }
            DecodeErrorKind::Reflect(err) => write!(f, "{err}"),
        }
    }
}

/// Error returned by [`Decoder`](crate::Decoder) and [`from_node`](crate::from_node).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// The specific kind of error
    pub kind: DecodeErrorKind,
    /// Path from the root node to the failing location
    pub path: Vec<PathSegment>,
}

impl DecodeError {
    /// Creates an error at the root.
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// Prepends a path segment; used while unwinding out of nested nodes.
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    pub(crate) fn type_mismatch(expected: impl fmt::Display, got: NodeType) -> Self {
        Self::new(DecodeErrorKind::TypeMismatch {
            expected: alloc::format!("{expected}"),
            got,
        })
    }

    pub(crate) fn scalar_mismatch(expected: ScalarType, got: NodeType) -> Self {
        Self::type_mismatch(expected, got)
    }

    pub(crate) fn from_layout(err: LayoutError) -> Self {
        Self::new(match err {
            LayoutError::CyclicInheritance { type_name } => {
                DecodeErrorKind::CyclicInheritance { type_name }
            }
            other => DecodeErrorKind::InvalidLayout {
                type_name: layout_error_type(&other),
                reason: alloc::format!("{other}"),
            },
        })
    }
}

impl From<ReflectError> for DecodeError {
    fn from(err: ReflectError) -> Self {
        Self::new(DecodeErrorKind::Reflect(err))
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            f.write_str("at ")?;
            write_path(f, &self.path)?;
            f.write_str(": ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl core::error::Error for DecodeError {}

fn layout_error_type(err: &LayoutError) -> &'static str {
    match err {
        LayoutError::CyclicInheritance { type_name }
        | LayoutError::ReservedKey { type_name }
        | LayoutError::DuplicateKey { type_name, .. } => type_name,
    }
}
