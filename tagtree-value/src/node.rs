//! The `Node` type: one vertex of a tagged-value tree.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use tagtree_core::{ScalarType, Width};

use crate::Keyed;

/// Enum distinguishing the node kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeType {
    /// Signed integer of the given width
    Signed(Width),
    /// Unsigned integer of the given width
    Unsigned(Width),
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Boolean
    Bool,
    /// UTF-8 text
    String,
    /// Absent value
    Null,
    /// Ordered sequence
    Sequence,
    /// String-keyed map
    Keyed,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Signed(w) => write!(f, "i{w}"),
            NodeType::Unsigned(w) => write!(f, "u{w}"),
            NodeType::F32 => f.write_str("f32"),
            NodeType::F64 => f.write_str("f64"),
            NodeType::Bool => f.write_str("bool"),
            NodeType::String => f.write_str("string"),
            NodeType::Null => f.write_str("null"),
            NodeType::Sequence => f.write_str("sequence"),
            NodeType::Keyed => f.write_str("keyed"),
        }
    }
}

/// A node of a tagged-value tree.
///
/// Integer leaves carry their exact width and signedness: `Node::I32(3)` and
/// `Node::I64(3)` are different nodes and never compare equal.
#[derive(Clone, PartialEq, Default)]
pub enum Node {
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// Boolean
    Bool(bool),
    /// UTF-8 text
    String(String),
    /// Absent value
    #[default]
    Null,
    /// Ordered sequence of children
    Sequence(Vec<Node>),
    /// Mapping from string key to child
    Keyed(Keyed),
}

impl Node {
    /// Builds a signed integer node of the given width.
    ///
    /// Returns `None` if `value` does not fit in `width` bits.
    ///
    /// ```
    /// use tagtree_value::{Node, Width};
    ///
    /// assert_eq!(Node::signed(Width::W8, -128), Some(Node::I8(-128)));
    /// assert_eq!(Node::signed(Width::W8, 128), None);
    /// ```
    pub fn signed(width: Width, value: i64) -> Option<Node> {
        let node = match width {
            Width::W8 => Node::I8(i8::try_from(value).ok()?),
            Width::W16 => Node::I16(i16::try_from(value).ok()?),
            Width::W32 => Node::I32(i32::try_from(value).ok()?),
            Width::W64 => Node::I64(value),
        };
        Some(node)
    }

    /// Builds an unsigned integer node of the given width.
    ///
    /// Returns `None` if `value` does not fit in `width` bits.
    pub fn unsigned(width: Width, value: u64) -> Option<Node> {
        let node = match width {
            Width::W8 => Node::U8(u8::try_from(value).ok()?),
            Width::W16 => Node::U16(u16::try_from(value).ok()?),
            Width::W32 => Node::U32(u32::try_from(value).ok()?),
            Width::W64 => Node::U64(value),
        };
        Some(node)
    }

    /// Returns the kind of this node.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::I8(_) => NodeType::Signed(Width::W8),
            Node::I16(_) => NodeType::Signed(Width::W16),
            Node::I32(_) => NodeType::Signed(Width::W32),
            Node::I64(_) => NodeType::Signed(Width::W64),
            Node::U8(_) => NodeType::Unsigned(Width::W8),
            Node::U16(_) => NodeType::Unsigned(Width::W16),
            Node::U32(_) => NodeType::Unsigned(Width::W32),
            Node::U64(_) => NodeType::Unsigned(Width::W64),
            Node::F32(_) => NodeType::F32,
            Node::F64(_) => NodeType::F64,
            Node::Bool(_) => NodeType::Bool,
            Node::String(_) => NodeType::String,
            Node::Null => NodeType::Null,
            Node::Sequence(_) => NodeType::Sequence,
            Node::Keyed(_) => NodeType::Keyed,
        }
    }

    /// Returns the scalar type of a leaf, or `None` for null and composites.
    #[must_use]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.node_type() {
            NodeType::Signed(w) => Some(ScalarType::signed(w)),
            NodeType::Unsigned(w) => Some(ScalarType::unsigned(w)),
            NodeType::F32 => Some(ScalarType::F32),
            NodeType::F64 => Some(ScalarType::F64),
            NodeType::Bool => Some(ScalarType::Bool),
            NodeType::String => Some(ScalarType::String),
            NodeType::Null | NodeType::Sequence | NodeType::Keyed => None,
        }
    }

    /// Returns `true` for every variant except [`Node::Sequence`] and [`Node::Keyed`].
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Sequence(_) | Node::Keyed(_))
    }

    /// Returns `true` if this is [`Node::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Width and value of a signed integer leaf.
    #[must_use]
    pub fn as_signed(&self) -> Option<(Width, i64)> {
        match *self {
            Node::I8(v) => Some((Width::W8, v.into())),
            Node::I16(v) => Some((Width::W16, v.into())),
            Node::I32(v) => Some((Width::W32, v.into())),
            Node::I64(v) => Some((Width::W64, v)),
            _ => None,
        }
    }

    /// Width and value of an unsigned integer leaf.
    #[must_use]
    pub fn as_unsigned(&self) -> Option<(Width, u64)> {
        match *self {
            Node::U8(v) => Some((Width::W8, v.into())),
            Node::U16(v) => Some((Width::W16, v.into())),
            Node::U32(v) => Some((Width::W32, v.into())),
            Node::U64(v) => Some((Width::W64, v)),
            _ => None,
        }
    }

    /// Value of an `f32` leaf.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Node::F32(v) => Some(v),
            _ => None,
        }
    }

    /// Value of an `f64` leaf.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Node::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Value of a boolean leaf.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Node::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Contents of a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Children of a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Gets a mutable reference to the children of a sequence.
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Entries of a keyed node.
    #[must_use]
    pub fn as_keyed(&self) -> Option<&Keyed> {
        match self {
            Node::Keyed(keyed) => Some(keyed),
            _ => None,
        }
    }

    /// Gets a mutable reference to the entries of a keyed node.
    pub fn as_keyed_mut(&mut self) -> Option<&mut Keyed> {
        match self {
            Node::Keyed(keyed) => Some(keyed),
            _ => None,
        }
    }

    /// Looks up `key` in a keyed node. Returns `None` for other node kinds.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_keyed()?.get(key)
    }

    /// Takes this node, replacing it with [`Node::Null`].
    pub fn take(&mut self) -> Node {
        core::mem::take(self)
    }
}

// === Debug / Display ===

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::I8(v) => write!(f, "{v}i8"),
            Node::I16(v) => write!(f, "{v}i16"),
            Node::I32(v) => write!(f, "{v}i32"),
            Node::I64(v) => write!(f, "{v}i64"),
            Node::U8(v) => write!(f, "{v}u8"),
            Node::U16(v) => write!(f, "{v}u16"),
            Node::U32(v) => write!(f, "{v}u32"),
            Node::U64(v) => write!(f, "{v}u64"),
            Node::F32(v) => write!(f, "{v:?}f32"),
            Node::F64(v) => write!(f, "{v:?}f64"),
            Node::Bool(v) => fmt::Debug::fmt(v, f),
            Node::String(s) => fmt::Debug::fmt(s, f),
            Node::Null => f.write_str("null"),
            Node::Sequence(items) => f.debug_list().entries(items).finish(),
            Node::Keyed(keyed) => fmt::Debug::fmt(keyed, f),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format_node_compact(self))
    }
}

// === From implementations ===

macro_rules! impl_from_leaf {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                #[inline]
                fn from(v: $ty) -> Self {
                    Node::$variant(v)
                }
            }
        )*
    };
}

impl_from_leaf! {
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
    String => String,
    Keyed => Keyed,
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.into())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Node::Null,
        }
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::Sequence(items.into_iter().map(Into::into).collect())
    }
}

// === FromIterator implementations ===

impl<T: Into<Node>> core::iter::FromIterator<T> for Node {
    /// Collect into a sequence node.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Node::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
