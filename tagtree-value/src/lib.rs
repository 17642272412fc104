//! `tagtree-value` provides the tagged-value tree: a dynamic, self-describing
//! representation that records are flattened into for transport.
//!
//! # Design
//!
//! A [`Node`] is either a leaf (a width-tagged integer, `f32`, `f64`, boolean,
//! string or null) or a composite (an ordered [`Node::Sequence`] or a
//! string-keyed [`Keyed`] map). Nodes never coerce between numeric widths:
//! a 32-bit signed node is never equal to a 64-bit signed node of the same
//! magnitude.

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]

extern crate alloc;

mod macros;

mod node;
pub use node::*;

mod keyed;
pub use keyed::*;

mod format;
pub use format::{
    FormattedNode, Path, PathSegment, Span, format_node, format_node_compact,
    format_node_with_spans,
};

pub use tagtree_core::{ScalarType, Width};
