//! Text formatting for nodes with span tracking.
//!
//! Nodes are rendered as JSON-like text where every number carries its type
//! suffix (`3u16`, `-128i8`, `1.5f32`) so that the width tags stay visible.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::Node;

/// A segment in a path through a node
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// A key in a keyed node
    Key(String),
    /// An index in a sequence
    Index(usize),
}

/// A path to a location within a node
pub type Path = Vec<PathSegment>;

/// A byte span in formatted output (start, end)
pub type Span = (usize, usize);

/// Result of formatting a node with span tracking
#[derive(Debug)]
pub struct FormattedNode {
    /// The formatted text
    pub text: String,
    /// Map from paths to their byte spans in `text`
    pub spans: BTreeMap<Path, Span>,
}

/// Format a node as indented text with span tracking
pub fn format_node_with_spans(node: &Node) -> FormattedNode {
    let mut ctx = FormatContext::new(true);
    format_node_into(&mut ctx, node, &mut Vec::new());
    FormattedNode {
        text: ctx.output,
        spans: ctx.spans,
    }
}

/// Format a node as indented text
pub fn format_node(node: &Node) -> String {
    let mut ctx = FormatContext::new(true);
    format_node_into(&mut ctx, node, &mut Vec::new());
    ctx.output
}

/// Format a node on a single line
pub fn format_node_compact(node: &Node) -> String {
    let mut ctx = FormatContext::new(false);
    format_node_into(&mut ctx, node, &mut Vec::new());
    ctx.output
}

struct FormatContext {
    output: String,
    spans: BTreeMap<Path, Span>,
    indent: usize,
    pretty: bool,
}

impl FormatContext {
    const fn new(pretty: bool) -> Self {
        Self {
            output: String::new(),
            spans: BTreeMap::new(),
            indent: 0,
            pretty,
        }
    }

    const fn len(&self) -> usize {
        self.output.len()
    }

    fn newline(&mut self) {
        if self.pretty {
            self.output.push('\n');
            for _ in 0..self.indent {
                self.output.push_str("  ");
            }
        }
    }

    fn separator(&mut self) {
        self.output.push(',');
        if !self.pretty {
            self.output.push(' ');
        }
    }

    fn record_span(&mut self, path: &[PathSegment], start: usize, end: usize) {
        self.spans.insert(path.to_vec(), (start, end));
    }
}

fn format_node_into(ctx: &mut FormatContext, node: &Node, path: &mut Path) {
    let start = ctx.len();

    match node {
        Node::I8(v) => {
            let _ = write!(ctx.output, "{v}i8");
        }
        Node::I16(v) => {
            let _ = write!(ctx.output, "{v}i16");
        }
        Node::I32(v) => {
            let _ = write!(ctx.output, "{v}i32");
        }
        Node::I64(v) => {
            let _ = write!(ctx.output, "{v}i64");
        }
        Node::U8(v) => {
            let _ = write!(ctx.output, "{v}u8");
        }
        Node::U16(v) => {
            let _ = write!(ctx.output, "{v}u16");
        }
        Node::U32(v) => {
            let _ = write!(ctx.output, "{v}u32");
        }
        Node::U64(v) => {
            let _ = write!(ctx.output, "{v}u64");
        }
        Node::F32(v) => {
            let _ = write!(ctx.output, "{v:?}f32");
        }
        Node::F64(v) => {
            let _ = write!(ctx.output, "{v:?}f64");
        }
        Node::Bool(v) => {
            let _ = write!(ctx.output, "{v}");
        }
        Node::String(s) => write_escaped(&mut ctx.output, s),
        Node::Null => ctx.output.push_str("null"),
        Node::Sequence(items) => {
            ctx.output.push('[');
            if !items.is_empty() {
                ctx.indent += 1;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        ctx.separator();
                    }
                    ctx.newline();
                    path.push(PathSegment::Index(i));
                    format_node_into(ctx, item, path);
                    path.pop();
                }
                ctx.indent -= 1;
                ctx.newline();
            }
            ctx.output.push(']');
        }
        Node::Keyed(keyed) => {
            ctx.output.push('{');
            if !keyed.is_empty() {
                ctx.indent += 1;
                for (i, (key, child)) in keyed.iter().enumerate() {
                    if i > 0 {
                        ctx.separator();
                    }
                    ctx.newline();
                    write_escaped(&mut ctx.output, key);
                    ctx.output.push_str(": ");
                    path.push(PathSegment::Key(key.into()));
                    format_node_into(ctx, child, path);
                    path.pop();
                }
                ctx.indent -= 1;
                ctx.newline();
            }
            ctx.output.push('}');
        }
    }

    let end = ctx.len();
    ctx.record_span(path, start, end);
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Keyed;

    #[test]
    fn compact_output_keeps_width_suffixes() {
        let mut k = Keyed::new();
        k.insert("a", -128i8);
        k.insert("b", 3u16);
        k.insert("c", Node::Null);
        k.insert("d", 1.5f32);
        assert_eq!(
            format_node_compact(&Node::Keyed(k)),
            r#"{"a": -128i8, "b": 3u16, "c": null, "d": 1.5f32}"#
        );
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(format_node_compact(&Node::from("a\"b\n")), r#""a\"b\n""#);
    }

    #[test]
    fn spans_point_at_children() {
        let mut k = Keyed::new();
        k.insert("xs", alloc::vec![1u8, 2u8]);
        let formatted = format_node_with_spans(&Node::Keyed(k));

        let path = alloc::vec![PathSegment::Key("xs".into()), PathSegment::Index(1)];
        let (start, end) = formatted.spans[&path];
        assert_eq!(&formatted.text[start..end], "2u8");

        let (start, end) = formatted.spans[&Path::new()];
        assert_eq!((start, end), (0, formatted.text.len()));
    }
}
