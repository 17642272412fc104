/// Builds a [`Node`](crate::Node) from a JSON-like literal.
///
/// Numbers keep the type of the Rust expression they are written as, so the
/// width is part of the literal. Values that are more than one token (such as
/// negative numbers) go in parentheses.
///
/// ```
/// use tagtree_value::{Node, node};
///
/// let n = node!({
///     "id": 7u32,
///     "delta": (-3i16),
///     "tags": ["a", "b"],
///     "parent": null,
///     "super": { "name": "base" }
/// });
///
/// assert_eq!(n.get("id"), Some(&Node::U32(7)));
/// assert_eq!(n.get("delta"), Some(&Node::I16(-3)));
/// assert!(n.get("parent").unwrap().is_null());
/// assert_eq!(n.get("super").unwrap().get("name"), Some(&Node::from("base")));
/// ```
#[macro_export]
macro_rules! node {
    (null) => {
        $crate::Node::Null
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::Sequence(::std::vec![$($crate::node!($elem)),*])
    };
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut keyed = $crate::Keyed::new();
        $(
            keyed.insert($key, $crate::node!($value));
        )*
        $crate::Node::Keyed(keyed)
    }};
    ($other:expr) => {
        $crate::Node::from($other)
    };
}
