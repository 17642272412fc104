use tagtree_testhelpers::test;
use tagtree_value::{Keyed, Node, NodeType, Width, format_node, node};

#[test]
fn node_macro_builds_nested_trees() {
    let n = node!({
        "id": 1u64,
        "scores": [(-1i8), 0i8, 127i8],
        "super": {
            "name": "root",
            "nickname": null
        }
    });

    let keyed = n.as_keyed().unwrap();
    assert_eq!(keyed.len(), 3);
    assert_eq!(
        n.get("scores").and_then(Node::as_sequence),
        Some(&[Node::I8(-1), Node::I8(0), Node::I8(127)][..])
    );
    let base = n.get("super").unwrap();
    assert_eq!(base.get("name").and_then(Node::as_str), Some("root"));
    assert!(base.get("nickname").unwrap().is_null());
}

#[test]
fn widths_do_not_coerce() {
    assert_ne!(Node::U16(5), Node::U32(5));
    assert_ne!(Node::I64(-1), Node::I32(-1));
    assert_ne!(Node::F32(1.0), Node::F64(1.0));
    assert_eq!(Node::U16(5).node_type(), NodeType::Unsigned(Width::W16));
    assert_eq!(Node::U16(5).as_unsigned(), Some((Width::W16, 5)));
}

#[test]
fn width_constructors_reject_out_of_range_values() {
    assert_eq!(Node::signed(Width::W8, -128), Some(Node::I8(-128)));
    assert_eq!(Node::signed(Width::W8, -129), None);
    assert_eq!(Node::unsigned(Width::W16, 65_535), Some(Node::U16(65_535)));
    assert_eq!(Node::unsigned(Width::W16, 65_536), None);
    assert_eq!(Node::signed(Width::W64, i64::MIN), Some(Node::I64(i64::MIN)));
}

#[test]
fn null_and_empty_string_are_different() {
    assert_ne!(Node::Null, Node::from(""));
    assert_eq!(Node::from(None::<String>), Node::Null);
    assert_eq!(Node::from(Some("")), Node::String(String::new()));
}

#[test]
fn pretty_format_snapshot() {
    let mut inner = Keyed::new();
    inner.insert("name", "Ada");
    inner.insert("age", None::<u8>);

    let mut outer = Keyed::new();
    outer.insert("super", inner);
    outer.insert("badge", 7u32);
    outer.insert("offsets", vec![-32768i16, 32767i16]);

    insta::assert_snapshot!(format_node(&Node::Keyed(outer)), @r#"
    {
      "super": {
        "name": "Ada",
        "age": null
      },
      "badge": 7u32,
      "offsets": [
        -32768i16,
        32767i16
      ]
    }
    "#);
}

#[test]
fn display_is_compact() {
    let n = node!({ "a": true, "b": [] });
    assert_eq!(n.to_string(), r#"{"a": true, "b": []}"#);
}
