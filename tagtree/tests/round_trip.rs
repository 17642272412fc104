use tagtree::{Node, format_node, from_node, node, record, to_node};
use tagtree_testhelpers::test;

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Widths {
        i8: i8,
        i16: i16,
        i32: i32,
        i64: i64,
        u8: u8,
        u16: u16,
        u32: u32,
        u64: u64,
        f32: f32,
        f64: f64,
        flag: bool,
        text: String,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        title: String,
        body: Option<String>,
        rating: Option<i8>,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: f64,
        y: f64,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Polygon {
        name: String,
        vertices: Vec<Point>,
        tags: Vec<String>,
        centroid: Option<Point>,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Token {
        r#type: String,
        r#ref: Option<u32>,
    }
}

fn minimums() -> Widths {
    Widths {
        i8: i8::MIN,
        i16: i16::MIN,
        i32: i32::MIN,
        i64: i64::MIN,
        u8: u8::MIN,
        u16: u16::MIN,
        u32: u32::MIN,
        u64: u64::MIN,
        f32: f32::MIN,
        f64: f64::MIN,
        flag: false,
        text: String::new(),
    }
}

fn maximums() -> Widths {
    Widths {
        i8: i8::MAX,
        i16: i16::MAX,
        i32: i32::MAX,
        i64: i64::MAX,
        u8: u8::MAX,
        u16: u16::MAX,
        u32: u32::MAX,
        u64: u64::MAX,
        f32: f32::MAX,
        f64: f64::MAX,
        flag: true,
        text: "ünïcødé \"quoted\"\n".into(),
    }
}

#[test]
fn every_width_round_trips_at_its_extremes() {
    for value in [minimums(), maximums()] {
        let node = to_node(&value).unwrap();
        let back: Widths = from_node(&node).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn minimum_negatives_keep_their_width_tag() {
    let node = to_node(&minimums()).unwrap();
    assert_eq!(node.get("i8"), Some(&Node::I8(-128)));
    assert_eq!(node.get("i16"), Some(&Node::I16(-32768)));
    assert_eq!(node.get("i32"), Some(&Node::I32(-2_147_483_648)));
    assert_eq!(node.get("i64"), Some(&Node::I64(-9_223_372_036_854_775_808)));
}

#[test]
fn every_field_is_emitted_with_its_declared_leaf_variant() {
    let node = to_node(&maximums()).unwrap();
    let types: Vec<String> = node
        .as_keyed()
        .unwrap()
        .iter()
        .map(|(key, child)| format!("{key}={}", child.node_type()))
        .collect();
    assert_eq!(
        types,
        [
            "i8=i8", "i16=i16", "i32=i32", "i64=i64", "u8=u8", "u16=u16", "u32=u32",
            "u64=u64", "f32=f32", "f64=f64", "flag=bool", "text=string",
        ]
    );
}

#[test]
fn absent_optional_is_not_an_empty_string() {
    let unset = Note {
        title: "t".into(),
        body: None,
        rating: None,
    };
    let empty = Note {
        title: "t".into(),
        body: Some(String::new()),
        rating: Some(0),
    };

    let unset_node = to_node(&unset).unwrap();
    let empty_node = to_node(&empty).unwrap();
    assert_eq!(unset_node.get("body"), Some(&Node::Null));
    assert_eq!(empty_node.get("body"), Some(&Node::from("")));
    assert_eq!(empty_node.get("rating"), Some(&Node::I8(0)));
    assert_ne!(unset_node, empty_node);

    assert_eq!(from_node::<Note>(&unset_node).unwrap(), unset);
    assert_eq!(from_node::<Note>(&empty_node).unwrap(), empty);
}

#[test]
fn missing_optional_key_decodes_as_absent() {
    let note: Note = from_node(&node!({ "title": "only" })).unwrap();
    assert_eq!(
        note,
        Note {
            title: "only".into(),
            body: None,
            rating: None,
        }
    );
}

#[test]
fn nested_records_and_sequences_round_trip() {
    let triangle = Polygon {
        name: "triangle".into(),
        vertices: vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 0.0 },
            Point { x: 0.5, y: 1.0 },
        ],
        tags: vec!["closed".into(), String::new()],
        centroid: Some(Point { x: 0.5, y: 1.0 / 3.0 }),
    };

    let node = to_node(&triangle).unwrap();
    let vertices = node.get("vertices").and_then(Node::as_sequence).unwrap();
    assert_eq!(vertices.len(), 3);
    assert_eq!(vertices[2].get("x"), Some(&Node::F64(0.5)));

    let back: Polygon = from_node(&node).unwrap();
    assert_eq!(back, triangle);

    let empty = Polygon {
        name: String::new(),
        vertices: vec![],
        tags: vec![],
        centroid: None,
    };
    assert_eq!(from_node::<Polygon>(&to_node(&empty).unwrap()).unwrap(), empty);
}

#[test]
fn encoding_is_deterministic() {
    let value = maximums();
    let a = to_node(&value).unwrap();
    let b = to_node(&value).unwrap();
    assert_eq!(a, b);
    assert_eq!(format_node(&a), format_node(&b));
}

#[test]
fn encoded_tree_snapshot() {
    let note = Note {
        title: "groceries".into(),
        body: None,
        rating: Some(-3),
    };
    insta::assert_snapshot!(format_node(&to_node(&note).unwrap()), @r#"
    {
      "title": "groceries",
      "body": null,
      "rating": -3i8
    }
    "#);
}

#[test]
fn raw_identifier_fields_are_keyed_without_the_prefix() {
    let token = Token {
        r#type: "kw".into(),
        r#ref: Some(4),
    };
    let node = to_node(&token).unwrap();
    assert_eq!(node, node!({ "type": "kw", "ref": 4u32 }));

    let from_peer: Token = from_node(&node!({ "type": "kw", "ref": null })).unwrap();
    assert_eq!(from_peer.r#type, "kw");
    assert_eq!(from_peer.r#ref, None);
}
