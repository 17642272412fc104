use tagtree::{
    DecodeErrorKind, Decoder, EncodeErrorKind, Encoder, Node, NodeType, PathSegment, Record,
    Width, from_node, node, record, to_node,
};
use tagtree_testhelpers::test;

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        label: String,
        count: u16,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Glyph {
        code: char,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Glyphs {
        maybe: Option<char>,
        many: Vec<char>,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Tally16 {
        count: u16,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Tally32 {
        count: u32,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Base {
        shared: bool,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Derived extends base: Base {
        own: i32,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Nest {
        inner: Vec<Vec<u8>>,
    }
}

#[test]
fn missing_required_key() {
    let err = from_node::<Counter>(&node!({ "label": "hits" })).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::KeyNotFound {
            key: "count",
            type_name: "Counter"
        }
    );
    assert!(err.path.is_empty());
}

#[test]
fn u16_field_rejects_other_widths() {
    for (node, got) in [
        (Node::U32(3), NodeType::Unsigned(Width::W32)),
        (Node::I32(3), NodeType::Signed(Width::W32)),
        (Node::U8(3), NodeType::Unsigned(Width::W8)),
        (Node::from("3"), NodeType::String),
    ] {
        let mut tree = node!({ "label": "hits" });
        tree.as_keyed_mut().unwrap().insert("count", node);

        let err = from_node::<Counter>(&tree).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::TypeMismatch {
                expected: "u16".into(),
                got
            }
        );
        assert_eq!(err.path, [PathSegment::Field("count")]);
    }

    let ok: Counter = from_node(&node!({ "label": "hits", "count": 3u16 })).unwrap();
    assert_eq!(ok.count, 3);
}

#[test]
fn null_in_a_required_field_is_a_type_mismatch() {
    let err = from_node::<Counter>(&node!({ "label": null, "count": 1u16 })).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::TypeMismatch {
            expected: "string".into(),
            got: NodeType::Null
        }
    );
}

#[test]
fn record_from_a_non_keyed_node() {
    let err = from_node::<Counter>(&node!([1u16])).unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected Counter, got sequence");
}

#[test]
fn types_without_a_tree_form_are_unsupported() {
    let err = to_node(&Glyph { code: 'x' }).unwrap_err();
    assert_eq!(
        err.kind,
        EncodeErrorKind::UnsupportedType {
            declared: "opaque char".into(),
            found: "char"
        }
    );
    assert_eq!(err.path, [PathSegment::Field("code")]);

    let err = from_node::<Glyph>(&node!({ "code": "x" })).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::UnsupportedType { .. }));
}

#[test]
fn unknown_keys_are_ignored_unless_denied() {
    let tree = node!({
        "super": { "shared": true },
        "own": (-5i32),
        "extra": 1u8
    });

    let lenient: Derived = from_node(&tree).unwrap();
    assert_eq!(lenient.own, -5);
    assert!(lenient.base.shared);

    let err = Decoder::new()
        .deny_unknown_keys()
        .decode::<Derived>(&tree)
        .unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::UnknownKey {
            key: "extra".into(),
            type_name: "Derived"
        }
    );
}

#[test]
fn super_is_unknown_in_a_layer_without_a_base() {
    let tree = node!({ "shared": false, "super": {} });
    assert!(from_node::<Base>(&tree).is_ok());

    let err = Decoder::new()
        .deny_unknown_keys()
        .decode::<Base>(&tree)
        .unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::UnknownKey { .. }));
}

#[test]
fn decode_depth_limit() {
    let tree = node!({ "inner": [[1u8, 2u8], []] });
    let nest = Decoder::new().with_max_depth(2).decode::<Nest>(&tree).unwrap();
    assert_eq!(nest.inner, vec![vec![1u8, 2], Vec::new()]);

    let err = Decoder::new()
        .with_max_depth(1)
        .decode::<Nest>(&tree)
        .unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::DepthLimitExceeded { max_depth: 1 });
    assert_eq!(err.path, [PathSegment::Field("inner"), PathSegment::Index(0)]);
}

#[test]
fn encoder_defaults_match_decoder_defaults() {
    assert_eq!(Encoder::default().max_depth(), Decoder::default().max_depth());
}

#[test]
fn decode_partial_fills_every_layer() {
    let tree = node!({ "super": { "shared": true }, "own": 9i32 });
    let partial = Decoder::new()
        .decode_partial(&tree, Derived::layout())
        .unwrap();
    assert!(partial.is_complete());
    assert_eq!(partial.layout().type_name, "Derived");
    assert_eq!(partial.base().map(|b| b.layout().type_name), Some("Base"));

    let derived = Derived::build(partial).unwrap();
    assert_eq!(
        derived,
        Derived {
            base: Base { shared: true },
            own: 9
        }
    );
}

#[test]
fn a_partial_for_one_layout_does_not_build_another() {
    let tree = node!({ "shared": true });
    let partial = Decoder::new()
        .decode_partial(&tree, Base::layout())
        .unwrap();
    assert!(Counter::build(partial).is_err());
}

#[test]
fn absent_or_empty_opaque_fields_are_still_unsupported() {
    let err = to_node(&Glyphs {
        maybe: None,
        many: vec![],
    })
    .unwrap_err();
    assert_eq!(
        err.kind,
        EncodeErrorKind::UnsupportedType {
            declared: "Option<opaque char>".into(),
            found: "absent value"
        }
    );
    assert_eq!(err.path, [PathSegment::Field("maybe")]);

    let err = from_node::<Glyphs>(&node!({ "maybe": null, "many": [] })).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::UnsupportedType {
            declared: "Option<opaque char>".into()
        }
    );

    let err = from_node::<Glyphs>(&node!({ "many": [] })).unwrap_err();
    assert_eq!(err.path, [PathSegment::Field("maybe")]);
}

#[test]
fn empty_list_of_opaque_values_is_unsupported() {
    record! {
        struct Codes {
            codes: Vec<char>,
        }
    }

    let err = to_node(&Codes { codes: vec![] }).unwrap_err();
    assert_eq!(
        err.kind,
        EncodeErrorKind::UnsupportedType {
            declared: "List<opaque char>".into(),
            found: "list"
        }
    );
    assert_eq!(err.path, [PathSegment::Field("codes")]);
}

#[test]
fn u16_record_does_not_decode_as_u32_record() {
    let node = to_node(&Tally16 { count: 3 }).unwrap();
    assert_eq!(node.get("count"), Some(&Node::U16(3)));

    let err = from_node::<Tally32>(&node).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::TypeMismatch {
            expected: "u32".into(),
            got: NodeType::Unsigned(Width::W16)
        }
    );
    assert_eq!(err.path, [PathSegment::Field("count")]);

    assert_eq!(from_node::<Tally16>(&node).unwrap(), Tally16 { count: 3 });
}
