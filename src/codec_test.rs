use super::*;

use serde_json::json;

use crate::component::{Panel, Text};

fn nested_panels(depth: usize) -> Component {
    let mut component = Component::Text(Text::new("leaf"));
    for level in 0..depth {
        component = Component::Panel(Panel::new(format!("level {level}"), component));
    }
    component
}

#[test]
fn malformed_bytes_are_rejected() {
    let err = decode_component(b"{not json", DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedDocument(_)));
}

#[test]
fn missing_metadata_block_is_missing_tag() {
    let doc = json!({ "config": {} });
    let err = from_value(&doc, DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::MissingTypeTag));
}

#[test]
fn missing_type_field_is_missing_tag() {
    let doc = json!({ "metadata": {}, "config": {} });
    let err = from_value(&doc, DecodeOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::MissingTypeTag));
}

#[test]
fn unknown_tag_fails_instead_of_defaulting() {
    let doc = json!({ "metadata": { "type": "Bogus" }, "config": {} });
    let err = from_value(&doc, DecodeOptions::default()).unwrap_err();
    match err {
        DecodeError::UnknownVariant(tag) => assert_eq!(tag, "Bogus"),
        other => panic!("expected UnknownVariant, got {other:?}"),
    }
}

#[test]
fn absent_config_surfaces_as_invalid_payload() {
    let doc = json!({ "metadata": { "type": "Text" } });
    let err = from_value(&doc, DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidPayload { tag: "Text", ref field } if field == "value"
    ));
}

#[test]
fn byte_level_round_trip() {
    let mut panel = Panel::new("Overview", Component::Text(Text::new("ok")));
    panel.set_position(2, 3, 6, 4);
    let original = Component::Panel(panel);

    let bytes = encode_component(&original);
    let restored = decode_component(&bytes, DecodeOptions::default()).expect("decode");
    assert_eq!(restored, original);
}

#[test]
fn depth_limit_rejects_over_deep_documents() {
    let doc = to_value(&nested_panels(5));
    let err = from_value(&doc, DecodeOptions { max_depth: 3 }).unwrap_err();
    assert!(matches!(err, DecodeError::DepthExceeded { limit: 3 }));
}

#[test]
fn depth_limit_admits_documents_at_the_bound() {
    // Four panels plus the leaf: five levels exactly.
    let original = nested_panels(4);
    let doc = to_value(&original);

    assert!(matches!(
        from_value(&doc, DecodeOptions { max_depth: 4 }),
        Err(DecodeError::DepthExceeded { limit: 4 })
    ));
    let restored = from_value(&doc, DecodeOptions { max_depth: 5 }).expect("decode at bound");
    assert_eq!(restored, original);
}

#[test]
fn default_depth_limit_covers_real_dashboards() {
    let original = nested_panels(16);
    let restored = from_value(&to_value(&original), DecodeOptions::default()).expect("decode");
    assert_eq!(restored, original);
}

#[test]
fn descendant_failure_propagates_to_the_root() {
    // A panel whose nested text lacks its payload: the whole decode fails,
    // carrying the inner variant's context.
    let doc = json!({
        "metadata": { "type": "Panel", "title": "outer" },
        "config": {
            "position": { "x": 0, "y": 0, "w": 1, "h": 1 },
            "content": { "metadata": { "type": "Text" }, "config": {} }
        }
    });
    let err = from_value(&doc, DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidPayload { tag: "Text", ref field } if field == "value"
    ));
}
