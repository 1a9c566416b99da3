use serde_json::json;

use crate::codec::{DecodeOptions, from_value, to_value};
use crate::component::{Component, Text};

#[test]
fn title_get_set() {
    let mut text = Text::new("body");
    assert!(text.metadata().title().is_none());

    text.metadata_mut().set_title("Heading");
    assert_eq!(text.metadata().title(), Some("Heading"));
}

#[test]
fn untitled_component_omits_title_on_wire() {
    let doc = to_value(&Component::Text(Text::new("body")));
    let metadata = doc.get("metadata").and_then(|v| v.as_object()).expect("metadata block");
    assert!(!metadata.contains_key("title"));
    assert_eq!(metadata.get("type").and_then(|v| v.as_str()), Some("Text"));
}

#[test]
fn extra_annotations_round_trip() {
    let mut text = Text::with_title("t", "body");
    text.metadata_mut().insert_extra("accessor", "summary");
    text.metadata_mut().insert_extra("a11y", json!({"role": "status"}));
    let original = Component::Text(text);

    let restored = from_value(&to_value(&original), DecodeOptions::default()).expect("decode");
    assert_eq!(restored, original);
    assert_eq!(
        restored.metadata().extra().get("accessor").and_then(|v| v.as_str()),
        Some("summary")
    );
}

#[test]
fn discriminator_wins_over_spoofed_annotation() {
    // An opaque annotation named "type" must never displace the runtime tag.
    let mut text = Text::new("body");
    text.metadata_mut().insert_extra("type", "Spoof");
    let doc = to_value(&Component::Text(text));

    assert_eq!(
        doc.get("metadata").and_then(|m| m.get("type")).and_then(|v| v.as_str()),
        Some("Text")
    );
}
