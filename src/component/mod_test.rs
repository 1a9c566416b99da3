use super::*;

use crate::codec::{DecodeOptions, from_value, to_value};

fn representative_components() -> Vec<Component> {
    let mut panel = Panel::new("Overview", Component::Text(Text::new("cpu: 42%")));
    panel.set_position(0, 0, 12, 4);

    vec![
        Component::Panel(panel),
        Component::Text(Text::with_title("Status", "healthy")),
        Component::Link(Link::new("Source", "repository", "https://example.test/repo")),
        Component::List(List::new("Events", vec![Component::Text(Text::new("started"))])),
        Component::Timestamp(Timestamp::new(1_693_000_000)),
    ]
}

#[test]
fn every_variant_round_trips() {
    for original in representative_components() {
        let restored = from_value(&to_value(&original), DecodeOptions::default())
            .unwrap_or_else(|err| panic!("{} failed to decode: {err}", original.type_tag()));
        assert_eq!(restored, original);
    }
}

#[test]
fn decoded_tag_matches_runtime_variant() {
    for original in representative_components() {
        let restored = from_value(&to_value(&original), DecodeOptions::default()).expect("decode");
        assert_eq!(restored.type_tag(), original.type_tag());
        assert_eq!(restored.metadata().type_tag(), original.type_tag());
    }
}

#[test]
fn triple_nested_panels_keep_every_field() {
    let mut inner = Panel::new("inner", Component::Text(Text::new("leaf")));
    inner.set_position(0, 0, 3, 1);
    let mut middle = Panel::new("middle", Component::Panel(inner));
    middle.set_position(1, 1, 6, 2);
    let mut outer = Panel::new("outer", Component::Panel(middle));
    outer.set_position(2, 2, 12, 4);
    let original = Component::Panel(outer);

    let restored = from_value(&to_value(&original), DecodeOptions::default()).expect("decode");
    assert_eq!(restored, original);

    // Walk back down and spot-check each level.
    let Component::Panel(outer) = restored else { panic!("outer") };
    assert_eq!(outer.position(), Position { x: 2, y: 2, w: 12, h: 4 });
    let Component::Panel(middle) = outer.content() else { panic!("middle") };
    assert_eq!(middle.metadata().title(), Some("middle"));
    let Component::Panel(inner) = middle.content() else { panic!("inner") };
    assert_eq!(inner.position(), Position { x: 0, y: 0, w: 3, h: 1 });
    assert!(matches!(inner.content(), Component::Text(text) if text.value() == "leaf"));
}

#[test]
fn title_is_mutable_through_the_sum_type() {
    let mut component = Component::Timestamp(Timestamp::new(0));
    assert!(component.title().is_none());
    component.metadata_mut().set_title("Deployed at");
    assert_eq!(component.title(), Some("Deployed at"));
}

#[test]
fn from_impls_pick_the_matching_variant() {
    assert_eq!(Component::from(Text::new("t")).type_tag(), "Text");
    assert_eq!(Component::from(Timestamp::new(1)).type_tag(), "Timestamp");
    assert_eq!(Component::from(List::new("l", Vec::new())).type_tag(), "List");
    assert_eq!(
        Component::from(Link::new("t", "v", "https://example.test")).type_tag(),
        "Link"
    );
}
