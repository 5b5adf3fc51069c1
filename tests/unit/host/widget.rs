use super::*;

#[test]
fn widget_id_packs_group_and_child() {
    let id = WidgetId::component(161, 94);
    assert_eq!(id.0, (161 << 16) | 94);
    assert_eq!(id.group(), 161);
    assert_eq!(id.child(), 94);
}

#[test]
fn mode_raw_encoding_matches_host() {
    for raw in 0..6 {
        assert_eq!(PositionMode::from_raw(raw).unwrap().raw(), raw);
    }
    assert_eq!(PositionMode::from_raw(6), None);
    assert_eq!(SizeMode::from_raw(1), Some(SizeMode::Minus));
    assert_eq!(SizeMode::Proportional.raw(), 2);
}

#[test]
fn patch_writes_only_set_fields() {
    let mut attrs = WidgetAttributes {
        sprite_id: 897,
        geometry: WidgetGeometry::absolute(1, 2, 3, 4),
        hidden: false,
        self_hidden: false,
    };
    WidgetPatch::at(10, 20)
        .with_width_mode(SizeMode::Minus)
        .with_hidden(true)
        .apply_to(&mut attrs);

    assert_eq!(attrs.sprite_id, 897);
    assert_eq!(attrs.geometry.x, 10);
    assert_eq!(attrs.geometry.y, 20);
    assert_eq!(attrs.geometry.width, 3);
    assert_eq!(attrs.geometry.width_mode, SizeMode::Minus);
    assert!(attrs.self_hidden);
}

#[test]
fn empty_patch_is_detected() {
    assert!(WidgetPatch::new().is_empty());
    assert!(!WidgetPatch::sized(0, 0).is_empty());
}
