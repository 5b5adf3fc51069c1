use super::*;

const ROOT: WidgetId = WidgetId::component(1, 0);
const PANEL: WidgetId = WidgetId::component(1, 1);
const INNER: WidgetId = WidgetId::component(1, 2);

fn fixture() -> MemoryClient {
    let mut client = MemoryClient::new(Size::new(1000.0, 600.0));
    client
        .insert_root(
            ROOT,
            WidgetGeometry::absolute(0, 0, 0, 0).with_size_modes(SizeMode::Minus, SizeMode::Minus),
        )
        .insert_static(
            ROOT,
            PANEL,
            WidgetGeometry::absolute(0, 0, 249, 336)
                .with_position_modes(PositionMode::AbsoluteEnd, PositionMode::AbsoluteEnd),
        )
        .insert_static(
            PANEL,
            INNER,
            WidgetGeometry::absolute(0, 0, 0, 0)
                .with_size_modes(SizeMode::Minus, SizeMode::Absolute),
        );
    client
}

#[test]
fn layout_resolves_modes_against_parent() {
    let client = fixture();
    assert_eq!(client.bounds(ROOT), Some(Rect::new(0.0, 0.0, 1000.0, 600.0)));
    assert_eq!(
        client.bounds(PANEL),
        Some(Rect::new(751.0, 264.0, 1000.0, 600.0))
    );
    assert_eq!(client.size(INNER), Some(Size::new(249.0, 0.0)));
    assert_eq!(
        client.relative_bounds(PANEL).map(|r| r.origin()),
        Some(Point::new(751.0, 264.0))
    );
}

#[test]
fn writes_are_journaled_and_need_revalidate() {
    let mut client = fixture();
    assert!(client.apply_patch(PANEL, &WidgetPatch::sized(100, 100)));
    assert_eq!(client.size(PANEL), Some(Size::new(249.0, 336.0)));

    client.revalidate(PANEL);
    assert_eq!(client.size(PANEL), Some(Size::new(100.0, 100.0)));
    assert_eq!(
        client.take_journal(),
        vec![
            TreeOp::Write {
                id: PANEL,
                patch: WidgetPatch::sized(100, 100)
            },
            TreeOp::Revalidate(PANEL),
        ]
    );
}

#[test]
fn hidden_is_inherited_from_ancestors() {
    let mut client = fixture();
    client.set_self_hidden(PANEL, true);
    let inner = client.attributes(INNER).unwrap();
    assert!(inner.hidden);
    assert!(!inner.self_hidden);
    assert!(!client.is_visible(INNER));
}

#[test]
fn missing_widgets_are_absent_not_errors() {
    let mut client = fixture();
    client.remove(PANEL);
    assert!(!client.exists(INNER));
    assert!(!client.apply_patch(INNER, &WidgetPatch::at(1, 1)));
    client.revalidate(INNER);
    assert!(client.journal().is_empty());
    assert!(client.static_children(ROOT).is_empty());
}

#[test]
fn create_and_delete_dynamic_children() {
    let mut client = fixture();
    let child = client
        .create_child(
            PANEL,
            &ChildSpec {
                sprite_id: 1035,
                geometry: WidgetGeometry::absolute(0, 37, 28, 261),
                ..ChildSpec::default()
            },
        )
        .unwrap();
    assert_eq!(client.dynamic_children(PANEL), vec![child]);
    assert_eq!(client.attributes(child).unwrap().sprite_id, 1035);

    client.delete_all_children(PANEL);
    assert!(client.dynamic_children(PANEL).is_empty());
    assert!(!client.exists(child));
    assert_eq!(client.static_children(PANEL), vec![INNER]);
}
