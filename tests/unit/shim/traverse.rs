use super::*;
use crate::foundation::core::Size;
use crate::host::memory::{MemoryClient, TreeOp};
use crate::host::widget::{WidgetGeometry, WidgetTreeView};

fn banded() -> WidgetGeometry {
    WidgetGeometry::absolute(0, 0, 250, 168).with_size_modes(SizeMode::Minus, SizeMode::Minus)
}

/// Root plus a chain of six static levels, every level in both bands.
fn chain() -> (MemoryClient, Vec<WidgetId>) {
    let mut c = MemoryClient::new(Size::new(1200.0, 900.0));
    let root = WidgetId::component(30, 0);
    c.insert_root(root, WidgetGeometry::absolute(0, 0, 1200, 900));
    let mut levels = Vec::new();
    let mut parent = root;
    for level in 1..=6u16 {
        let id = WidgetId::component(30, level);
        c.insert_static(parent, id, banded());
        levels.push(id);
        parent = id;
    }
    (c, levels)
}

#[test]
fn depth_bound_limits_levels() {
    let (mut c, levels) = chain();
    let stats = normalize_descendants(
        &mut c,
        WidgetId::component(30, 0),
        NormalizeOpts { max_depth: 4, collapse_chat_height: false },
        0,
    );
    assert_eq!(stats.visited, 4);
    assert_eq!(stats.widths_cleared, 4);
    assert_eq!(stats.heights_cleared, 0);
    for id in &levels[..4] {
        assert_eq!(c.attributes(*id).unwrap().geometry.width, 0);
    }
    for id in &levels[4..] {
        assert_eq!(c.attributes(*id).unwrap().geometry.width, 250);
    }
}

#[test]
fn zero_depth_is_unbounded() {
    let (mut c, _) = chain();
    let stats = normalize_descendants(
        &mut c,
        WidgetId::component(30, 0),
        NormalizeOpts { max_depth: 0, collapse_chat_height: true },
        0,
    );
    assert_eq!(stats.visited, 6);
    assert_eq!(stats.heights_cleared, 6);
}

#[test]
fn only_parent_derived_sizes_in_band_change() {
    let mut c = MemoryClient::new(Size::new(1200.0, 900.0));
    let root = WidgetId::component(31, 0);
    let absolute = WidgetId::component(31, 1);
    let outside = WidgetId::component(31, 2);
    c.insert_root(root, WidgetGeometry::absolute(0, 0, 1200, 900))
        .insert_static(root, absolute, WidgetGeometry::absolute(0, 0, 250, 168))
        .insert_static(
            root,
            outside,
            WidgetGeometry::absolute(0, 0, 255, 163)
                .with_size_modes(SizeMode::Minus, SizeMode::Minus),
        );
    let stats = normalize_descendants(
        &mut c,
        root,
        NormalizeOpts { max_depth: 4, collapse_chat_height: true },
        0,
    );
    assert_eq!(stats.visited, 2);
    assert_eq!(stats.widths_cleared + stats.heights_cleared, 0);
    assert!(!c.journal().iter().any(|op| matches!(op, TreeOp::Write { .. })));
}

#[test]
fn dynamic_children_are_not_revalidated() {
    let mut c = MemoryClient::new(Size::new(1200.0, 900.0));
    let root = WidgetId::component(32, 0);
    c.insert_root(root, WidgetGeometry::absolute(0, 0, 1200, 900));
    let dynamic = c.insert_dynamic(root, banded());
    normalize_descendants(
        &mut c,
        root,
        NormalizeOpts { max_depth: 4, collapse_chat_height: false },
        0,
    );
    assert_eq!(c.attributes(dynamic).unwrap().geometry.width, 0);
    assert!(!c.journal().contains(&TreeOp::Revalidate(dynamic)));
}
