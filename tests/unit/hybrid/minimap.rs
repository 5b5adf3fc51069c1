use super::*;
use crate::config::HybridConfig;
use crate::foundation::core::Size;
use crate::host::memory::MemoryClient;
use crate::host::widget::{WidgetTree, WidgetTreeView};
use crate::hybrid::fixture::classic_client;

fn setup(config: HybridConfig) -> (MemoryClient, HybridPlugin) {
    let c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(config);
    plugin.shim.engine.activate();
    (c, plugin)
}

fn xy(c: &MemoryClient, id: WidgetId) -> (i32, i32) {
    let g = c.attributes(id).unwrap().geometry;
    (g.x, g.y)
}

#[test]
fn right_anchored_pieces_are_pinned_to_fixed_coordinates() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    plugin.reposition_minimap(&mut c);

    let minimap = c.attributes(ids::MINIMAP).unwrap().geometry;
    assert_eq!((minimap.x, minimap.y), (50, 9));
    assert_eq!(minimap.x_mode, PositionMode::AbsoluteStart);
    assert_eq!(xy(&c, ids::MAP_NOCLICK[2]), (44, 101));
    assert_eq!(xy(&c, ids::MAP_MASK_GRAPHIC), (44, 1));
    assert!(c.attributes(ids::MAP_MASK_GRAPHIC).unwrap().self_hidden);

    // The container is anchored to the right edge of a 1200 wide canvas.
    assert_eq!(c.bounds(ids::MINIMAP).unwrap().x0, 951.0 + 50.0);
}

#[test]
fn containers_take_the_fixed_panel_size() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    plugin.reposition_minimap(&mut c);

    let map = c.attributes(ids::MAP_CONTAINER).unwrap().geometry;
    assert_eq!((map.width, map.height), (249, 207));
    let orbs = c.attributes(ids::ORBS_UNIVERSE).unwrap().geometry;
    assert_eq!((orbs.width, orbs.height), (249, 197));
    assert_eq!(orbs.width_mode, SizeMode::Absolute);
    assert_eq!(orbs.height_mode, SizeMode::Absolute);

    let snapshots = plugin.shim.engine.snapshots();
    assert_eq!(snapshots.get(ids::MAP_CONTAINER).unwrap().order(), ResetOrder::Last);
    assert_eq!(snapshots.get(ids::ORBS_CONTAINER).unwrap().order(), ResetOrder::Normal);
}

#[test]
fn orb_positions_follow_config() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    plugin.reposition_minimap(&mut c);
    assert_eq!(xy(&c, ids::ORB_RUN_ENERGY), (10, 97));
    assert_eq!(xy(&c, ids::ORB_SPEC_ENERGY), (32, 122));
    assert_eq!(xy(&c, ids::ORB_HEALTH), (0, 31));
    assert_eq!(xy(&c, ids::COMPASS_CLICK), (26, 1));

    let (mut c, mut plugin) = setup(HybridConfig {
        orbs_position: OrbsPosition::MoreClearance,
        ..HybridConfig::default()
    });
    plugin.reposition_minimap(&mut c);
    assert_eq!(xy(&c, ids::ORB_RUN_ENERGY), (2, 97));
    assert_eq!(xy(&c, ids::ORB_SPEC_ENERGY), (23, 124));
}

#[test]
fn edge_orbs_move_only_from_host_defaults() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    c.apply_patch(ids::ORB_ACTIVITY_ADVISER, &WidgetPatch::new().with_x(60));
    plugin.fix_edge_orbs(&mut c);

    assert_eq!(xy(&c, ids::ORB_WORLD_MAP), (23, 109));
    assert_eq!(xy(&c, ids::WIKI_BANNER), (21, 129));
    let store = c.attributes(ids::ORB_STORE).unwrap().geometry;
    assert_eq!((store.x, store.y, store.width, store.height), (13, 77, 34, 34));
    assert_eq!(store.x_mode, PositionMode::AbsoluteEnd);
    assert_eq!(xy(&c, ids::ORB_ACTIVITY_ADVISER), (60, 50));
    assert!(plugin.shim.engine.snapshot(ids::ORB_ACTIVITY_ADVISER).is_none());
}

#[test]
fn nothing_moves_outside_resizable_classic() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    c.set_self_hidden(ids::STRETCH_CONTROL, true);
    plugin.reposition_minimap(&mut c);
    assert_eq!(xy(&c, ids::MINIMAP), (10, 9));
    assert!(plugin.shim.engine.snapshots().is_empty());
}

#[test]
fn decorations_are_synthetic_children() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    plugin.create_decorations(&mut c);

    assert_eq!(c.dynamic_children(ids::MAP_MINIMAP).len(), 6);
    assert_eq!(c.dynamic_children(ids::SIDE_MENU).len(), 4);
    let parents: Vec<WidgetId> = plugin.shim.synthetic_parents().collect();
    assert_eq!(parents, vec![ids::MAP_MINIMAP, ids::SIDE_MENU]);

    let center = c.dynamic_children(ids::MAP_MINIMAP)[0];
    let attrs = c.attributes(center).unwrap();
    assert_eq!(attrs.sprite_id, 1182);
    assert_eq!(
        (attrs.geometry.x, attrs.geometry.y, attrs.geometry.width, attrs.geometry.height),
        (29, 4, 172, 156)
    );
}

#[test]
fn dropped_decorations_are_rebuilt() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    plugin.create_decorations(&mut c);
    plugin.check_decorations(&mut c);
    assert_eq!(c.dynamic_children(ids::MAP_MINIMAP).len(), 6);

    c.delete_all_children(ids::MAP_MINIMAP);
    plugin.check_decorations(&mut c);
    assert_eq!(c.dynamic_children(ids::MAP_MINIMAP).len(), 6);
}

#[test]
fn inactive_plugin_does_not_rebuild_decorations() {
    let mut c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(HybridConfig::default());
    plugin.check_decorations(&mut c);
    assert!(c.dynamic_children(ids::MAP_MINIMAP).is_empty());
}
