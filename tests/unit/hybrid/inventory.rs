use super::*;
use crate::config::HybridConfig;
use crate::foundation::core::Size;
use crate::host::memory::MemoryClient;
use crate::host::widget::WidgetTreeView;
use crate::hybrid::fixture::classic_client;

fn setup() -> (MemoryClient, HybridPlugin) {
    let c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(HybridConfig::default());
    plugin.shim.engine.activate();
    (c, plugin)
}

#[test]
fn side_panel_takes_fixed_frame() {
    let (mut c, mut plugin) = setup();
    plugin.inventory_bounds_fix(&mut c);

    let panel = c.attributes(ids::SIDE_MENU).unwrap().geometry;
    assert_eq!((panel.width, panel.height), (PANEL_WIDTH, PANEL_HEIGHT));

    let background = c.attributes(ids::SIDE_BACKGROUND).unwrap();
    assert_eq!(background.sprite_id, ids::SPRITE_SIDE_BACKGROUND_FIXED);
    let g = background.geometry;
    assert_eq!((g.x, g.y, g.width, g.height), (28, 37, 190, 261));

    assert!(c.attributes(ids::SIDE_LEFT_COLUMN).unwrap().self_hidden);
    assert!(c.attributes(ids::SIDE_RIGHT_COLUMN).unwrap().self_hidden);
    assert_eq!(c.attributes(ids::SIDE_CONTAINER).unwrap().geometry.x, 28);
    assert_eq!(c.attributes(ids::SIDE_TOP_BAR).unwrap().geometry.y, 298);

    let snapshots = plugin.shim.engine.snapshots();
    for id in [ids::SIDE_MENU, ids::SIDE_TOP, ids::SIDE_BOTTOM] {
        assert_eq!(snapshots.get(id).unwrap().order(), ResetOrder::Last);
    }
    assert_eq!(snapshots.batch(ResetOrder::Normal).len(), 6);
}

#[test]
fn resizable_background_is_swapped_back() {
    let (mut c, mut plugin) = setup();
    plugin.fix_inventory_background(&mut c);
    assert_eq!(
        c.attributes(ids::SIDE_BACKGROUND).unwrap().sprite_id,
        ids::SPRITE_SIDE_BACKGROUND_FIXED
    );
    assert_eq!(
        plugin.shim.engine.snapshot(ids::SIDE_BACKGROUND).unwrap().sprite_id(),
        ids::SPRITE_SIDE_BACKGROUND_RESIZABLE
    );
}

#[test]
fn background_swap_needs_active_shim() {
    let mut c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(HybridConfig::default());
    plugin.fix_inventory_background(&mut c);
    assert_eq!(
        c.attributes(ids::SIDE_BACKGROUND).unwrap().sprite_id,
        ids::SPRITE_SIDE_BACKGROUND_RESIZABLE
    );
}

#[test]
fn reveal_is_not_snapshotted() {
    let (mut c, mut plugin) = setup();
    c.set_self_hidden(ids::SIDE_MENU, true);
    plugin.reveal_inventory(&mut c);
    assert!(!c.attributes(ids::SIDE_MENU).unwrap().self_hidden);
    assert!(plugin.shim.engine.snapshot(ids::SIDE_MENU).is_none());

    let before = c.journal().len();
    plugin.reveal_inventory(&mut c);
    assert_eq!(c.journal().len(), before);
}
