use super::*;

#[test]
fn width_axis_derives_height() {
    let cfg = HybridConfig::default();
    assert_eq!(
        aspect_ratio_size(Size::new(1920.0, 1200.0), &cfg),
        Size::new(1920.0, 1080.0)
    );
}

#[test]
fn height_axis_derives_width_with_integer_division() {
    let cfg = HybridConfig {
        resize_by: ResizeBy::Height,
        aspect_ratio_width: 21,
        aspect_ratio_height: 9,
        ..HybridConfig::default()
    };
    // 21 * 1000 / 9 = 2333.33
    assert_eq!(
        aspect_ratio_size(Size::new(100.0, 1000.0), &cfg),
        Size::new(2333.0, 1000.0)
    );
}

#[test]
fn clamp_respects_host_limits() {
    assert_eq!(clamp_game_size(Size::new(100.0, 100.0)), MIN_GAME_SIZE);
    assert_eq!(clamp_game_size(Size::new(9000.0, 9000.0)), MAX_GAME_SIZE);
    assert_eq!(
        clamp_game_size(Size::new(1280.0, 720.0)),
        Size::new(1280.0, 720.0)
    );
}

#[test]
fn same_size_is_nudged_then_applied_next_tick() {
    use crate::host::events::{ConfigChange, ConfigKey, HostEvent};
    use crate::hybrid::fixture::classic_client;

    let mut c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(HybridConfig {
        aspect_ratio_resize: true,
        ..HybridConfig::default()
    });
    c.set_game_size(Size::new(1200.0, 675.0));

    plugin.handle(&mut c, HostEvent::Config(ConfigChange::Own(ConfigKey::AspectRatioResize)));
    assert_eq!(c.game_size(), Some(Size::new(1201.0, 675.0)));
    assert!(plugin.resize_on_tick);

    plugin.handle(&mut c, HostEvent::GameTick);
    assert_eq!(c.game_size(), Some(Size::new(1200.0, 675.0)));
    assert!(!plugin.resize_on_tick);
}

#[test]
fn disabled_resize_leaves_game_size_alone() {
    use crate::hybrid::fixture::classic_client;

    let mut c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(HybridConfig::default());
    plugin.resize_by_aspect_ratio(&mut c);
    assert_eq!(c.game_size(), None);
}
