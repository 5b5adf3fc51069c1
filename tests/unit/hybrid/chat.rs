use super::*;
use crate::config::HybridConfig;
use crate::foundation::core::Size;
use crate::host::memory::MemoryClient;
use crate::host::widget::{WidgetTree, WidgetTreeView};
use crate::hybrid::fixture::{CHAT_BUTTONS, CHAT_BUTTON_ROW_SPRITE, CHAT_REPORT_ABUSE_SPRITE, classic_client};
use crate::render::bitmap::Bitmap;

fn wide() -> HybridConfig {
    HybridConfig {
        wide_chatbox: true,
        ..HybridConfig::default()
    }
}

fn setup(config: HybridConfig) -> (MemoryClient, HybridPlugin) {
    let c = classic_client(Size::new(1200.0, 800.0));
    let mut plugin = HybridPlugin::new(config);
    plugin.shim.engine.activate();
    (c, plugin)
}

fn x_width(c: &MemoryClient, id: crate::host::widget::WidgetId) -> (i32, i32) {
    let g = c.attributes(id).unwrap().geometry;
    (g.x, g.width)
}

#[test]
fn middle_piece_fills_the_chat_width() {
    // 579 / 519 * 951 - 60 = 1000.94
    assert_eq!(chat_middle_width(1200.0), 1001);
    assert_eq!(chat_middle_width(1400.0), 1225);
}

#[test]
fn buttons_scale_or_center() {
    assert_eq!(chat_button_layout(951, 5, 56, false), (9, 102));
    assert_eq!(chat_button_layout(951, 5, 56, true), (221, 56));
    assert_eq!(chat_button_layout(519, 67, 56, false), (67, 56));
}

#[test]
fn transparent_chatbox_keeps_no_button_room() {
    let mut chat = ChatState::default();
    assert_eq!(chat.viewport_offset(), CHAT_BUTTONS_HEIGHT);
    chat.transparent = true;
    assert_eq!(chat.viewport_offset(), 0);
}

#[test]
fn chatbox_open_state() {
    let (mut c, mut plugin) = setup(wide());
    assert!(plugin.is_chatbox_open(&c));

    // During a cutscene the background pieces must exist too.
    plugin.chat.cutscene_active = true;
    assert!(plugin.is_chatbox_open(&c));
    c.delete_all_children(ids::CHAT_BACKGROUND);
    assert!(!plugin.is_chatbox_open(&c));

    plugin.chat.cutscene_active = false;
    c.set_self_hidden(ids::CHATAREA, true);
    assert!(!plugin.is_chatbox_open(&c));
}

#[test]
fn widened_chat_spans_everything_left_of_the_column() {
    let (mut c, mut plugin) = setup(wide());
    plugin.widen_chat(&mut c);

    let container = c.attributes(ids::CHAT_CONTAINER).unwrap().geometry;
    assert_eq!((container.x, container.width), (0, 951));
    assert_eq!(container.x_mode, PositionMode::AbsoluteStart);
    assert_eq!(x_width(&c, ids::CHATAREA).1, 951);

    let controls = c.attributes(ids::CHAT_CONTROLS).unwrap().geometry;
    assert_eq!((controls.width, controls.width_mode), (0, SizeMode::Minus));
    assert_eq!(c.size(ids::CHAT_CONTROLS).unwrap().width, 951.0);
    let row = c.attributes(CHAT_BUTTON_ROW_SPRITE).unwrap().geometry;
    assert_eq!((row.width, row.width_mode), (0, SizeMode::Minus));

    let (first, first_sprite) = CHAT_BUTTONS[0];
    assert_eq!(x_width(&c, first), (9, 102));
    assert_eq!(x_width(&c, first_sprite).1, 102);
    // 951 * 417 / 519, 951 * 99 / 519
    assert_eq!(x_width(&c, ids::CHAT_REPORT_ABUSE), (764, 181));
    assert_eq!(x_width(&c, CHAT_REPORT_ABUSE_SPRITE).1, 99);
}

#[test]
fn repeated_widening_starts_from_original_positions() {
    let (mut c, mut plugin) = setup(wide());
    plugin.widen_chat(&mut c);
    plugin.widen_chat(&mut c);
    assert_eq!(x_width(&c, CHAT_BUTTONS[1].0), (122, 102));
}

#[test]
fn centered_buttons_keep_their_width() {
    let (mut c, mut plugin) = setup(HybridConfig {
        center_chatbox_buttons: true,
        ..wide()
    });
    plugin.widen_chat(&mut c);
    assert_eq!(x_width(&c, CHAT_BUTTONS[0].0), (221, 56));
}

#[test]
fn narrow_chat_is_left_alone() {
    let (mut c, mut plugin) = setup(HybridConfig::default());
    plugin.widen_chat(&mut c);
    assert_eq!(x_width(&c, ids::CHAT_CONTAINER), (0, 519));
    assert!(plugin.shim.engine.snapshots().is_empty());
}

#[test]
fn single_background_piece_grows_to_four() {
    let (mut c, mut plugin) = setup(wide());
    plugin.chatbox_changed(&mut c);

    let pieces = c.dynamic_children(ids::CHAT_BACKGROUND);
    assert_eq!(pieces.len(), 4);
    let middle = c.attributes(pieces[1]).unwrap();
    assert_eq!(middle.sprite_id, ids::SPRITE_CHAT_MIDDLE);
    assert_eq!(middle.geometry.width, 1001);
    assert_eq!(middle.geometry.x_mode, PositionMode::AbsoluteCenter);
    let right = c.attributes(pieces[3]).unwrap().geometry;
    assert_eq!((right.width, right.x_mode), (30, PositionMode::AbsoluteEnd));

    // Host-managed pieces survive reset.
    assert_eq!(plugin.shim.synthetic_parents().count(), 0);
}

#[test]
fn resize_updates_the_middle_piece() {
    let (mut c, mut plugin) = setup(wide());
    plugin.chatbox_changed(&mut c);
    c.set_canvas_size(Size::new(1400.0, 800.0));
    plugin.chatbox_changed(&mut c);

    let pieces = c.dynamic_children(ids::CHAT_BACKGROUND);
    assert_eq!(pieces.len(), 4);
    assert_eq!(c.attributes(pieces[1]).unwrap().geometry.width, 1225);
}

#[test]
fn viewport_leaves_room_for_the_chat() {
    let (mut c, mut plugin) = setup(wide());
    plugin.chatbox_changed(&mut c);
    let viewport = c.attributes(ids::VIEWPORT).unwrap().geometry;
    assert_eq!((viewport.height, viewport.y_mode), (23, PositionMode::AbsoluteStart));

    plugin.config.chatbox_viewport_centering = true;
    plugin.chatbox_changed(&mut c);
    assert_eq!(c.attributes(ids::VIEWPORT).unwrap().geometry.height, 165);
    assert!(plugin.shim.engine.snapshot(ids::VIEWPORT).is_none());
}

#[test]
fn chatbox_image_is_split_into_sprite_overrides() {
    let (mut c, plugin) = setup(wide());
    let mut plugin = plugin.with_default_chatbox(Bitmap::new(519, 142));
    plugin.setup_wide_chatbox(&mut c);

    assert_eq!(
        c.overridden_sprites(),
        vec![ids::SPRITE_CHAT_RIGHT, ids::SPRITE_CHAT_LEFT, ids::SPRITE_CHAT_MIDDLE]
    );
    let left = c.sprite_override(ids::SPRITE_CHAT_LEFT).unwrap();
    assert_eq!((left.width(), left.height()), (CHAT_EDGE_WIDTH, 142));
    assert_eq!(plugin.shim.sprite_overrides().count(), 3);
    assert_eq!(c.sprite_cache_resets(), 2);
}

#[test]
fn host_chatbox_override_wins_over_default() {
    let (mut c, plugin) = setup(wide());
    let mut plugin = plugin.with_default_chatbox(Bitmap::new(519, 142));
    c.set_sprite_override(ids::SPRITE_CHATBOX, Bitmap::new(600, 150));
    plugin.setup_wide_chatbox(&mut c);
    assert_eq!(c.sprite_override(ids::SPRITE_CHAT_MIDDLE).unwrap().width(), 600);
}

#[test]
fn missing_chatbox_image_skips_overrides_only() {
    let (mut c, mut plugin) = setup(wide());
    plugin.setup_wide_chatbox(&mut c);
    assert!(c.overridden_sprites().is_empty());
    assert_eq!(c.dynamic_children(ids::CHAT_BACKGROUND).len(), 4);
}
