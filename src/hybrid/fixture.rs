//! Resizable classic widget tree for [`MemoryClient`].
//!
//! Mirrors the parts of the host's tree the fixups touch, with the host's resizable positions,
//! so the plugin can be driven end to end without a running host.

use crate::foundation::core::Size;
use crate::host::memory::MemoryClient;
use crate::host::widget::{PositionMode, SizeMode, WidgetGeometry, WidgetId};
use crate::hybrid::ids;

use PositionMode::{AbsoluteCenter as Center, AbsoluteEnd as End, AbsoluteStart as Start};

/// Container holding the HUD; the host does not name it.
pub const HUD_PARENT: WidgetId = WidgetId::component(ids::STRETCH, 13);
/// Background row behind the chat buttons, and its sprite.
pub const CHAT_BUTTON_ROW: WidgetId = chatbox(2);
pub const CHAT_BUTTON_ROW_SPRITE: WidgetId = chatbox(3);
/// Chat filter buttons `(button, sprite)`, laid out for the default chat width.
pub const CHAT_BUTTONS: [(WidgetId, WidgetId); 3] = [
    (chatbox(4), chatbox(5)),
    (chatbox(7), chatbox(8)),
    (chatbox(10), chatbox(11)),
];
pub const CHAT_REPORT_ABUSE_SPRITE: WidgetId = chatbox(32);

const fn chatbox(child: u16) -> WidgetId {
    WidgetId::component(ids::CHATBOX, child)
}

fn fill() -> WidgetGeometry {
    WidgetGeometry::absolute(0, 0, 0, 0).with_size_modes(SizeMode::Minus, SizeMode::Minus)
}

fn at(
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    x_mode: PositionMode,
    y_mode: PositionMode,
) -> WidgetGeometry {
    WidgetGeometry::absolute(x, y, width, height).with_position_modes(x_mode, y_mode)
}

/// Logged-in client showing the resizable classic layout on a `canvas` sized canvas.
///
/// The chat background holds the host's single piece and the inventory shows the resizable
/// background sprite.
pub fn classic_client(canvas: Size) -> MemoryClient {
    let mut c = MemoryClient::new(canvas);
    c.insert_root(ids::STRETCH_GAMEFRAME, fill())
        .insert_static(ids::STRETCH_GAMEFRAME, ids::STRETCH_CONTROL, fill());

    let control = ids::STRETCH_CONTROL;
    let (width, height) = (canvas.width as i32, canvas.height as i32);
    let tracker = at(0, 0, width, height, Center, Center);
    c.insert_static(control, ids::VIEWPORT_TRACKER_BACK, tracker)
        .insert_static(control, ids::VIEWPORT, fill().with_position_modes(Start, Center))
        .insert_static(control, HUD_PARENT, at(0, 0, 765, 503, Center, Center))
        .insert_static(
            HUD_PARENT,
            ids::HUD_CONTAINER_FRONT,
            WidgetGeometry::absolute(0, 0, 250, 0)
                .with_size_modes(SizeMode::Minus, SizeMode::Minus),
        )
        .insert_static(ids::HUD_CONTAINER_FRONT, ids::MAINMODAL_BACKGROUNDS, fill())
        .insert_static(
            ids::HUD_CONTAINER_FRONT,
            ids::MAINMODAL,
            at(0, 0, 488, 300, Center, Center),
        );

    insert_chat(&mut c);
    insert_minimap(&mut c);
    insert_side_panel(&mut c);
    c
}

fn insert_chat(c: &mut MemoryClient) {
    let container = ids::CHAT_CONTAINER;
    c.insert_static(ids::STRETCH_CONTROL, container, at(0, 0, 519, 165, Start, End))
        .insert_static(container, ids::CHATAREA, at(0, 0, 519, 142, Start, Start))
        .insert_static(ids::CHATAREA, ids::CHAT_BACKGROUND, fill())
        .insert_static(container, ids::CHAT_CONTROLS, at(0, 0, 519, 23, Start, End))
        .insert_static(ids::CHAT_CONTROLS, CHAT_BUTTON_ROW, at(0, 0, 519, 23, Start, Start))
        .insert_static(
            CHAT_BUTTON_ROW,
            CHAT_BUTTON_ROW_SPRITE,
            at(0, 0, 519, 23, Start, Start),
        );
    c.insert_dynamic(ids::CHAT_BACKGROUND, fill());

    for (i, (button, sprite)) in CHAT_BUTTONS.into_iter().enumerate() {
        let x = 5 + 62 * i as i32;
        c.insert_static(ids::CHAT_CONTROLS, button, at(x, 0, 56, 22, Start, Start))
            .insert_static(button, sprite, at(0, 0, 56, 22, Start, Start));
    }
    c.insert_static(
        ids::CHAT_CONTROLS,
        ids::CHAT_REPORT_ABUSE,
        at(417, 0, 99, 22, Start, Start),
    )
    .insert_static(
        ids::CHAT_REPORT_ABUSE,
        CHAT_REPORT_ABUSE_SPRITE,
        at(0, 0, 99, 22, Start, Start),
    );
}

fn insert_minimap(c: &mut MemoryClient) {
    let map = ids::MAP_CONTAINER;
    c.insert_static(ids::STRETCH_CONTROL, map, at(0, 0, 210, 170, End, Start))
        .insert_static(map, ids::MAP_MINIMAP, fill())
        .insert_static(map, ids::MINIMAP, at(10, 9, 146, 151, End, Start))
        .insert_static(map, ids::MAP_MASK_GRAPHIC, at(4, 1, 172, 156, End, Start))
        .insert_static(map, ids::COMPASS_CLICK, at(156, 1, 36, 36, End, Start))
        .insert_static(map, ids::MAP_COMPASS_GRAPHIC, at(158, 3, 34, 34, End, Start));
    for (i, noclick) in ids::MAP_NOCLICK.into_iter().enumerate() {
        c.insert_static(map, noclick, at(4, 5 + 25 * i as i32, 20, 20, End, Start));
    }

    let orbs = ids::ORBS_CONTAINER;
    c.insert_static(ids::STRETCH_CONTROL, orbs, at(0, 0, 210, 170, End, Start))
        .insert_static(orbs, ids::ORBS_UNIVERSE, fill());
    for (orb, x, y, x_mode) in [
        (ids::XP_DROPS, 0, 0, Start),
        (ids::ORB_HEALTH, 0, 37, Start),
        (ids::ORB_PRAYER, 0, 71, Start),
        (ids::ORB_RUN_ENERGY, 10, 103, Start),
        (ids::ORB_SPEC_ENERGY, 32, 128, Start),
        (ids::ORB_STORE, 85, 83, End),
        (ids::ORB_ACTIVITY_ADVISER, 55, 50, End),
        (ids::ORB_WORLD_MAP, 0, 115, End),
        (ids::WIKI_BANNER, 0, 135, End),
    ] {
        c.insert_static(ids::ORBS_UNIVERSE, orb, at(x, y, 34, 34, x_mode, Start));
    }
}

fn insert_side_panel(c: &mut MemoryClient) {
    let panel = ids::SIDE_MENU;
    c.insert_static(ids::STRETCH_CONTROL, panel, at(0, 0, 241, 336, End, End));
    for (id, geometry) in [
        (ids::SIDE_BACKGROUND, at(0, 37, 204, 261, Start, Start)),
        (ids::SIDE_LEFT_COLUMN, at(0, 37, 3, 261, Start, Start)),
        (ids::SIDE_RIGHT_COLUMN, at(0, 37, 3, 261, End, Start)),
        (ids::SIDE_BOTTOM_BAR, at(0, 0, 241, 37, Start, End)),
        (ids::SIDE_TOP_BAR, at(0, 0, 241, 37, Start, Start)),
        (ids::SIDE_TOP, at(0, 0, 241, 37, Start, Start)),
        (ids::SIDE_BOTTOM, at(0, 0, 241, 37, Start, End)),
        (ids::SIDE_CONTAINER, at(3, 37, 204, 261, Start, Start)),
    ] {
        c.insert_static(panel, id, geometry);
    }
    c.set_sprite(ids::SIDE_BACKGROUND, ids::SPRITE_SIDE_BACKGROUND_RESIZABLE);
}
