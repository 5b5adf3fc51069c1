//! Host widget and sprite identifiers.
//!
//! Every numeric identity the glue touches is listed here, once, under a descriptive name.
//! Groups follow the host's interface numbering; children are the component indices inside them.

use crate::host::widget::WidgetId;

/// Resizable classic top level.
pub const STRETCH: u16 = 161;
/// Minimap orbs interface.
pub const ORBS: u16 = 160;
/// Chatbox interface.
pub const CHATBOX: u16 = 162;
/// Resizable modern top level.
pub const PRE_EOC: u16 = 164;
/// Fixed top level.
pub const FIXED: u16 = 548;
pub const SKILL_GUIDE: u16 = 214;
/// Dialogue option menu.
pub const CHATMENU: u16 = 219;
/// Make-X skilling dialogue.
pub const SKILLMULTI: u16 = 270;
pub const REPORT_ABUSE: u16 = 553;

const fn stretch(child: u16) -> WidgetId {
    WidgetId::component(STRETCH, child)
}

const fn orbs(child: u16) -> WidgetId {
    WidgetId::component(ORBS, child)
}

const fn chatbox(child: u16) -> WidgetId {
    WidgetId::component(CHATBOX, child)
}

// Layout detection roots.
pub const STRETCH_GAMEFRAME: WidgetId = stretch(1);
pub const STRETCH_CONTROL: WidgetId = stretch(2);
pub const PRE_EOC_CONTROL: WidgetId = WidgetId::component(PRE_EOC, 2);
pub const FIXED_UNIVERSE: WidgetId = WidgetId::component(FIXED, 0);

// Viewport and interface containers.
pub const VIEWPORT_TRACKER_BACK: WidgetId = stretch(14);
pub const VIEWPORT: WidgetId = stretch(15);
pub const HUD_CONTAINER_FRONT: WidgetId = stretch(16);
pub const MAINMODAL_BACKGROUNDS: WidgetId = stretch(17);
pub const MAINMODAL: WidgetId = stretch(18);

// Minimap.
pub const MAP_CONTAINER: WidgetId = stretch(22);
/// Parent of the synthetic minimap frame sprites.
pub const MAP_MINIMAP: WidgetId = stretch(23);
pub const MINIMAP: WidgetId = stretch(24);
pub const MAP_COMPASS_GRAPHIC: WidgetId = stretch(25);
pub const MAP_MASK_GRAPHIC: WidgetId = stretch(28);
pub const COMPASS_CLICK: WidgetId = stretch(29);
pub const MAP_NOCLICK: [WidgetId; 6] = [
    stretch(30),
    stretch(31),
    stretch(32),
    stretch(33),
    stretch(34),
    stretch(35),
];
pub const ORBS_CONTAINER: WidgetId = stretch(36);

// Side panel.
pub const SIDE_TOP: WidgetId = stretch(60);
pub const SIDE_BOTTOM: WidgetId = stretch(61);
pub const SIDE_CONTAINER: WidgetId = stretch(70);
/// Inventory panel; also the parent of the synthetic inventory frame sprites.
pub const SIDE_MENU: WidgetId = stretch(73);
pub const SIDE_BACKGROUND: WidgetId = stretch(74);
pub const SIDE_LEFT_COLUMN: WidgetId = stretch(75);
pub const SIDE_RIGHT_COLUMN: WidgetId = stretch(76);
pub const SIDE_BOTTOM_BAR: WidgetId = stretch(77);
pub const SIDE_TOP_BAR: WidgetId = stretch(79);

pub const CHAT_CONTAINER: WidgetId = stretch(96);

// Orbs interface.
pub const ORBS_UNIVERSE: WidgetId = orbs(0);
pub const XP_DROPS: WidgetId = orbs(5);
pub const ORB_HEALTH: WidgetId = orbs(8);
pub const ORB_PRAYER: WidgetId = orbs(19);
pub const ORB_RUN_ENERGY: WidgetId = orbs(27);
pub const ORB_SPEC_ENERGY: WidgetId = orbs(35);
pub const ORB_STORE: WidgetId = orbs(42);
pub const ORB_ACTIVITY_ADVISER: WidgetId = orbs(46);
pub const ORB_WORLD_MAP: WidgetId = orbs(48);
pub const WIKI_BANNER: WidgetId = orbs(49);

// Chatbox.
pub const CHAT_CONTROLS: WidgetId = chatbox(1);
pub const CHAT_REPORT_ABUSE: WidgetId = chatbox(31);
pub const CHATAREA: WidgetId = chatbox(34);
pub const CHAT_BACKGROUND: WidgetId = chatbox(36);

pub const SKILL_GUIDE_UNIVERSE: WidgetId = WidgetId::component(SKILL_GUIDE, 0);
pub const CHATMENU_OPTIONS: WidgetId = WidgetId::component(CHATMENU, 1);
pub const REPORT_ABUSE_GRAPHIC: WidgetId = WidgetId::component(REPORT_ABUSE, 1);
pub const SKILLMULTI_GRAPHIC: WidgetId = WidgetId::component(SKILLMULTI, 1);

// Sprites.
pub const SPRITE_CHATBOX: i32 = 923;
pub const SPRITE_SIDE_BACKGROUND_RESIZABLE: i32 = 897;
pub const SPRITE_SIDE_BACKGROUND_FIXED: i32 = 1031;
pub const SPRITE_SIDE_BOTTOM_BAR_FIXED: i32 = 1032;
pub const SPRITE_SIDE_TOP_BAR_FIXED: i32 = 1036;
/// Synthetic chat background pieces: full image, left edge, right edge.
pub const SPRITE_CHAT_MIDDLE: i32 = -8001;
pub const SPRITE_CHAT_LEFT: i32 = -8002;
pub const SPRITE_CHAT_RIGHT: i32 = -8003;
