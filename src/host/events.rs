//! Named host notifications.
//!
//! The host reports script firings, varbit changes and configuration changes with opaque numeric
//! or string identifiers. They are translated here, once, into named events; everything past this
//! module matches on names.

/// Scripts whose completion requires a fixup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptEvent {
    /// The game interface mode switched (fixed / resizable classic / resizable modern).
    LayoutModeChanged,
    /// The side panel background sprite was reset by the host.
    InventoryBackgroundChanged,
    /// The client window was resized.
    WindowResized,
    /// Interface bounding boxes (bank, settings, ...) were recalculated.
    InterfaceBoxesRecalculated,
    /// The skill guide interface opened.
    SkillGuideOpened,
    /// The right-aligned minimap orbs were repositioned.
    OrbsRepositioned,
    /// The chatbox opened or closed.
    ChatboxToggled,
    /// Party orbs were redrawn.
    PartyOrbsUpdated,
}

const SCRIPT_TABLE: &[(i32, ScriptEvent)] = &[
    (901, ScriptEvent::LayoutModeChanged),
    (902, ScriptEvent::InventoryBackgroundChanged),
    (904, ScriptEvent::WindowResized),
    (909, ScriptEvent::InterfaceBoxesRecalculated),
    (654, ScriptEvent::SkillGuideOpened),
    (1699, ScriptEvent::OrbsRepositioned),
    (3305, ScriptEvent::OrbsRepositioned),
    (175, ScriptEvent::ChatboxToggled),
    (178, ScriptEvent::ChatboxToggled),
    (299, ScriptEvent::ChatboxToggled),
    (677, ScriptEvent::ChatboxToggled),
    (4731, ScriptEvent::PartyOrbsUpdated),
];

impl ScriptEvent {
    /// Translate a host script id. Unknown ids are not interesting and map to `None`.
    pub fn from_script_id(script_id: i32) -> Option<Self> {
        SCRIPT_TABLE
            .iter()
            .find(|(id, _)| *id == script_id)
            .map(|(_, event)| *event)
    }
}

const VARBIT_CUTSCENE: i32 = 542;
const VARBIT_TRANSPARENT_CHATBOX: i32 = 4608;

/// Varbit changes the crate reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarbitEvent {
    /// A cutscene started (`true`) or ended.
    Cutscene(bool),
    /// The transparent chatbox setting was enabled (`true`) or disabled. Other values are ignored.
    TransparentChatbox(bool),
}

impl VarbitEvent {
    pub fn from_varbit(varbit_id: i32, value: i32) -> Option<Self> {
        match (varbit_id, value) {
            (VARBIT_CUTSCENE, v) => Some(Self::Cutscene(v == 1)),
            (VARBIT_TRANSPARENT_CHATBOX, 1) => Some(Self::TransparentChatbox(true)),
            (VARBIT_TRANSPARENT_CHATBOX, 0) => Some(Self::TransparentChatbox(false)),
            _ => None,
        }
    }
}

/// Configuration group owned by this crate.
pub const CONFIG_GROUP: &str = "fixedresizablehybrid";

/// Keys of [`CONFIG_GROUP`] with dedicated handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    AspectRatioResize,
    ChatboxViewportCentering,
    /// Any other key: the layout is rebuilt from scratch.
    Other,
}

/// A configuration change relevant to the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigChange {
    /// A key of this crate's own group changed.
    Own(ConfigKey),
    /// Another plugin that restyles the same widgets changed (interface styles, resource packs).
    Restyle,
}

impl ConfigChange {
    /// Classify a `(group, key)` pair. Irrelevant changes map to `None`.
    pub fn classify(group: &str, key: &str) -> Option<Self> {
        match group {
            CONFIG_GROUP => Some(Self::Own(match key {
                "aspectRatioResize" => ConfigKey::AspectRatioResize,
                "chatboxViewportCentering" => ConfigKey::ChatboxViewportCentering,
                _ => ConfigKey::Other,
            })),
            "interfaceStyles" | "resourcepacks" => Some(Self::Restyle),
            "runelite" if key == "interfacestylesplugin" => Some(Self::Restyle),
            _ => None,
        }
    }
}

/// Interface groups that draw a four-piece modal background.
const MODAL_BACKGROUND_GROUPS: &[u16] = &[
    398, // fairy ring
    416, // canoe selection
    647, // canoe destination
    224, // boat travel
];

/// Return `true` when interface `group` draws a four-piece modal background.
pub fn has_modal_background(group: u16) -> bool {
    MODAL_BACKGROUND_GROUPS.contains(&group)
}

/// Lifecycle notification delivered to the plugin on the mutation thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// The plugin was enabled.
    Startup,
    /// The plugin is being disabled.
    Shutdown,
    /// One mutation-thread cycle elapsed; deferred work is retried.
    ClientTick,
    /// One game tick elapsed.
    GameTick,
    /// The host is about to render a frame.
    BeforeRender,
    Script(ScriptEvent),
    Varbit(VarbitEvent),
    Config(ConfigChange),
    /// An interface group was loaded.
    WidgetLoaded { group: u16 },
    /// An interface group was closed (`unload` when its widgets were destroyed).
    WidgetClosed { group: u16, unload: bool },
    /// The player logged out or hopped worlds.
    LoggedOut,
}

#[cfg(test)]
#[path = "../../tests/unit/host/events.rs"]
mod tests;
