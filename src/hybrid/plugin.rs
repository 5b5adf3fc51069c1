use crate::config::HybridConfig;
use crate::host::events::{
    ConfigChange, ConfigKey, HostEvent, ScriptEvent, VarbitEvent, has_modal_background,
};
use crate::host::retry::RetryQueue;
use crate::host::widget::Client;
use crate::hybrid::chat::ChatState;
use crate::hybrid::ids;
use crate::hybrid::layout::ClientLayout;
use crate::render::bitmap::Bitmap;
use crate::shim::{LayoutShim, ResetReport};

/// Fixup run on the next before-render, once the host has laid out a freshly opened interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingFixup {
    SkillGuide,
    ModalBackground,
}

/// Work retried on every client tick until it completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Initialize once the layout is known.
    Initialize,
    /// Re-apply wide chat after the host finished its own chat update.
    ChatRefresh,
}

/// Layout controller: reacts to host events and keeps the resizable classic layout skinned.
///
/// All entry points run on the host's mutation thread and take the client by `&mut`.
#[derive(Debug)]
pub struct HybridPlugin {
    pub(crate) config: HybridConfig,
    pub(crate) shim: LayoutShim,
    pub(crate) chat: ChatState,
    pub(crate) resize_on_tick: bool,
    pub(crate) modal_background_loaded: bool,
    pub(crate) default_chatbox: Option<Bitmap>,
    pending: Vec<PendingFixup>,
    deferred: RetryQueue<Deferred>,
    overlay_visible: bool,
}

impl HybridPlugin {
    pub fn new(config: HybridConfig) -> Self {
        Self {
            config,
            shim: LayoutShim::new(ids::VIEWPORT),
            chat: ChatState::default(),
            resize_on_tick: false,
            modal_background_loaded: false,
            default_chatbox: None,
            pending: Vec::new(),
            deferred: RetryQueue::new(),
            overlay_visible: false,
        }
    }

    /// Chatbox image used when no sprite override replaces the host's own.
    pub fn with_default_chatbox(mut self, chatbox: Bitmap) -> Self {
        self.default_chatbox = Some(chatbox);
        self
    }

    pub fn config(&self) -> &HybridConfig {
        &self.config
    }

    /// Replace the configuration. Follow with a [`HostEvent::Config`] to apply it.
    pub fn set_config(&mut self, config: HybridConfig) {
        self.config = config;
    }

    pub fn shim(&self) -> &LayoutShim {
        &self.shim
    }

    pub fn chat(&self) -> ChatState {
        self.chat
    }

    /// `true` while the side column overlay should be drawn.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn is_active(&self) -> bool {
        self.shim.is_active()
    }

    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    pub(crate) fn is_classic<C: Client + ?Sized>(&self, client: &C) -> bool {
        ClientLayout::detect(client) == ClientLayout::ResizableClassic
    }

    pub fn handle<C: Client + ?Sized>(&mut self, client: &mut C, event: HostEvent) {
        match event {
            HostEvent::Startup => {
                tracing::info!("fixed hybrid layout started");
                if client.is_logged_in() {
                    self.queue_initialization();
                }
            }
            HostEvent::Shutdown => {
                tracing::info!("fixed hybrid layout stopped");
                self.reset(client);
                self.deferred.clear();
            }
            HostEvent::ClientTick => self.run_deferred(client),
            HostEvent::GameTick => {
                if self.resize_on_tick {
                    self.resize_by_aspect_ratio(client);
                    self.resize_on_tick = false;
                }
            }
            HostEvent::BeforeRender => self.before_render(client),
            HostEvent::Script(script) => self.on_script(client, script),
            HostEvent::Varbit(varbit) => self.on_varbit(varbit),
            HostEvent::Config(change) => self.on_config(client, change),
            HostEvent::WidgetLoaded { group } => {
                if has_modal_background(group) {
                    self.modal_background_loaded = true;
                    self.pending.push(PendingFixup::ModalBackground);
                }
            }
            HostEvent::WidgetClosed { group, unload } => {
                if has_modal_background(group) && unload {
                    self.modal_background_loaded = false;
                }
            }
            HostEvent::LoggedOut => {
                self.reset(client);
            }
        }
    }

    /// Undo every change and hide the overlay.
    pub fn reset<C: Client + ?Sized>(&mut self, client: &mut C) -> ResetReport {
        self.overlay_visible = false;
        self.pending.clear();
        crate::shim::reset(&mut self.shim, client)
    }

    fn queue_initialization(&mut self) {
        self.deferred.push_unique(Deferred::Initialize);
    }

    fn run_deferred<C: Client + ?Sized>(&mut self, client: &mut C) {
        let mut queue = std::mem::take(&mut self.deferred);
        queue.run(|task| self.attempt(client, *task));
        queue.append(&mut self.deferred);
        self.deferred = queue;
    }

    fn attempt<C: Client + ?Sized>(&mut self, client: &mut C, task: Deferred) -> bool {
        match task {
            Deferred::Initialize => {
                let layout = ClientLayout::detect(client);
                if !layout.is_known() {
                    return false;
                }
                if layout == ClientLayout::ResizableClassic {
                    self.initialize(client);
                }
                true
            }
            Deferred::ChatRefresh => {
                self.chatbox_changed(client);
                self.widen_chat(client);
                true
            }
        }
    }

    fn initialize<C: Client + ?Sized>(&mut self, client: &mut C) {
        if self.shim.is_active() {
            return;
        }
        tracing::debug!("initializing fixed hybrid layout");
        self.shim.engine.activate();
        self.overlay_visible = true;
        self.resize_viewport(client);
        self.resize_by_aspect_ratio(client);
        self.fix_interface_dimensions(client);
        self.reposition_minimap(client);
        self.create_decorations(client);
        if self.config.wide_chatbox {
            self.widen_chat(client);
            self.setup_wide_chatbox(client);
        }
    }

    fn before_render<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.shim.is_active() {
            return;
        }
        self.fix_ingame_overlay(client);
        if self.pending.is_empty() {
            return;
        }
        tracing::debug!(count = self.pending.len(), "running pending fixups");
        for fixup in std::mem::take(&mut self.pending) {
            match fixup {
                PendingFixup::SkillGuide => self.fix_skill_guide(client),
                PendingFixup::ModalBackground => self.run_modal_background_fix(client),
            }
        }
    }

    fn on_script<C: Client + ?Sized>(&mut self, client: &mut C, script: ScriptEvent) {
        match script {
            ScriptEvent::InterfaceBoxesRecalculated => self.fix_interface_dimensions(client),
            ScriptEvent::SkillGuideOpened => self.pending.push(PendingFixup::SkillGuide),
            ScriptEvent::WindowResized => {
                if self.shim.is_active() && self.config.wide_chatbox && self.is_classic(client) {
                    self.chatbox_changed(client);
                    self.widen_chat(client);
                }
            }
            ScriptEvent::OrbsRepositioned => {
                self.fix_edge_orbs(client);
                self.fix_interface_dimensions(client);
                self.reposition_minimap(client);
            }
            ScriptEvent::InventoryBackgroundChanged => {
                self.check_decorations(client);
                self.fix_inventory_background(client);
                if self.chat.cutscene_active {
                    self.reveal_inventory(client);
                }
            }
            ScriptEvent::LayoutModeChanged => {
                if self.is_classic(client) {
                    self.queue_initialization();
                } else {
                    self.reset(client);
                }
            }
            ScriptEvent::ChatboxToggled => {
                if self.shim.is_active() && self.config.wide_chatbox {
                    self.chatbox_changed(client);
                    self.widen_chat(client);
                    if self.modal_background_loaded {
                        self.run_modal_background_fix(client);
                    }
                }
            }
            ScriptEvent::PartyOrbsUpdated => self.fix_ingame_overlay(client),
        }
    }

    fn on_varbit(&mut self, varbit: VarbitEvent) {
        match varbit {
            VarbitEvent::Cutscene(active) => {
                self.chat.cutscene_active = active;
                self.deferred.push_unique(Deferred::ChatRefresh);
            }
            VarbitEvent::TransparentChatbox(transparent) => {
                self.chat.transparent = transparent;
                if transparent {
                    self.config.chatbox_viewport_centering = false;
                }
            }
        }
    }

    fn on_config<C: Client + ?Sized>(&mut self, client: &mut C, change: ConfigChange) {
        match change {
            ConfigChange::Own(ConfigKey::AspectRatioResize) if self.config.aspect_ratio_resize => {
                self.resize_by_aspect_ratio(client);
            }
            ConfigChange::Own(ConfigKey::ChatboxViewportCentering) if self.chat.transparent => {
                self.config.chatbox_viewport_centering = false;
            }
            ConfigChange::Own(_) | ConfigChange::Restyle => {
                self.reset(client);
                self.queue_initialization();
            }
        }
    }

    fn run_modal_background_fix<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.shim.is_active() {
            return;
        }
        if let Err(err) = self.fix_modal_background(client) {
            tracing::debug!(%err, "modal background left untouched");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hybrid/plugin.rs"]
mod tests;
