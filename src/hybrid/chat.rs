use crate::host::widget::{
    ChildSpec, Client, PositionMode, SizeMode, WidgetGeometry, WidgetKind, WidgetPatch,
};
use crate::hybrid::ids;
use crate::hybrid::plugin::HybridPlugin;
use crate::overlay::COLUMN_WIDTH;
use crate::shim::{ChildLifetime, ResetOrder};

/// Height of the chat button row at the bottom of the chatbox.
pub const CHAT_BUTTONS_HEIGHT: i32 = 23;
/// Chatbox width the host lays the button row out for.
pub const DEFAULT_CHAT_WIDTH: i32 = 519;
/// Width of the left and right chat background pieces.
pub const CHAT_EDGE_WIDTH: u32 = 30;
/// Viewport height added above an open chatbox when centering over it.
const CHAT_OPEN_HEIGHT: i32 = 165;

/// Chat-related host state tracked from varbits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub cutscene_active: bool,
    /// The host's transparent chatbox setting.
    pub transparent: bool,
}

impl ChatState {
    /// Room kept below the viewport for the chat buttons; none when the chatbox is transparent.
    pub fn viewport_offset(&self) -> i32 {
        if self.transparent {
            0
        } else {
            CHAT_BUTTONS_HEIGHT
        }
    }
}

/// Width of the stretched middle chat background piece for a canvas `canvas_width` wide.
pub fn chat_middle_width(canvas_width: f64) -> i32 {
    let chat_width = canvas_width - f64::from(COLUMN_WIDTH);
    (579.0 / 519.0 * chat_width - 60.0).ceil() as i32
}

/// `(x, width)` of a chat button laid out for [`DEFAULT_CHAT_WIDTH`], in a row `chat_width` wide.
pub fn chat_button_layout(chat_width: i32, x: i32, width: i32, centered: bool) -> (i32, i32) {
    if centered {
        ((chat_width - DEFAULT_CHAT_WIDTH) / 2 + x, width)
    } else {
        (
            chat_width * x / DEFAULT_CHAT_WIDTH,
            chat_width * width / DEFAULT_CHAT_WIDTH,
        )
    }
}

impl HybridPlugin {
    pub(crate) fn is_chatbox_open<C: Client + ?Sized>(&self, client: &C) -> bool {
        let Some(frame) = client.attributes(ids::CHATAREA) else {
            return false;
        };
        if self.chat.cutscene_active {
            return !client.dynamic_children(ids::CHAT_BACKGROUND).is_empty() && !frame.hidden;
        }
        !frame.hidden
    }

    /// Re-center the viewport above the chatbox after it opened, closed or the window resized.
    pub(crate) fn chatbox_changed<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.config.wide_chatbox || !self.shim.is_active() || !self.is_classic(client) {
            return;
        }
        let viewport = self.shim.viewport();
        let Some(chat_container) = client.attributes(ids::CHAT_CONTAINER) else {
            return;
        };
        if !client.exists(viewport) || !client.exists(ids::CHATAREA) {
            return;
        }

        let base = if self.is_chatbox_open(client) && self.config.chatbox_viewport_centering {
            CHAT_OPEN_HEIGHT
        } else {
            self.chat.viewport_offset()
        };
        let patch = WidgetPatch::new()
            .with_height(base + chat_container.geometry.y)
            .with_y_mode(PositionMode::AbsoluteStart);
        client.apply_patch(viewport, &patch);
        client.revalidate(viewport);

        let pieces = client.dynamic_children(ids::CHAT_BACKGROUND);
        match pieces.as_slice() {
            [] if !client.exists(ids::CHAT_BACKGROUND) => {}
            [_] => self.setup_wide_chatbox(client),
            [_, middle, _, _] => {
                let width = chat_middle_width(client.canvas_size().width);
                client.apply_patch(*middle, &WidgetPatch::new().with_width(width));
            }
            other => {
                tracing::debug!(
                    pieces = other.len(),
                    "chat background has an unexpected number of pieces"
                );
            }
        }

        self.fix_interface_dimensions(client);
    }

    /// Stretch the chatbox across everything left of the side column.
    pub(crate) fn widen_chat<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.config.wide_chatbox || !self.shim.is_active() || !self.is_classic(client) {
            return;
        }
        let Some(canvas) = client.size(ids::STRETCH_CONTROL) else {
            return;
        };
        let width = canvas.width as i32 - COLUMN_WIDTH as i32;
        let engine = &mut self.shim.engine;

        let container = WidgetPatch::new()
            .with_width(width)
            .with_x(0)
            .with_x_mode(PositionMode::AbsoluteStart);
        engine.apply(client, ids::CHAT_CONTAINER, &container, ResetOrder::Normal);
        engine.apply(
            client,
            ids::CHATAREA,
            &WidgetPatch::new().with_width(width),
            ResetOrder::Normal,
        );

        let options = WidgetPatch::new()
            .with_x(0)
            .with_x_mode(PositionMode::AbsoluteCenter);
        if engine.apply_without_layout(client, ids::CHATMENU_OPTIONS, &options, ResetOrder::Normal)
            && let Some(parent) = client.parent(ids::CHATMENU_OPTIONS)
        {
            client.revalidate(parent);
        }

        for sprite in [ids::REPORT_ABUSE_GRAPHIC, ids::SKILLMULTI_GRAPHIC] {
            engine.apply_without_layout(
                client,
                sprite,
                &WidgetPatch::new().with_hidden(true),
                ResetOrder::Normal,
            );
        }

        self.position_chatbox_buttons(client);
    }

    /// Stretch (or center) the chat button row to the widened chatbox.
    pub(crate) fn position_chatbox_buttons<C: Client + ?Sized>(&mut self, client: &mut C) {
        let controls = ids::CHAT_CONTROLS;
        let stretch = WidgetPatch::new()
            .with_width(0)
            .with_width_mode(SizeMode::Minus);
        if !self
            .shim
            .engine
            .apply(client, controls, &stretch, ResetOrder::Normal)
        {
            return;
        }

        if self.chat.cutscene_active
            && client.attributes(controls).is_some_and(|a| a.self_hidden)
            && client
                .attributes(ids::CHAT_CONTAINER)
                .is_some_and(|a| a.geometry.y == 0)
        {
            client.apply_patch(controls, &WidgetPatch::new().with_hidden(false));
        }

        let Some(row) = client.size(controls) else {
            return;
        };
        let chat_width = row.width as i32;
        let report_present = client.exists(ids::CHAT_REPORT_ABUSE);
        let centered = self.config.center_chatbox_buttons;
        let engine = &mut self.shim.engine;

        for (i, button) in client.static_children(controls).into_iter().enumerate() {
            let underlay = client.static_children(button).first().copied();
            if i == 0 {
                // The first child holds the sprite behind the whole row.
                if let Some(background) = underlay {
                    engine.apply(client, background, &stretch, ResetOrder::Normal);
                }
                continue;
            }

            engine.capture(&*client, button, ResetOrder::Normal);
            let Some(original) = engine.snapshot(button).copied() else {
                continue;
            };
            let (x, width) =
                chat_button_layout(chat_width, original.x(), original.width(), centered);
            engine.apply_without_layout(
                client,
                button,
                &WidgetPatch::new().with_x(x).with_width(width),
                ResetOrder::Normal,
            );
            if let Some(sprite) = underlay
                && report_present
                && button != ids::CHAT_REPORT_ABUSE
            {
                engine.apply_without_layout(
                    client,
                    sprite,
                    &WidgetPatch::new().with_width(width),
                    ResetOrder::Normal,
                );
            }
            client.revalidate(button);
        }
    }

    /// Register the three chat background sprites and build the pieces that use them.
    pub(crate) fn setup_wide_chatbox<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.config.wide_chatbox || !self.shim.is_active() {
            return;
        }
        self.setup_chatbox_sprites(client);
        self.create_chat_background(client);
    }

    /// Split the chatbox image into left edge, right edge and full pieces, and override the
    /// synthetic sprite ids with them.
    fn setup_chatbox_sprites<C: Client + ?Sized>(&mut self, client: &mut C) {
        let Some(chatbox) = client
            .sprite_override(ids::SPRITE_CHATBOX)
            .or_else(|| self.default_chatbox.clone())
        else {
            tracing::warn!("no chatbox image available, wide chat background skipped");
            return;
        };
        if chatbox.width() < CHAT_EDGE_WIDTH {
            tracing::warn!(width = chatbox.width(), "chatbox image narrower than its edges");
            return;
        }
        let height = chatbox.height();
        let left = chatbox.crop(0, 0, CHAT_EDGE_WIDTH, height);
        let right = chatbox.crop(chatbox.width() - CHAT_EDGE_WIDTH, 0, CHAT_EDGE_WIDTH, height);

        for sprite in [ids::SPRITE_CHAT_MIDDLE, ids::SPRITE_CHAT_LEFT, ids::SPRITE_CHAT_RIGHT] {
            client.remove_sprite_override(sprite);
        }
        client.reset_sprite_cache();
        client.set_sprite_override(ids::SPRITE_CHAT_MIDDLE, chatbox);
        client.set_sprite_override(ids::SPRITE_CHAT_LEFT, left);
        client.set_sprite_override(ids::SPRITE_CHAT_RIGHT, right);
        for sprite in [ids::SPRITE_CHAT_MIDDLE, ids::SPRITE_CHAT_LEFT, ids::SPRITE_CHAT_RIGHT] {
            self.shim.register_sprite_override(sprite);
        }
        client.reset_sprite_cache();
    }

    /// Add middle, left and right background pieces next to the host's single chat background.
    fn create_chat_background<C: Client + ?Sized>(&mut self, client: &mut C) {
        let parent = ids::CHAT_BACKGROUND;
        let Some(canvas) = client.size(ids::STRETCH_CONTROL) else {
            return;
        };
        if !client.exists(ids::CHAT_CONTROLS) {
            return;
        }
        let Some(frame) = client.attributes(ids::CHATAREA) else {
            return;
        };
        if frame.hidden || client.dynamic_children(parent).len() != 1 {
            return;
        }

        let edge = CHAT_EDGE_WIDTH as i32;
        let pieces = [
            (
                ids::SPRITE_CHAT_MIDDLE,
                chat_middle_width(canvas.width),
                PositionMode::AbsoluteCenter,
            ),
            (ids::SPRITE_CHAT_LEFT, edge, PositionMode::AbsoluteStart),
            (ids::SPRITE_CHAT_RIGHT, edge, PositionMode::AbsoluteEnd),
        ];
        for (sprite_id, width, x_mode) in pieces {
            let spec = ChildSpec {
                kind: WidgetKind::Graphic,
                sprite_id,
                geometry: WidgetGeometry::absolute(0, 0, width, 0)
                    .with_position_modes(x_mode, PositionMode::AbsoluteStart)
                    .with_size_modes(SizeMode::Absolute, SizeMode::Minus),
            };
            self.shim
                .create_child(client, parent, &spec, ChildLifetime::HostManaged);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hybrid/chat.rs"]
mod tests;
