use crate::config::{HybridConfig, ResizeBy};
use crate::foundation::core::Size;
use crate::host::widget::Client;
use crate::hybrid::ids;
use crate::hybrid::plugin::HybridPlugin;

/// Smallest game size the host accepts (the fixed layout's size).
pub const MIN_GAME_SIZE: Size = Size::new(765.0, 503.0);
/// Largest game size the host accepts.
pub const MAX_GAME_SIZE: Size = Size::new(7680.0, 2160.0);

/// Window size with the configured aspect ratio, keeping the configured axis of `stretched`.
pub fn aspect_ratio_size(stretched: Size, config: &HybridConfig) -> Size {
    let w = stretched.width as i64;
    let h = stretched.height as i64;
    let aw = i64::from(config.aspect_ratio_width.max(1));
    let ah = i64::from(config.aspect_ratio_height.max(1));
    match config.resize_by {
        ResizeBy::Width => Size::new(w as f64, (ah * w / aw) as f64),
        ResizeBy::Height => Size::new((aw * h / ah) as f64, h as f64),
    }
}

/// Clamp a requested game size to what the host accepts.
pub fn clamp_game_size(size: Size) -> Size {
    Size::new(
        size.width.min(MAX_GAME_SIZE.width).max(MIN_GAME_SIZE.width),
        size.height.min(MAX_GAME_SIZE.height).max(MIN_GAME_SIZE.height),
    )
}

impl HybridPlugin {
    /// Resize the game window to the configured aspect ratio.
    ///
    /// Setting the size it already has does not make the host lay out again, so in that case
    /// the width is nudged by one pixel and the real size is applied on the next game tick.
    pub(crate) fn resize_by_aspect_ratio<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.config.aspect_ratio_resize {
            return;
        }
        if !client.is_visible(ids::STRETCH_GAMEFRAME) {
            return;
        }
        client.revalidate(ids::STRETCH_GAMEFRAME);

        let target = clamp_game_size(aspect_ratio_size(client.stretched_size(), &self.config));
        if client.game_size() == Some(target) {
            client.set_game_size(Size::new(target.width + 1.0, target.height));
            self.resize_on_tick = true;
        } else {
            client.set_game_size(target);
        }
        tracing::debug!(width = target.width, height = target.height, "aspect ratio resize");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hybrid/aspect.rs"]
mod tests;
