//! User configuration.
//!
//! Loaded from JSON with camelCase keys; every key is optional and falls back to
//! [`HybridConfig::default`].

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{HybridError, HybridResult};

/// What fills the side column behind the minimap and inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundMode {
    SolidColor,
    #[default]
    TiledStone,
    TiledCustomImage,
}

/// Axis kept when resizing the window to the configured aspect ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeBy {
    /// Keep the width, derive the height.
    #[default]
    Width,
    /// Keep the height, derive the width.
    Height,
}

/// Placement of the run energy and special attack orbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrbsPosition {
    /// Same coordinates as the fixed layout.
    #[default]
    FixedMode,
    /// Shifted left to leave more room around the minimap.
    MoreClearance,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HybridConfig {
    pub background_mode: BackgroundMode,
    /// Fill color for [`BackgroundMode::SolidColor`] and for missing tile images.
    pub background_color: Rgba8,
    /// Source-atop tint over the whole column; alpha 0 disables it.
    pub gap_background_tint: Rgba8,
    pub use_gap_borders: bool,
    pub inv_background_warning: bool,
    pub wide_chatbox: bool,
    pub chatbox_viewport_centering: bool,
    pub center_chatbox_buttons: bool,
    pub aspect_ratio_resize: bool,
    pub aspect_ratio_width: u32,
    pub aspect_ratio_height: u32,
    pub resize_by: ResizeBy,
    pub orbs_position: OrbsPosition,
    /// Image tiled by [`BackgroundMode::TiledCustomImage`].
    pub custom_background_path: Option<PathBuf>,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            background_mode: BackgroundMode::TiledStone,
            background_color: Rgba8::opaque(0, 0, 0),
            gap_background_tint: Rgba8::TRANSPARENT,
            use_gap_borders: true,
            inv_background_warning: true,
            wide_chatbox: false,
            chatbox_viewport_centering: false,
            center_chatbox_buttons: false,
            aspect_ratio_resize: false,
            aspect_ratio_width: 16,
            aspect_ratio_height: 9,
            resize_by: ResizeBy::Width,
            orbs_position: OrbsPosition::FixedMode,
            custom_background_path: None,
        }
    }
}

impl HybridConfig {
    pub fn from_json_str(s: &str) -> HybridResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| HybridError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> HybridResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> HybridResult<()> {
        if self.aspect_ratio_width == 0 || self.aspect_ratio_height == 0 {
            return Err(HybridError::validation(
                "aspectRatioWidth and aspectRatioHeight must be > 0",
            ));
        }
        if self.background_mode == BackgroundMode::TiledCustomImage
            && self.custom_background_path.is_none()
        {
            tracing::debug!("tiledCustomImage selected without customBackgroundPath");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
