#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
pub(crate) mod foundation;
pub mod host;
pub mod hybrid;
pub mod overlay;
pub mod render;
pub mod shim;

pub use assets::library::OverlayAssets;
pub use config::{BackgroundMode, HybridConfig, OrbsPosition, ResizeBy};
pub use foundation::core::{Point, PremulRgba8, Rect, Rgba8, Size};
pub use foundation::error::{HybridError, HybridResult};
pub use host::events::{ConfigChange, HostEvent, ScriptEvent, VarbitEvent};
pub use host::memory::MemoryClient;
pub use host::widget::{Client, WidgetId, WidgetTree, WidgetTreeView};
pub use hybrid::{ClientLayout, HybridPlugin};
pub use overlay::{COLUMN_WIDTH, ColumnOverlay, OverlayTargets};
pub use render::bitmap::Bitmap;
pub use render::surface::{RasterSurface, RecordingSurface, Surface};
pub use shim::{LayoutShim, ResetReport};
