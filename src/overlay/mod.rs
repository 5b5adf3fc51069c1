//! The side-column compositor drawn under the host's widgets.

pub mod cache;
pub mod column;
pub mod tile;

pub use cache::{BackgroundCache, BackgroundKey};
pub use column::{COLUMN_WIDTH, ColumnOverlay, OverlayTargets};
