use serde::{Deserialize, Serialize};

use crate::foundation::core::{Rect, Size};
use crate::render::bitmap::Bitmap;

/// Stable host identifier of a widget, packed as `group << 16 | child`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WidgetId(pub u32);

impl WidgetId {
    /// Build the id of child `child` inside interface group `group`.
    pub const fn component(group: u16, child: u16) -> Self {
        Self(((group as u32) << 16) | child as u32)
    }

    /// Interface group this widget belongs to.
    pub const fn group(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Child index inside the interface group.
    pub const fn child(self) -> u16 {
        (self.0 & 0xffff) as u16
    }
}

/// How a widget's original x/y is interpreted against its parent.
///
/// The same enumeration is used for both axes; "start" means left for x and top for y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionMode {
    /// Offset in pixels from the parent's start edge.
    #[default]
    AbsoluteStart,
    /// Offset in pixels from the centered position.
    AbsoluteCenter,
    /// Offset in pixels from the parent's end edge.
    AbsoluteEnd,
    /// Offset in 1/16384ths of the parent extent from the start edge.
    ProportionalStart,
    /// Offset in 1/16384ths of the parent extent from the centered position.
    ProportionalCenter,
    /// Offset in 1/16384ths of the parent extent from the end edge.
    ProportionalEnd,
}

impl PositionMode {
    /// Translate the host's numeric encoding.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::AbsoluteStart,
            1 => Self::AbsoluteCenter,
            2 => Self::AbsoluteEnd,
            3 => Self::ProportionalStart,
            4 => Self::ProportionalCenter,
            5 => Self::ProportionalEnd,
            _ => return None,
        })
    }

    /// The host's numeric encoding.
    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// How a widget's original width/height is interpreted against its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeMode {
    /// Size in pixels.
    #[default]
    Absolute,
    /// Parent extent minus the value: the size is derived from the parent.
    Minus,
    /// Size in 1/16384ths of the parent extent.
    Proportional,
}

impl SizeMode {
    /// Translate the host's numeric encoding.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => Self::Absolute,
            1 => Self::Minus,
            2 => Self::Proportional,
            _ => return None,
        })
    }

    /// The host's numeric encoding.
    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// Original (pre-layout) geometry of a widget together with its four layout modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WidgetGeometry {
    /// Original x.
    pub x: i32,
    /// Original y.
    pub y: i32,
    /// Original width.
    pub width: i32,
    /// Original height.
    pub height: i32,
    /// Horizontal position mode.
    pub x_mode: PositionMode,
    /// Vertical position mode.
    pub y_mode: PositionMode,
    /// Width size mode.
    pub width_mode: SizeMode,
    /// Height size mode.
    pub height_mode: SizeMode,
}

impl WidgetGeometry {
    /// Absolute-positioned, absolute-sized geometry.
    pub fn absolute(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace both position modes.
    pub fn with_position_modes(mut self, x_mode: PositionMode, y_mode: PositionMode) -> Self {
        self.x_mode = x_mode;
        self.y_mode = y_mode;
        self
    }

    /// Replace both size modes.
    pub fn with_size_modes(mut self, width_mode: SizeMode, height_mode: SizeMode) -> Self {
        self.width_mode = width_mode;
        self.height_mode = height_mode;
        self
    }
}

/// Attribute bundle the crate reads from (and restores onto) a host widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetAttributes {
    /// Sprite identifier (`-1` when the widget draws no sprite).
    pub sprite_id: i32,
    /// Original geometry and modes.
    pub geometry: WidgetGeometry,
    /// Effective visibility: hidden itself or through an ancestor.
    pub hidden: bool,
    /// Hidden through the widget's own flag.
    pub self_hidden: bool,
}

/// Partial attribute write. `None` fields are left untouched.
///
/// `hidden` writes the widget's own hidden flag; inherited visibility follows from the parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetPatch {
    /// New sprite id.
    pub sprite_id: Option<i32>,
    /// New original x.
    pub x: Option<i32>,
    /// New original y.
    pub y: Option<i32>,
    /// New original width.
    pub width: Option<i32>,
    /// New original height.
    pub height: Option<i32>,
    /// New horizontal position mode.
    pub x_mode: Option<PositionMode>,
    /// New vertical position mode.
    pub y_mode: Option<PositionMode>,
    /// New width mode.
    pub width_mode: Option<SizeMode>,
    /// New height mode.
    pub height_mode: Option<SizeMode>,
    /// New self-hidden flag.
    pub hidden: Option<bool>,
}

impl WidgetPatch {
    /// Empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that moves a widget to `(x, y)`.
    pub fn at(x: i32, y: i32) -> Self {
        Self::new().with_x(x).with_y(y)
    }

    /// Patch that resizes a widget to `width` x `height`.
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new().with_width(width).with_height(height)
    }

    /// Patch that writes every geometry field.
    pub fn geometry(g: WidgetGeometry) -> Self {
        Self {
            x: Some(g.x),
            y: Some(g.y),
            width: Some(g.width),
            height: Some(g.height),
            x_mode: Some(g.x_mode),
            y_mode: Some(g.y_mode),
            width_mode: Some(g.width_mode),
            height_mode: Some(g.height_mode),
            ..Self::default()
        }
    }

    pub fn with_sprite(mut self, sprite_id: i32) -> Self {
        self.sprite_id = Some(sprite_id);
        self
    }

    pub fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_x_mode(mut self, mode: PositionMode) -> Self {
        self.x_mode = Some(mode);
        self
    }

    pub fn with_y_mode(mut self, mode: PositionMode) -> Self {
        self.y_mode = Some(mode);
        self
    }

    pub fn with_width_mode(mut self, mode: SizeMode) -> Self {
        self.width_mode = Some(mode);
        self
    }

    pub fn with_height_mode(mut self, mode: SizeMode) -> Self {
        self.height_mode = Some(mode);
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Return `true` when the patch writes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the patch onto an attribute bundle. `hidden` lands on `self_hidden`.
    pub fn apply_to(&self, attrs: &mut WidgetAttributes) {
        let g = &mut attrs.geometry;
        if let Some(v) = self.sprite_id {
            attrs.sprite_id = v;
        }
        if let Some(v) = self.x {
            g.x = v;
        }
        if let Some(v) = self.y {
            g.y = v;
        }
        if let Some(v) = self.width {
            g.width = v;
        }
        if let Some(v) = self.height {
            g.height = v;
        }
        if let Some(v) = self.x_mode {
            g.x_mode = v;
        }
        if let Some(v) = self.y_mode {
            g.y_mode = v;
        }
        if let Some(v) = self.width_mode {
            g.width_mode = v;
        }
        if let Some(v) = self.height_mode {
            g.height_mode = v;
        }
        if let Some(v) = self.hidden {
            attrs.self_hidden = v;
        }
    }
}

/// Kind of widget created through [`WidgetTree::create_child`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Sprite-drawing widget.
    #[default]
    Graphic,
}

/// Description of a synthetic child widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChildSpec {
    pub kind: WidgetKind,
    pub sprite_id: i32,
    pub geometry: WidgetGeometry,
}

/// Read access to the host widget tree.
///
/// Every lookup may return "absent": the host populates the tree on its own schedule.
pub trait WidgetTreeView {
    /// Current attributes of `id`.
    fn attributes(&self, id: WidgetId) -> Option<WidgetAttributes>;

    /// Measured bounds in canvas space, as of the last layout pass.
    fn bounds(&self, id: WidgetId) -> Option<Rect>;

    /// Measured bounds relative to the parent.
    fn relative_bounds(&self, id: WidgetId) -> Option<Rect>;

    /// Parent widget, `None` for roots and absent widgets.
    fn parent(&self, id: WidgetId) -> Option<WidgetId>;

    /// Static children in host order.
    fn static_children(&self, id: WidgetId) -> Vec<WidgetId>;

    /// Dynamic children in host order.
    fn dynamic_children(&self, id: WidgetId) -> Vec<WidgetId>;

    fn exists(&self, id: WidgetId) -> bool {
        self.attributes(id).is_some()
    }

    /// `true` when the widget exists and is not hidden (itself or through an ancestor).
    fn is_visible(&self, id: WidgetId) -> bool {
        self.attributes(id).is_some_and(|a| !a.hidden)
    }

    /// Measured size.
    fn size(&self, id: WidgetId) -> Option<Size> {
        self.bounds(id).map(|b| b.size())
    }
}

/// Mutating access to the host widget tree.
pub trait WidgetTree: WidgetTreeView {
    /// Write `patch` onto `id`. Returns `false` when the widget is absent.
    fn apply_patch(&mut self, id: WidgetId, patch: &WidgetPatch) -> bool;

    /// Ask the host to recompute layout for `id` and its descendants.
    fn revalidate(&mut self, id: WidgetId);

    /// Append a dynamic child under `parent`.
    fn create_child(&mut self, parent: WidgetId, spec: &ChildSpec) -> Option<WidgetId>;

    /// Remove every dynamic child of `parent`.
    fn delete_all_children(&mut self, parent: WidgetId);
}

/// Host-level facilities beyond the widget tree.
pub trait Client: WidgetTree {
    fn is_logged_in(&self) -> bool;

    /// Current canvas size.
    fn canvas_size(&self) -> Size;

    /// Canvas size after stretching to the window.
    fn stretched_size(&self) -> Size;

    /// Configured game window size, if any.
    fn game_size(&self) -> Option<Size>;

    fn set_game_size(&mut self, size: Size);

    /// Sprite currently overriding `sprite_id`.
    fn sprite_override(&self, sprite_id: i32) -> Option<Bitmap>;

    fn set_sprite_override(&mut self, sprite_id: i32, sprite: Bitmap);

    fn remove_sprite_override(&mut self, sprite_id: i32);

    /// Drop the host's decoded sprite cache so overrides take effect.
    fn reset_sprite_cache(&mut self);
}

#[cfg(test)]
#[path = "../../tests/unit/host/widget.rs"]
mod tests;
