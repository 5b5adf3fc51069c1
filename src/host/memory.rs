//! In-memory host used by tests and the preview tool.
//!
//! `MemoryClient` models the parts of the host the crate touches: a widget tree with static and
//! dynamic children, a simple layout resolver, sprite overrides and a journal of every mutation
//! the crate performs, in order.

use std::collections::HashMap;

use crate::foundation::core::{Point, Rect, Size};
use crate::host::widget::{
    ChildSpec, Client, PositionMode, SizeMode, WidgetAttributes, WidgetGeometry, WidgetId,
    WidgetPatch, WidgetTree, WidgetTreeView,
};
use crate::render::bitmap::Bitmap;

/// Group used for ids handed out by [`WidgetTree::create_child`].
const DYNAMIC_GROUP: u16 = u16::MAX;

/// Denominator of the host's proportional modes.
const PROPORTIONAL_UNIT: f64 = 16384.0;

/// One mutation observed by the in-memory host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeOp {
    Write { id: WidgetId, patch: WidgetPatch },
    Revalidate(WidgetId),
    CreateChild { parent: WidgetId, child: WidgetId },
    DeleteChildren(WidgetId),
}

#[derive(Clone, Debug)]
struct Node {
    sprite_id: i32,
    geometry: WidgetGeometry,
    self_hidden: bool,
    parent: Option<WidgetId>,
    static_children: Vec<WidgetId>,
    dynamic_children: Vec<WidgetId>,
    relative: Rect,
    bounds: Rect,
}

/// In-memory [`Client`] implementation.
#[derive(Debug)]
pub struct MemoryClient {
    nodes: HashMap<WidgetId, Node>,
    journal: Vec<TreeOp>,
    logged_in: bool,
    canvas: Size,
    stretched: Size,
    game_size: Option<Size>,
    sprite_overrides: HashMap<i32, Bitmap>,
    sprite_cache_resets: u32,
    next_dynamic: u16,
}

impl MemoryClient {
    /// Empty, logged-in client with the given canvas size.
    pub fn new(canvas: Size) -> Self {
        Self {
            nodes: HashMap::new(),
            journal: Vec::new(),
            logged_in: true,
            canvas,
            stretched: canvas,
            game_size: None,
            sprite_overrides: HashMap::new(),
            sprite_cache_resets: 0,
            next_dynamic: 0,
        }
    }

    /// Insert a root widget (laid out against the canvas).
    pub fn insert_root(&mut self, id: WidgetId, geometry: WidgetGeometry) -> &mut Self {
        self.insert(None, id, geometry, false);
        self
    }

    /// Insert a static child under `parent`.
    ///
    /// Panics when `parent` is absent; this is a fixture-building API.
    pub fn insert_static(
        &mut self,
        parent: WidgetId,
        id: WidgetId,
        geometry: WidgetGeometry,
    ) -> &mut Self {
        self.insert(Some(parent), id, geometry, false);
        self
    }

    /// Insert a dynamic child under `parent` without journaling it.
    pub fn insert_dynamic(&mut self, parent: WidgetId, geometry: WidgetGeometry) -> WidgetId {
        let id = self.alloc_dynamic_id();
        self.insert(Some(parent), id, geometry, true);
        id
    }

    /// Set the sprite of an existing widget without journaling it.
    pub fn set_sprite(&mut self, id: WidgetId, sprite_id: i32) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.sprite_id = sprite_id;
        }
        self
    }

    /// Set the self-hidden flag of an existing widget without journaling it.
    pub fn set_self_hidden(&mut self, id: WidgetId, hidden: bool) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.self_hidden = hidden;
        }
        self
    }

    /// Remove a widget and its whole subtree, as the host does when an interface closes.
    pub fn remove(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.static_children.retain(|c| *c != id);
            parent.dynamic_children.retain(|c| *c != id);
        }
        for child in node.static_children.iter().chain(&node.dynamic_children) {
            self.remove(*child);
        }
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    /// Resize the canvas and lay out every root again.
    pub fn set_canvas_size(&mut self, size: Size) {
        self.canvas = size;
        self.stretched = size;
        self.layout_all();
    }

    pub fn set_stretched_size(&mut self, size: Size) {
        self.stretched = size;
    }

    /// Every mutation performed through the [`WidgetTree`] trait, in order.
    pub fn journal(&self) -> &[TreeOp] {
        &self.journal
    }

    /// Drain the journal.
    pub fn take_journal(&mut self) -> Vec<TreeOp> {
        std::mem::take(&mut self.journal)
    }

    pub fn sprite_cache_resets(&self) -> u32 {
        self.sprite_cache_resets
    }

    /// Ids of the sprites currently overridden.
    pub fn overridden_sprites(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.sprite_overrides.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Recompute layout for every root.
    pub fn layout_all(&mut self) {
        let mut roots: Vec<WidgetId> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(id, _)| *id)
            .collect();
        roots.sort_unstable();
        for root in roots {
            self.layout_subtree(root);
        }
    }

    fn alloc_dynamic_id(&mut self) -> WidgetId {
        let id = WidgetId::component(DYNAMIC_GROUP, self.next_dynamic);
        self.next_dynamic = self.next_dynamic.wrapping_add(1);
        id
    }

    fn insert(
        &mut self,
        parent: Option<WidgetId>,
        id: WidgetId,
        geometry: WidgetGeometry,
        dynamic: bool,
    ) {
        if let Some(p) = parent {
            let parent_node = self
                .nodes
                .get_mut(&p)
                .unwrap_or_else(|| panic!("parent {p:?} must be inserted before {id:?}"));
            if dynamic {
                parent_node.dynamic_children.push(id);
            } else {
                parent_node.static_children.push(id);
            }
        }
        self.nodes.insert(
            id,
            Node {
                sprite_id: -1,
                geometry,
                self_hidden: false,
                parent,
                static_children: Vec::new(),
                dynamic_children: Vec::new(),
                relative: Rect::ZERO,
                bounds: Rect::ZERO,
            },
        );
        self.layout_subtree(id);
    }

    fn parent_frame(&self, parent: Option<WidgetId>) -> Rect {
        parent
            .and_then(|p| self.nodes.get(&p))
            .map(|p| p.bounds)
            .unwrap_or_else(|| Rect::from_origin_size(Point::ORIGIN, self.canvas))
    }

    fn layout_subtree(&mut self, id: WidgetId) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        let frame = self.parent_frame(node.parent);
        let g = node.geometry;
        let (x, w) = resolve_axis(g.x, g.width, g.x_mode, g.width_mode, frame.width());
        let (y, h) = resolve_axis(g.y, g.height, g.y_mode, g.height_mode, frame.height());
        let relative = Rect::new(x, y, x + w, y + h);
        let bounds = relative + frame.origin().to_vec2();

        let children: Vec<WidgetId> = match self.nodes.get_mut(&id) {
            Some(node) => {
                node.relative = relative;
                node.bounds = bounds;
                node.static_children
                    .iter()
                    .chain(&node.dynamic_children)
                    .copied()
                    .collect()
            }
            None => return,
        };
        for child in children {
            self.layout_subtree(child);
        }
    }

    fn effective_hidden(&self, id: WidgetId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.nodes.get(&current) {
                Some(node) if node.self_hidden => return true,
                Some(node) => cursor = node.parent,
                None => return false,
            }
        }
        false
    }
}

fn resolve_axis(
    pos: i32,
    size: i32,
    pos_mode: PositionMode,
    size_mode: SizeMode,
    parent: f64,
) -> (f64, f64) {
    let pos = f64::from(pos);
    let size = f64::from(size);
    let extent = match size_mode {
        SizeMode::Absolute => size,
        SizeMode::Minus => parent - size,
        SizeMode::Proportional => parent * size / PROPORTIONAL_UNIT,
    }
    .max(0.0);
    let free = parent - extent;
    let origin = match pos_mode {
        PositionMode::AbsoluteStart => pos,
        PositionMode::AbsoluteCenter => free / 2.0 + pos,
        PositionMode::AbsoluteEnd => free - pos,
        PositionMode::ProportionalStart => parent * pos / PROPORTIONAL_UNIT,
        PositionMode::ProportionalCenter => free / 2.0 + parent * pos / PROPORTIONAL_UNIT,
        PositionMode::ProportionalEnd => free - parent * pos / PROPORTIONAL_UNIT,
    };
    (origin.floor(), extent.floor())
}

impl WidgetTreeView for MemoryClient {
    fn attributes(&self, id: WidgetId) -> Option<WidgetAttributes> {
        let node = self.nodes.get(&id)?;
        Some(WidgetAttributes {
            sprite_id: node.sprite_id,
            geometry: node.geometry,
            hidden: self.effective_hidden(id),
            self_hidden: node.self_hidden,
        })
    }

    fn bounds(&self, id: WidgetId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.bounds)
    }

    fn relative_bounds(&self, id: WidgetId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.relative)
    }

    fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    fn static_children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.nodes
            .get(&id)
            .map(|n| n.static_children.clone())
            .unwrap_or_default()
    }

    fn dynamic_children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.nodes
            .get(&id)
            .map(|n| n.dynamic_children.clone())
            .unwrap_or_default()
    }
}

impl WidgetTree for MemoryClient {
    fn apply_patch(&mut self, id: WidgetId, patch: &WidgetPatch) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        let mut attrs = WidgetAttributes {
            sprite_id: node.sprite_id,
            geometry: node.geometry,
            hidden: false,
            self_hidden: node.self_hidden,
        };
        patch.apply_to(&mut attrs);
        node.sprite_id = attrs.sprite_id;
        node.geometry = attrs.geometry;
        node.self_hidden = attrs.self_hidden;
        self.journal.push(TreeOp::Write { id, patch: *patch });
        true
    }

    fn revalidate(&mut self, id: WidgetId) {
        if !self.nodes.contains_key(&id) {
            return;
        }
        self.journal.push(TreeOp::Revalidate(id));
        self.layout_subtree(id);
    }

    fn create_child(&mut self, parent: WidgetId, spec: &ChildSpec) -> Option<WidgetId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let child = self.alloc_dynamic_id();
        self.insert(Some(parent), child, spec.geometry, true);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.sprite_id = spec.sprite_id;
        }
        self.journal.push(TreeOp::CreateChild { parent, child });
        Some(child)
    }

    fn delete_all_children(&mut self, parent: WidgetId) {
        let Some(node) = self.nodes.get_mut(&parent) else {
            return;
        };
        let children = std::mem::take(&mut node.dynamic_children);
        for child in children {
            self.remove(child);
        }
        self.journal.push(TreeOp::DeleteChildren(parent));
    }
}

impl Client for MemoryClient {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn canvas_size(&self) -> Size {
        self.canvas
    }

    fn stretched_size(&self) -> Size {
        self.stretched
    }

    fn game_size(&self) -> Option<Size> {
        self.game_size
    }

    fn set_game_size(&mut self, size: Size) {
        self.game_size = Some(size);
    }

    fn sprite_override(&self, sprite_id: i32) -> Option<Bitmap> {
        self.sprite_overrides.get(&sprite_id).cloned()
    }

    fn set_sprite_override(&mut self, sprite_id: i32, sprite: Bitmap) {
        self.sprite_overrides.insert(sprite_id, sprite);
    }

    fn remove_sprite_override(&mut self, sprite_id: i32) {
        self.sprite_overrides.remove(&sprite_id);
    }

    fn reset_sprite_cache(&mut self) {
        self.sprite_cache_resets += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
