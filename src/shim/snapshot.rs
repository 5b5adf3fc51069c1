use std::collections::BTreeMap;

use crate::host::widget::{PositionMode, SizeMode, WidgetAttributes, WidgetGeometry, WidgetId, WidgetPatch};

/// Restore batch a snapshot belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResetOrder {
    /// Restored in the first batch.
    #[default]
    Normal,
    /// Restored after every [`ResetOrder::Normal`] widget has been written and revalidated.
    ///
    /// Used for containers whose layout depends on children restored in the first batch.
    Last,
}

/// Attributes of a widget as they were before the first override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeSnapshot {
    sprite_id: i32,
    geometry: WidgetGeometry,
    hidden: bool,
    self_hidden: bool,
    order: ResetOrder,
}

impl AttributeSnapshot {
    pub fn capture(attrs: &WidgetAttributes, order: ResetOrder) -> Self {
        Self {
            sprite_id: attrs.sprite_id,
            geometry: attrs.geometry,
            hidden: attrs.hidden,
            self_hidden: attrs.self_hidden,
            order,
        }
    }

    pub fn sprite_id(&self) -> i32 {
        self.sprite_id
    }

    pub fn geometry(&self) -> WidgetGeometry {
        self.geometry
    }

    pub fn x(&self) -> i32 {
        self.geometry.x
    }

    pub fn y(&self) -> i32 {
        self.geometry.y
    }

    pub fn width(&self) -> i32 {
        self.geometry.width
    }

    pub fn height(&self) -> i32 {
        self.geometry.height
    }

    pub fn x_mode(&self) -> PositionMode {
        self.geometry.x_mode
    }

    pub fn y_mode(&self) -> PositionMode {
        self.geometry.y_mode
    }

    pub fn width_mode(&self) -> SizeMode {
        self.geometry.width_mode
    }

    pub fn height_mode(&self) -> SizeMode {
        self.geometry.height_mode
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn self_hidden(&self) -> bool {
        self.self_hidden
    }

    pub fn order(&self) -> ResetOrder {
        self.order
    }

    /// Patch that writes every captured attribute back.
    ///
    /// First-batch widgets come back hidden if they were hidden for any reason; last-batch
    /// containers only take the effective flag.
    pub fn restore_patch(&self) -> WidgetPatch {
        let hidden = match self.order {
            ResetOrder::Normal => self.hidden || self.self_hidden,
            ResetOrder::Last => self.hidden,
        };
        WidgetPatch::geometry(self.geometry)
            .with_sprite(self.sprite_id)
            .with_hidden(hidden)
    }
}

/// Pre-override snapshots keyed by widget id, iterated in ascending id order.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    entries: BTreeMap<WidgetId, AttributeSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `snapshot` for `id` unless one already exists. Returns `true` when recorded.
    pub fn save(&mut self, id: WidgetId, snapshot: AttributeSnapshot) -> bool {
        match self.entries.entry(id) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(snapshot);
                true
            }
        }
    }

    pub fn get(&self, id: WidgetId) -> Option<&AttributeSnapshot> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshots of one restore batch, ascending by id.
    pub fn batch(&self, order: ResetOrder) -> Vec<(WidgetId, AttributeSnapshot)> {
        self.entries
            .iter()
            .filter(|(_, s)| s.order == order)
            .map(|(id, s)| (*id, *s))
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shim/snapshot.rs"]
mod tests;
