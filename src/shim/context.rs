use std::collections::BTreeSet;

use crate::host::widget::{ChildSpec, WidgetId, WidgetTree};
use crate::shim::overrides::OverrideEngine;

/// Who removes a synthetic child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildLifetime {
    /// Deleted with the rest of the parent's dynamic children on reset.
    UntilReset,
    /// Left to the host, which rebuilds the parent on its own.
    HostManaged,
}

/// Everything the crate has changed in the host, and how to undo it.
#[derive(Debug)]
pub struct LayoutShim {
    pub engine: OverrideEngine,
    viewport: WidgetId,
    synthetic_parents: BTreeSet<WidgetId>,
    sprite_overrides: BTreeSet<i32>,
}

impl LayoutShim {
    /// `viewport` is reset to pass-through geometry on teardown.
    pub fn new(viewport: WidgetId) -> Self {
        Self {
            engine: OverrideEngine::new(),
            viewport,
            synthetic_parents: BTreeSet::new(),
            sprite_overrides: BTreeSet::new(),
        }
    }

    pub fn viewport(&self) -> WidgetId {
        self.viewport
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    /// Create a child under `parent` and revalidate the parent.
    pub fn create_child<T: WidgetTree + ?Sized>(
        &mut self,
        tree: &mut T,
        parent: WidgetId,
        spec: &ChildSpec,
        lifetime: ChildLifetime,
    ) -> Option<WidgetId> {
        let child = tree.create_child(parent, spec)?;
        if lifetime == ChildLifetime::UntilReset {
            self.synthetic_parents.insert(parent);
        }
        tree.revalidate(parent);
        Some(child)
    }

    pub fn synthetic_parents(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.synthetic_parents.iter().copied()
    }

    /// Remember that `sprite_id` was overridden so reset removes it.
    pub fn register_sprite_override(&mut self, sprite_id: i32) {
        self.sprite_overrides.insert(sprite_id);
    }

    pub fn sprite_overrides(&self) -> impl Iterator<Item = i32> + '_ {
        self.sprite_overrides.iter().copied()
    }

    /// `true` when no synthetic child or sprite override is registered.
    pub fn is_pristine(&self) -> bool {
        self.synthetic_parents.is_empty() && self.sprite_overrides.is_empty()
    }

    pub(crate) fn take_synthetic_parents(&mut self) -> BTreeSet<WidgetId> {
        std::mem::take(&mut self.synthetic_parents)
    }

    pub(crate) fn take_sprite_overrides(&mut self) -> BTreeSet<i32> {
        std::mem::take(&mut self.sprite_overrides)
    }
}
