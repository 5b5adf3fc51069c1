use crate::config::OrbsPosition;
use crate::host::widget::{
    ChildSpec, Client, PositionMode, SizeMode, WidgetGeometry, WidgetId, WidgetKind, WidgetPatch,
};
use crate::hybrid::ids;
use crate::hybrid::inventory::PANEL_WIDTH;
use crate::hybrid::plugin::HybridPlugin;
use crate::shim::{ChildLifetime, ResetOrder};

use DecorationParent::{Inventory, Minimap};
use PositionMode::{AbsoluteEnd as End, AbsoluteStart as Start};

const MINIMAP_HEIGHT: i32 = 207;
const ORBS_HEIGHT: i32 = 197;

/// Right-anchored minimap pieces pinned to fixed-layout coordinates.
const MINIMAP_PLACEMENTS: [(WidgetId, i32, i32); 8] = [
    (ids::MAP_NOCLICK[0], 44, 5),
    (ids::MAP_NOCLICK[1], 44, 45),
    (ids::MAP_NOCLICK[2], 44, 101),
    (ids::MAP_NOCLICK[3], 44, 126),
    (ids::MAP_NOCLICK[4], 44, 141),
    (ids::MAP_NOCLICK[5], 44, 156),
    (ids::MINIMAP, 50, 9),
    (ids::MAP_MASK_GRAPHIC, 44, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecorationParent {
    Minimap,
    Inventory,
}

/// A frame sprite the fixed layout draws around the minimap or inventory.
#[derive(Clone, Copy, Debug)]
struct Decoration {
    parent: DecorationParent,
    sprite_id: i32,
    geometry: (i32, i32, i32, i32),
    x_mode: PositionMode,
    y_mode: PositionMode,
}

const fn decoration(
    parent: DecorationParent,
    sprite_id: i32,
    geometry: (i32, i32, i32, i32),
    x_mode: PositionMode,
    y_mode: PositionMode,
) -> Decoration {
    Decoration {
        parent,
        sprite_id,
        geometry,
        x_mode,
        y_mode,
    }
}

const DECORATIONS: [Decoration; 10] = [
    decoration(Minimap, 1182, (29, 4, 172, 156), Start, Start), // center
    decoration(Minimap, 1611, (0, 160, 249, 8), End, Start),    // bottom
    decoration(Minimap, 1037, (0, 4, 29, 156), Start, Start),   // left
    decoration(Minimap, 1038, (0, 4, 48, 156), End, Start),     // right
    decoration(Minimap, 1039, (48, 0, 717, 4), End, Start),     // top bar, right
    decoration(Minimap, 1441, (0, 0, 48, 4), End, Start),       // top bar, left
    decoration(Inventory, 1035, (0, 37, 28, 261), End, End),    // right column
    decoration(Inventory, 1033, (0, 38, 31, 133), Start, Start), // left column, top
    decoration(Inventory, 1034, (3, 171, 28, 128), Start, Start), // left column, bottom
    decoration(Inventory, 1033, (0, 0, 3, 170), Start, End),    // left strip
];

/// Number of frame sprites under the minimap parent once decorated.
const MINIMAP_DECORATIONS: usize = 6;

impl HybridPlugin {
    /// Move the minimap, orbs and compass to their fixed-layout positions.
    pub(crate) fn reposition_minimap<C: Client + ?Sized>(&mut self, client: &mut C) {
        let (map, mask, orbs_parent, orbs) = (
            ids::MAP_CONTAINER,
            ids::MAP_MASK_GRAPHIC,
            ids::ORBS_CONTAINER,
            ids::ORBS_UNIVERSE,
        );
        if !self.is_classic(client)
            || ![map, mask, orbs_parent, orbs]
                .iter()
                .all(|id| client.exists(*id))
        {
            return;
        }

        let engine = &mut self.shim.engine;
        engine.capture(&*client, map, ResetOrder::Last);
        for id in [mask, orbs, orbs_parent] {
            engine.capture(&*client, id, ResetOrder::Normal);
        }

        if client.is_visible(mask) {
            engine.apply_without_layout(
                client,
                mask,
                &WidgetPatch::new().with_hidden(true),
                ResetOrder::Normal,
            );
        }

        // Only write what differs so the host does not lay out for nothing.
        for (id, absolute_modes, height) in [
            (map, false, MINIMAP_HEIGHT),
            (orbs_parent, false, ORBS_HEIGHT),
            (orbs, true, ORBS_HEIGHT),
        ] {
            let Some(g) = client.attributes(id).map(|a| a.geometry) else {
                continue;
            };
            let mut patch = WidgetPatch::new();
            if absolute_modes {
                if g.width_mode != SizeMode::Absolute {
                    patch = patch.with_width_mode(SizeMode::Absolute);
                }
                if g.height_mode != SizeMode::Absolute {
                    patch = patch.with_height_mode(SizeMode::Absolute);
                }
            }
            if g.width != PANEL_WIDTH {
                patch = patch.with_width(PANEL_WIDTH);
            }
            if g.height != height {
                patch = patch.with_height(height);
            }
            if !patch.is_empty() {
                engine.apply(client, id, &patch, ResetOrder::Normal);
            }
        }

        for (id, x, y) in MINIMAP_PLACEMENTS {
            let right_anchored = client
                .attributes(id)
                .is_some_and(|a| a.geometry.x_mode == PositionMode::AbsoluteEnd);
            if right_anchored {
                let patch = WidgetPatch::at(x, y).with_x_mode(PositionMode::AbsoluteStart);
                engine.apply(client, id, &patch, ResetOrder::Last);
            }
        }

        let (run, spec) = match self.config.orbs_position {
            OrbsPosition::FixedMode => ((10, 97), (32, 122)),
            OrbsPosition::MoreClearance => ((2, 97), (23, 124)),
        };
        for (id, (x, y)) in [
            (ids::ORB_RUN_ENERGY, run),
            (ids::ORB_SPEC_ENERGY, spec),
            (ids::XP_DROPS, (0, 11)),
            (ids::ORB_HEALTH, (0, 31)),
            (ids::ORB_PRAYER, (0, 65)),
            (ids::COMPASS_CLICK, (26, 1)),
            (ids::MAP_COMPASS_GRAPHIC, (28, 3)),
        ] {
            engine.apply(client, id, &WidgetPatch::at(x, y), ResetOrder::Normal);
        }

        self.fix_edge_orbs(client);
        client.revalidate(map);
    }

    /// Move the world map, wiki, store and activity adviser orbs, but only while they sit at the
    /// host's resizable defaults.
    pub(crate) fn fix_edge_orbs<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.is_classic(client) {
            return;
        }
        let corner_orb = |x, y| {
            WidgetPatch::geometry(
                WidgetGeometry::absolute(x, y, 34, 34)
                    .with_position_modes(PositionMode::AbsoluteEnd, PositionMode::AbsoluteStart),
            )
        };
        let moves = [
            (ids::ORB_WORLD_MAP, 0, WidgetPatch::at(23, 109)),
            (ids::WIKI_BANNER, 0, WidgetPatch::at(21, 129)),
            (ids::ORB_STORE, 85, corner_orb(13, 77)),
            (ids::ORB_ACTIVITY_ADVISER, 55, corner_orb(13, 44)),
        ];
        for (id, default_x, patch) in moves {
            if client
                .attributes(id)
                .is_some_and(|a| a.geometry.x == default_x)
            {
                self.shim.engine.apply(client, id, &patch, ResetOrder::Normal);
            }
        }
    }

    /// Build the fixed-layout frame sprites around the minimap and inventory.
    pub(crate) fn create_decorations<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !client.exists(ids::MAP_MINIMAP) || !client.exists(ids::SIDE_MENU) {
            return;
        }
        self.inventory_bounds_fix(client);

        for d in DECORATIONS {
            let parent = match d.parent {
                Minimap => ids::MAP_MINIMAP,
                Inventory => ids::SIDE_MENU,
            };
            let (x, y, width, height) = d.geometry;
            let spec = ChildSpec {
                kind: WidgetKind::Graphic,
                sprite_id: d.sprite_id,
                geometry: WidgetGeometry::absolute(x, y, width, height)
                    .with_position_modes(d.x_mode, d.y_mode),
            };
            self.shim
                .create_child(client, parent, &spec, ChildLifetime::UntilReset);
        }
    }

    /// Rebuild the frame sprites if the host dropped them.
    pub(crate) fn check_decorations<C: Client + ?Sized>(&mut self, client: &mut C) {
        if !self.shim.is_active() || !client.exists(ids::MAP_MINIMAP) {
            return;
        }
        if client.dynamic_children(ids::MAP_MINIMAP).len() < MINIMAP_DECORATIONS {
            self.create_decorations(client);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hybrid/minimap.rs"]
mod tests;
