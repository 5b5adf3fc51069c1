use std::ops::RangeInclusive;

use crate::host::widget::{SizeMode, WidgetId, WidgetPatch, WidgetTree};

/// Original widths the host gives overlay children that reserve room for the side panel.
///
/// The host sizes these as "parent minus 248..254" so they stop short of the resizable side
/// panel. With the panel moved into the reserved column the subtraction must go.
pub const RESERVED_COLUMN_WIDTH_BAND: RangeInclusive<i32> = 248..=254;

/// Original heights the host gives overlay children that reserve room for the chatbox.
///
/// Only collapsed while the wide chatbox centers the viewport above an open chat, where the
/// viewport already excludes the chat area.
pub const CHAT_HEIGHT_BAND: RangeInclusive<i32> = 164..=172;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOpts {
    /// Levels below the root to visit; `0` means unbounded.
    pub max_depth: u32,
    /// Collapse heights in [`CHAT_HEIGHT_BAND`].
    pub collapse_chat_height: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub visited: usize,
    pub widths_cleared: usize,
    pub heights_cleared: usize,
}

/// Walk the descendants of `root` (static children first, then dynamic) and clear the reserved
/// width and chat height bands on parent-derived sizes.
///
/// Writes are raw: the nodes are host-managed overlay content that the host rebuilds itself, so
/// nothing is snapshotted. Static children are revalidated after processing.
pub fn normalize_descendants<T: WidgetTree + ?Sized>(
    tree: &mut T,
    root: WidgetId,
    opts: NormalizeOpts,
    current_depth: u32,
) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    walk(tree, root, opts, current_depth, &mut stats);
    stats
}

fn walk<T: WidgetTree + ?Sized>(
    tree: &mut T,
    node: WidgetId,
    opts: NormalizeOpts,
    depth: u32,
    stats: &mut NormalizeStats,
) {
    if opts.max_depth != 0 && depth >= opts.max_depth {
        return;
    }
    let static_children = tree.static_children(node);
    let dynamic_children = tree.dynamic_children(node);
    for (children, revalidate) in [(static_children, true), (dynamic_children, false)] {
        for child in children {
            normalize_one(tree, child, opts, stats);
            if revalidate {
                tree.revalidate(child);
            }
            walk(tree, child, opts, depth + 1, stats);
        }
    }
}

fn normalize_one<T: WidgetTree + ?Sized>(
    tree: &mut T,
    id: WidgetId,
    opts: NormalizeOpts,
    stats: &mut NormalizeStats,
) {
    let Some(attrs) = tree.attributes(id) else {
        return;
    };
    stats.visited += 1;
    let g = attrs.geometry;

    let mut patch = WidgetPatch::new();
    if RESERVED_COLUMN_WIDTH_BAND.contains(&g.width) && g.width_mode == SizeMode::Minus {
        patch = patch.with_width(0);
        stats.widths_cleared += 1;
    }
    if opts.collapse_chat_height
        && CHAT_HEIGHT_BAND.contains(&g.height)
        && g.height_mode == SizeMode::Minus
    {
        patch = patch.with_height(0);
        stats.heights_cleared += 1;
    }
    if !patch.is_empty() {
        tree.apply_patch(id, &patch);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shim/traverse.rs"]
mod tests;
