//! Snapshot, override and restore engine for widgets owned by the host.
//!
//! Every write the crate makes to a host widget goes through [`overrides::OverrideEngine`], which
//! records the widget's pre-override attributes exactly once. [`reset::reset`] replays those
//! records in a fixed two-batch order so the host ends up with the layout it had before.

pub mod context;
pub mod overrides;
pub mod reset;
pub mod snapshot;
pub mod traverse;

pub use context::{ChildLifetime, LayoutShim};
pub use overrides::OverrideEngine;
pub use reset::{ResetReport, reset};
pub use snapshot::{AttributeSnapshot, ResetOrder, SnapshotStore};
pub use traverse::{NormalizeOpts, NormalizeStats, normalize_descendants};
