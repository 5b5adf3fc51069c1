//! Fixups that make the resizable classic layout look like the fixed one.
//!
//! [`plugin::HybridPlugin`] owns the state and dispatches host events; the other modules add the
//! individual fixups to it. Every write to a host widget goes through the plugin's
//! [`LayoutShim`](crate::shim::LayoutShim) unless it targets host-rebuilt content.

pub mod aspect;
pub mod chat;
pub mod fixture;
pub mod ids;
pub mod inventory;
pub mod layout;
pub mod minimap;
pub mod plugin;
pub mod viewport;

pub use chat::ChatState;
pub use layout::ClientLayout;
pub use plugin::HybridPlugin;
