use crate::host::widget::Client;
use crate::hybrid::ids;

/// Interface mode the host is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientLayout {
    Fixed,
    ResizableClassic,
    ResizableModern,
    /// Logged out, or the top level has not been built yet.
    Unknown,
}

impl ClientLayout {
    /// Infer the layout from which top-level root is visible.
    pub fn detect<C: Client + ?Sized>(client: &C) -> Self {
        if !client.is_logged_in() {
            return Self::Unknown;
        }
        if client.is_visible(ids::STRETCH_CONTROL) {
            Self::ResizableClassic
        } else if client.is_visible(ids::PRE_EOC_CONTROL) {
            Self::ResizableModern
        } else if client.is_visible(ids::FIXED_UNIVERSE) {
            Self::Fixed
        } else {
            Self::Unknown
        }
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}
