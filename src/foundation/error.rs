/// Convenience result type used across the crate.
pub type HybridResult<T> = Result<T, HybridError>;

/// Error taxonomy for the fallible boundaries of the crate.
///
/// Tree operations never return these: a node missing from the host tree is a normal outcome and
/// is represented as `None` at the lookup site.
#[derive(thiserror::Error, Debug)]
pub enum HybridError {
    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image resource was unreadable, missing or could not be decoded.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// A structural precondition on the host tree did not hold.
    #[error("unexpected topology: {0}")]
    UnexpectedTopology(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HybridError {
    /// Build a [`HybridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HybridError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`HybridError::UnexpectedTopology`] value.
    pub fn topology(msg: impl Into<String>) -> Self {
        Self::UnexpectedTopology(msg.into())
    }

    /// Build a [`HybridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
