//! Image resources consumed by the overlay.

pub mod decode;
pub mod library;
