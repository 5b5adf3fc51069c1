//! Pixel buffers and drawing surfaces.
//!
//! Everything here works in premultiplied RGBA8, row-major, tightly packed.

pub mod bitmap;
pub(crate) mod composite;
pub mod surface;
