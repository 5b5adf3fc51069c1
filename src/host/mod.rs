//! Boundary to the host application: the widget tree it owns, its client facilities and the
//! lifecycle notifications it emits.
//!
//! Everything in this module is mutation-thread affine. Mutating entry points take `&mut` so a
//! caller cannot interleave tree writes with the host's own layout pass.

pub mod events;
pub mod memory;
pub mod retry;
pub mod widget;
