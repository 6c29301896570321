//! Coordinate and color types shared across the engine.
//!
//! Canonical GPU space is wgpu NDC; the disc renderer works in clip-space
//! units and corrects for aspect ratio via its projection matrix, so the CPU
//! side only needs plain 2D vectors and a viewport size.

mod color;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use vec2::Vec2;
pub use viewport::Viewport;
