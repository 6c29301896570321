//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers, bind groups) and
//! issue commands via wgpu against a [`RenderCtx`] + [`RenderTarget`] pair
//! handed out by the frame loop.

mod ctx;
mod error;

pub mod disc;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::DiscError;
