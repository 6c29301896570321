//! Marble engine crate.
//!
//! Owns the platform + GPU runtime pieces and the disc renderer built on top
//! of them.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
