//! Terminal UI module using ratatui.
//!
//! - `render`: frame layout, title bar, status bar and overlays
//! - `input`: keyboard handling
//! - `styles`: colors and text styling
//! - `tabs`: per-tab tables

pub mod input;
pub mod render;
pub mod styles;
pub mod tabs;
