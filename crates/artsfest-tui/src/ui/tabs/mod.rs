//! Tab-specific content rendering.

pub mod events;
pub mod performers;
pub mod results;
pub mod standings;
