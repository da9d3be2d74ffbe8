//! Display helpers shared by the terminal board and the CLI commands.

pub mod format;

pub use format::{position_text, truncate_string};
