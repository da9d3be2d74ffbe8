//! Artsfest core - models, local store, standings and admin operations.
//!
//! Shared by the terminal board and the command-line tools. Everything here
//! is synchronous; callers that need background refresh wrap it themselves.

pub mod admin;
pub mod auth;
pub mod config;
pub mod error;
pub mod init;
pub mod models;
pub mod performers;
pub mod scoreboard;
pub mod standings;
pub mod store;
pub mod team_manager;
pub mod utils;

pub use admin::AdminSession;
pub use config::Config;
pub use error::{LoginError, ValidationError};
pub use init::{initialize, InitOutcome};
pub use performers::{compute_top_performers, TopPerformer};
pub use scoreboard::Scoreboard;
pub use standings::{compute_standings, PointRules};
pub use store::FestivalStore;
pub use team_manager::TeamManagerSession;
