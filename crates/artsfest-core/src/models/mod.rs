//! Data models for festival entities.
//!
//! Field names serialize in camelCase so the persisted JSON matches the
//! layout the web dashboard reads and writes:
//!
//! - `Event`, `Category`, `Program`: what is being competed in
//! - `Team`, `Student`: who is competing
//! - `ContestResult`, `Participant`: placements per program
//! - `MedalPoints`, `CategoryPoints`: layered point rules
//! - `TeamManager`: per-team credentials
//! - `AppSettings`: display configuration for the public board

pub mod event;
pub mod points;
pub mod result;
pub mod settings;
pub mod student;
pub mod team;

pub use event::{Category, Event, Program, ProgramType, Rgb};
pub use points::{CategoryPoints, CategoryPointsMap, GradeBonus, GradePointsMap, MedalPoints};
pub use result::{ContestResult, Participant, Placement};
pub use settings::{AppSettings, AppTheme, MAX_GALLERY_IMAGES};
pub use student::Student;
pub use team::{LeaderInfo, Team, TeamManager, TeamStanding};
