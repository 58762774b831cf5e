//! Closed domain types for NFL seasons, teams, downs and positions.

pub mod down;
pub mod position;
pub mod team;
pub mod time;

pub use down::Down;
pub use position::{Position, PositionGroup};
pub use team::{Conference, Division, Team};
pub use time::{DateString, PlayoffRound, Season, SeasonType, Week};
