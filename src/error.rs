//! Error types for NFL vocabulary parsing and validation

use thiserror::Error;

use crate::types::SeasonType;


pub type Result<T> = std::result::Result<T, NflError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NflError {
    #[error("Invalid season: {season} (seasons start at {min})")]
    InvalidSeason { season: i64, min: u16 },

    #[error("Invalid week: {week} (weeks run 1-{max})")]
    InvalidWeek { week: i64, max: u8 },

    #[error("Week {week} is outside the {season_type} range {min}-{max}")]
    WeekOutOfPhase {
        week: u8,
        season_type: SeasonType,
        min: u8,
        max: u8,
    },

    #[error("Invalid season type: {value:?} (expected REG, POST or PRE)")]
    InvalidSeasonType { value: String },

    #[error("Invalid team code: {code:?}")]
    InvalidTeam { code: String },

    #[error("Invalid date: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("Invalid down: {down} (expected 1, 2, 3 or 4)")]
    InvalidDown { down: i64 },

    #[error("Invalid conference: {value:?} (expected AFC or NFC)")]
    InvalidConference { value: String },

    #[error("Invalid division: {value:?} (expected East, West, North or South)")]
    InvalidDivision { value: String },

    #[error("Invalid position: {position:?}")]
    InvalidPosition { position: String },

    #[error("Invalid position group: {value:?} (expected offense, defense or special-teams)")]
    InvalidPositionGroup { value: String },

    #[error("Invalid playoff round: {value:?} (expected wild-card, divisional, conference or super-bowl)")]
    InvalidPlayoffRound { value: String },

    #[error("Failed to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}
