//! Shared NFL domain vocabulary
//!
//! Types and constant tables describing NFL seasons, weeks, teams and
//! positions, for reuse across the nflverse family of crates. Nothing here
//! fetches, computes or stores data; the crate only defines the valid value
//! spaces and lets the compiler enforce them.
//!
//! ## Contents
//!
//! - **Types**: [`Season`], [`Week`], [`SeasonType`], [`Team`], [`DateString`],
//!   [`Down`], [`Conference`], [`Division`], [`Position`]
//! - **Tables**: [`MIN_SEASON`], [`MAX_REGULAR_SEASON_WEEK`],
//!   [`MAX_PLAYOFF_WEEK`], [`SEASON_TYPES`], [`NFL_TEAMS`],
//!   [`HISTORICAL_TEAMS`], [`ALL_TEAMS`]
//! - **Validation**: `is_valid_*` predicates for raw integers and strings in
//!   [`validate`]
//!
//! ## Quick Start
//!
//! ```rust
//! use nflverse_types::{validate, SeasonType, Team, ALL_TEAMS, NFL_TEAMS};
//!
//! # fn example() -> nflverse_types::Result<()> {
//! let week = validate::check_week(5, SeasonType::REG)?;
//! assert!(week.is_regular_season());
//!
//! let team: Team = "OAK".parse()?;
//! assert!(ALL_TEAMS.contains(&team));
//! assert!(!NFL_TEAMS.contains(&team));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Command Line
//!
//! With the default `cli` feature the `nflverse-types` binary prints the
//! tables and checks raw values:
//! ```bash
//! nflverse-types teams --historical
//! nflverse-types check week 20 --season-type POST
//! ```

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;
pub mod constants;
pub mod error;
#[cfg(feature = "cli")]
pub mod models;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use constants::{
    ALL_TEAMS, HISTORICAL_TEAMS, MAX_PLAYOFF_WEEK, MAX_REGULAR_SEASON_WEEK, MIN_SEASON, NFL_TEAMS,
    SEASON_TYPES,
};
pub use error::{NflError, Result};
pub use types::{
    Conference, DateString, Division, Down, PlayoffRound, Position, PositionGroup, Season,
    SeasonType, Team, Week,
};

/// Environment variable consulted for the default season type of `check week`.
pub const SEASON_TYPE_ENV_VAR: &str = "NFLVERSE_SEASON_TYPE";
