//! Predicates for checking raw values against the closed domain sets.
//!
//! The typed constructors (`Season::new`, `"KC".parse::<Team>()`, ...) are the
//! preferred way to ingest data. These helpers cover the cases where a caller
//! only needs a yes/no answer for an integer or string it already holds.

use crate::constants::{
    ALL_TEAMS, HISTORICAL_TEAMS, MAX_PLAYOFF_WEEK, MAX_REGULAR_SEASON_WEEK, MIN_SEASON, NFL_TEAMS,
};
use crate::error::{NflError, Result};
use crate::types::{time::split_date, Conference, Division, Position, SeasonType, Week};


/// Seasons from [`MIN_SEASON`] onward. The ceiling is only the width of
/// [`crate::Season`]'s storage.
pub fn is_valid_season(season: i64) -> bool {
    (i64::from(MIN_SEASON)..=i64::from(u16::MAX)).contains(&season)
}

/// Any week from 1 through [`MAX_PLAYOFF_WEEK`], regardless of phase.
pub fn is_valid_week(week: i64) -> bool {
    (1..=i64::from(MAX_PLAYOFF_WEEK)).contains(&week)
}

pub fn is_valid_regular_season_week(week: i64) -> bool {
    (1..=i64::from(MAX_REGULAR_SEASON_WEEK)).contains(&week)
}

pub fn is_valid_playoff_week(week: i64) -> bool {
    (i64::from(MAX_REGULAR_SEASON_WEEK) + 1..=i64::from(MAX_PLAYOFF_WEEK)).contains(&week)
}

pub fn is_valid_down(down: i64) -> bool {
    (1..=4).contains(&down)
}

pub fn is_valid_season_type(value: &str) -> bool {
    value.parse::<SeasonType>().is_ok()
}

/// True for any code in [`ALL_TEAMS`], current or historical.
pub fn is_valid_team(code: &str) -> bool {
    ALL_TEAMS.iter().any(|team| team.as_str() == code)
}

/// True only for the 32 codes in [`NFL_TEAMS`].
pub fn is_current_team(code: &str) -> bool {
    NFL_TEAMS.iter().any(|team| team.as_str() == code)
}

pub fn is_historical_team(code: &str) -> bool {
    HISTORICAL_TEAMS.iter().any(|team| team.as_str() == code)
}

/// True if `value` has the `YYYY-MM-DD` shape.
pub fn is_valid_date_string(value: &str) -> bool {
    split_date(value).is_some()
}

pub fn is_valid_conference(value: &str) -> bool {
    value.parse::<Conference>().is_ok()
}

pub fn is_valid_division(value: &str) -> bool {
    value.parse::<Division>().is_ok()
}

pub fn is_valid_position(value: &str) -> bool {
    value.parse::<Position>().is_ok()
}

/// True if `week` falls inside the week range of `season_type`.
pub fn week_in_phase(week: Week, season_type: SeasonType) -> bool {
    season_type.week_range().contains(&week.as_u8())
}

/// Validate a raw week number against a season phase.
///
/// The week must first be a valid [`Week`] (1-22) and then fall inside the
/// range for `season_type`: REG 1-18, POST 19-22, PRE 1-18.
///
/// # Examples
///
/// ```rust
/// use nflverse_types::{validate::check_week, SeasonType};
///
/// assert!(check_week(5, SeasonType::REG).is_ok());
/// assert!(check_week(20, SeasonType::REG).is_err());
/// assert!(check_week(20, SeasonType::POST).is_ok());
/// ```
pub fn check_week(week: u8, season_type: SeasonType) -> Result<Week> {
    let parsed = Week::new(week)?;
    if !week_in_phase(parsed, season_type) {
        let range = season_type.week_range();
        return Err(NflError::WeekOutOfPhase {
            week,
            season_type,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(parsed)
}
