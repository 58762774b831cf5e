//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::types::{Conference, Division, Position, PositionGroup, SeasonType, Team};

/// One line of `teams` output.
#[derive(Debug, Serialize)]
pub struct TeamRow {
    /// Team code as it appears in data.
    pub code: Team,
    /// Full franchise name.
    pub name: &'static str,
    pub conference: Conference,
    pub division: Division,
    /// Whether the code is retired.
    pub historical: bool,
    /// Code the franchise uses today (same as `code` for current teams).
    pub current_code: Team,
}

impl From<Team> for TeamRow {
    fn from(team: Team) -> Self {
        Self {
            code: team,
            name: team.name(),
            conference: team.conference(),
            division: team.division(),
            historical: team.is_historical(),
            current_code: team.current_code(),
        }
    }
}

/// One line of `positions` output.
#[derive(Debug, Serialize)]
pub struct PositionRow {
    pub code: Position,
    pub name: &'static str,
    pub group: PositionGroup,
}

impl From<Position> for PositionRow {
    fn from(position: Position) -> Self {
        Self {
            code: position,
            name: position.name(),
            group: position.group(),
        }
    }
}

/// One line of `season-types` output.
#[derive(Debug, Serialize)]
pub struct SeasonTypeRow {
    pub code: SeasonType,
    pub description: &'static str,
    /// First week of the phase.
    pub first_week: u8,
    /// Last week of the phase.
    pub last_week: u8,
}

impl From<SeasonType> for SeasonTypeRow {
    fn from(season_type: SeasonType) -> Self {
        let range = season_type.week_range();
        Self {
            code: season_type,
            description: season_type.description(),
            first_week: *range.start(),
            last_week: *range.end(),
        }
    }
}
