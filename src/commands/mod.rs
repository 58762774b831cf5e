//! Command implementations for the nflverse-types CLI

pub mod check;
pub mod positions;
pub mod season_types;
pub mod teams;

use crate::{error::Result, SeasonType, SEASON_TYPE_ENV_VAR};

/// Season type for phase-dependent checks: the flag, then the environment,
/// then REG.
pub fn resolve_season_type(season_type: Option<SeasonType>) -> Result<SeasonType> {
    if let Some(season_type) = season_type {
        return Ok(season_type);
    }
    match std::env::var(SEASON_TYPE_ENV_VAR) {
        Ok(value) => value.parse(),
        Err(_) => Ok(SeasonType::REG),
    }
}
