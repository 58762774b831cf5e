//! Check command implementation

use anyhow::Context;
use tracing::debug;

use super::resolve_season_type;
use crate::{
    cli::ValueKind, validate::check_week, Conference, DateString, Division, Down, Position, Season,
    SeasonType, Team, Week,
};

/// Check `value` against the closed set for `kind`.
///
/// Returns a one-line description of the accepted value. `season_type` only
/// affects `week` checks.
pub fn check_value(
    kind: ValueKind,
    value: &str,
    season_type: Option<SeasonType>,
) -> crate::Result<String> {
    let line = match kind {
        ValueKind::Season => {
            let season: Season = value.parse()?;
            format!("valid season: {season}")
        }
        ValueKind::Week => {
            let season_type = resolve_season_type(season_type)?;
            let week: Week = value.parse()?;
            let week = check_week(week.as_u8(), season_type)?;
            match week.playoff_round() {
                Some(round) => format!("valid week: {week} ({season_type}, {round})"),
                None => format!("valid week: {week} ({season_type})"),
            }
        }
        ValueKind::SeasonType => {
            let season_type: SeasonType = value.parse()?;
            format!(
                "valid season type: {season_type} ({})",
                season_type.description()
            )
        }
        ValueKind::Team => {
            let team: Team = value.parse()?;
            if team.is_historical() {
                format!(
                    "valid team: {team} ({}), historical code, now {}",
                    team.name(),
                    team.current_code()
                )
            } else {
                format!(
                    "valid team: {team} ({}), {} {}",
                    team.name(),
                    team.conference(),
                    team.division()
                )
            }
        }
        ValueKind::Date => {
            let date: DateString = value.parse()?;
            format!("valid date: {date}")
        }
        ValueKind::Down => {
            let down: Down = value.parse()?;
            format!("valid down: {down}")
        }
        ValueKind::Conference => {
            let conference: Conference = value.parse()?;
            format!("valid conference: {conference} ({})", conference.name())
        }
        ValueKind::Division => {
            let division: Division = value.parse()?;
            format!("valid division: {division}")
        }
        ValueKind::Position => {
            let position: Position = value.parse()?;
            format!(
                "valid position: {position} ({}, {})",
                position.name(),
                position.group()
            )
        }
    };
    Ok(line)
}

/// Handle the check command
pub fn handle_check(
    kind: ValueKind,
    value: &str,
    season_type: Option<SeasonType>,
) -> anyhow::Result<()> {
    debug!(?kind, value, ?season_type, "checking value");

    let line = check_value(kind, value, season_type)
        .with_context(|| format!("{} check failed for {value:?}", kind.as_str()))?;
    println!("{line}");
    Ok(())
}
