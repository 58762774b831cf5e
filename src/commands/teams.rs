//! Teams command implementation

use tracing::debug;

use crate::{
    cli::TeamScope,
    constants::{ALL_TEAMS, HISTORICAL_TEAMS, NFL_TEAMS},
    models::output::TeamRow,
    Team,
};

/// Rows for the requested slice of the team tables, in table order.
pub fn team_rows(scope: TeamScope) -> Vec<TeamRow> {
    let teams: &[Team] = match scope {
        TeamScope::All => &ALL_TEAMS,
        TeamScope::Current => &NFL_TEAMS,
        TeamScope::Historical => &HISTORICAL_TEAMS,
    };
    teams.iter().copied().map(TeamRow::from).collect()
}

/// Render team rows as aligned text lines.
pub fn format_team_rows(rows: &[TeamRow]) -> String {
    rows.iter()
        .map(|row| {
            let mut line = format!(
                "{:<4} {:<24} {} {}",
                row.code.as_str(),
                row.name,
                row.conference,
                row.division
            );
            if row.historical {
                line.push_str(&format!(" (now {})", row.current_code));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle the teams command
pub fn handle_teams(scope: TeamScope, as_json: bool) -> anyhow::Result<()> {
    let rows = team_rows(scope);
    debug!(?scope, count = rows.len(), "listing teams");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", format_team_rows(&rows));
    }
    Ok(())
}
