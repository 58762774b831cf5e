//! Season types command implementation

use crate::{models::output::SeasonTypeRow, SEASON_TYPES};

/// Handle the season-types command
pub fn handle_season_types(as_json: bool) -> anyhow::Result<()> {
    let rows: Vec<SeasonTypeRow> = SEASON_TYPES.into_iter().map(SeasonTypeRow::from).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{:<4} {:<15} weeks {}-{}",
            row.code.as_str(),
            row.description,
            row.first_week,
            row.last_week
        );
    }
    Ok(())
}
