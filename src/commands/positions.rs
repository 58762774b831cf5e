//! Positions command implementation

use tracing::debug;

use crate::{models::output::PositionRow, Position, PositionGroup};

pub fn position_rows(group: Option<PositionGroup>) -> Vec<PositionRow> {
    let positions = match group {
        Some(group) => group.positions(),
        None => Position::ALL.to_vec(),
    };
    positions.into_iter().map(PositionRow::from).collect()
}

/// Handle the positions command
pub fn handle_positions(group: Option<PositionGroup>, as_json: bool) -> anyhow::Result<()> {
    let rows = position_rows(group);
    debug!(?group, count = rows.len(), "listing positions");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:<4} {:<20} {}", row.code.as_str(), row.name, row.group);
    }
    Ok(())
}
