//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nflverse_types::{
    cli::{Commands, NflVerse, TeamScope},
    commands::{
        check::handle_check, positions::handle_positions, season_types::handle_season_types,
        teams::handle_teams,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = NflVerse::parse();

    let log_level = if app.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match app.command {
        Commands::Teams {
            current,
            historical,
            json,
        } => handle_teams(TeamScope::from_flags(current, historical), json)?,

        Commands::Positions { group, json } => handle_positions(group.map(Into::into), json)?,

        Commands::SeasonTypes { json } => handle_season_types(json)?,

        Commands::Check {
            kind,
            value,
            season_type,
        } => handle_check(kind, &value, season_type)?,
    }

    Ok(())
}
