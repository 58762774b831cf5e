//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::{PositionGroup, SeasonType};

/// Which slice of the team tables to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamScope {
    All,
    Current,
    Historical,
}

impl TeamScope {
    pub fn from_flags(current: bool, historical: bool) -> Self {
        match (current, historical) {
            (true, false) => TeamScope::Current,
            (false, true) => TeamScope::Historical,
            _ => TeamScope::All,
        }
    }
}

/// Position group filter for `positions --group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    Offense,
    Defense,
    SpecialTeams,
}

impl From<GroupArg> for PositionGroup {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Offense => PositionGroup::Offense,
            GroupArg::Defense => PositionGroup::Defense,
            GroupArg::SpecialTeams => PositionGroup::SpecialTeams,
        }
    }
}

/// Kind of raw value accepted by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Season,
    Week,
    SeasonType,
    Team,
    Date,
    Down,
    Conference,
    Division,
    Position,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Season => "season",
            ValueKind::Week => "week",
            ValueKind::SeasonType => "season type",
            ValueKind::Team => "team",
            ValueKind::Date => "date",
            ValueKind::Down => "down",
            ValueKind::Conference => "conference",
            ValueKind::Division => "division",
            ValueKind::Position => "position",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List team codes with franchise name, conference and division.
    Teams {
        /// Only the 32 current franchises.
        #[clap(long, conflicts_with = "historical")]
        current: bool,

        /// Only retired codes of relocated franchises.
        #[clap(long)]
        historical: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List position codes.
    Positions {
        /// Restrict to one unit.
        #[clap(long, short, value_enum)]
        group: Option<GroupArg>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List season types and their week ranges.
    SeasonTypes {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Check a raw value against its closed set.
    ///
    /// Exits non-zero when the value is rejected.
    Check {
        /// What kind of value to check.
        #[clap(value_enum)]
        kind: ValueKind,

        /// The raw value, exactly as it appears in the data.
        value: String,

        /// Season phase for `week` checks (or set `NFLVERSE_SEASON_TYPE`; defaults to REG).
        #[clap(long, short = 't')]
        season_type: Option<SeasonType>,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nflverse-types",
    version,
    about = "Inspect the shared NFL vocabulary tables"
)]
pub struct NflVerse {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[clap(long, short, global = true)]
    pub verbose: bool,
}
