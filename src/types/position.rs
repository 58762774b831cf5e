//! Player position types.

use crate::error::{NflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player position abbreviation.
///
/// Covers offensive, defensive and special teams positions. Codes are matched
/// exactly; there is no alias handling (`"D/ST"`, `"qb"` and similar are
/// rejected).
///
/// # Examples
///
/// ```rust
/// use nflverse_types::{Position, PositionGroup};
///
/// let pos: Position = "QB".parse().unwrap();
/// assert_eq!(pos, Position::QB);
/// assert_eq!(pos.group(), PositionGroup::Offense);
/// assert_eq!(Position::LS.to_string(), "LS");
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    // Offense
    QB,
    RB,
    FB,
    WR,
    TE,
    OL,
    OT,
    OG,
    C,
    // Defense
    DL,
    DE,
    DT,
    NT,
    LB,
    ILB,
    OLB,
    MLB,
    DB,
    CB,
    S,
    SS,
    FS,
    // Special teams
    K,
    P,
    LS,
}

impl Position {
    pub const ALL: [Position; 25] = [
        Position::QB,
        Position::RB,
        Position::FB,
        Position::WR,
        Position::TE,
        Position::OL,
        Position::OT,
        Position::OG,
        Position::C,
        Position::DL,
        Position::DE,
        Position::DT,
        Position::NT,
        Position::LB,
        Position::ILB,
        Position::OLB,
        Position::MLB,
        Position::DB,
        Position::CB,
        Position::S,
        Position::SS,
        Position::FS,
        Position::K,
        Position::P,
        Position::LS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::FB => "FB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::OT => "OT",
            Position::OG => "OG",
            Position::C => "C",
            Position::DL => "DL",
            Position::DE => "DE",
            Position::DT => "DT",
            Position::NT => "NT",
            Position::LB => "LB",
            Position::ILB => "ILB",
            Position::OLB => "OLB",
            Position::MLB => "MLB",
            Position::DB => "DB",
            Position::CB => "CB",
            Position::S => "S",
            Position::SS => "SS",
            Position::FS => "FS",
            Position::K => "K",
            Position::P => "P",
            Position::LS => "LS",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::QB => "Quarterback",
            Position::RB => "Running Back",
            Position::FB => "Fullback",
            Position::WR => "Wide Receiver",
            Position::TE => "Tight End",
            Position::OL => "Offensive Line",
            Position::OT => "Offensive Tackle",
            Position::OG => "Offensive Guard",
            Position::C => "Center",
            Position::DL => "Defensive Line",
            Position::DE => "Defensive End",
            Position::DT => "Defensive Tackle",
            Position::NT => "Nose Tackle",
            Position::LB => "Linebacker",
            Position::ILB => "Inside Linebacker",
            Position::OLB => "Outside Linebacker",
            Position::MLB => "Middle Linebacker",
            Position::DB => "Defensive Back",
            Position::CB => "Cornerback",
            Position::S => "Safety",
            Position::SS => "Strong Safety",
            Position::FS => "Free Safety",
            Position::K => "Kicker",
            Position::P => "Punter",
            Position::LS => "Long Snapper",
        }
    }

    /// Unit this position plays on.
    pub fn group(&self) -> PositionGroup {
        match self {
            Position::QB
            | Position::RB
            | Position::FB
            | Position::WR
            | Position::TE
            | Position::OL
            | Position::OT
            | Position::OG
            | Position::C => PositionGroup::Offense,
            Position::K | Position::P | Position::LS => PositionGroup::SpecialTeams,
            _ => PositionGroup::Defense,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        Position::ALL
            .into_iter()
            .find(|pos| pos.as_str() == s)
            .ok_or_else(|| NflError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

/// Offense, defense or special teams.
///
/// `as_str` and serde use kebab-case codes; `Display` gives the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionGroup {
    Offense,
    Defense,
    SpecialTeams,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 3] = [
        PositionGroup::Offense,
        PositionGroup::Defense,
        PositionGroup::SpecialTeams,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionGroup::Offense => "offense",
            PositionGroup::Defense => "defense",
            PositionGroup::SpecialTeams => "special-teams",
        }
    }

    /// Positions in this group, in declaration order.
    pub fn positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| pos.group() == *self)
            .collect()
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PositionGroup::Offense => "Offense",
            PositionGroup::Defense => "Defense",
            PositionGroup::SpecialTeams => "Special Teams",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PositionGroup {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        PositionGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| NflError::InvalidPositionGroup {
                value: s.to_string(),
            })
    }
}
