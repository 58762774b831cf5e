//! Team codes, conferences and divisions.

use crate::error::{NflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL team abbreviation.
///
/// Covers the 32 current franchises (as of the 2024 season) plus the three
/// retired codes that still appear in historical data. Codes are the standard
/// 2-3 character abbreviations used across the nflverse ecosystem.
///
/// # Examples
///
/// ```rust
/// use nflverse_types::{Conference, Division, Team};
///
/// let team: Team = "KC".parse().unwrap();
/// assert_eq!(team, Team::KC);
/// assert_eq!(team.conference(), Conference::AFC);
/// assert_eq!(team.division(), Division::West);
///
/// assert!(Team::OAK.is_historical());
/// assert_eq!(Team::OAK.current_code(), Team::LV);
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    // AFC East
    BUF,
    MIA,
    NE,
    NYJ,
    // AFC North
    BAL,
    CIN,
    CLE,
    PIT,
    // AFC South
    HOU,
    IND,
    JAX,
    TEN,
    // AFC West
    DEN,
    KC,
    LV,
    LAC,
    // NFC East
    DAL,
    NYG,
    PHI,
    WAS,
    // NFC North
    CHI,
    DET,
    GB,
    MIN,
    // NFC South
    ATL,
    CAR,
    NO,
    TB,
    // NFC West
    ARI,
    LA,
    SF,
    SEA,
    // Historical
    SD,
    STL,
    OAK,
}

impl Team {
    /// Every code, current then historical. Same table as [`crate::ALL_TEAMS`].
    pub const ALL: [Team; 35] = crate::constants::ALL_TEAMS;

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::BUF => "BUF",
            Team::MIA => "MIA",
            Team::NE => "NE",
            Team::NYJ => "NYJ",
            Team::BAL => "BAL",
            Team::CIN => "CIN",
            Team::CLE => "CLE",
            Team::PIT => "PIT",
            Team::HOU => "HOU",
            Team::IND => "IND",
            Team::JAX => "JAX",
            Team::TEN => "TEN",
            Team::DEN => "DEN",
            Team::KC => "KC",
            Team::LV => "LV",
            Team::LAC => "LAC",
            Team::DAL => "DAL",
            Team::NYG => "NYG",
            Team::PHI => "PHI",
            Team::WAS => "WAS",
            Team::CHI => "CHI",
            Team::DET => "DET",
            Team::GB => "GB",
            Team::MIN => "MIN",
            Team::ATL => "ATL",
            Team::CAR => "CAR",
            Team::NO => "NO",
            Team::TB => "TB",
            Team::ARI => "ARI",
            Team::LA => "LA",
            Team::SF => "SF",
            Team::SEA => "SEA",
            Team::SD => "SD",
            Team::STL => "STL",
            Team::OAK => "OAK",
        }
    }

    /// Full franchise name for this code.
    pub fn name(&self) -> &'static str {
        match self {
            Team::BUF => "Buffalo Bills",
            Team::MIA => "Miami Dolphins",
            Team::NE => "New England Patriots",
            Team::NYJ => "New York Jets",
            Team::BAL => "Baltimore Ravens",
            Team::CIN => "Cincinnati Bengals",
            Team::CLE => "Cleveland Browns",
            Team::PIT => "Pittsburgh Steelers",
            Team::HOU => "Houston Texans",
            Team::IND => "Indianapolis Colts",
            Team::JAX => "Jacksonville Jaguars",
            Team::TEN => "Tennessee Titans",
            Team::DEN => "Denver Broncos",
            Team::KC => "Kansas City Chiefs",
            Team::LV => "Las Vegas Raiders",
            Team::LAC => "Los Angeles Chargers",
            Team::DAL => "Dallas Cowboys",
            Team::NYG => "New York Giants",
            Team::PHI => "Philadelphia Eagles",
            Team::WAS => "Washington Commanders",
            Team::CHI => "Chicago Bears",
            Team::DET => "Detroit Lions",
            Team::GB => "Green Bay Packers",
            Team::MIN => "Minnesota Vikings",
            Team::ATL => "Atlanta Falcons",
            Team::CAR => "Carolina Panthers",
            Team::NO => "New Orleans Saints",
            Team::TB => "Tampa Bay Buccaneers",
            Team::ARI => "Arizona Cardinals",
            Team::LA => "Los Angeles Rams",
            Team::SF => "San Francisco 49ers",
            Team::SEA => "Seattle Seahawks",
            Team::SD => "San Diego Chargers",
            Team::STL => "St. Louis Rams",
            Team::OAK => "Oakland Raiders",
        }
    }

    /// True for codes retired after a relocation or rename.
    pub fn is_historical(&self) -> bool {
        matches!(self, Team::SD | Team::STL | Team::OAK)
    }

    pub fn is_current(&self) -> bool {
        !self.is_historical()
    }

    /// The code the franchise plays under today.
    ///
    /// Historical codes map to their relocated franchise; current codes map
    /// to themselves.
    pub fn current_code(&self) -> Team {
        match self {
            Team::SD => Team::LAC,
            Team::STL => Team::LA,
            Team::OAK => Team::LV,
            other => *other,
        }
    }

    /// Conference of the franchise. Historical codes report the conference
    /// of their current franchise.
    pub fn conference(&self) -> Conference {
        match self.current_code() {
            Team::BUF | Team::MIA | Team::NE | Team::NYJ => Conference::AFC,
            Team::BAL | Team::CIN | Team::CLE | Team::PIT => Conference::AFC,
            Team::HOU | Team::IND | Team::JAX | Team::TEN => Conference::AFC,
            Team::DEN | Team::KC | Team::LV | Team::LAC => Conference::AFC,
            _ => Conference::NFC,
        }
    }

    /// Division of the franchise. Historical codes report the division of
    /// their current franchise.
    pub fn division(&self) -> Division {
        match self.current_code() {
            Team::BUF | Team::MIA | Team::NE | Team::NYJ => Division::East,
            Team::DAL | Team::NYG | Team::PHI | Team::WAS => Division::East,
            Team::BAL | Team::CIN | Team::CLE | Team::PIT => Division::North,
            Team::CHI | Team::DET | Team::GB | Team::MIN => Division::North,
            Team::HOU | Team::IND | Team::JAX | Team::TEN => Division::South,
            Team::ATL | Team::CAR | Team::NO | Team::TB => Division::South,
            _ => Division::West,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        Team::ALL
            .into_iter()
            .find(|team| team.as_str() == s)
            .ok_or_else(|| NflError::InvalidTeam {
                code: s.to_string(),
            })
    }
}

/// NFL conference.
///
/// - AFC: American Football Conference
/// - NFC: National Football Conference
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    AFC,
    NFC,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::AFC, Conference::NFC];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::AFC => "AFC",
            Conference::NFC => "NFC",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Conference::AFC => "American Football Conference",
            Conference::NFC => "National Football Conference",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Conference {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AFC" => Ok(Conference::AFC),
            "NFC" => Ok(Conference::NFC),
            _ => Err(NflError::InvalidConference {
                value: s.to_string(),
            }),
        }
    }
}

/// Division name within a conference. Not tied to a specific conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    East,
    West,
    North,
    South,
}

impl Division {
    pub const ALL: [Division; 4] = [
        Division::East,
        Division::West,
        Division::North,
        Division::South,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::East => "East",
            Division::West => "West",
            Division::North => "North",
            Division::South => "South",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "East" => Ok(Division::East),
            "West" => Ok(Division::West),
            "North" => Ok(Division::North),
            "South" => Ok(Division::South),
            _ => Err(NflError::InvalidDivision {
                value: s.to_string(),
            }),
        }
    }
}
