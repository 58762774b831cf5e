//! NFL data constants.
//!
//! Every table here is a compile-time constant; there is no way to mutate
//! them at runtime.

use crate::types::{SeasonType, Team};

/// Minimum valid NFL season (modern era).
///
/// Data availability varies by source, but most data starts from 1999.
pub const MIN_SEASON: u16 = 1999;

/// Maximum regular season week (expanded to 18 weeks in 2021).
pub const MAX_REGULAR_SEASON_WEEK: u8 = 18;

/// Maximum playoff week.
///
/// - Week 19: Wild Card
/// - Week 20: Divisional
/// - Week 21: Conference Championships
/// - Week 22: Super Bowl
pub const MAX_PLAYOFF_WEEK: u8 = 22;

const _: () = assert!(MAX_REGULAR_SEASON_WEEK < MAX_PLAYOFF_WEEK);

/// Valid season types.
pub const SEASON_TYPES: [SeasonType; 3] = SeasonType::ALL;

/// Current NFL team abbreviations (as of the 2024 season), grouped by
/// conference and division.
pub const NFL_TEAMS: [Team; 32] = [
    // AFC East
    Team::BUF,
    Team::MIA,
    Team::NE,
    Team::NYJ,
    // AFC North
    Team::BAL,
    Team::CIN,
    Team::CLE,
    Team::PIT,
    // AFC South
    Team::HOU,
    Team::IND,
    Team::JAX,
    Team::TEN,
    // AFC West
    Team::DEN,
    Team::KC,
    Team::LV,
    Team::LAC,
    // NFC East
    Team::DAL,
    Team::NYG,
    Team::PHI,
    Team::WAS,
    // NFC North
    Team::CHI,
    Team::DET,
    Team::GB,
    Team::MIN,
    // NFC South
    Team::ATL,
    Team::CAR,
    Team::NO,
    Team::TB,
    // NFC West
    Team::ARI,
    Team::LA,
    Team::SF,
    Team::SEA,
];

/// Team abbreviations of relocated or renamed franchises. They no longer
/// appear in current data but show up in historical seasons.
pub const HISTORICAL_TEAMS: [Team; 3] = [
    Team::SD,  // now LAC
    Team::STL, // now LA
    Team::OAK, // now LV
];

/// All valid team abbreviations: [`NFL_TEAMS`] followed by [`HISTORICAL_TEAMS`].
pub const ALL_TEAMS: [Team; NFL_TEAMS.len() + HISTORICAL_TEAMS.len()] = {
    let mut all = [Team::BUF; NFL_TEAMS.len() + HISTORICAL_TEAMS.len()];
    let mut i = 0;
    while i < NFL_TEAMS.len() {
        all[i] = NFL_TEAMS[i];
        i += 1;
    }
    let mut j = 0;
    while j < HISTORICAL_TEAMS.len() {
        all[NFL_TEAMS.len() + j] = HISTORICAL_TEAMS[j];
        j += 1;
    }
    all
};
