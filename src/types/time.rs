//! Season, week and calendar types.

use crate::constants::{MAX_PLAYOFF_WEEK, MAX_REGULAR_SEASON_WEEK, MIN_SEASON};
use crate::error::{NflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[cfg(test)]
mod tests;

/// An NFL season, identified by the calendar year it begins.
///
/// Seasons before [`MIN_SEASON`] (the start of the modern data era) are
/// rejected by every constructor. The only ceiling is the `u16` storage,
/// so years above 65535 are rejected as well.
///
/// # Examples
///
/// ```rust
/// use nflverse_types::Season;
///
/// let season = Season::new(2023).unwrap();
/// assert_eq!(season.as_u16(), 2023);
/// assert!(Season::new(1998).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Season(u16);

impl Season {
    pub fn new(year: u16) -> Result<Self> {
        if year < MIN_SEASON {
            return Err(NflError::InvalidSeason {
                season: year.into(),
                min: MIN_SEASON,
            });
        }
        Ok(Self(year))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Season {
    type Error = NflError;

    fn try_from(year: u16) -> Result<Self> {
        Self::new(year)
    }
}

impl From<Season> for u16 {
    fn from(season: Season) -> u16 {
        season.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        let year: i64 = s.parse()?;
        let year = u16::try_from(year).map_err(|_| NflError::InvalidSeason {
            season: year,
            min: MIN_SEASON,
        })?;
        Self::new(year)
    }
}

/// A week number within a season.
///
/// Regular season and postseason share one numbering:
/// - Regular season: 1-18
/// - Playoffs: 19-22 (Wild Card, Divisional, Conference, Super Bowl)
///
/// A `Week` does not know which phase it belongs to; pair it with a
/// [`SeasonType`] and use [`crate::validate::check_week`] when the phase matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(u8);

impl Week {
    pub fn new(week: u8) -> Result<Self> {
        if !(1..=MAX_PLAYOFF_WEEK).contains(&week) {
            return Err(NflError::InvalidWeek {
                week: week.into(),
                max: MAX_PLAYOFF_WEEK,
            });
        }
        Ok(Self(week))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// True for weeks 1 through [`MAX_REGULAR_SEASON_WEEK`].
    pub fn is_regular_season(&self) -> bool {
        self.0 <= MAX_REGULAR_SEASON_WEEK
    }

    /// True for the playoff weeks after the regular season.
    pub fn is_postseason(&self) -> bool {
        self.0 > MAX_REGULAR_SEASON_WEEK
    }

    pub fn playoff_round(&self) -> Option<PlayoffRound> {
        PlayoffRound::ALL
            .into_iter()
            .find(|round| round.week() == self.0)
    }
}

impl TryFrom<u8> for Week {
    type Error = NflError;

    fn try_from(week: u8) -> Result<Self> {
        Self::new(week)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> u8 {
        week.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        let week: i64 = s.parse()?;
        let week = u8::try_from(week).map_err(|_| NflError::InvalidWeek {
            week,
            max: MAX_PLAYOFF_WEEK,
        })?;
        Self::new(week)
    }
}

/// Phase of an NFL season.
///
/// - REG: Regular season
/// - POST: Postseason (playoffs)
/// - PRE: Preseason
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    REG,
    POST,
    PRE,
}

impl SeasonType {
    pub const ALL: [SeasonType; 3] = [SeasonType::REG, SeasonType::POST, SeasonType::PRE];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::REG => "REG",
            SeasonType::POST => "POST",
            SeasonType::PRE => "PRE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SeasonType::REG => "Regular season",
            SeasonType::POST => "Postseason",
            SeasonType::PRE => "Preseason",
        }
    }

    /// Week numbers that belong to this phase.
    ///
    /// Preseason weeks reuse the low end of the numbering and are only
    /// bounded by the regular-season maximum.
    pub fn week_range(&self) -> RangeInclusive<u8> {
        match self {
            SeasonType::REG | SeasonType::PRE => 1..=MAX_REGULAR_SEASON_WEEK,
            SeasonType::POST => (MAX_REGULAR_SEASON_WEEK + 1)..=MAX_PLAYOFF_WEEK,
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "REG" => Ok(SeasonType::REG),
            "POST" => Ok(SeasonType::POST),
            "PRE" => Ok(SeasonType::PRE),
            _ => Err(NflError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}

/// Postseason rounds and the week each one is played in.
///
/// `as_str` and serde use kebab-case codes (`"wild-card"`); `Display` gives
/// the round's full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayoffRound {
    WildCard,
    Divisional,
    Conference,
    SuperBowl,
}

impl PlayoffRound {
    pub const ALL: [PlayoffRound; 4] = [
        PlayoffRound::WildCard,
        PlayoffRound::Divisional,
        PlayoffRound::Conference,
        PlayoffRound::SuperBowl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayoffRound::WildCard => "wild-card",
            PlayoffRound::Divisional => "divisional",
            PlayoffRound::Conference => "conference",
            PlayoffRound::SuperBowl => "super-bowl",
        }
    }

    pub fn week(&self) -> u8 {
        match self {
            PlayoffRound::WildCard => 19,
            PlayoffRound::Divisional => 20,
            PlayoffRound::Conference => 21,
            PlayoffRound::SuperBowl => MAX_PLAYOFF_WEEK,
        }
    }
}

impl fmt::Display for PlayoffRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayoffRound::WildCard => "Wild Card",
            PlayoffRound::Divisional => "Divisional",
            PlayoffRound::Conference => "Conference Championship",
            PlayoffRound::SuperBowl => "Super Bowl",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlayoffRound {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        PlayoffRound::ALL
            .into_iter()
            .find(|round| round.as_str() == s)
            .ok_or_else(|| NflError::InvalidPlayoffRound {
                value: s.to_string(),
            })
    }
}

/// A date string in ISO `YYYY-MM-DD` form.
///
/// Only the shape is checked (digit groups, month 01-12, day 01-31); there is
/// no calendar validation, so `2023-02-31` is accepted.
///
/// # Examples
///
/// ```rust
/// use nflverse_types::DateString;
///
/// let date: DateString = "2023-09-07".parse().unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 9);
/// assert!("9/7/2023".parse::<DateString>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateString {
    raw: String,
    year: u16,
    month: u8,
    day: u8,
}

impl DateString {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        match split_date(&raw) {
            Some((year, month, day)) => Ok(Self {
                raw,
                year,
                month,
                day,
            }),
            None => Err(NflError::InvalidDate { value: raw }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

/// Split a `YYYY-MM-DD` string into its numeric parts, if it has that shape.
pub(crate) fn split_date(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits = |range: std::ops::Range<usize>| -> Option<u16> {
        bytes[range].iter().try_fold(0u16, |acc, b| {
            b.is_ascii_digit().then(|| acc * 10 + u16::from(b - b'0'))
        })
    };

    let year = digits(0..4)?;
    let month = u8::try_from(digits(5..7)?).ok()?;
    let day = u8::try_from(digits(8..10)?).ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

impl TryFrom<String> for DateString {
    type Error = NflError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DateString> for String {
    fn from(date: DateString) -> String {
        date.raw
    }
}

impl fmt::Display for DateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for DateString {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
