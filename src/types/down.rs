//! Down numbers.

use crate::error::{NflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Down number in football (1st, 2nd, 3rd or 4th down).
///
/// Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Down {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl Down {
    pub const ALL: [Down; 4] = [Down::First, Down::Second, Down::Third, Down::Fourth];

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Down {
    type Error = NflError;

    fn try_from(down: u8) -> Result<Self> {
        match down {
            1 => Ok(Down::First),
            2 => Ok(Down::Second),
            3 => Ok(Down::Third),
            4 => Ok(Down::Fourth),
            _ => Err(NflError::InvalidDown { down: down.into() }),
        }
    }
}

impl From<Down> for u8 {
    fn from(down: Down) -> u8 {
        down as u8
    }
}

impl fmt::Display for Down {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for Down {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        let down: i64 = s.parse()?;
        let down = u8::try_from(down).map_err(|_| NflError::InvalidDown { down })?;
        Self::try_from(down)
    }
}
