use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Running time of a movie in whole minutes.
///
/// Stored as minutes on disk, shown and entered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Runtime(u32);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Runtime must be in HH:MM format, got '{0}'")]
pub struct RuntimeParseError(pub String);

impl Runtime {
    pub const fn from_minutes(minutes: u32) -> Self {
        Runtime(minutes)
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for Runtime {
    type Err = RuntimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RuntimeParseError(s.to_string());
        let (hours, minutes) = s.split_once(':').ok_or_else(err)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(err());
        }

        let hours: u32 = hours.parse().map_err(|_| err())?;
        let minutes: u32 = minutes.parse().map_err(|_| err())?;
        if minutes >= 60 {
            return Err(err());
        }
        Ok(Runtime(hours * 60 + minutes))
    }
}
