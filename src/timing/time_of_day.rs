use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::{Result, ScheduleError};

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").unwrap());

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time stored as minutes since midnight, 0..=1439.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hour: u16, minute: u16) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::TimeOutOfRange { hour, minute });
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Builds from minutes since midnight, wrapping past the end of the day.
    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes % MINUTES_PER_DAY)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Minutes from `self` until `later`. Zero when `later` is not after `self`.
    pub fn minutes_until(&self, later: TimeOfDay) -> u16 {
        later.0.saturating_sub(self.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(text: &str) -> Result<Self> {
        let captures = TIME_REGEX
            .captures(text)
            .ok_or_else(|| ScheduleError::InvalidTime(text.to_string()))?;
        // The regex only lets digits through, at most two of them
        let hour: u16 = captures[1]
            .parse()
            .map_err(|_| ScheduleError::InvalidTime(text.to_string()))?;
        let minute: u16 = captures[2]
            .parse()
            .map_err(|_| ScheduleError::InvalidTime(text.to_string()))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
