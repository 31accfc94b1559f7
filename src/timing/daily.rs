use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

use super::time_of_day::TimeOfDay;

/// Hours configured for a single weekday.
///
/// `open` and `close` are kept as the stored `"HH:MM"` text. They are only
/// parsed when a status is computed, so a bad entry on one day never stops
/// the rest of the week from being read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub closed: bool,
}

impl DaySchedule {
    pub fn new_open(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: Some(open.into()),
            close: Some(close.into()),
            closed: false,
        }
    }

    pub fn new_closed() -> Self {
        Self {
            open: None,
            close: None,
            closed: true,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The opening time text, if it is present and non-empty.
    pub fn open_label(&self) -> Option<&str> {
        self.open.as_deref().filter(|open| !open.trim().is_empty())
    }

    pub fn close_label(&self) -> Option<&str> {
        self.close.as_deref().filter(|close| !close.trim().is_empty())
    }

    /// Parses the opening and closing times for `day`.
    ///
    /// Hours must lie within one calendar day: a closing time at or before
    /// the opening time is an error.
    pub fn hours(&self, day: Weekday) -> Result<(TimeOfDay, TimeOfDay)> {
        let (Some(open), Some(close)) = (self.open_label(), self.close_label()) else {
            return Err(ScheduleError::MissingHours(day));
        };
        let opening: TimeOfDay = open.parse()?;
        let closing: TimeOfDay = close.parse()?;
        if closing <= opening {
            return Err(ScheduleError::InvertedHours {
                day,
                open: open.to_string(),
                close: close.to_string(),
            });
        }
        Ok((opening, closing))
    }
}
