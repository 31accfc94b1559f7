use std::env;

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::{
    error::{Result, ScheduleError},
    timing::business_time::{fixed_offset, BUSINESS_UTC_OFFSET_MINUTES},
};

pub const DEFAULT_CLOSING_SOON_MINUTES: u16 = 30;
pub const DEFAULT_OPENING_SOON_MINUTES: u16 = 60;
pub const DEFAULT_VACATION_MESSAGE: &str = "Cerrado por vacaciones";

/// Settings shared by every status computation.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Business time zone as minutes east of UTC.
    pub utc_offset_minutes: i32,
    /// When set, the offset is read from the zone's rules instead.
    pub time_zone: Option<Tz>,
    pub closing_soon_minutes: u16,
    pub opening_soon_minutes: u16,
    pub vacation_message: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: BUSINESS_UTC_OFFSET_MINUTES,
            time_zone: None,
            closing_soon_minutes: DEFAULT_CLOSING_SOON_MINUTES,
            opening_soon_minutes: DEFAULT_OPENING_SOON_MINUTES,
            vacation_message: DEFAULT_VACATION_MESSAGE.to_string(),
        }
    }
}

impl StatusConfig {
    pub fn from_config(config: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(config)?;
        config.validate()
    }

    /// Reads `STORE_STATUS_UTC_OFFSET_MINUTES` and `STORE_STATUS_TIME_ZONE`.
    /// Anything unset keeps its default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`StatusConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(offset) = lookup("STORE_STATUS_UTC_OFFSET_MINUTES") {
            config.utc_offset_minutes =
                offset
                    .trim()
                    .parse()
                    .map_err(|_| ScheduleError::InvalidSetting {
                        name: "STORE_STATUS_UTC_OFFSET_MINUTES",
                        value: offset.clone(),
                    })?;
        }

        if let Some(name) = lookup("STORE_STATUS_TIME_ZONE") {
            let time_zone: Tz = name
                .parse()
                .map_err(|_| ScheduleError::UnknownTimeZone(name.clone()))?;
            config.time_zone = Some(time_zone);
        }

        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if fixed_offset(self.utc_offset_minutes).is_none() {
            return Err(ScheduleError::InvalidOffset(self.utc_offset_minutes));
        }
        Ok(self)
    }

    /// The business zone's offset from UTC at `now`, in minutes.
    pub fn offset_minutes_at(&self, now: DateTime<Utc>) -> i32 {
        match self.time_zone {
            Some(time_zone) => {
                time_zone
                    .offset_from_utc_datetime(&now.naive_utc())
                    .fix()
                    .local_minus_utc()
                    / 60
            }
            None => self.utc_offset_minutes,
        }
    }
}
