use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc, Weekday};
use tracing::warn;

use super::time_of_day::TimeOfDay;

/// Offset of the business time zone from UTC, in minutes (UTC-6).
pub const BUSINESS_UTC_OFFSET_MINUTES: i32 = -6 * 60;

/// A point in time as seen on the store's wall clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusinessTime {
    pub weekday: Weekday,
    pub time: TimeOfDay,
}

/// Builds a fixed offset from minutes east of UTC, if it is a real offset.
pub fn fixed_offset(offset_minutes: i32) -> Option<FixedOffset> {
    offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
}

/// Shifts `now` into the business time zone.
///
/// Only the explicit offset is applied; the host's local time zone plays no
/// part. An offset outside +-24h falls back to [`BUSINESS_UTC_OFFSET_MINUTES`].
pub fn business_time(now: DateTime<Utc>, offset_minutes: i32) -> BusinessTime {
    let offset = fixed_offset(offset_minutes).unwrap_or_else(|| {
        warn!(
            offset_minutes,
            "invalid business utc offset, using the default zone"
        );
        business_zone()
    });
    let local = now.with_timezone(&offset);
    BusinessTime {
        weekday: local.weekday(),
        time: TimeOfDay::from_minutes((local.hour() * 60 + local.minute()) as u16),
    }
}

fn business_zone() -> FixedOffset {
    fixed_offset(BUSINESS_UTC_OFFSET_MINUTES).unwrap_or_else(|| Utc.fix())
}
