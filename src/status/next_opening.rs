use std::fmt;

use chrono::Weekday;
use serde::Serialize;

use crate::timing::{schedule::WeeklySchedule, time_of_day::TimeOfDay};

/// Short Spanish weekday names, indexed from Sunday.
pub const DAY_ABBREVIATIONS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];

pub fn day_abbreviation(day: Weekday) -> &'static str {
    DAY_ABBREVIATIONS[day.num_days_from_sunday() as usize]
}

/// The next day on which the store opens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextOpening {
    #[serde(skip)]
    pub day: Weekday,
    pub day_index: u32,
    pub day_name: &'static str,
    pub open: String,
}

impl fmt::Display for NextOpening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day_name, self.open)
    }
}

/// Walks forward one day at a time from the day after `from` through the six
/// days that follow it, and returns the first day that is configured, not
/// closed and has an opening time. `from` itself is never revisited.
///
/// Returns `None` when no other day of the week opens.
pub fn find_next_open_day(schedule: &WeeklySchedule, from: Weekday) -> Option<NextOpening> {
    let mut day = from;
    for _ in 1..7 {
        day = day.succ();
        let Some(timing) = schedule.day(day) else {
            continue;
        };
        if timing.is_closed() {
            continue;
        }
        if let Some(open) = timing.open_label() {
            let open = match open.parse::<TimeOfDay>() {
                Ok(time) => time.to_string(),
                Err(_) => open.trim().to_string(),
            };
            return Some(NextOpening {
                day,
                day_index: day.num_days_from_sunday(),
                day_name: day_abbreviation(day),
                open,
            });
        }
    }
    None
}
