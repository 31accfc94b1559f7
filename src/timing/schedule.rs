use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::daily::DaySchedule;

/// Opening hours for a full week, indexed from Sunday (0) to Saturday (6).
///
/// A day with no entry has never been configured by the store and is treated
/// the same way as a day marked `closed`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScheduleRecord", into = "ScheduleRecord")]
pub struct WeeklySchedule {
    timings: [Option<DaySchedule>; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, day: Weekday, timing: DaySchedule) -> Self {
        self.set_day(day, timing);
        self
    }

    pub fn set_day(&mut self, day: Weekday, timing: DaySchedule) {
        self.timings[day.num_days_from_sunday() as usize] = Some(timing);
    }

    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.timings[day.num_days_from_sunday() as usize].as_ref()
    }

    /// Decodes a schedule record keyed by lowercase English weekday names.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Wire shape of a schedule: one optional entry per lowercase weekday name.
#[derive(Default, Serialize, Deserialize)]
struct ScheduleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sunday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    monday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tuesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wednesday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    thursday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    friday: Option<DaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saturday: Option<DaySchedule>,
}

impl From<ScheduleRecord> for WeeklySchedule {
    fn from(record: ScheduleRecord) -> Self {
        Self {
            timings: [
                record.sunday,
                record.monday,
                record.tuesday,
                record.wednesday,
                record.thursday,
                record.friday,
                record.saturday,
            ],
        }
    }
}

impl From<WeeklySchedule> for ScheduleRecord {
    fn from(schedule: WeeklySchedule) -> Self {
        let [sunday, monday, tuesday, wednesday, thursday, friday, saturday] = schedule.timings;
        Self {
            sunday,
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
        }
    }
}
