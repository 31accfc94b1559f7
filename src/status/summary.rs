use chrono::Weekday;
use serde::Serialize;

use crate::timing::schedule::WeeklySchedule;

/// One row of the weekly hours table shown to store owners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: &'static str,
    pub label: &'static str,
    pub open: Option<String>,
    pub close: Option<String>,
    pub closed: bool,
}

fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Lists the week Monday first. Days the store never configured show as closed.
pub fn summarize(schedule: Option<&WeeklySchedule>) -> Option<Vec<DaySummary>> {
    let schedule = schedule?;
    let mut day = Weekday::Mon;
    let mut summary = Vec::with_capacity(7);
    for _ in 0..7 {
        let entry = match schedule.day(day) {
            Some(timing) => DaySummary {
                day: day_key(day),
                label: day_label(day),
                open: timing.open.clone(),
                close: timing.close.clone(),
                closed: timing.is_closed(),
            },
            None => DaySummary {
                day: day_key(day),
                label: day_label(day),
                open: None,
                close: None,
                closed: true,
            },
        };
        summary.push(entry);
        day = day.succ();
    }
    Some(summary)
}
