//! Open/closed status engine for neighbourhood stores.
//!
//! Given a store's weekly hours, its manual override and the current instant,
//! works out whether the store is open, closed, closing soon or on vacation,
//! and when it opens next.

pub mod config;
pub mod error;
pub mod status;
pub mod timing;

pub use config::StatusConfig;
pub use error::{Result, ScheduleError};
pub use status::{
    kind::{ManualStatus, OverrideState, StatusKind},
    next_opening::{find_next_open_day, NextOpening},
    resolver::{resolve, StatusResolver, StatusResult, StoreStatus},
    store::StoreRecord,
    summary::{summarize, DaySummary},
};
pub use timing::{daily::DaySchedule, schedule::WeeklySchedule, time_of_day::TimeOfDay};
