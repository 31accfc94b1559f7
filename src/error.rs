use chrono::Weekday;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid time of day '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("time of day out of range: {hour:02}:{minute:02}")]
    TimeOutOfRange { hour: u16, minute: u16 },

    #[error("{0} is open but has no opening or closing time")]
    MissingHours(Weekday),

    #[error("{day} opens at {open} but closes at {close}")]
    InvertedHours {
        day: Weekday,
        open: String,
        close: String,
    },

    #[error("invalid utc offset: {0} minutes")]
    InvalidOffset(i32),

    #[error("invalid value for {name}: '{value}'")]
    InvalidSetting { name: &'static str, value: String },

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
