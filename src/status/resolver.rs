use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::StatusConfig,
    timing::{business_time::business_time, schedule::WeeklySchedule},
};

use super::{
    kind::{OverrideState, StatusKind},
    next_opening::{find_next_open_day, NextOpening},
    store::StoreRecord,
};

/// Everything the resolver can conclude about a store at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreStatus {
    Vacation {
        message: String,
    },
    /// No usable hours for today; reports the manual status or `Closed`.
    Unscheduled {
        fallback: StatusKind,
    },
    Open {
        opens_at: String,
        closes_at: String,
    },
    ClosingSoon {
        minutes_left: u16,
        opens_at: String,
        closes_at: String,
    },
    /// Opens later today, within the opening-soon window.
    OpensSoon {
        minutes_until: u16,
        opens_at: String,
        closes_at: String,
    },
    OpensLaterToday {
        opens_at: String,
        closes_at: String,
    },
    ClosedToday {
        next: Option<NextOpening>,
    },
    /// Today's hours are over.
    ClosedForTheDay {
        next: Option<NextOpening>,
    },
}

impl StoreStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            StoreStatus::Vacation { .. } => StatusKind::Vacation,
            StoreStatus::Unscheduled { fallback } => *fallback,
            StoreStatus::Open { .. } => StatusKind::Open,
            StoreStatus::ClosingSoon { .. } => StatusKind::ClosingSoon,
            StoreStatus::OpensSoon { .. }
            | StoreStatus::OpensLaterToday { .. }
            | StoreStatus::ClosedToday { .. }
            | StoreStatus::ClosedForTheDay { .. } => StatusKind::Closed,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            StoreStatus::Vacation { message } => Some(message.clone()),
            StoreStatus::Unscheduled { .. } | StoreStatus::Open { .. } => None,
            StoreStatus::ClosingSoon { minutes_left, .. } => {
                Some(format!("Cierra en {} min", minutes_left))
            }
            StoreStatus::OpensSoon { minutes_until, .. } => {
                Some(format!("Abre en {} min", minutes_until))
            }
            StoreStatus::OpensLaterToday { opens_at, .. } => Some(format!("Abre {}", opens_at)),
            StoreStatus::ClosedToday { .. } => Some("Cerrado hoy".to_string()),
            StoreStatus::ClosedForTheDay { .. } => Some("Cerrado".to_string()),
        }
    }

    /// Today's opening time, or the next opening as `"<day> <HH:MM>"` once
    /// today is over.
    pub fn opens_at(&self) -> Option<String> {
        match self {
            StoreStatus::Vacation { .. } | StoreStatus::Unscheduled { .. } => None,
            StoreStatus::Open { opens_at, .. }
            | StoreStatus::ClosingSoon { opens_at, .. }
            | StoreStatus::OpensSoon { opens_at, .. }
            | StoreStatus::OpensLaterToday { opens_at, .. } => Some(opens_at.clone()),
            StoreStatus::ClosedToday { next } | StoreStatus::ClosedForTheDay { next } => {
                next.as_ref().map(NextOpening::to_string)
            }
        }
    }

    pub fn closes_at(&self) -> Option<String> {
        match self {
            StoreStatus::Open { closes_at, .. }
            | StoreStatus::ClosingSoon { closes_at, .. }
            | StoreStatus::OpensSoon { closes_at, .. }
            | StoreStatus::OpensLaterToday { closes_at, .. } => Some(closes_at.clone()),
            StoreStatus::Vacation { .. }
            | StoreStatus::Unscheduled { .. }
            | StoreStatus::ClosedToday { .. }
            | StoreStatus::ClosedForTheDay { .. } => None,
        }
    }

    pub fn to_result(&self) -> StatusResult {
        StatusResult {
            status: self.kind(),
            status_message: self.message(),
            opens_at: self.opens_at(),
            closes_at: self.closes_at(),
        }
    }
}

/// Flat status record as rendered by the UI or returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub status: StatusKind,
    pub status_message: Option<String>,
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
}

impl From<StoreStatus> for StatusResult {
    fn from(status: StoreStatus) -> Self {
        status.to_result()
    }
}

/// Computes store status from a weekly schedule, the manual override and the
/// current instant.
///
/// Never fails: missing or malformed hours degrade to `Closed`, or to the
/// manual status when one is set.
#[derive(Clone, Debug, Default)]
pub struct StatusResolver {
    config: StatusConfig,
}

impl StatusResolver {
    pub fn new(config: StatusConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Resolves using the configured business time zone.
    pub fn resolve(
        &self,
        schedule: Option<&WeeklySchedule>,
        override_state: &OverrideState,
        now: DateTime<Utc>,
    ) -> StoreStatus {
        let offset_minutes = self.config.offset_minutes_at(now);
        self.resolve_with_offset(schedule, override_state, now, offset_minutes)
    }

    pub fn resolve_store(&self, store: &StoreRecord, now: DateTime<Utc>) -> StoreStatus {
        self.resolve(store.schedule.as_ref(), &store.override_state(), now)
    }

    pub fn resolve_with_offset(
        &self,
        schedule: Option<&WeeklySchedule>,
        override_state: &OverrideState,
        now: DateTime<Utc>,
        offset_minutes: i32,
    ) -> StoreStatus {
        let status = self.evaluate(schedule, override_state, now, offset_minutes);
        debug!(
            status = ?status.kind(),
            %now,
            offset_minutes,
            "resolved store status"
        );
        status
    }

    fn evaluate(
        &self,
        schedule: Option<&WeeklySchedule>,
        override_state: &OverrideState,
        now: DateTime<Utc>,
        offset_minutes: i32,
    ) -> StoreStatus {
        // Vacation wins over any schedule
        if override_state.is_vacation() {
            let message = override_state
                .vacation_message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(self.config.vacation_message.as_str());
            return StoreStatus::Vacation {
                message: message.to_string(),
            };
        }

        let Some(schedule) = schedule else {
            return StoreStatus::Unscheduled {
                fallback: override_state.fallback_kind(),
            };
        };

        let local = business_time(now, offset_minutes);
        let today = match schedule.day(local.weekday) {
            Some(today) if !today.is_closed() => today,
            _ => {
                return StoreStatus::ClosedToday {
                    next: find_next_open_day(schedule, local.weekday),
                }
            }
        };

        let (opening, closing) = match today.hours(local.weekday) {
            Ok(hours) => hours,
            Err(err) => {
                warn!(error = %err, "unusable store hours, falling back");
                return StoreStatus::Unscheduled {
                    fallback: override_state.fallback_kind(),
                };
            }
        };
        let opens_at = opening.to_string();
        let closes_at = closing.to_string();

        if opening <= local.time && local.time < closing {
            let minutes_left = local.time.minutes_until(closing);
            if minutes_left <= self.config.closing_soon_minutes {
                return StoreStatus::ClosingSoon {
                    minutes_left,
                    opens_at,
                    closes_at,
                };
            }
            return StoreStatus::Open {
                opens_at,
                closes_at,
            };
        }

        if local.time < opening {
            let minutes_until = local.time.minutes_until(opening);
            if minutes_until <= self.config.opening_soon_minutes {
                return StoreStatus::OpensSoon {
                    minutes_until,
                    opens_at,
                    closes_at,
                };
            }
            return StoreStatus::OpensLaterToday {
                opens_at,
                closes_at,
            };
        }

        StoreStatus::ClosedForTheDay {
            next: find_next_open_day(schedule, local.weekday),
        }
    }
}

/// Resolves with the default thresholds and an explicit business offset in
/// minutes east of UTC.
pub fn resolve(
    schedule: Option<&WeeklySchedule>,
    override_state: &OverrideState,
    now: DateTime<Utc>,
    offset_minutes: i32,
) -> StatusResult {
    StatusResolver::default()
        .resolve_with_offset(schedule, override_state, now, offset_minutes)
        .to_result()
}
