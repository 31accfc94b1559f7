use serde::{Deserialize, Serialize};

/// The status reported to whoever renders the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Open,
    Closed,
    ClosingSoon,
    Vacation,
}

/// Status a store owner set by hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManualStatus {
    #[serde(alias = "open")]
    Open,
    #[serde(alias = "closed")]
    Closed,
    #[serde(alias = "vacation")]
    Vacation,
}

impl From<ManualStatus> for StatusKind {
    fn from(status: ManualStatus) -> Self {
        match status {
            ManualStatus::Open => StatusKind::Open,
            ManualStatus::Closed => StatusKind::Closed,
            ManualStatus::Vacation => StatusKind::Vacation,
        }
    }
}

/// Manual state stored alongside a store. Only vacation mode overrides the
/// schedule; the other manual statuses are used when no schedule applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideState {
    #[serde(default)]
    pub manual_status: Option<ManualStatus>,
    #[serde(default)]
    pub vacation_message: Option<String>,
}

impl OverrideState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn manual(status: ManualStatus) -> Self {
        Self {
            manual_status: Some(status),
            vacation_message: None,
        }
    }

    pub fn vacation(message: Option<String>) -> Self {
        Self {
            manual_status: Some(ManualStatus::Vacation),
            vacation_message: message,
        }
    }

    pub fn is_vacation(&self) -> bool {
        self.manual_status == Some(ManualStatus::Vacation)
    }

    /// Kind to report when the schedule cannot decide: the manual status if
    /// one is set, `Closed` otherwise.
    pub fn fallback_kind(&self) -> StatusKind {
        self.manual_status
            .map(StatusKind::from)
            .unwrap_or(StatusKind::Closed)
    }
}
