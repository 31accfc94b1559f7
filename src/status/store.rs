use serde::{Deserialize, Serialize};

use crate::{error::Result, timing::schedule::WeeklySchedule};

use super::kind::{ManualStatus, OverrideState};

/// The parts of a stored store record that the status depends on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    #[serde(default)]
    pub manual_status: Option<ManualStatus>,
    #[serde(default)]
    pub vacation_message: Option<String>,
    #[serde(default)]
    pub schedule: Option<WeeklySchedule>,
}

impl StoreRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn override_state(&self) -> OverrideState {
        OverrideState {
            manual_status: self.manual_status,
            vacation_message: self.vacation_message.clone(),
        }
    }
}
