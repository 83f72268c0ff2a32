use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::answers::AnswerSet;

/// The closed set of instruments the system administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    /// Haemophilia Activities List, 42 items.
    Hal,
    /// HAEMO-QoL-A adult quality-of-life questionnaire, 41 items.
    #[serde(rename = "haemqol")]
    HaemQolA,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Hal => "hal",
            InstrumentKind::HaemQolA => "haemqol",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hal" => Ok(InstrumentKind::Hal),
            "haemqol" => Ok(InstrumentKind::HaemQolA),
            other => Err(CoreError::UnknownInstrument(other.to_string())),
        }
    }
}

/// One completed (or partially completed) questionnaire for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub instrument: InstrumentKind,
    pub answers: AnswerSet,
    pub completed_at: jiff::Timestamp,
}
