use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    /// Age in whole years at registration.
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Patient {
    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age.map(AgeGroup::from_age)
    }
}

/// Demographic bucket used in exports and cohort views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeGroup {
    /// Under 18.
    Child,
    /// 18–59.
    Adult,
    /// 60 and over.
    Elderly,
}

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::Child,
            18..=59 => AgeGroup::Adult,
            _ => AgeGroup::Elderly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Elderly => "elderly",
        }
    }
}
