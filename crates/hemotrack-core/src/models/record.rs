use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Doctor-maintained treatment record for one patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    /// Prophylaxis / on-demand dosing plan, free text.
    pub dosing_plan: Option<String>,
    /// Factor dose, free text (units vary by product).
    pub dose: Option<String>,
    pub evaluation_date: Option<jiff::civil::Date>,
    pub follow_up_date: Option<jiff::civil::Date>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
