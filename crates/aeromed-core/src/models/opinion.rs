use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A health professional's opinion on a complaint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthAssessment {
    pub id: Uuid,
    pub complaint_id: Uuid,
    pub assessing_professional_id: Uuid,
    pub diagnosis: String,
    pub treatment_plan: String,
    pub notes: Option<String>,
    pub pilot_has_seen: bool,
    pub assessed_at: jiff::Timestamp,
}
