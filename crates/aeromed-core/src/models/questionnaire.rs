use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Raw IPAQ short-form answers as submitted. Every field is nullable; a
/// null `moderate_activity_days` means the questionnaire was not answered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IpaqAnswers {
    pub vigorous_activity_days: Option<u32>,
    pub vigorous_activity_minutes: Option<u32>,
    pub moderate_activity_days: Option<u32>,
    pub moderate_activity_minutes: Option<u32>,
    pub walking_days: Option<u32>,
    pub walking_minutes: Option<u32>,
    pub sitting_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IpaqAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub complaint_id: Uuid,
    #[serde(flatten)]
    pub answers: IpaqAnswers,
    pub assessed_at: jiff::Timestamp,
}

/// The six NASA-TLX subscale ratings, each 0–100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NasaTlxRatings {
    pub mental: f64,
    pub physical: f64,
    pub temporal: f64,
    pub performance: f64,
    pub effort: f64,
    pub frustration: f64,
}

/// Pairwise-comparison weights for the six subscales, each 0–5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NasaTlxWeights {
    pub mental: u8,
    pub physical: u8,
    pub temporal: u8,
    pub performance: u8,
    pub effort: u8,
    pub frustration: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NasaTlxAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub complaint_id: Uuid,
    pub ratings: NasaTlxRatings,
    pub weights: NasaTlxWeights,
    pub overall_score: Option<f64>,
    pub assessed_at: jiff::Timestamp,
}
