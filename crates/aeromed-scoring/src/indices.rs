use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::activity::{classify_activity, ActivityLevel, ActivityReport, MetSummary};
use crate::bmi::{compute_bmi, BmiResult};
use crate::fatigue::fatigue_injury_index;

/// Everything the engine needs to score one complaint.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentInput<'a> {
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub activity: Option<&'a ActivityReport>,
    pub workload_score: Option<f64>,
    pub intensity: Option<f64>,
    pub location: &'a str,
}

/// Derived indices shown alongside a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthIndices {
    pub bmi: BmiResult,
    pub activity_level: ActivityLevel,
    pub met_summary: Option<MetSummary>,
    pub workload_score: Option<f64>,
    pub fatigue_injury_index: Option<f64>,
}

impl HealthIndices {
    pub fn assess(input: &AssessmentInput<'_>) -> Self {
        Self {
            bmi: compute_bmi(input.weight_kg, input.height_m),
            activity_level: classify_activity(input.activity),
            met_summary: input.activity.map(ActivityReport::met_summary),
            workload_score: input.workload_score,
            fatigue_injury_index: fatigue_injury_index(
                input.intensity,
                input.workload_score,
                input.location,
            ),
        }
    }
}
