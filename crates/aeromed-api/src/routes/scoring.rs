use axum::Json;
use serde::{Deserialize, Serialize};

use aeromed_core::models::questionnaire::{IpaqAnswers, NasaTlxRatings, NasaTlxWeights};
use aeromed_scoring::activity::{classify_activity, ActivityLevel, ActivityReport, MetSummary};
use aeromed_scoring::bmi::{compute_bmi, BmiResult};
use aeromed_scoring::check_instrument_scores;
use aeromed_scoring::instruments::{ipaq as ipaq_items, nasa_tlx as nasa_tlx_items};
use aeromed_scoring::location::location_weight;
use aeromed_scoring::workload::overall_workload_score;

use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Deserialize)]
pub struct BmiRequest {
    weight_kg: Option<f64>,
    height_m: Option<f64>,
}

pub async fn bmi(ApiJson(req): ApiJson<BmiRequest>) -> Json<BmiResult> {
    Json(compute_bmi(req.weight_kg, req.height_m))
}

#[derive(Serialize)]
pub struct ActivityResponse {
    classification: ActivityLevel,
    met_summary: Option<MetSummary>,
}

pub async fn ipaq(
    ApiJson(answers): ApiJson<IpaqAnswers>,
) -> Result<Json<ActivityResponse>, ApiError> {
    check_instrument_scores("ipaq", &ipaq_items::entries(&answers))?;

    let report = ActivityReport::from_answers(&answers);
    Ok(Json(ActivityResponse {
        classification: classify_activity(report.as_ref()),
        met_summary: report.as_ref().map(ActivityReport::met_summary),
    }))
}

#[derive(Deserialize)]
pub struct WorkloadRequest {
    ratings: NasaTlxRatings,
    weights: NasaTlxWeights,
}

#[derive(Serialize)]
pub struct WorkloadResponse {
    overall_score: Option<f64>,
}

pub async fn nasa_tlx(
    ApiJson(req): ApiJson<WorkloadRequest>,
) -> Result<Json<WorkloadResponse>, ApiError> {
    check_instrument_scores("nasa_tlx", &nasa_tlx_items::entries(&req.ratings, &req.weights))?;
    Ok(Json(WorkloadResponse {
        overall_score: overall_workload_score(&req.ratings, &req.weights),
    }))
}

#[derive(Deserialize)]
pub struct FatigueRequest {
    intensity: Option<f64>,
    workload_score: Option<f64>,
    #[serde(default)]
    location: String,
}

#[derive(Serialize)]
pub struct FatigueResponse {
    location_weight: u8,
    fatigue_injury_index: Option<f64>,
}

pub async fn fatigue_injury_index(
    ApiJson(req): ApiJson<FatigueRequest>,
) -> Json<FatigueResponse> {
    Json(FatigueResponse {
        location_weight: location_weight(&req.location),
        fatigue_injury_index: aeromed_scoring::fatigue::fatigue_injury_index(
            req.intensity,
            req.workload_score,
            &req.location,
        ),
    })
}
