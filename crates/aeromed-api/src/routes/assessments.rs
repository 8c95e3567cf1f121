use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aeromed_audit::events::AuditEvent;
use aeromed_core::models::opinion::HealthAssessment;
use aeromed_core::models::questionnaire::{IpaqAnswers, NasaTlxRatings, NasaTlxWeights};
use aeromed_core::models::user::Role;
use aeromed_scoring::check_instrument_scores;
use aeromed_scoring::instruments::{ipaq, nasa_tlx};
use aeromed_scoring::workload::{overall_workload_score, MAX_RATING};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Saved {
    message: &'static str,
    assessment_id: Uuid,
}

fn require_complaint_id(id: Option<Uuid>) -> Result<Uuid, ApiError> {
    id.ok_or_else(|| ApiError::BadRequest("complaint_id is required".to_string()))
}

#[derive(Deserialize)]
pub struct IpaqSubmission {
    complaint_id: Option<Uuid>,
    #[serde(flatten)]
    answers: IpaqAnswers,
}

pub async fn create_ipaq(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<IpaqSubmission>,
) -> Result<(StatusCode, Json<Saved>), ApiError> {
    user.require(Role::Pilot)?;
    let complaint_id = require_complaint_id(body.complaint_id)?;
    check_instrument_scores("ipaq", &ipaq::entries(&body.answers))?;

    let assessment = state
        .store
        .save_ipaq(user.id, complaint_id, body.answers)
        .await?;

    AuditEvent::new("create", "ipaq_assessment", assessment.id, user.id)
        .with_details(serde_json::json!({ "complaint_id": complaint_id }))
        .emit();
    Ok((
        StatusCode::CREATED,
        Json(Saved {
            message: "IPAQ assessment saved.",
            assessment_id: assessment.id,
        }),
    ))
}

/// NASA-TLX form, one flat field per subscale rating and weight.
#[derive(Deserialize)]
pub struct NasaTlxSubmission {
    complaint_id: Option<Uuid>,
    #[serde(default)]
    mental_demand_rating: f64,
    #[serde(default)]
    physical_demand_rating: f64,
    #[serde(default)]
    temporal_demand_rating: f64,
    #[serde(default)]
    performance_rating: f64,
    #[serde(default)]
    effort_rating: f64,
    #[serde(default)]
    frustration_rating: f64,
    #[serde(default)]
    mental_demand_weight: u8,
    #[serde(default)]
    physical_demand_weight: u8,
    #[serde(default)]
    temporal_demand_weight: u8,
    #[serde(default)]
    performance_weight: u8,
    #[serde(default)]
    effort_weight: u8,
    #[serde(default)]
    frustration_weight: u8,
    overall_score: Option<f64>,
}

impl NasaTlxSubmission {
    fn ratings(&self) -> NasaTlxRatings {
        NasaTlxRatings {
            mental: self.mental_demand_rating,
            physical: self.physical_demand_rating,
            temporal: self.temporal_demand_rating,
            performance: self.performance_rating,
            effort: self.effort_rating,
            frustration: self.frustration_rating,
        }
    }

    fn weights(&self) -> NasaTlxWeights {
        NasaTlxWeights {
            mental: self.mental_demand_weight,
            physical: self.physical_demand_weight,
            temporal: self.temporal_demand_weight,
            performance: self.performance_weight,
            effort: self.effort_weight,
            frustration: self.frustration_weight,
        }
    }
}

pub async fn create_nasa_tlx(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<NasaTlxSubmission>,
) -> Result<(StatusCode, Json<Saved>), ApiError> {
    user.require(Role::Pilot)?;
    let complaint_id = require_complaint_id(body.complaint_id)?;

    let (ratings, weights) = (body.ratings(), body.weights());
    check_instrument_scores("nasa_tlx", &nasa_tlx::entries(&ratings, &weights))?;

    if let Some(score) = body.overall_score
        && !(0.0..=MAX_RATING).contains(&score)
    {
        return Err(ApiError::BadRequest(format!(
            "overall_score {score} is outside [0, {MAX_RATING}]"
        )));
    }

    // The server-side weighted mean wins; a client score is only kept when
    // the weights leave it undefined.
    let overall_score = overall_workload_score(&ratings, &weights).or(body.overall_score);

    let assessment = state
        .store
        .save_nasa_tlx(user.id, complaint_id, ratings, weights, overall_score)
        .await?;

    AuditEvent::new("create", "nasa_tlx_assessment", assessment.id, user.id)
        .with_details(serde_json::json!({
            "complaint_id": complaint_id,
            "overall_score": overall_score,
        }))
        .emit();
    Ok((
        StatusCode::CREATED,
        Json(Saved {
            message: "NASA-TLX assessment saved.",
            assessment_id: assessment.id,
        }),
    ))
}

#[derive(Deserialize)]
pub struct OpinionSubmission {
    complaint_id: Option<Uuid>,
    diagnosis: Option<String>,
    treatment_plan: Option<String>,
    notes: Option<String>,
}

#[derive(Serialize)]
pub struct OpinionSaved {
    message: &'static str,
    assessment: HealthAssessment,
}

pub async fn create_opinion(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(body): ApiJson<OpinionSubmission>,
) -> Result<(StatusCode, Json<OpinionSaved>), ApiError> {
    user.require(Role::HealthProfessional)?;

    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    let (Some(complaint_id), Some(diagnosis), Some(treatment_plan)) = (
        body.complaint_id,
        non_empty(body.diagnosis),
        non_empty(body.treatment_plan),
    ) else {
        return Err(ApiError::BadRequest(
            "complaint_id, diagnosis and treatment_plan are required".to_string(),
        ));
    };

    let opinion = state
        .store
        .save_opinion(
            user.id,
            complaint_id,
            diagnosis,
            treatment_plan,
            non_empty(body.notes),
        )
        .await?;

    AuditEvent::new("create", "health_assessment", opinion.id, user.id)
        .with_details(serde_json::json!({ "complaint_id": complaint_id }))
        .emit();
    Ok((
        StatusCode::CREATED,
        Json(OpinionSaved {
            message: "Professional opinion saved.",
            assessment: opinion,
        }),
    ))
}
