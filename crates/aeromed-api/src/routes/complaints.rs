use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use aeromed_audit::events::AuditEvent;
use aeromed_core::models::complaint::{Complaint, NewComplaint};
use aeromed_core::models::questionnaire::NasaTlxRatings;
use aeromed_core::models::user::Role;
use aeromed_scoring::activity::{ActivityLevel, ActivityReport, MetSummary};
use aeromed_scoring::bmi::BmiClass;
use aeromed_scoring::indices::{AssessmentInput, HealthIndices};
use aeromed_store::complaints::{ComplaintFilter, ComplaintRecord, ComplaintSummary};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn create_complaint(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(payload): ApiJson<NewComplaint>,
) -> Result<(StatusCode, Json<Complaint>), ApiError> {
    user.require(Role::Pilot)?;

    let complaint = payload.into_complaint(user.id, jiff::Timestamp::now())?;
    let complaint = state.store.create_complaint(complaint).await?;

    AuditEvent::new("create", "complaint", complaint.id, user.id)
        .with_details(serde_json::json!({ "location": complaint.location }))
        .emit();
    Ok((StatusCode::CREATED, Json(complaint)))
}

pub async fn list_complaints(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(filter): Query<ComplaintFilter>,
) -> Result<Json<Vec<ComplaintSummary>>, ApiError> {
    user.require_reviewer()?;
    Ok(Json(state.store.list_complaints(&filter).await))
}

#[derive(Serialize)]
pub struct PilotBlock {
    name: String,
    email: String,
    rank: Option<String>,
    saram: Option<String>,
    whatsapp: Option<String>,
    birth_date: Option<jiff::civil::Date>,
    aircraft_type: Option<String>,
    weight: Option<f64>,
    height: Option<f64>,
    bmi: Option<f64>,
    #[serde(rename = "bmiClassification")]
    bmi_classification: BmiClass,
}

#[derive(Serialize)]
pub struct IpaqBlock {
    classification: ActivityLevel,
    met_summary: Option<MetSummary>,
}

#[derive(Serialize)]
pub struct NasaTlxBlock {
    overall_score: Option<f64>,
    ratings: Option<NasaTlxRatings>,
}

/// Complaint with pilot data and every derived health index.
#[derive(Serialize)]
pub struct ComplaintDetails {
    complaint: Complaint,
    pilot: PilotBlock,
    ipaq: IpaqBlock,
    nasa_tlx: NasaTlxBlock,
    #[serde(rename = "fatigueInjuryIndex")]
    fatigue_injury_index: Option<f64>,
}

impl ComplaintDetails {
    fn from_record(record: ComplaintRecord) -> Self {
        let profile = record.profile.unwrap_or_default();
        let activity = record
            .ipaq
            .as_ref()
            .and_then(|a| ActivityReport::from_answers(&a.answers));
        let workload_score = record.nasa_tlx.as_ref().and_then(|n| n.overall_score);

        let indices = HealthIndices::assess(&AssessmentInput {
            weight_kg: profile.weight_kg,
            height_m: profile.height_m,
            activity: activity.as_ref(),
            workload_score,
            intensity: record.complaint.intensity,
            location: &record.complaint.location,
        });

        Self {
            pilot: PilotBlock {
                name: record.pilot.name,
                email: record.pilot.email,
                rank: profile.rank,
                saram: profile.saram,
                whatsapp: profile.whatsapp,
                birth_date: profile.birth_date,
                aircraft_type: profile.aircraft_type,
                weight: profile.weight_kg,
                height: profile.height_m,
                bmi: indices.bmi.bmi,
                bmi_classification: indices.bmi.classification,
            },
            ipaq: IpaqBlock {
                classification: indices.activity_level,
                met_summary: indices.met_summary,
            },
            nasa_tlx: NasaTlxBlock {
                overall_score: workload_score,
                ratings: record.nasa_tlx.map(|n| n.ratings),
            },
            fatigue_injury_index: indices.fatigue_injury_index,
            complaint: record.complaint,
        }
    }
}

pub async fn get_complaint_details(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ComplaintDetails>, ApiError> {
    user.require_reviewer()?;
    let record = state.store.complaint_record(id).await?;
    Ok(Json(ComplaintDetails::from_record(record)))
}
