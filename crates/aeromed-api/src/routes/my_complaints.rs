use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use aeromed_core::models::user::Role;
use aeromed_scoring::activity::{classify_activity, ActivityLevel, ActivityReport};
use aeromed_store::complaints::{ComplaintRecord, OwnComplaintSummary};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn list_own(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<OwnComplaintSummary>>, ApiError> {
    user.require(Role::Pilot)?;
    Ok(Json(state.store.own_complaints(user.id).await))
}

#[derive(Serialize)]
pub struct OwnComplaint {
    id: Uuid,
    location: String,
    submitted_at: jiff::Timestamp,
    intensity: Option<f64>,
    onset: Option<String>,
    history: Option<String>,
}

#[derive(Serialize)]
pub struct OwnOpinion {
    diagnosis: String,
    treatment_plan: String,
    notes: Option<String>,
    assessment_date: jiff::Timestamp,
    professional_name: Option<String>,
}

#[derive(Serialize)]
pub struct OwnIpaq {
    classification: ActivityLevel,
}

#[derive(Serialize)]
pub struct OwnNasaTlx {
    overall_score: Option<f64>,
}

/// What a pilot sees about one of their complaints.
#[derive(Serialize)]
pub struct OwnComplaintDetails {
    complaint: OwnComplaint,
    assessment: Option<OwnOpinion>,
    ipaq: OwnIpaq,
    nasa_tlx: OwnNasaTlx,
}

impl From<ComplaintRecord> for OwnComplaintDetails {
    fn from(record: ComplaintRecord) -> Self {
        let activity = record
            .ipaq
            .as_ref()
            .and_then(|a| ActivityReport::from_answers(&a.answers));
        let c = record.complaint;

        Self {
            complaint: OwnComplaint {
                id: c.id,
                location: c.location,
                submitted_at: c.submitted_at,
                intensity: c.intensity,
                onset: c.onset,
                history: c.history,
            },
            assessment: record.opinion.map(|signed| OwnOpinion {
                diagnosis: signed.opinion.diagnosis,
                treatment_plan: signed.opinion.treatment_plan,
                notes: signed.opinion.notes,
                assessment_date: signed.opinion.assessed_at,
                professional_name: signed.professional_name,
            }),
            ipaq: OwnIpaq {
                classification: classify_activity(activity.as_ref()),
            },
            nasa_tlx: OwnNasaTlx {
                overall_score: record.nasa_tlx.and_then(|n| n.overall_score),
            },
        }
    }
}

pub async fn get_own(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<OwnComplaintDetails>, ApiError> {
    user.require(Role::Pilot)?;
    let record = state.store.own_complaint_record(user.id, id).await?;
    Ok(Json(record.into()))
}
