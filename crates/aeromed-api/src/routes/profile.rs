use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use aeromed_audit::events::AuditEvent;
use aeromed_core::models::profile::{
    PilotProfile, PilotProfileUpdate, ProfessionalProfile, ProfessionalProfileUpdate,
};
use aeromed_core::models::user::{Role, User};
use aeromed_scoring::bmi::{compute_bmi, BmiResult};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pilot_profile: Option<PilotProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    professional_profile: Option<ProfessionalProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bmi: Option<BmiResult>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state.store.user(auth.id).await?;

    let response = match user.role {
        Role::Pilot => {
            let profile = state.store.pilot_profile(user.id).await;
            let bmi = profile
                .as_ref()
                .map(|p| compute_bmi(p.weight_kg, p.height_m));
            ProfileResponse {
                user,
                pilot_profile: profile,
                professional_profile: None,
                bmi,
            }
        }
        Role::HealthProfessional => ProfileResponse {
            professional_profile: state.store.professional_profile(user.id).await,
            user,
            pilot_profile: None,
            bmi: None,
        },
        Role::Manager => ProfileResponse {
            user,
            pilot_profile: None,
            professional_profile: None,
            bmi: None,
        },
    };
    Ok(Json(response))
}

/// Save the caller's profile. The body shape depends on the caller's role.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    ApiJson(body): ApiJson<serde_json::Value>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let saved = match auth.role {
        Role::Pilot => {
            let update: PilotProfileUpdate = serde_json::from_value(body)?;
            let profile = state.store.update_pilot_profile(auth.id, update).await?;
            serde_json::to_value(profile)
        }
        Role::HealthProfessional => {
            let update: ProfessionalProfileUpdate = serde_json::from_value(body)?;
            let profile = state
                .store
                .update_professional_profile(auth.id, update)
                .await?;
            serde_json::to_value(profile)
        }
        Role::Manager => {
            return Err(ApiError::BadRequest(
                "managers have no profile to update".to_string(),
            ));
        }
    }
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    AuditEvent::new("update", "profile", auth.id, auth.id).emit();
    Ok(Json(saved))
}
