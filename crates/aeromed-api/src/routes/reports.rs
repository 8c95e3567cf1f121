use axum::extract::State;
use axum::{Extension, Json};

use aeromed_store::reports::ReportSummary;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn summary(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ReportSummary>, ApiError> {
    user.require_reviewer()?;
    Ok(Json(state.store.report_summary().await))
}
