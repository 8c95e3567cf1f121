use axum::extract::State;
use axum::Json;

use aeromed_core::models::base::AirBase;

use crate::state::AppState;

pub async fn list_bases(State(state): State<AppState>) -> Json<Vec<AirBase>> {
    Json(state.store.bases().await)
}
