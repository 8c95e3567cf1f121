//! aeromed-api
//!
//! HTTP surface for pilots, health professionals and managers. Handlers are
//! thin: they check the caller's role, move data in and out of the store,
//! and hand scoring to `aeromed-scoring`.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        // Direct access to the scoring engine
        .route("/scoring/bmi", post(routes::scoring::bmi))
        .route("/scoring/ipaq", post(routes::scoring::ipaq))
        .route("/scoring/nasa-tlx", post(routes::scoring::nasa_tlx))
        .route(
            "/scoring/fatigue-injury-index",
            post(routes::scoring::fatigue_injury_index),
        )
        .route(
            "/api/profile",
            get(routes::profile::get_profile).put(routes::profile::update_profile),
        )
        .route(
            "/api/complaints",
            get(routes::complaints::list_complaints).post(routes::complaints::create_complaint),
        )
        .route(
            "/api/complaint-details/{id}",
            get(routes::complaints::get_complaint_details),
        )
        .route("/api/assessments", post(routes::assessments::create_opinion))
        .route("/api/assessments/ipaq", post(routes::assessments::create_ipaq))
        .route(
            "/api/assessments/nasa-tlx",
            post(routes::assessments::create_nasa_tlx),
        )
        .route("/api/my-complaints", get(routes::my_complaints::list_own))
        .route("/api/my-complaints/{id}", get(routes::my_complaints::get_own))
        .route("/api/bases", get(routes::bases::list_bases))
        .route("/api/reports/summary", get(routes::reports::summary))
        .route(
            "/api/notifications",
            get(routes::notifications::list_notifications),
        )
        .route(
            "/api/notifications/{id}/read",
            post(routes::notifications::mark_read),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth, public questionnaire definitions)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
