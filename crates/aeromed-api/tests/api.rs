use aeromed_api::router;
use aeromed_api::state::AppState;
use aeromed_auth::jwt::{issue_token, DEFAULT_TTL};
use aeromed_core::models::base::AirBase;
use aeromed_core::models::profile::{PilotProfile, ProfessionalProfile};
use aeromed_core::models::user::{Role, User};
use aeromed_store::seed::Seed;
use aeromed_store::Store;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &[u8] = b"integration-secret";

struct TestApp {
    app: Router,
    pilot: String,
    other_pilot: String,
    physio: String,
    manager: String,
}

fn user(name: &str, role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.mil", name.split(' ').next().unwrap_or(name)),
        role,
    }
}

async fn test_app() -> TestApp {
    let base = AirBase {
        id: Uuid::new_v4(),
        name: "Canoas".to_string(),
    };
    let pilot = user("Ana Lima", Role::Pilot);
    let other_pilot = user("Bruno Costa", Role::Pilot);
    let physio = user("Carla Souza", Role::HealthProfessional);
    let manager = user("Eva Ramos", Role::Manager);

    let seed = Seed {
        bases: vec![base.clone()],
        users: vec![
            pilot.clone(),
            other_pilot.clone(),
            physio.clone(),
            manager.clone(),
        ],
        pilot_profiles: vec![PilotProfile {
            user_id: pilot.id,
            rank: Some("Captain".to_string()),
            weight_kg: Some(70.0),
            height_m: Some(1.75),
            base_id: Some(base.id),
            ..Default::default()
        }],
        professional_profiles: vec![ProfessionalProfile {
            user_id: physio.id,
            base_id: Some(base.id),
            ..Default::default()
        }],
    };
    let store = Store::from_seed(seed).await.unwrap();
    let token = |u: &User| issue_token(u, SECRET, DEFAULT_TTL).unwrap();

    TestApp {
        app: router(AppState::new(store, SECRET)),
        pilot: token(&pilot),
        other_pilot: token(&other_pilot),
        physio: token(&physio),
        manager: token(&manager),
    }
}

impl TestApp {
    async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn file_knee_complaint(&self) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/api/complaints",
                Some(self.pilot.as_str()),
                Some(json!({
                    "step2_location": { "location": "Knee" },
                    "step3_details": { "intensity": 5, "lossOfMovement": false, "medicationUsed": true },
                    "step4_history": { "onset": "Gradual" }
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }
}

#[tokio::test]
async fn health_and_instruments_are_public() {
    let t = test_app().await;

    let (status, body) = t.call("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = t.call("GET", "/instruments", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "ipaq");
    assert_eq!(body[0]["item_count"], 7);
    assert_eq!(body[1]["scoring_path"], "/scoring/nasa-tlx");
    assert!(body[0].get("domains").is_none());

    let (status, body) = t.call("GET", "/instruments/nasa_tlx", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domains"][0]["subscales"].as_array().unwrap().len(), 6);

    let (status, _) = t.call("GET", "/instruments/unknown", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_need_a_valid_token() {
    let t = test_app().await;

    let (status, body) = t.call("GET", "/api/notifications", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (status, _) = t
        .call("GET", "/api/notifications", Some("forged.token.value"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reviewer_sees_derived_indices() {
    let t = test_app().await;
    let id = t.file_knee_complaint().await;

    let (status, _) = t
        .call(
            "POST",
            "/api/assessments/ipaq",
            Some(t.pilot.as_str()),
            Some(json!({
                "complaint_id": id,
                "vigorous_activity_days": 3,
                "vigorous_activity_minutes": 90,
                "moderate_activity_days": 0,
                "moderate_activity_minutes": 0,
                "walking_days": 0,
                "walking_minutes": 0
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = t
        .call(
            "POST",
            "/api/assessments/nasa-tlx",
            Some(t.pilot.as_str()),
            Some(json!({
                "complaint_id": id,
                "mental_demand_rating": 50, "physical_demand_rating": 50,
                "temporal_demand_rating": 50, "performance_rating": 50,
                "effort_rating": 50, "frustration_rating": 50,
                "mental_demand_weight": 5, "physical_demand_weight": 4,
                "temporal_demand_weight": 3, "performance_weight": 2,
                "effort_weight": 1, "frustration_weight": 0
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["assessmentId"].is_string());

    let uri = format!("/api/complaint-details/{id}");
    let (status, body) = t.call("GET", &uri, Some(t.physio.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["complaint"]["location"], "Knee");
    assert_eq!(body["pilot"]["name"], "Ana Lima");
    assert_eq!(body["pilot"]["rank"], "Captain");
    assert_eq!(body["pilot"]["bmi"], 22.86);
    assert_eq!(body["pilot"]["bmiClassification"], "Normal weight");
    assert_eq!(body["ipaq"]["classification"], "Very Active");
    assert_eq!(body["nasa_tlx"]["overall_score"], 50.0);
    assert_eq!(body["fatigueInjuryIndex"], 500.0);

    // pilots cannot use the reviewer view
    let (status, _) = t.call("GET", &uri, Some(t.pilot.as_str()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn details_without_questionnaires_use_sentinels() {
    let t = test_app().await;
    let id = t.file_knee_complaint().await;

    let uri = format!("/api/complaint-details/{id}");
    let (status, body) = t.call("GET", &uri, Some(t.manager.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ipaq"]["classification"], "Not informed");
    assert!(body["nasa_tlx"]["overall_score"].is_null());
    assert!(body["fatigueInjuryIndex"].is_null());

    let (status, _) = t
        .call(
            "GET",
            &format!("/api/complaint-details/{}", Uuid::new_v4()),
            Some(t.physio.as_str()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn complaint_validation_and_roles() {
    let t = test_app().await;

    let (status, body) = t
        .call(
            "POST",
            "/api/complaints",
            Some(t.pilot.as_str()),
            Some(json!({ "step3_details": { "intensity": 4 } })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("location"));

    let (status, _) = t
        .call(
            "POST",
            "/api/complaints",
            Some(t.physio.as_str()),
            Some(json!({ "step2_location": { "location": "Knee" } })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = t.call("GET", "/api/complaints", Some(t.pilot.as_str()), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn complaint_list_supports_filters() {
    let t = test_app().await;
    t.file_knee_complaint().await;

    let (status, body) = t
        .call("GET", "/api/complaints?search=ana", Some(t.physio.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["pilot_name"], "Ana Lima");

    let (_, body) = t
        .call("GET", "/api/complaints?location=Elbow", Some(t.physio.as_str()), None)
        .await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_questionnaires_are_rejected() {
    let t = test_app().await;
    let id = t.file_knee_complaint().await;

    let (status, body) = t
        .call(
            "POST",
            "/api/assessments/nasa-tlx",
            Some(t.pilot.as_str()),
            Some(json!({ "complaint_id": id, "mental_demand_rating": 150, "mental_demand_weight": 5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Mental Demand"));

    let (status, _) = t
        .call(
            "POST",
            "/api/assessments/ipaq",
            Some(t.pilot.as_str()),
            Some(json!({ "complaint_id": id, "walking_days": 9 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t
        .call(
            "POST",
            "/api/assessments/ipaq",
            Some(t.pilot.as_str()),
            Some(json!({ "moderate_activity_days": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // another pilot's complaint looks like a missing one
    let (status, _) = t
        .call(
            "POST",
            "/api/assessments/ipaq",
            Some(t.other_pilot.as_str()),
            Some(json!({ "complaint_id": id, "moderate_activity_days": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn opinion_reaches_the_pilot() {
    let t = test_app().await;
    let id = t.file_knee_complaint().await;

    // the professional at the pilot's base was told about the complaint
    let (_, inbox) = t.call("GET", "/api/notifications", Some(t.physio.as_str()), None).await;
    assert_eq!(inbox["unreadCount"], 1);
    let notification_id = inbox["notifications"][0]["id"].as_str().unwrap().to_string();
    let (status, _) = t
        .call(
            "POST",
            &format!("/api/notifications/{notification_id}/read"),
            Some(t.physio.as_str()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = t
        .call(
            "POST",
            "/api/assessments",
            Some(t.physio.as_str()),
            Some(json!({ "complaint_id": id, "diagnosis": "Patellar tendinopathy" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = t
        .call(
            "POST",
            "/api/assessments",
            Some(t.physio.as_str()),
            Some(json!({
                "complaint_id": id,
                "diagnosis": "Patellar tendinopathy",
                "treatment_plan": "Eccentric loading, 6 weeks"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["assessment"]["diagnosis"], "Patellar tendinopathy");

    let (_, own) = t.call("GET", "/api/my-complaints", Some(t.pilot.as_str()), None).await;
    assert_eq!(own[0]["assessment_status"], "Opinion available");
    assert_eq!(own[0]["main_complaint"], "Knee");

    let (status, body) = t
        .call("GET", &format!("/api/my-complaints/{id}"), Some(t.pilot.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assessment"]["professional_name"], "Carla Souza");
    assert_eq!(body["ipaq"]["classification"], "Not informed");

    let (status, _) = t
        .call(
            "GET",
            &format!("/api/my-complaints/{id}"),
            Some(t.other_pilot.as_str()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, inbox) = t.call("GET", "/api/notifications", Some(t.pilot.as_str()), None).await;
    assert_eq!(inbox["unreadCount"], 1);
    assert_eq!(
        inbox["notifications"][0]["link"],
        format!("/my-complaints/{id}")
    );
}

#[tokio::test]
async fn profile_includes_bmi_for_pilots() {
    let t = test_app().await;

    let (status, body) = t.call("GET", "/api/profile", Some(t.pilot.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "PILOT");
    assert_eq!(body["bmi"]["bmi"], 22.86);

    let (status, body) = t
        .call(
            "PUT",
            "/api/profile",
            Some(t.pilot.as_str()),
            Some(json!({ "weight_kg": 90.0, "height_m": 1.75 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weight_kg"], 90.0);

    let (_, body) = t.call("GET", "/api/profile", Some(t.pilot.as_str()), None).await;
    assert_eq!(body["bmi"]["classification"], "Overweight");

    let (status, _) = t
        .call("PUT", "/api/profile", Some(t.manager.as_str()), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn scoring_endpoints() {
    let t = test_app().await;

    let (status, body) = t
        .call(
            "POST",
            "/scoring/bmi",
            Some(t.physio.as_str()),
            Some(json!({ "weight_kg": 50, "height_m": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["bmi"].is_null());
    assert_eq!(body["classification"], "Insufficient data");

    let (_, body) = t
        .call(
            "POST",
            "/scoring/ipaq",
            Some(t.physio.as_str()),
            Some(json!({ "vigorous_activity_days": 3, "vigorous_activity_minutes": 60, "moderate_activity_days": 0 })),
        )
        .await;
    assert_eq!(body["classification"], "Active");
    assert_eq!(body["met_summary"]["vigorous"], 1440.0);

    let (_, body) = t
        .call(
            "POST",
            "/scoring/nasa-tlx",
            Some(t.physio.as_str()),
            Some(json!({
                "ratings": { "mental": 80, "physical": 20, "temporal": 60, "performance": 40, "effort": 70, "frustration": 10 },
                "weights": { "mental": 5, "physical": 1, "temporal": 3, "performance": 2, "effort": 4, "frustration": 0 }
            })),
        )
        .await;
    assert_eq!(body["overall_score"], 64.0);

    let (_, body) = t
        .call(
            "POST",
            "/scoring/fatigue-injury-index",
            Some(t.physio.as_str()),
            Some(json!({ "intensity": 5, "workload_score": 50, "location": "UnknownPlace" })),
        )
        .await;
    assert_eq!(body["location_weight"], 0);
    assert!(body["fatigue_injury_index"].is_null());
}

#[tokio::test]
async fn report_summary_is_for_reviewers() {
    let t = test_app().await;
    t.file_knee_complaint().await;

    let (status, body) = t
        .call("GET", "/api/reports/summary", Some(t.manager.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalPilots"], 2);
    assert_eq!(body["totalComplaints"], 1);
    assert_eq!(body["averageIntensity"], 5.0);
    assert_eq!(body["complaintsByRegion"]["Knee"], 1);

    let (status, _) = t
        .call("GET", "/api/reports/summary", Some(t.pilot.as_str()), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = t.call("GET", "/api/bases", Some(t.pilot.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Canoas");
}

#[tokio::test]
async fn client_workload_score_must_be_a_rating() {
    let t = test_app().await;
    let id = t.file_knee_complaint().await;

    // all weights zero: only the submitted score is available
    let (status, body) = t
        .call(
            "POST",
            "/api/assessments/nasa-tlx",
            Some(t.pilot.as_str()),
            Some(json!({ "complaint_id": id, "mental_demand_rating": 60, "overall_score": 1e9 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("overall_score"));

    let (status, _) = t
        .call(
            "POST",
            "/api/assessments/nasa-tlx",
            Some(t.pilot.as_str()),
            Some(json!({ "complaint_id": id, "overall_score": -5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = t
        .call(
            "POST",
            "/api/assessments/nasa-tlx",
            Some(t.pilot.as_str()),
            Some(json!({ "complaint_id": id, "overall_score": 40 })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/complaint-details/{id}");
    let (_, body) = t.call("GET", &uri, Some(t.physio.as_str()), None).await;
    assert_eq!(body["nasa_tlx"]["overall_score"], 40.0);
    assert_eq!(body["fatigueInjuryIndex"], 400.0);
}

#[tokio::test]
async fn malformed_bodies_use_the_error_envelope() {
    let t = test_app().await;

    let (status, body) = t
        .call(
            "POST",
            "/api/complaints",
            Some(t.pilot.as_str()),
            Some(json!({ "step2_location": { "location": 42 } })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = t
        .call(
            "POST",
            "/scoring/bmi",
            Some(t.physio.as_str()),
            Some(json!({ "weight_kg": "heavy" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn form_flight_impact_codes_reach_the_report() {
    let t = test_app().await;

    let (status, body) = t
        .call(
            "POST",
            "/api/complaints",
            Some(t.pilot.as_str()),
            Some(json!({
                "step2_location": { "location": "Joelho" },
                "step3_details": { "intensity": 7, "flightImpact": "impacto_leve" }
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["flight_impact"], 1);

    let (_, body) = t
        .call("GET", "/api/reports/summary", Some(t.manager.as_str()), None)
        .await;
    assert_eq!(body["flightImpactDistribution"]["Mild impact"], 1);
}
