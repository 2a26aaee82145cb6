//! Integration specifications for the food spoilage analysis workflow.
//!
//! Scenarios exercise the public service facade and HTTP router end to end
//! so we can validate intake, prediction, guardrails, and advisory output
//! without reaching into private modules.

mod common {
    use std::sync::Arc;

    use serde_json::Value;
    use spoilage_ai::analysis::{analysis_router, FoodInput, SpoilageAnalysisService};

    pub(super) fn submission(name: &str, is_cooked: bool, hours: f64, temp: f64) -> FoodInput {
        FoodInput {
            name: name.to_string(),
            is_cooked,
            hours_since_prep: hours,
            storage_temp: temp,
            quantity: Some("3 portions".to_string()),
        }
    }

    pub(super) fn service() -> SpoilageAnalysisService {
        SpoilageAnalysisService::new()
    }

    pub(super) fn router() -> axum::Router {
        analysis_router(Arc::new(service()))
    }

    pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use spoilage_ai::analysis::SpoilageStatus;
use tower::ServiceExt;

use common::{read_json_body, router, service, submission};

#[tokio::test]
async fn facade_flags_the_cooked_danger_zone() {
    let service = service();

    let result = service
        .analyze(&submission("Paneer Curry", true, 4.5, 25.0))
        .await;

    assert_eq!(result.status, SpoilageStatus::Reject);
    assert!(result.risk_score >= 85);
    assert_eq!(result.remaining_safe_hours, 0.0);
    assert!(result.reason.contains("Danger Zone"));
    assert!(result.handling_instruction.contains("Dispose"));
}

#[tokio::test]
async fn facade_clears_refrigerated_leftovers() {
    let service = service();

    let result = service
        .analyze(&submission("Dal Makhani", true, 24.0, 4.0))
        .await;

    assert_eq!(result.status, SpoilageStatus::Safe);
    assert_eq!(result.remaining_safe_hours, 48.0);
    assert_eq!(result.handling_instruction, "Keep chilled.");
}

#[tokio::test]
async fn router_round_trips_the_ui_payload() {
    let payload = json!({
        "name": "Veg Fried Rice",
        "isCooked": true,
        "hoursSincePrep": 3.0,
        "storageTemp": 25.0,
        "quantity": "5 boxes"
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/analysis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "CAUTION");
    assert!(body["reason"]
        .as_str()
        .expect("reason present")
        .contains("Approaching safety limits"));
    assert!(body["remaining_safe_hours"].as_f64().expect("hours present") >= 0.0);
}

#[tokio::test]
async fn router_refuses_malformed_numerics() {
    let payload = json!({
        "name": "Soup",
        "isCooked": false,
        "hoursSincePrep": 2.0,
        "storageTemp": -120.0
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/analysis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message present")
        .contains("storage temperature"));
}

#[tokio::test]
async fn identical_submissions_yield_identical_verdicts() {
    let service = service();
    let input = submission("Idli Batter", false, 1.0, 30.0);

    let first = service.analyze(&input).await;
    let second = service.analyze(&input).await;

    assert_eq!(first, second);
}
