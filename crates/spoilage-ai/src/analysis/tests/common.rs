use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::domain::FoodInput;
use crate::analysis::{analysis_router, SpoilageAnalysisService};

pub(super) fn named_input(name: &str, is_cooked: bool, hours: f64, temp: f64) -> FoodInput {
    FoodInput {
        name: name.to_string(),
        is_cooked,
        hours_since_prep: hours,
        storage_temp: temp,
        quantity: None,
    }
}

pub(super) fn cooked_input(hours: f64, temp: f64) -> FoodInput {
    named_input("Vegetable Biryani", true, hours, temp)
}

pub(super) fn raw_input(hours: f64, temp: f64) -> FoodInput {
    named_input("Fresh Salad", false, hours, temp)
}

pub(super) fn analysis_service() -> SpoilageAnalysisService {
    SpoilageAnalysisService::new()
}

pub(super) fn router() -> axum::Router {
    analysis_router(Arc::new(analysis_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
