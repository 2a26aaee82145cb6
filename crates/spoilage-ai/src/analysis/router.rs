use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use super::domain::{FoodAnalysisResult, FoodInput};
use super::intake;
use super::service::SpoilageAnalysisService;
use crate::error::AppError;

/// Router exposing the single analysis operation.
pub fn analysis_router(service: Arc<SpoilageAnalysisService>) -> Router {
    Router::new()
        .route("/api/v1/analysis", post(analyze_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<SpoilageAnalysisService>>,
    Json(input): Json<FoodInput>,
) -> Result<Json<FoodAnalysisResult>, AppError> {
    intake::validate(&input)?;
    Ok(Json(service.analyze(&input).await))
}
