//! Rutas del pipeline de precios

use crate::controllers::pricing_controller::PricingController;
use crate::dto::pricing_dto::{QuoteRequest, QuoteResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

pub fn create_pricing_router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/health", get(health))
}

async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = PricingController::new(state.pool.clone(), state.config.clone());
    let response = controller.quote(request).await?;
    Ok(Json(response))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "pricing",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
