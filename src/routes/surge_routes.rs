//! Rutas internas de surge
//!
//! Contadores de oferta/demanda y recalculo on-demand por zona.

use crate::controllers::surge_controller::SurgeController;
use crate::dto::surge_dto::SurgeResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

pub fn create_surge_router() -> Router<AppState> {
    Router::new()
        .route("/:zone_id", get(get_surge))
        .route("/:zone_id/supply", post(bump_supply))
        .route("/:zone_id/demand", post(bump_demand))
        .route("/:zone_id/recompute", post(recompute))
}

#[derive(Debug, Deserialize)]
struct BumpRequest {
    /// Delta del contador; default +1
    delta: Option<i32>,
}

/// Un POST sin body cuenta como +1; el body solo hace falta para
/// deltas distintos de 1 (o negativos)
fn bump_delta(body: Option<BumpRequest>) -> i32 {
    body.and_then(|b| b.delta).unwrap_or(1)
}

async fn get_surge(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
) -> Result<Json<SurgeResponse>, AppError> {
    let controller = SurgeController::new(state.pool.clone());
    let response = controller.get_by_zone(zone_id).await?;
    Ok(Json(response))
}

async fn bump_supply(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
    body: Option<Json<BumpRequest>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SurgeController::new(state.pool.clone());
    controller
        .bump_supply(zone_id, bump_delta(body.map(|Json(b)| b)))
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn bump_demand(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
    body: Option<Json<BumpRequest>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SurgeController::new(state.pool.clone());
    controller
        .bump_demand(zone_id, bump_delta(body.map(|Json(b)| b)))
        .await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn recompute(
    State(state): State<AppState>,
    Path(zone_id): Path<Uuid>,
) -> Result<Json<SurgeResponse>, AppError> {
    let controller = SurgeController::new(state.pool.clone());
    let response = controller.recompute(zone_id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_body_defaults_to_plus_one() {
        assert_eq!(bump_delta(None), 1);
        assert_eq!(bump_delta(Some(BumpRequest { delta: None })), 1);
    }

    #[test]
    fn explicit_delta_is_passed_through() {
        assert_eq!(bump_delta(Some(BumpRequest { delta: Some(5) })), 5);
        assert_eq!(bump_delta(Some(BumpRequest { delta: Some(-2) })), -2);
    }
}
