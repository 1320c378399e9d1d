//! Rutas de administración de zonas

use crate::controllers::zone_controller::ZoneController;
use crate::dto::zone_dto::{CreateZoneRequest, ZoneResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

pub fn create_zone_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_zone))
        .route("/", get(list_zones))
        .route("/:id", get(get_zone))
        .route("/:id", delete(delete_zone))
}

async fn create_zone(
    State(state): State<AppState>,
    Json(request): Json<CreateZoneRequest>,
) -> Result<Json<ApiResponse<ZoneResponse>>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ZoneResponse>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_zones(
    State(state): State<AppState>,
) -> Result<Json<Vec<ZoneResponse>>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn delete_zone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Zona eliminada exitosamente"
    })))
}
