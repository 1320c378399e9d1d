//! Rutas de administración de códigos promocionales

use crate::controllers::promo_controller::PromoController;
use crate::dto::promo_dto::{CreatePromoRequest, PromoResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

pub fn create_promo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_promo))
        .route("/", get(list_promos))
        .route("/:code", get(get_promo))
}

async fn create_promo(
    State(state): State<AppState>,
    Json(request): Json<CreatePromoRequest>,
) -> Result<Json<ApiResponse<PromoResponse>>, AppError> {
    let controller = PromoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_promo(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<PromoResponse>, AppError> {
    let controller = PromoController::new(state.pool.clone());
    let response = controller.get_by_code(&code).await?;
    Ok(Json(response))
}

async fn list_promos(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromoResponse>>, AppError> {
    let controller = PromoController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
