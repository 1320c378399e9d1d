//! Controller de zonas de precios

use crate::dto::zone_dto::{CreateZoneRequest, ZoneResponse};
use crate::dto::ApiResponse;
use crate::repositories::zone_repository::ZoneRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ZoneController {
    repository: ZoneRepository,
}

impl ZoneController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ZoneRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateZoneRequest,
    ) -> Result<ApiResponse<ZoneResponse>, AppError> {
        request.validate()?;

        // El rectángulo no puede ser degenerado
        if request.min_lat >= request.max_lat || request.min_lng >= request.max_lng {
            return Err(AppError::BadRequest(
                "Zone bounds must form a non-degenerate rectangle".to_string(),
            ));
        }

        if request.multiplier.is_sign_negative() {
            return Err(AppError::BadRequest(
                "Zone multiplier must be non-negative".to_string(),
            ));
        }

        if self.repository.name_exists(&request.name).await? {
            return Err(conflict_error("Zone", "name", &request.name));
        }

        let zone = self
            .repository
            .create(
                request.name,
                request.min_lat,
                request.max_lat,
                request.min_lng,
                request.max_lng,
                request.multiplier,
                request.priority.unwrap_or(0),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            zone.into(),
            "Zona creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ZoneResponse, AppError> {
        let zone = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))?;

        Ok(zone.into())
    }

    pub async fn list(&self) -> Result<Vec<ZoneResponse>, AppError> {
        let zones = self.repository.list_all().await?;
        Ok(zones.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
