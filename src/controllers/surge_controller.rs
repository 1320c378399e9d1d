//! Controller de surge
//!
//! Endpoints internos: estado de surge por zona, incremento de contadores
//! de oferta/demanda y recalculo on-demand.

use crate::dto::surge_dto::SurgeResponse;
use crate::repositories::surge_repository::SurgeRepository;
use crate::services::surge_tracker::SurgeTracker;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SurgeController {
    repository: SurgeRepository,
    tracker: SurgeTracker,
}

impl SurgeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SurgeRepository::new(pool.clone()),
            tracker: SurgeTracker::new(pool),
        }
    }

    pub async fn get_by_zone(&self, zone_id: Uuid) -> Result<SurgeResponse, AppError> {
        let surge = self
            .repository
            .find_by_zone(zone_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Surge record not found for zone".to_string()))?;

        Ok(surge.into())
    }

    pub async fn bump_supply(&self, zone_id: Uuid, delta: i32) -> Result<(), AppError> {
        self.repository.bump_supply(zone_id, delta).await
    }

    pub async fn bump_demand(&self, zone_id: Uuid, delta: i32) -> Result<(), AppError> {
        self.repository.bump_demand(zone_id, delta).await
    }

    pub async fn recompute(&self, zone_id: Uuid) -> Result<SurgeResponse, AppError> {
        self.tracker.recompute_zone(zone_id).await?;

        let surge = self
            .repository
            .find_by_zone(zone_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Surge record not found for zone".to_string()))?;

        Ok(surge.into())
    }
}
