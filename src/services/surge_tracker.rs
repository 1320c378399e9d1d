//! SurgeTracker
//!
//! Recalcula el multiplicador de surge por zona a partir del ratio
//! demanda/oferta, mapeado por la tabla surge_steps. Corre en un task de
//! fondo a intervalo fijo y también puede dispararse on-demand vía el
//! endpoint interno de recalculo.

use crate::repositories::surge_repository::SurgeRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

pub struct SurgeTracker {
    repository: SurgeRepository,
}

impl SurgeTracker {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SurgeRepository::new(pool),
        }
    }

    /// Recalcular una sola zona. Devuelve el multiplicador nuevo,
    /// o None si la zona no tiene registro de surge.
    pub async fn recompute_zone(&self, zone_id: Uuid) -> Result<Option<rust_decimal::Decimal>, AppError> {
        let steps = self.repository.list_steps().await?;
        let updated = self.repository.recompute(zone_id, &steps).await?;
        Ok(updated.map(|s| s.multiplier))
    }

    /// Recalcular todas las zonas con registro de surge
    pub async fn recompute_all(&self) -> Result<usize, AppError> {
        let steps = self.repository.list_steps().await?;
        let rows = self.repository.list_all().await?;
        let total = rows.len();

        for row in rows {
            self.repository.recompute(row.zone_id, &steps).await?;
        }

        Ok(total)
    }
}

/// Loop de fondo: recalcular todas las zonas cada `interval_secs`
pub async fn run(pool: PgPool, interval_secs: u64) {
    let tracker = SurgeTracker::new(pool);
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;
        match tracker.recompute_all().await {
            Ok(zones) => info!("🌊 Surge recalculado para {} zonas", zones),
            Err(e) => error!("Error recalculando surge: {}", e),
        }
    }
}
