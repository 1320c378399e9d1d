//! Repositorio de surge por zona
//!
//! Los contadores de oferta/demanda avanzan con UPDATEs atómicos y el
//! recálculo toma el row con FOR UPDATE para que dos triggers concurrentes
//! sobre la misma zona no pierdan escrituras.

use crate::models::surge::{multiplier_for_ratio, DemandSurge, SurgeStep};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SurgeRepository {
    pool: PgPool,
}

impl SurgeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_zone(&self, zone_id: Uuid) -> Result<Option<DemandSurge>, AppError> {
        let surge =
            sqlx::query_as::<_, DemandSurge>("SELECT * FROM demand_surge WHERE zone_id = $1")
                .bind(zone_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(surge)
    }

    pub async fn list_all(&self) -> Result<Vec<DemandSurge>, AppError> {
        let rows = sqlx::query_as::<_, DemandSurge>("SELECT * FROM demand_surge")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn list_steps(&self) -> Result<Vec<SurgeStep>, AppError> {
        let steps =
            sqlx::query_as::<_, SurgeStep>("SELECT * FROM surge_steps ORDER BY min_ratio")
                .fetch_all(&self.pool)
                .await?;

        Ok(steps)
    }

    /// Incremento atómico del contador de oferta (drivers disponibles)
    pub async fn bump_supply(&self, zone_id: Uuid, delta: i32) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE demand_surge
            SET supply_count = GREATEST(supply_count + $2, 0)
            WHERE zone_id = $1
            "#,
        )
        .bind(zone_id)
        .bind(delta)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Incremento atómico del contador de demanda (requests de viaje)
    pub async fn bump_demand(&self, zone_id: Uuid, delta: i32) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE demand_surge
            SET demand_count = GREATEST(demand_count + $2, 0)
            WHERE zone_id = $1
            "#,
        )
        .bind(zone_id)
        .bind(delta)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Recalcular el multiplicador de una zona en una sola operación atómica:
    /// SELECT ... FOR UPDATE, ratio = demanda / max(oferta, 1), mapeo por la
    /// tabla de escalones y un único UPDATE de multiplicador + timestamp.
    pub async fn recompute(
        &self,
        zone_id: Uuid,
        steps: &[SurgeStep],
    ) -> Result<Option<DemandSurge>, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, DemandSurge>(
            "SELECT * FROM demand_surge WHERE zone_id = $1 FOR UPDATE",
        )
        .bind(zone_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        let multiplier = multiplier_for_ratio(steps, current.ratio());

        let updated = sqlx::query_as::<_, DemandSurge>(
            r#"
            UPDATE demand_surge
            SET multiplier = $2, updated_at = $3
            WHERE zone_id = $1
            RETURNING *
            "#,
        )
        .bind(zone_id)
        .bind(multiplier)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}
