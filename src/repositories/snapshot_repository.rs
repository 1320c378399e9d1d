//! Carga del snapshot de configuración
//!
//! Lee todas las tablas de configuración de precios en un snapshot de solo
//! lectura por request. El cálculo nunca consulta la base a mitad de camino.

use crate::models::rates::{TierRate, VehicleRate};
use crate::models::snapshot::PricingSnapshot;
use crate::models::special_event::SpecialEvent;
use crate::models::surge::{DemandSurge, SurgeStep};
use crate::models::time_rule::TimePricingRule;
use crate::models::zone::PricingZone;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;

pub struct SnapshotRepository {
    pool: PgPool,
}

impl SnapshotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cargar el snapshot completo para un quote. Los eventos ya vencidos
    /// se filtran en SQL; el resto de la evaluación temporal es pura.
    pub async fn load(&self, timestamp: DateTime<Utc>) -> Result<PricingSnapshot, AppError> {
        let zones = sqlx::query_as::<_, PricingZone>("SELECT * FROM pricing_zones")
            .fetch_all(&self.pool)
            .await?;

        let time_rules = sqlx::query_as::<_, TimePricingRule>("SELECT * FROM time_pricing_rules")
            .fetch_all(&self.pool)
            .await?;

        let events = sqlx::query_as::<_, SpecialEvent>(
            "SELECT * FROM special_events WHERE ends_at > $1",
        )
        .bind(timestamp)
        .fetch_all(&self.pool)
        .await?;

        let vehicle_rates = sqlx::query_as::<_, VehicleRate>("SELECT * FROM vehicle_rates")
            .fetch_all(&self.pool)
            .await?;

        let tier_rates = sqlx::query_as::<_, TierRate>("SELECT * FROM tier_rates")
            .fetch_all(&self.pool)
            .await?;

        let surge = sqlx::query_as::<_, DemandSurge>("SELECT * FROM demand_surge")
            .fetch_all(&self.pool)
            .await?;

        let surge_steps =
            sqlx::query_as::<_, SurgeStep>("SELECT * FROM surge_steps ORDER BY min_ratio")
                .fetch_all(&self.pool)
                .await?;

        Ok(PricingSnapshot {
            zones,
            time_rules,
            events,
            vehicle_rates: vehicle_rates
                .into_iter()
                .map(|r| (r.vehicle_type.clone(), r))
                .collect::<HashMap<_, _>>(),
            tier_rates: tier_rates
                .into_iter()
                .map(|t| (t.tier, t.multiplier))
                .collect::<HashMap<_, _>>(),
            surge: surge.into_iter().map(|s| (s.zone_id, s)).collect(),
            surge_steps,
            taken_at: timestamp,
        })
    }
}
