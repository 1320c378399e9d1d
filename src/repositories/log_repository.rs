//! Repositorio del log de cálculos
//!
//! Append-only: solo INSERT. No hay UPDATE ni DELETE sobre
//! price_calculation_logs (pista de auditoría).

use crate::models::calculation_log::PriceCalculationLog;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn append(&self, log: &PriceCalculationLog) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO price_calculation_logs
                (id, zone_id, vehicle_type, user_tier, distance_km, duration_min,
                 base_fare, distance_fare, time_fare, subtotal,
                 zone_multiplier, time_multiplier, event_multiplier, tier_multiplier,
                 surge_multiplier, combined_multiplier, pre_discount,
                 promo_code, discount, final_price, currency, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            "#,
        )
        .bind(log.id)
        .bind(log.zone_id)
        .bind(&log.vehicle_type)
        .bind(&log.user_tier)
        .bind(log.distance_km)
        .bind(log.duration_min)
        .bind(log.base_fare)
        .bind(log.distance_fare)
        .bind(log.time_fare)
        .bind(log.subtotal)
        .bind(log.zone_multiplier)
        .bind(log.time_multiplier)
        .bind(log.event_multiplier)
        .bind(log.tier_multiplier)
        .bind(log.surge_multiplier)
        .bind(log.combined_multiplier)
        .bind(log.pre_discount)
        .bind(&log.promo_code)
        .bind(log.discount)
        .bind(log.final_price)
        .bind(&log.currency)
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
