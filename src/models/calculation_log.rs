//! Modelo de PriceCalculationLog
//!
//! Registro inmutable de auditoría: cada quote calculado escribe una fila
//! con todos sus valores intermedios. Nunca se actualiza ni se borra.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fila de price_calculation_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PriceCalculationLog {
    pub id: Uuid,
    pub zone_id: Option<Uuid>,
    pub vehicle_type: String,
    pub user_tier: String,
    pub distance_km: Decimal,
    pub duration_min: Decimal,
    pub base_fare: Decimal,
    pub distance_fare: Decimal,
    pub time_fare: Decimal,
    pub subtotal: Decimal,
    pub zone_multiplier: Decimal,
    pub time_multiplier: Decimal,
    pub event_multiplier: Decimal,
    pub tier_multiplier: Decimal,
    pub surge_multiplier: Decimal,
    pub combined_multiplier: Decimal,
    pub pre_discount: Decimal,
    pub promo_code: Option<String>,
    pub discount: Decimal,
    pub final_price: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}
