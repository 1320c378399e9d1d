//! Modelos de tarifas base
//!
//! Tarifas por tipo de vehículo (base + por km + por minuto) y
//! multiplicadores por tier de usuario.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tarifa por tipo de vehículo - mapea a la tabla vehicle_rates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleRate {
    pub vehicle_type: String,
    pub base_fare: Decimal,
    pub per_km_rate: Decimal,
    pub per_min_rate: Decimal,
}

/// Multiplicador por tier - mapea a la tabla tier_rates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TierRate {
    pub tier: String,
    pub multiplier: Decimal,
}
