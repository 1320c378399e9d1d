//! Modelo de PricingZone
//!
//! Zonas rectangulares de precios definidas por administradores.
//! Mapea exactamente a la tabla pricing_zones del schema.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Zona de precios - solo lectura en tiempo de request
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PricingZone {
    pub id: Uuid,
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    pub multiplier: Decimal,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl PricingZone {
    /// Indica si el punto cae dentro del rectángulo de la zona (bordes inclusivos)
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// Área del rectángulo en grados cuadrados, usada para el desempate
    /// entre zonas superpuestas
    pub fn area(&self) -> f64 {
        (self.max_lat - self.min_lat) * (self.max_lng - self.min_lng)
    }
}
