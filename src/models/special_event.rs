//! Modelo de SpecialEvent
//!
//! Eventos especiales (conciertos, partidos) con área de impacto rectangular
//! y ventana de actividad. Expiran naturalmente después de ends_at.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Evento especial - mapea a la tabla special_events
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpecialEvent {
    pub id: Uuid,
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub multiplier: Decimal,
    pub created_at: DateTime<Utc>,
}

impl SpecialEvent {
    /// Indica si el evento está activo en el timestamp del request
    pub fn is_active_at(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.starts_at && timestamp < self.ends_at
    }

    /// Indica si el punto de recogida cae dentro del área de impacto
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}
