//! DTOs de zonas de precios
//!
//! CRUD de administración sobre pricing_zones.

use crate::models::zone::PricingZone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear una zona de precios
#[derive(Debug, Deserialize, Validate)]
pub struct CreateZoneRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub min_lat: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub max_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub min_lng: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub max_lng: f64,

    pub multiplier: Decimal,

    /// Prioridad para desempate entre zonas superpuestas (mayor gana)
    pub priority: Option<i32>,
}

/// Response de zona para la API
#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    pub id: String,
    pub name: String,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
    pub multiplier: Decimal,
    pub priority: i32,
    pub created_at: String,
}

impl From<PricingZone> for ZoneResponse {
    fn from(zone: PricingZone) -> Self {
        Self {
            id: zone.id.to_string(),
            name: zone.name,
            min_lat: zone.min_lat,
            max_lat: zone.max_lat,
            min_lng: zone.min_lng,
            max_lng: zone.max_lng,
            multiplier: zone.multiplier,
            priority: zone.priority,
            created_at: zone.created_at.to_rfc3339(),
        }
    }
}
