//! DTOs del endpoint de quotes
//!
//! Request y response de POST /pricing/quote.

use crate::models::promo::PromoRejection;
use crate::models::tier::UserTier;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request para calcular un quote
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteRequest {
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub dropoff_lat: f64,
    pub dropoff_lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,

    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: String,

    pub user_tier: UserTier,

    /// Necesario solo para límites por usuario de códigos promocionales
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = 50))]
    pub promo_code: Option<String>,

    /// Timestamp del request; si falta se usa el reloj del servidor.
    /// Las reglas horarias y eventos se evalúan contra este valor.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Desglose de multiplicadores aplicados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierBreakdown {
    pub zone: Decimal,
    pub time: Decimal,
    pub event: Decimal,
    pub tier: Decimal,
    pub surge: Decimal,
    pub combined: Decimal,
}

/// Response de un quote calculado
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub zone_id: Option<Uuid>,
    pub zone_name: Option<String>,
    pub base_fare: Decimal,
    pub distance_fare: Decimal,
    pub time_fare: Decimal,
    pub subtotal: Decimal,
    pub multipliers: MultiplierBreakdown,
    pub pre_discount: Decimal,
    pub promo_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_reason: Option<PromoRejection>,
    pub discount: Decimal,
    pub final_price: Decimal,
    pub currency: String,
}
