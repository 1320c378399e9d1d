//! DTOs de códigos promocionales
//!
//! CRUD de administración sobre promotional_codes.

use crate::models::promo::PromotionalCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para crear un código promocional
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePromoRequest {
    #[validate(length(min = 3, max = 50))]
    pub code: String,

    /// 'percentage' o 'flat'
    #[validate(length(min = 4, max = 10))]
    pub discount_type: String,

    pub discount_value: Decimal,

    /// Tiers elegibles; lista vacía = todos
    #[serde(default)]
    pub eligible_tiers: Vec<String>,

    #[validate(range(min = 1))]
    pub usage_limit: i32,

    #[validate(range(min = 1))]
    pub per_user_limit: i32,

    #[serde(default)]
    pub min_fare: Decimal,

    pub expires_at: DateTime<Utc>,
}

/// Response de código promocional (sin exponer contadores internos por usuario)
#[derive(Debug, Serialize)]
pub struct PromoResponse {
    pub id: String,
    pub code: String,
    pub discount_type: String,
    pub discount_value: Decimal,
    pub eligible_tiers: Vec<String>,
    pub usage_limit: i32,
    pub per_user_limit: i32,
    pub used_count: i32,
    pub min_fare: Decimal,
    pub expires_at: String,
    pub created_at: String,
}

impl From<PromotionalCode> for PromoResponse {
    fn from(promo: PromotionalCode) -> Self {
        Self {
            id: promo.id.to_string(),
            code: promo.code,
            discount_type: promo.discount_type,
            discount_value: promo.discount_value,
            eligible_tiers: promo.eligible_tiers,
            usage_limit: promo.usage_limit,
            per_user_limit: promo.per_user_limit,
            used_count: promo.used_count,
            min_fare: promo.min_fare,
            expires_at: promo.expires_at.to_rfc3339(),
            created_at: promo.created_at.to_rfc3339(),
        }
    }
}
