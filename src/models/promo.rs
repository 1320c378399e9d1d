//! Modelo de PromotionalCode
//!
//! Códigos promocionales con restricciones de tier, límites de uso
//! (global y por usuario), expiración y tarifa mínima.

use crate::models::tier::UserTier;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de descuento - columna discount_type ('percentage' | 'flat')
pub const DISCOUNT_TYPE_PERCENTAGE: &str = "percentage";
pub const DISCOUNT_TYPE_FLAT: &str = "flat";

/// Forma canónica de un código promocional. Se aplica al crear y en
/// cada lookup: la columna `code` solo contiene códigos normalizados.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Código promocional - mapea a la tabla promotional_codes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PromotionalCode {
    pub id: Uuid,
    pub code: String,
    pub discount_type: String,
    pub discount_value: Decimal,
    pub eligible_tiers: Vec<String>,
    pub usage_limit: i32,
    pub per_user_limit: i32,
    pub used_count: i32,
    pub min_fare: Decimal,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PromotionalCode {
    pub fn is_percentage(&self) -> bool {
        self.discount_type == DISCOUNT_TYPE_PERCENTAGE
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Lista vacía = elegible para todos los tiers
    pub fn tier_eligible(&self, tier: UserTier) -> bool {
        self.eligible_tiers.is_empty()
            || self.eligible_tiers.iter().any(|t| t == tier.as_str())
    }
}

/// Motivo por el cual un código promocional no aplica.
/// No es un AppError: un promo rechazado no aborta el quote,
/// solo deja el descuento en cero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromoRejection {
    CodeNotFound,
    CodeExpired,
    TierIneligible,
    UsageLimitExceeded,
    PerUserLimitExceeded,
    BelowMinimumFare,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_normalize_to_uppercase() {
        assert_eq!(normalize_code("welcome20"), "WELCOME20");
        assert_eq!(normalize_code("  WeLcOmE20 "), "WELCOME20");
        assert_eq!(normalize_code("WELCOME20"), "WELCOME20");
    }
}
