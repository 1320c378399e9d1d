//! PromotionValidator
//!
//! Chequeos de elegibilidad de un código promocional, en orden fijo:
//! existe → no expirado → tier elegible → límite global → límite por
//! usuario → tarifa mínima. El primer fallo corta y devuelve su motivo;
//! un promo rechazado nunca aborta el quote, solo deja descuento cero.
//!
//! El chequeo del límite global acá es informativo (para el motivo):
//! la garantía real contra sobre-redención es el UPDATE condicional
//! de PromoRepository::redeem.

use crate::models::promo::{PromoRejection, PromotionalCode};
use crate::models::tier::UserTier;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Validar el código y calcular el descuento sobre la tarifa pre-descuento.
///
/// `user_usage` es None cuando el request no trae user_id: en ese caso el
/// límite por usuario no se puede rastrear y se omite.
pub fn check(
    promo: &PromotionalCode,
    tier: UserTier,
    user_usage: Option<i32>,
    fare: Decimal,
    now: DateTime<Utc>,
    max_discount_percent: Decimal,
) -> Result<Decimal, PromoRejection> {
    if promo.is_expired_at(now) {
        return Err(PromoRejection::CodeExpired);
    }

    if !promo.tier_eligible(tier) {
        return Err(PromoRejection::TierIneligible);
    }

    if promo.used_count >= promo.usage_limit {
        return Err(PromoRejection::UsageLimitExceeded);
    }

    if let Some(usage) = user_usage {
        if usage >= promo.per_user_limit {
            return Err(PromoRejection::PerUserLimitExceeded);
        }
    }

    if fare < promo.min_fare {
        return Err(PromoRejection::BelowMinimumFare);
    }

    let discount = if promo.is_percentage() {
        let percent = promo.discount_value.min(max_discount_percent);
        fare * percent / Decimal::from(100)
    } else {
        // Flat capeado a la tarifa para no producir precios negativos
        promo.discount_value.min(fare)
    };

    Ok(discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn promo() -> PromotionalCode {
        let now = Utc::now();
        PromotionalCode {
            id: Uuid::new_v4(),
            code: "WELCOME20".to_string(),
            discount_type: "flat".to_string(),
            discount_value: dec!(1000),
            eligible_tiers: vec![],
            usage_limit: 100,
            per_user_limit: 1,
            used_count: 0,
            min_fare: dec!(2000),
            expires_at: now + Duration::days(30),
            created_at: now,
        }
    }

    #[test]
    fn valid_flat_discount() {
        let discount = check(&promo(), UserTier::Normal, Some(0), dec!(8450), Utc::now(), dec!(100));
        assert_eq!(discount, Ok(dec!(1000)));
    }

    #[test]
    fn flat_discount_capped_at_fare() {
        let mut p = promo();
        p.min_fare = Decimal::ZERO;
        let discount = check(&p, UserTier::Normal, Some(0), dec!(600), Utc::now(), dec!(100));
        assert_eq!(discount, Ok(dec!(600)));
    }

    #[test]
    fn percentage_discount_with_cap() {
        let mut p = promo();
        p.discount_type = "percentage".to_string();
        p.discount_value = dec!(150); // configurado mal por encima del 100%
        let discount = check(&p, UserTier::Normal, Some(0), dec!(8000), Utc::now(), dec!(100));
        assert_eq!(discount, Ok(dec!(8000)));

        p.discount_value = dec!(20);
        let discount = check(&p, UserTier::Normal, Some(0), dec!(8000), Utc::now(), dec!(100));
        assert_eq!(discount, Ok(dec!(1600)));
    }

    #[test]
    fn expired_code_rejected() {
        let mut p = promo();
        p.expires_at = Utc::now() - Duration::hours(1);
        let result = check(&p, UserTier::Normal, Some(0), dec!(8450), Utc::now(), dec!(100));
        assert_eq!(result, Err(PromoRejection::CodeExpired));
    }

    #[test]
    fn tier_restriction_enforced() {
        let mut p = promo();
        p.eligible_tiers = vec!["vip".to_string()];
        let result = check(&p, UserTier::Normal, Some(0), dec!(8450), Utc::now(), dec!(100));
        assert_eq!(result, Err(PromoRejection::TierIneligible));

        let result = check(&p, UserTier::Vip, Some(0), dec!(8450), Utc::now(), dec!(100));
        assert!(result.is_ok());
    }

    #[test]
    fn usage_limits_in_order() {
        let mut p = promo();
        p.used_count = 100;
        let result = check(&p, UserTier::Normal, Some(0), dec!(8450), Utc::now(), dec!(100));
        assert_eq!(result, Err(PromoRejection::UsageLimitExceeded));

        p.used_count = 5;
        let result = check(&p, UserTier::Normal, Some(1), dec!(8450), Utc::now(), dec!(100));
        assert_eq!(result, Err(PromoRejection::PerUserLimitExceeded));

        // Sin user_id el límite por usuario se omite
        let result = check(&p, UserTier::Normal, None, dec!(8450), Utc::now(), dec!(100));
        assert!(result.is_ok());
    }

    #[test]
    fn minimum_fare_is_the_last_check() {
        let result = check(&promo(), UserTier::Normal, Some(0), dec!(1500), Utc::now(), dec!(100));
        assert_eq!(result, Err(PromoRejection::BelowMinimumFare));
    }

    #[test]
    fn expiry_beats_tier_in_check_order() {
        let mut p = promo();
        p.expires_at = Utc::now() - Duration::hours(1);
        p.eligible_tiers = vec!["vip".to_string()];
        let result = check(&p, UserTier::Normal, Some(0), dec!(8450), Utc::now(), dec!(100));
        assert_eq!(result, Err(PromoRejection::CodeExpired));
    }
}
