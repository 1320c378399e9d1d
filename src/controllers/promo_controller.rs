//! Controller de códigos promocionales

use crate::dto::promo_dto::{CreatePromoRequest, PromoResponse};
use crate::dto::ApiResponse;
use crate::models::promo::{normalize_code, DISCOUNT_TYPE_FLAT, DISCOUNT_TYPE_PERCENTAGE};
use crate::models::tier::UserTier;
use crate::repositories::promo_repository::PromoRepository;
use crate::utils::errors::{conflict_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;
use validator::Validate;

pub struct PromoController {
    repository: PromoRepository,
}

impl PromoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PromoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreatePromoRequest,
    ) -> Result<ApiResponse<PromoResponse>, AppError> {
        validate_create(&request)?;

        // Los códigos se guardan normalizados a mayúsculas y los tiers
        // en su forma canónica en minúsculas
        let code = normalize_code(&request.code);
        let eligible_tiers = canonical_tiers(&request.eligible_tiers)?;

        if self.repository.code_exists(&code).await? {
            return Err(conflict_error("Promo", "code", &code));
        }

        let promo = self
            .repository
            .create(
                code,
                request.discount_type,
                request.discount_value,
                eligible_tiers,
                request.usage_limit,
                request.per_user_limit,
                request.min_fare,
                request.expires_at,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            promo.into(),
            "Código promocional creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_code(&self, code: &str) -> Result<PromoResponse, AppError> {
        let promo = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Código promocional no encontrado".to_string()))?;

        Ok(promo.into())
    }

    pub async fn list(&self) -> Result<Vec<PromoResponse>, AppError> {
        let promos = self.repository.list_all().await?;
        Ok(promos.into_iter().map(Into::into).collect())
    }
}

fn validate_create(request: &CreatePromoRequest) -> Result<(), AppError> {
    request.validate()?;

    if request.discount_type != DISCOUNT_TYPE_PERCENTAGE
        && request.discount_type != DISCOUNT_TYPE_FLAT
    {
        return Err(AppError::BadRequest(format!(
            "discount_type must be '{}' or '{}'",
            DISCOUNT_TYPE_PERCENTAGE, DISCOUNT_TYPE_FLAT
        )));
    }

    if request.discount_value <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "discount_value must be positive".to_string(),
        ));
    }

    if request.min_fare.is_sign_negative() {
        return Err(AppError::BadRequest(
            "min_fare must be non-negative".to_string(),
        ));
    }

    Ok(())
}

/// Validar cada tier contra los nombres conocidos y devolver la forma
/// canónica; un tier con typo crearía un promo que nadie puede redimir
fn canonical_tiers(tiers: &[String]) -> Result<Vec<String>, AppError> {
    tiers
        .iter()
        .map(|t| {
            UserTier::from_str(t)
                .map(|tier| tier.as_str().to_string())
                .map_err(AppError::BadRequest)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn create_request(discount_type: &str, tiers: Vec<&str>) -> CreatePromoRequest {
        CreatePromoRequest {
            code: "WELCOME20".to_string(),
            discount_type: discount_type.to_string(),
            discount_value: dec!(1000),
            eligible_tiers: tiers.into_iter().map(String::from).collect(),
            usage_limit: 100,
            per_user_limit: 1,
            min_fare: Decimal::ZERO,
            expires_at: Utc::now() + chrono::Duration::days(30),
        }
    }

    #[test]
    fn rejects_unknown_discount_type() {
        let request = create_request("bogus", vec![]);
        assert!(validate_create(&request).is_err());
    }

    #[test]
    fn tiers_are_canonicalized_case_insensitively() {
        let tiers = canonical_tiers(&["VIP".to_string(), "Premium".to_string()]).unwrap();
        assert_eq!(tiers, vec!["vip".to_string(), "premium".to_string()]);
    }

    #[test]
    fn unknown_tier_name_is_rejected() {
        let result = canonical_tiers(&["vip".to_string(), "gold".to_string()]);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn empty_tier_list_stays_empty() {
        assert_eq!(canonical_tiers(&[]).unwrap(), Vec::<String>::new());
    }
}
