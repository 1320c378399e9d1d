//! PricingService
//!
//! Orquesta el pipeline completo de un quote: snapshot → ZoneResolver →
//! MultiplierCollector → PromotionValidator → FareCalculator → log de
//! auditoría. Las únicas escrituras a mitad del pipeline son la redención
//! del promo y el INSERT del log; todo lo demás es puro sobre el snapshot.

use crate::config::environment::EnvironmentConfig;
use crate::dto::pricing_dto::{MultiplierBreakdown, QuoteRequest, QuoteResponse};
use crate::models::calculation_log::PriceCalculationLog;
use crate::models::promo::PromoRejection;
use crate::models::rates::VehicleRate;
use crate::models::snapshot::PricingSnapshot;
use crate::models::zone::PricingZone;
use crate::repositories::log_repository::LogRepository;
use crate::repositories::promo_repository::PromoRepository;
use crate::repositories::snapshot_repository::SnapshotRepository;
use crate::services::fare_calculator::{self, FareBreakdown};
use crate::services::multiplier_collector::{self, MultiplierSet};
use crate::services::promotion_validator;
use crate::services::zone_resolver;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_latitude, validate_longitude, validate_trip_parameter};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Resultado de resolver el código promocional de un request
#[derive(Debug, Clone)]
pub struct PromoOutcome {
    pub discount: Decimal,
    pub reason: Option<PromoRejection>,
    pub applied_code: Option<String>,
}

impl PromoOutcome {
    pub fn none() -> Self {
        Self {
            discount: Decimal::ZERO,
            reason: None,
            applied_code: None,
        }
    }

    pub fn rejected(reason: PromoRejection) -> Self {
        Self {
            discount: Decimal::ZERO,
            reason: Some(reason),
            applied_code: None,
        }
    }
}

pub struct PricingService {
    pool: PgPool,
    config: EnvironmentConfig,
}

impl PricingService {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }

    /// Calcular un quote completo. Cada invocación exitosa escribe una
    /// fila de auditoría, aunque el caller solo quiera el precio final.
    pub async fn quote(&self, request: QuoteRequest) -> Result<QuoteResponse, AppError> {
        request.validate()?;

        validate_latitude(request.pickup_lat, "pickup_lat")?;
        validate_longitude(request.pickup_lng, "pickup_lng")?;
        validate_latitude(request.dropoff_lat, "dropoff_lat")?;
        validate_longitude(request.dropoff_lng, "dropoff_lng")?;
        let distance_km = validate_trip_parameter(request.distance_km, "distance_km")?;
        let duration_min = validate_trip_parameter(request.duration_min, "duration_min")?;

        // Reglas horarias y eventos se evalúan contra el timestamp del
        // request para que el cálculo sea reproducible
        let timestamp = request.timestamp.unwrap_or_else(Utc::now);

        let snapshot = SnapshotRepository::new(self.pool.clone()).load(timestamp).await?;

        // Tipo de vehículo desconocido: error antes de tocar promos y sin
        // escribir ninguna fila de log
        let rate = lookup_vehicle_rate(&snapshot, &request.vehicle_type)?;

        let zone = zone_resolver::resolve(&snapshot.zones, request.pickup_lat, request.pickup_lng)
            .cloned();

        let multipliers = multiplier_collector::collect(
            &snapshot,
            zone.as_ref(),
            request.user_tier,
            request.pickup_lat,
            request.pickup_lng,
            timestamp,
            self.config.surge_ttl_secs,
        );

        let pre_discount =
            fare_calculator::calculate(distance_km, duration_min, &rate, &multipliers, Decimal::ZERO)
                .pre_discount;

        let promo = self.resolve_promo(&request, pre_discount, timestamp).await?;

        let breakdown =
            fare_calculator::calculate(distance_km, duration_min, &rate, &multipliers, promo.discount);

        let (response, log) = compose_quote(
            zone.as_ref(),
            &rate,
            &request,
            distance_km,
            duration_min,
            &multipliers,
            &breakdown,
            &promo,
            &self.config.currency,
            timestamp,
        );

        LogRepository::new(self.pool.clone()).append(&log).await?;

        info!(
            "💰 Quote calculado: {} {} (zona: {}, mult: {})",
            response.final_price,
            response.currency,
            response.zone_name.as_deref().unwrap_or("-"),
            response.multipliers.combined,
        );

        Ok(response)
    }

    /// Validar y redimir el promo del request, si trae uno. Las fallas de
    /// validación no abortan el quote: bajan a descuento cero con motivo.
    async fn resolve_promo(
        &self,
        request: &QuoteRequest,
        fare: Decimal,
        now: DateTime<Utc>,
    ) -> Result<PromoOutcome, AppError> {
        let Some(code) = &request.promo_code else {
            return Ok(PromoOutcome::none());
        };

        let repository = PromoRepository::new(self.pool.clone());

        let Some(promo) = repository.find_by_code(code).await? else {
            return Ok(PromoOutcome::rejected(PromoRejection::CodeNotFound));
        };

        let user_usage = match request.user_id {
            Some(user_id) => Some(repository.user_usage(promo.id, user_id).await?),
            None => None,
        };

        match promotion_validator::check(
            &promo,
            request.user_tier,
            user_usage,
            fare,
            now,
            self.config.max_discount_percent,
        ) {
            Ok(discount) => {
                // La redención condicional es la barrera real contra
                // sobre-redención bajo concurrencia
                if repository
                    .redeem(promo.id, request.user_id, promo.per_user_limit)
                    .await?
                {
                    Ok(PromoOutcome {
                        discount,
                        reason: None,
                        applied_code: Some(promo.code),
                    })
                } else {
                    Ok(PromoOutcome::rejected(PromoRejection::UsageLimitExceeded))
                }
            }
            Err(reason) => Ok(PromoOutcome::rejected(reason)),
        }
    }
}

/// Resolver la tarifa del tipo de vehículo. Corre antes de cualquier
/// escritura: un tipo desconocido aborta el quote sin redimir promos
/// ni dejar fila de auditoría.
fn lookup_vehicle_rate(
    snapshot: &PricingSnapshot,
    vehicle_type: &str,
) -> Result<VehicleRate, AppError> {
    snapshot
        .vehicle_rate(vehicle_type)
        .cloned()
        .ok_or_else(|| AppError::UnknownVehicleType(vehicle_type.to_string()))
}

/// Armar la response y la fila de auditoría a partir del desglose.
/// Función pura: se testea sin base de datos.
#[allow(clippy::too_many_arguments)]
fn compose_quote(
    zone: Option<&PricingZone>,
    rate: &VehicleRate,
    request: &QuoteRequest,
    distance_km: Decimal,
    duration_min: Decimal,
    multipliers: &MultiplierSet,
    breakdown: &FareBreakdown,
    promo: &PromoOutcome,
    currency: &str,
    timestamp: DateTime<Utc>,
) -> (QuoteResponse, PriceCalculationLog) {
    let response = QuoteResponse {
        zone_id: zone.map(|z| z.id),
        zone_name: zone.map(|z| z.name.clone()),
        base_fare: breakdown.base_fare,
        distance_fare: breakdown.distance_fare,
        time_fare: breakdown.time_fare,
        subtotal: breakdown.subtotal,
        multipliers: MultiplierBreakdown {
            zone: multipliers.zone,
            time: multipliers.time,
            event: multipliers.event,
            tier: multipliers.tier,
            surge: multipliers.surge,
            combined: breakdown.combined_multiplier,
        },
        pre_discount: breakdown.pre_discount,
        promo_applied: promo.applied_code.is_some(),
        promo_reason: promo.reason,
        discount: breakdown.discount,
        final_price: breakdown.final_price,
        currency: currency.to_string(),
    };

    let log = PriceCalculationLog {
        id: Uuid::new_v4(),
        zone_id: zone.map(|z| z.id),
        vehicle_type: rate.vehicle_type.clone(),
        user_tier: request.user_tier.to_string(),
        distance_km,
        duration_min,
        base_fare: breakdown.base_fare,
        distance_fare: breakdown.distance_fare,
        time_fare: breakdown.time_fare,
        subtotal: breakdown.subtotal,
        zone_multiplier: multipliers.zone,
        time_multiplier: multipliers.time,
        event_multiplier: multipliers.event,
        tier_multiplier: multipliers.tier,
        surge_multiplier: multipliers.surge,
        combined_multiplier: breakdown.combined_multiplier,
        pre_discount: breakdown.pre_discount,
        promo_code: request.promo_code.clone(),
        discount: breakdown.discount,
        final_price: breakdown.final_price,
        currency: currency.to_string(),
        created_at: timestamp,
    };

    (response, log)
}
