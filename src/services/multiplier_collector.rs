//! MultiplierCollector
//!
//! Junta los cinco multiplicadores de un viaje: zona, franja horaria,
//! evento especial, tier de usuario y surge. Cada lookup cae en 1.0
//! cuando no hay regla aplicable: la falta de datos es neutra, nunca
//! un error. Las reglas horarias y los eventos se evalúan contra el
//! timestamp del request, no contra el reloj del servidor.

use crate::models::snapshot::PricingSnapshot;
use crate::models::tier::UserTier;
use crate::models::zone::PricingZone;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Los cinco multiplicadores independientes de un quote
#[derive(Debug, Clone, Serialize)]
pub struct MultiplierSet {
    pub zone: Decimal,
    pub time: Decimal,
    pub event: Decimal,
    pub tier: Decimal,
    pub surge: Decimal,
}

impl MultiplierSet {
    /// Producto directo de los cinco factores. La composición es
    /// multiplicativa a propósito: surge y descuento VIP interactúan
    /// multiplicándose, no sumándose.
    pub fn combined(&self) -> Decimal {
        self.zone * self.time * self.event * self.tier * self.surge
    }
}

/// Recolectar los multiplicadores para el contexto del viaje
pub fn collect(
    snapshot: &PricingSnapshot,
    zone: Option<&PricingZone>,
    tier: UserTier,
    pickup_lat: f64,
    pickup_lng: f64,
    timestamp: DateTime<Utc>,
    surge_ttl_secs: u64,
) -> MultiplierSet {
    let zone_multiplier = zone.map(|z| z.multiplier).unwrap_or(Decimal::ONE);

    // Entre varias reglas horarias activas gana la de mayor multiplicador
    let time_multiplier = snapshot
        .time_rules
        .iter()
        .filter(|rule| rule.applies_at(timestamp))
        .map(|rule| rule.multiplier)
        .max()
        .unwrap_or(Decimal::ONE);

    // Igual para eventos: activos en el timestamp y cubriendo el pickup
    let event_multiplier = snapshot
        .events
        .iter()
        .filter(|event| event.is_active_at(timestamp) && event.contains(pickup_lat, pickup_lng))
        .map(|event| event.multiplier)
        .max()
        .unwrap_or(Decimal::ONE);

    let tier_multiplier = snapshot
        .tier_rates
        .get(tier.as_str())
        .copied()
        .unwrap_or(Decimal::ONE);

    // Surge stale (más viejo que el TTL) cuenta como sin surge
    let surge_multiplier = zone
        .and_then(|z| snapshot.surge_for_zone(z.id))
        .filter(|surge| !surge.is_stale(timestamp, surge_ttl_secs))
        .map(|surge| surge.multiplier)
        .unwrap_or(Decimal::ONE);

    MultiplierSet {
        zone: zone_multiplier,
        time: time_multiplier,
        event: event_multiplier,
        tier: tier_multiplier,
        surge: surge_multiplier,
    }
}
