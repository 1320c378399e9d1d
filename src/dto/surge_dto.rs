//! DTOs de surge
//!
//! Estado de surge por zona y respuestas de los endpoints internos
//! de recalculo y contadores.

use crate::models::surge::DemandSurge;
use rust_decimal::Decimal;
use serde::Serialize;

/// Response del estado de surge de una zona
#[derive(Debug, Serialize)]
pub struct SurgeResponse {
    pub zone_id: String,
    pub multiplier: Decimal,
    pub supply_count: i32,
    pub demand_count: i32,
    pub updated_at: String,
}

impl From<DemandSurge> for SurgeResponse {
    fn from(surge: DemandSurge) -> Self {
        Self {
            zone_id: surge.zone_id.to_string(),
            multiplier: surge.multiplier,
            supply_count: surge.supply_count,
            demand_count: surge.demand_count,
            updated_at: surge.updated_at.to_rfc3339(),
        }
    }
}
