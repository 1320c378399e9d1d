//! Snapshot de configuración de precios
//!
//! Las tablas de configuración (zonas, reglas, tarifas, surge) se cargan
//! una sola vez por request en un snapshot de solo lectura, de modo que
//! el cálculo sea una función pura de sus entradas.

use crate::models::rates::VehicleRate;
use crate::models::special_event::SpecialEvent;
use crate::models::surge::{DemandSurge, SurgeStep};
use crate::models::time_rule::TimePricingRule;
use crate::models::zone::PricingZone;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// Configuración congelada para un quote
#[derive(Debug, Clone)]
pub struct PricingSnapshot {
    pub zones: Vec<PricingZone>,
    pub time_rules: Vec<TimePricingRule>,
    pub events: Vec<SpecialEvent>,
    pub vehicle_rates: HashMap<String, VehicleRate>,
    pub tier_rates: HashMap<String, Decimal>,
    pub surge: HashMap<Uuid, DemandSurge>,
    pub surge_steps: Vec<SurgeStep>,
    pub taken_at: DateTime<Utc>,
}

impl PricingSnapshot {
    /// Snapshot vacío: todos los lookups caen en sus defaults neutros
    pub fn empty(taken_at: DateTime<Utc>) -> Self {
        Self {
            zones: Vec::new(),
            time_rules: Vec::new(),
            events: Vec::new(),
            vehicle_rates: HashMap::new(),
            tier_rates: HashMap::new(),
            surge: HashMap::new(),
            surge_steps: Vec::new(),
            taken_at,
        }
    }

    pub fn vehicle_rate(&self, vehicle_type: &str) -> Option<&VehicleRate> {
        self.vehicle_rates.get(vehicle_type)
    }

    pub fn surge_for_zone(&self, zone_id: Uuid) -> Option<&DemandSurge> {
        self.surge.get(&zone_id)
    }
}
