//! Modelos de DemandSurge y SurgeStep
//!
//! Estado de surge por zona (recalculado por el SurgeTracker) y la tabla
//! de escalones configurada por administradores que mapea el ratio
//! demanda/oferta a un multiplicador.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Registro de surge por zona - mapea a la tabla demand_surge
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DemandSurge {
    pub zone_id: Uuid,
    pub multiplier: Decimal,
    pub supply_count: i32,
    pub demand_count: i32,
    pub updated_at: DateTime<Utc>,
}

impl DemandSurge {
    /// Un registro más viejo que el TTL se considera stale y el quote
    /// debe tratar el multiplicador como 1.0
    pub fn is_stale(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        now - self.updated_at > Duration::seconds(ttl_secs as i64)
    }

    /// Ratio demanda/oferta con denominador mínimo 1
    pub fn ratio(&self) -> f64 {
        f64::from(self.demand_count) / f64::from(self.supply_count.max(1))
    }
}

/// Escalón de la función monotónica ratio → multiplicador
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurgeStep {
    pub id: Uuid,
    pub min_ratio: Decimal,
    pub multiplier: Decimal,
}

/// Mapear un ratio demanda/oferta al multiplicador del escalón más alto
/// cuyo min_ratio no supere al ratio. Tabla vacía o ratio por debajo de
/// todos los escalones → 1.0.
pub fn multiplier_for_ratio(steps: &[SurgeStep], ratio: f64) -> Decimal {
    let ratio = Decimal::from_f64_retain(ratio).unwrap_or(Decimal::ZERO);
    let mut sorted: Vec<&SurgeStep> = steps.iter().collect();
    sorted.sort_by(|a, b| a.min_ratio.cmp(&b.min_ratio));

    let mut multiplier = Decimal::ONE;
    for step in sorted {
        if ratio >= step.min_ratio {
            multiplier = step.multiplier;
        }
    }
    multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn step(min_ratio: Decimal, multiplier: Decimal) -> SurgeStep {
        SurgeStep {
            id: Uuid::new_v4(),
            min_ratio,
            multiplier,
        }
    }

    #[test]
    fn step_function_is_monotonic() {
        // Escalones desordenados a propósito
        let steps = vec![
            step(dec!(2.0), dec!(2.0)),
            step(dec!(1.0), dec!(1.2)),
            step(dec!(1.5), dec!(1.5)),
        ];
        assert_eq!(multiplier_for_ratio(&steps, 0.5), dec!(1.0));
        assert_eq!(multiplier_for_ratio(&steps, 1.0), dec!(1.2));
        assert_eq!(multiplier_for_ratio(&steps, 1.4), dec!(1.2));
        assert_eq!(multiplier_for_ratio(&steps, 1.7), dec!(1.5));
        assert_eq!(multiplier_for_ratio(&steps, 3.0), dec!(2.0));
    }

    #[test]
    fn empty_step_table_is_neutral() {
        assert_eq!(multiplier_for_ratio(&[], 5.0), dec!(1.0));
    }

    #[test]
    fn staleness_by_ttl() {
        let now = Utc::now();
        let surge = DemandSurge {
            zone_id: Uuid::new_v4(),
            multiplier: dec!(1.5),
            supply_count: 10,
            demand_count: 15,
            updated_at: now - Duration::seconds(150),
        };
        assert!(surge.is_stale(now, 120));
        assert!(!surge.is_stale(now, 300));
    }

    #[test]
    fn ratio_never_divides_by_zero() {
        let surge = DemandSurge {
            zone_id: Uuid::new_v4(),
            multiplier: dec!(1.0),
            supply_count: 0,
            demand_count: 7,
            updated_at: Utc::now(),
        };
        assert_eq!(surge.ratio(), 7.0);
    }
}
