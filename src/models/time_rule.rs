//! Modelo de TimePricingRule
//!
//! Reglas de precio por franja horaria y día de la semana.
//! Los días se guardan como smallint[] con 0 = lunes .. 6 = domingo.

use chrono::{DateTime, Datelike, NaiveTime, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Regla de precio por horario - mapea a la tabla time_pricing_rules
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimePricingRule {
    pub id: Uuid,
    pub name: String,
    pub days_of_week: Vec<i16>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub multiplier: Decimal,
    pub created_at: DateTime<Utc>,
}

impl TimePricingRule {
    /// Indica si la regla aplica al timestamp del request (UTC).
    /// Las ventanas con start > end cruzan medianoche.
    pub fn applies_at(&self, timestamp: DateTime<Utc>) -> bool {
        let weekday = timestamp.weekday().num_days_from_monday() as i16;
        if !self.days_of_week.contains(&weekday) {
            return false;
        }

        // Descartar sub-segundos para comparar contra columnas TIME
        let time = NaiveTime::from_hms_opt(
            timestamp.time().hour(),
            timestamp.time().minute(),
            timestamp.time().second(),
        )
        .unwrap_or(self.start_time);

        if self.start_time <= self.end_time {
            time >= self.start_time && time < self.end_time
        } else {
            time >= self.start_time || time < self.end_time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn rule(days: Vec<i16>, start: (u32, u32), end: (u32, u32)) -> TimePricingRule {
        TimePricingRule {
            id: Uuid::new_v4(),
            name: "test".to_string(),
            days_of_week: days,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            multiplier: dec!(1.5),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn matches_day_and_window() {
        // 2026-08-28 es viernes (weekday 4)
        let friday_evening = Utc.with_ymd_and_hms(2026, 8, 28, 18, 30, 0).unwrap();
        let rush = rule(vec![0, 1, 2, 3, 4], (17, 0), (20, 0));
        assert!(rush.applies_at(friday_evening));

        let saturday = Utc.with_ymd_and_hms(2026, 8, 29, 18, 30, 0).unwrap();
        assert!(!rush.applies_at(saturday));
    }

    #[test]
    fn end_of_window_is_exclusive() {
        let rush = rule(vec![0], (17, 0), (20, 0));
        let monday_at_end = Utc.with_ymd_and_hms(2026, 8, 24, 20, 0, 0).unwrap();
        assert!(!rush.applies_at(monday_at_end));
    }

    #[test]
    fn overnight_window_wraps_midnight() {
        let night = rule(vec![4], (22, 0), (5, 0));
        let friday_night = Utc.with_ymd_and_hms(2026, 8, 28, 23, 15, 0).unwrap();
        let friday_early = Utc.with_ymd_and_hms(2026, 8, 28, 3, 0, 0).unwrap();
        let friday_noon = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();
        assert!(night.applies_at(friday_night));
        assert!(night.applies_at(friday_early));
        assert!(!night.applies_at(friday_noon));
    }
}
