//! ZoneResolver
//!
//! Resuelve qué zona rectangular de precios contiene un punto. Las zonas
//! son rectángulos simplificados y pueden superponerse, así que el
//! desempate es una política fija y determinista:
//!
//! 1. mayor `priority` gana
//! 2. a igual prioridad, gana el rectángulo de menor área
//! 3. a igual área, gana el menor id (UUID)
//!
//! Sin match devuelve None y el caller aplica multiplicador 1.0.

use crate::models::zone::PricingZone;

/// Resolver la zona que contiene el punto (lat, lng) sobre el snapshot
pub fn resolve(zones: &[PricingZone], lat: f64, lng: f64) -> Option<&PricingZone> {
    zones
        .iter()
        .filter(|zone| zone.contains(lat, lng))
        .min_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| {
                    a.area()
                        .partial_cmp(&b.area())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.id.cmp(&b.id))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn zone(name: &str, bounds: (f64, f64, f64, f64), priority: i32) -> PricingZone {
        PricingZone {
            id: Uuid::new_v4(),
            name: name.to_string(),
            min_lat: bounds.0,
            max_lat: bounds.1,
            min_lng: bounds.2,
            max_lng: bounds.3,
            multiplier: dec!(1.3),
            priority,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn resolves_containing_zone() {
        let zones = vec![
            zone("island", (6.4, 6.5, 3.3, 3.5), 0),
            zone("mainland", (6.5, 6.7, 3.3, 3.5), 0),
        ];
        let hit = resolve(&zones, 6.45, 3.4).expect("zone");
        assert_eq!(hit.name, "island");
    }

    #[test]
    fn no_match_returns_none() {
        let zones = vec![zone("island", (6.4, 6.5, 3.3, 3.5), 0)];
        assert!(resolve(&zones, 50.0, 50.0).is_none());
    }

    #[test]
    fn higher_priority_wins_overlap() {
        let zones = vec![
            zone("city", (6.0, 7.0, 3.0, 4.0), 0),
            zone("airport", (6.4, 6.6, 3.3, 3.5), 10),
        ];
        let hit = resolve(&zones, 6.5, 3.4).expect("zone");
        assert_eq!(hit.name, "airport");
    }

    #[test]
    fn smaller_area_wins_equal_priority() {
        let zones = vec![
            zone("city", (6.0, 7.0, 3.0, 4.0), 0),
            zone("district", (6.4, 6.6, 3.3, 3.5), 0),
        ];
        let hit = resolve(&zones, 6.5, 3.4).expect("zone");
        assert_eq!(hit.name, "district");
    }

    #[test]
    fn tie_break_is_deterministic_regardless_of_order() {
        let a = zone("a", (6.0, 7.0, 3.0, 4.0), 0);
        let b = zone("b", (6.0, 7.0, 3.0, 4.0), 0);
        let expected = a.id.min(b.id);

        let forward = vec![a.clone(), b.clone()];
        let backward = vec![b, a];
        assert_eq!(resolve(&forward, 6.5, 3.5).map(|z| z.id), Some(expected));
        assert_eq!(resolve(&backward, 6.5, 3.5).map(|z| z.id), Some(expected));
    }
}
