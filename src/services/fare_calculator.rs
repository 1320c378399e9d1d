//! FareCalculator
//!
//! Compone la tarifa base (fija + por km + por minuto) con el producto de
//! los multiplicadores y el descuento promocional. El redondeo half-up a
//! dos decimales se aplica una sola vez al final, nunca en pasos
//! intermedios, para no acumular error de redondeo.

use crate::models::rates::VehicleRate;
use crate::services::multiplier_collector::MultiplierSet;
use rust_decimal::{Decimal, RoundingStrategy};

/// Desglose completo de un cálculo de tarifa
#[derive(Debug, Clone)]
pub struct FareBreakdown {
    pub base_fare: Decimal,
    pub distance_fare: Decimal,
    pub time_fare: Decimal,
    pub subtotal: Decimal,
    pub combined_multiplier: Decimal,
    pub pre_discount: Decimal,
    pub discount: Decimal,
    pub final_price: Decimal,
}

/// Redondeo half-up a la unidad mínima de moneda (2 decimales)
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calcular la tarifa de un viaje.
///
/// subtotal = base + per_km * distancia + per_min * duración
/// pre_discount = subtotal * producto de multiplicadores
/// final = max(0, pre_discount - descuento), redondeado al final
pub fn calculate(
    distance_km: Decimal,
    duration_min: Decimal,
    rate: &VehicleRate,
    multipliers: &MultiplierSet,
    discount: Decimal,
) -> FareBreakdown {
    let distance_fare = rate.per_km_rate * distance_km;
    let time_fare = rate.per_min_rate * duration_min;
    let subtotal = rate.base_fare + distance_fare + time_fare;

    let combined_multiplier = multipliers.combined();
    let pre_discount = subtotal * combined_multiplier;

    let final_price = round_currency((pre_discount - discount).max(Decimal::ZERO));

    FareBreakdown {
        base_fare: rate.base_fare,
        distance_fare,
        time_fare,
        subtotal,
        combined_multiplier,
        pre_discount,
        discount,
        final_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn economy() -> VehicleRate {
        VehicleRate {
            vehicle_type: "economy".to_string(),
            base_fare: dec!(500),
            per_km_rate: dec!(150),
            per_min_rate: dec!(25),
        }
    }

    fn multipliers(zone: Decimal, surge: Decimal) -> MultiplierSet {
        MultiplierSet {
            zone,
            time: Decimal::ONE,
            event: Decimal::ONE,
            tier: Decimal::ONE,
            surge,
        }
    }

    #[test]
    fn worked_example_with_surge_and_promo() {
        // 12.5 km / 35 min en economy, zona 1.3, surge 2.0, promo flat 1000
        let breakdown = calculate(
            dec!(12.5),
            dec!(35),
            &economy(),
            &multipliers(dec!(1.3), dec!(2.0)),
            dec!(1000),
        );

        assert_eq!(breakdown.subtotal, dec!(3250));
        assert_eq!(breakdown.combined_multiplier, dec!(2.6));
        assert_eq!(breakdown.pre_discount, dec!(8450.0));
        assert_eq!(breakdown.final_price, dec!(7450.00));
    }

    #[test]
    fn final_price_never_negative() {
        let breakdown = calculate(
            dec!(1),
            dec!(1),
            &economy(),
            &multipliers(dec!(1.0), dec!(1.0)),
            dec!(999999),
        );
        assert_eq!(breakdown.final_price, Decimal::ZERO);
    }

    #[test]
    fn monotone_in_combined_multiplier() {
        let low = calculate(
            dec!(10),
            dec!(20),
            &economy(),
            &multipliers(dec!(1.1), dec!(1.0)),
            dec!(500),
        );
        let high = calculate(
            dec!(10),
            dec!(20),
            &economy(),
            &multipliers(dec!(1.1), dec!(1.8)),
            dec!(500),
        );
        assert!(high.final_price >= low.final_price);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = calculate(
            dec!(7.3),
            dec!(18),
            &economy(),
            &multipliers(dec!(1.3), dec!(1.5)),
            dec!(250),
        );
        let b = calculate(
            dec!(7.3),
            dec!(18),
            &economy(),
            &multipliers(dec!(1.3), dec!(1.5)),
            dec!(250),
        );
        assert_eq!(a.final_price, b.final_price);
        assert_eq!(a.combined_multiplier, b.combined_multiplier);
    }

    #[test]
    fn rounding_is_half_up_and_only_at_the_end() {
        let rate = VehicleRate {
            vehicle_type: "economy".to_string(),
            base_fare: dec!(0.01),
            per_km_rate: dec!(1),
            per_min_rate: Decimal::ZERO,
        };
        // subtotal = 3.345, multiplicador 3 → 10.035; un solo redondeo
        // half-up al final: 10.04 (redondear por pasos daría otro valor)
        let breakdown = calculate(
            dec!(3.335),
            Decimal::ZERO,
            &rate,
            &multipliers(dec!(3.0), dec!(1.0)),
            Decimal::ZERO,
        );
        assert_eq!(breakdown.pre_discount, dec!(10.035));
        assert_eq!(breakdown.final_price, dec!(10.04));
    }

    #[test]
    fn round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(2.344)), dec!(2.34));
        assert_eq!(round_currency(dec!(7450)), dec!(7450));
    }
}
