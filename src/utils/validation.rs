//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de coordenadas
//! y parámetros de viaje antes de tocar la base de datos.

use crate::utils::errors::AppError;
use rust_decimal::Decimal;

/// Validar que una latitud esté en el rango [-90, 90]
pub fn validate_latitude(lat: f64, field: &str) -> Result<(), AppError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::InvalidCoordinate(format!(
            "{} must be between -90 and 90, got {}",
            field, lat
        )));
    }
    Ok(())
}

/// Validar que una longitud esté en el rango [-180, 180]
pub fn validate_longitude(lng: f64, field: &str) -> Result<(), AppError> {
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(AppError::InvalidCoordinate(format!(
            "{} must be between -180 and 180, got {}",
            field, lng
        )));
    }
    Ok(())
}

/// Validar y convertir un parámetro de viaje (distancia o duración) a Decimal.
/// Los valores negativos o no finitos se rechazan.
pub fn validate_trip_parameter(value: f64, field: &str) -> Result<Decimal, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidTripParameters(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Decimal::from_f64_retain(value).ok_or_else(|| {
        AppError::InvalidTripParameters(format!("{} is not representable: {}", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_bounds() {
        assert!(validate_latitude(6.5244, "pickup_lat").is_ok());
        assert!(validate_latitude(90.0, "pickup_lat").is_ok());
        assert!(validate_latitude(-90.0, "pickup_lat").is_ok());
        assert!(validate_latitude(90.01, "pickup_lat").is_err());
        assert!(validate_latitude(f64::NAN, "pickup_lat").is_err());
    }

    #[test]
    fn longitude_bounds() {
        assert!(validate_longitude(3.3792, "pickup_lng").is_ok());
        assert!(validate_longitude(-180.0, "pickup_lng").is_ok());
        assert!(validate_longitude(180.5, "pickup_lng").is_err());
    }

    #[test]
    fn trip_parameters_reject_negatives() {
        assert!(validate_trip_parameter(12.5, "distance_km").is_ok());
        assert!(validate_trip_parameter(0.0, "duration_min").is_ok());
        assert!(validate_trip_parameter(-1.0, "distance_km").is_err());
        assert!(validate_trip_parameter(f64::INFINITY, "distance_km").is_err());
    }
}
