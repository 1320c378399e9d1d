//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y los knobs del
//! pipeline de precios. Todos tienen default razonable salvo DATABASE_URL,
//! que se resuelve en database::connection.

use rust_decimal::Decimal;
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// TTL del registro de surge: más viejo que esto cuenta como 1.0
    pub surge_ttl_secs: u64,
    /// Intervalo del loop de recalculo de surge
    pub surge_recompute_secs: u64,
    /// Tope del descuento porcentual de promos (en puntos, ej. 100)
    pub max_discount_percent: Decimal,
    /// Moneda de los quotes
    pub currency: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            surge_ttl_secs: env::var("SURGE_TTL_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .expect("SURGE_TTL_SECS must be a valid number"),
            surge_recompute_secs: env::var("SURGE_RECOMPUTE_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("SURGE_RECOMPUTE_SECS must be a valid number"),
            max_discount_percent: env::var("MAX_DISCOUNT_PERCENT")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .expect("MAX_DISCOUNT_PERCENT must be a valid number"),
            currency: env::var("CURRENCY").unwrap_or_else(|_| "NGN".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
