//! Rutas de la API

pub mod pricing_routes;
pub mod promo_routes;
pub mod surge_routes;
pub mod zone_routes;
