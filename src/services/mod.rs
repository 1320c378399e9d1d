//! Services module
//!
//! Este módulo contiene la lógica de negocio del pipeline de precios.
//! Los componentes puros (resolver, collector, validator, calculator)
//! operan sobre el snapshot; PricingService y SurgeTracker orquestan
//! las escrituras.

pub mod fare_calculator;
pub mod multiplier_collector;
pub mod pricing_service;
pub mod promotion_validator;
pub mod surge_tracker;
pub mod zone_resolver;
