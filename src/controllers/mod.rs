//! Controllers
//!
//! Orquestación entre DTOs, servicios y repositorios.

pub mod pricing_controller;
pub mod promo_controller;
pub mod surge_controller;
pub mod zone_controller;
