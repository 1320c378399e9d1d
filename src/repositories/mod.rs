//! Repositorios
//!
//! Acceso a datos sobre PostgreSQL, un repositorio por agregado.

pub mod log_repository;
pub mod promo_repository;
pub mod snapshot_repository;
pub mod surge_repository;
pub mod zone_repository;
