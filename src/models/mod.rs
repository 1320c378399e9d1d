//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod calculation_log;
pub mod promo;
pub mod rates;
pub mod snapshot;
pub mod special_event;
pub mod surge;
pub mod tier;
pub mod time_rule;
pub mod zone;
