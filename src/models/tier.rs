//! Modelo de UserTier
//!
//! Clasificación de usuarios (normal/premium/vip) que afecta el precio
//! y la elegibilidad de códigos promocionales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tier del usuario que solicita el quote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserTier {
    Normal,
    Premium,
    Vip,
}

impl UserTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserTier::Normal => "normal",
            UserTier::Premium => "premium",
            UserTier::Vip => "vip",
        }
    }
}

impl fmt::Display for UserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(UserTier::Normal),
            "premium" => Ok(UserTier::Premium),
            "vip" => Ok(UserTier::Vip),
            other => Err(format!("unknown user tier '{}'", other)),
        }
    }
}
