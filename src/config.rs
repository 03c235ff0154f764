use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{InMemoryCatalog, JsonFileCatalog, PlantCatalog};
use crate::error::ConfigError;
use crate::logic::rules::ZoneRules;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `GARDEN_BIND_ADDR`
    pub bind_addr: String,
    /// `GARDEN_CATALOG_PATH`; the built-in catalogue is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// `GARDEN_ZONE_RULES_PATH`; the built-in rule table is used when unset.
    pub zone_rules_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            catalog_path: None,
            zone_rules_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("ignoring unreadable .env file: {e}");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = match non_empty("GARDEN_BIND_ADDR") {
            Some(addr) if !addr.contains(':') => {
                return Err(ConfigError::InvalidVar {
                    name: "GARDEN_BIND_ADDR",
                    reason: format!("'{addr}' is not a host:port address"),
                })
            }
            Some(addr) => addr,
            None => DEFAULT_BIND_ADDR.into(),
        };

        Ok(Self {
            bind_addr,
            catalog_path: non_empty("GARDEN_CATALOG_PATH").map(PathBuf::from),
            zone_rules_path: non_empty("GARDEN_ZONE_RULES_PATH").map(PathBuf::from),
        })
    }

    pub fn catalog(&self) -> Arc<dyn PlantCatalog> {
        match &self.catalog_path {
            Some(path) => Arc::new(JsonFileCatalog::new(path)),
            None => Arc::new(InMemoryCatalog::default()),
        }
    }

    pub fn zone_rules(&self) -> Result<ZoneRules, ConfigError> {
        match &self.zone_rules_path {
            Some(path) => ZoneRules::from_file(path),
            None => Ok(ZoneRules::default()),
        }
    }
}
