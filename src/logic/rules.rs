use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::zone::{ZoneLabel, NEUTRAL_COLOR};

/// Planting requirements and display color of one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRule {
    pub color: String,
    /// Sunlight level a plant must list to qualify.
    pub sunlight: String,
    /// Accepted `water_need` values, including composite spellings.
    pub water_need: Vec<String>,
}

impl ZoneRule {
    fn new(color: &str, sunlight: &str, water_need: &[&str]) -> Self {
        Self {
            color: color.into(),
            sunlight: sunlight.into(),
            water_need: water_need.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn accepts_water(&self, water_need: &str) -> bool {
        let water_need = water_need.trim();
        self.water_need.iter().any(|w| w == water_need)
    }
}

/// Zone-keyed rule table. Loaded from JSON when configured, otherwise the
/// built-in table is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneRules(pub BTreeMap<ZoneLabel, ZoneRule>);

impl Default for ZoneRules {
    fn default() -> Self {
        Self(BTreeMap::from([
            (
                ZoneLabel::FullShadeWet,
                ZoneRule::new("#3B5B6D", "low", &["high", "medium-high"]),
            ),
            (
                ZoneLabel::FullShadeDry,
                ZoneRule::new("#5A5A6E", "low", &["medium", "medium-low", "low"]),
            ),
            (
                ZoneLabel::HalfShadeWet,
                ZoneRule::new("#5F9EA0", "medium", &["high", "medium-high"]),
            ),
            (
                ZoneLabel::HalfShadeDry,
                ZoneRule::new("#8FA98F", "medium", &["medium", "medium-low"]),
            ),
            (
                ZoneLabel::FullSunWet,
                ZoneRule::new("#7EC8E3", "high", &["high", "medium-high", "medium"]),
            ),
            (
                ZoneLabel::FullSunDry,
                ZoneRule::new("#F4C542", "high", &["low", "medium-low"]),
            ),
        ]))
    }
}

impl ZoneRules {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn get(&self, label: ZoneLabel) -> Option<&ZoneRule> {
        self.0.get(&label)
    }

    /// Display color of a zone; zones absent from the table render neutral.
    pub fn color(&self, label: ZoneLabel) -> &str {
        self.get(label)
            .map(|rule| rule.color.as_str())
            .unwrap_or(NEUTRAL_COLOR)
    }
}
