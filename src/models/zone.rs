use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{plant::PlantRecord, GridPosition};

/// Color used when a zone has no configured color or a cell has no plant.
pub const NEUTRAL_COLOR: &str = "#CCCCCC";

/// Name carried by the placeholder plant of an empty zone pool.
pub const PLACEHOLDER_NAME: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LightLevel {
    FullShade,
    HalfShade,
    FullSun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Moisture {
    Wet,
    Dry,
}

/// Light × moisture classification of a flower cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneLabel {
    FullShadeWet,
    FullShadeDry,
    HalfShadeWet,
    HalfShadeDry,
    FullSunWet,
    FullSunDry,
}

impl ZoneLabel {
    pub const ALL: [ZoneLabel; 6] = [
        ZoneLabel::FullShadeWet,
        ZoneLabel::FullShadeDry,
        ZoneLabel::HalfShadeWet,
        ZoneLabel::HalfShadeDry,
        ZoneLabel::FullSunWet,
        ZoneLabel::FullSunDry,
    ];

    pub fn new(light: LightLevel, moisture: Moisture) -> Self {
        match (light, moisture) {
            (LightLevel::FullShade, Moisture::Wet) => ZoneLabel::FullShadeWet,
            (LightLevel::FullShade, Moisture::Dry) => ZoneLabel::FullShadeDry,
            (LightLevel::HalfShade, Moisture::Wet) => ZoneLabel::HalfShadeWet,
            (LightLevel::HalfShade, Moisture::Dry) => ZoneLabel::HalfShadeDry,
            (LightLevel::FullSun, Moisture::Wet) => ZoneLabel::FullSunWet,
            (LightLevel::FullSun, Moisture::Dry) => ZoneLabel::FullSunDry,
        }
    }

    pub fn light(&self) -> LightLevel {
        match self {
            ZoneLabel::FullShadeWet | ZoneLabel::FullShadeDry => LightLevel::FullShade,
            ZoneLabel::HalfShadeWet | ZoneLabel::HalfShadeDry => LightLevel::HalfShade,
            ZoneLabel::FullSunWet | ZoneLabel::FullSunDry => LightLevel::FullSun,
        }
    }

    pub fn moisture(&self) -> Moisture {
        match self {
            ZoneLabel::FullShadeWet | ZoneLabel::HalfShadeWet | ZoneLabel::FullSunWet => {
                Moisture::Wet
            }
            _ => Moisture::Dry,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneLabel::FullShadeWet => "full-shade-wet",
            ZoneLabel::FullShadeDry => "full-shade-dry",
            ZoneLabel::HalfShadeWet => "half-shade-wet",
            ZoneLabel::HalfShadeDry => "half-shade-dry",
            ZoneLabel::FullSunWet => "full-sun-wet",
            ZoneLabel::FullSunDry => "full-sun-dry",
        }
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduced plant view attached to an assigned cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantSummary {
    pub id: String,
    pub name: String,
    pub latin_name: String,
    pub family: String,
    pub genus: String,
    pub color: String,
}

impl PlantSummary {
    /// The "no match" plant for cells whose zone pool is empty.
    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            name: PLACEHOLDER_NAME.into(),
            latin_name: String::new(),
            family: String::new(),
            genus: String::new(),
            color: NEUTRAL_COLOR.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME && self.id.is_empty()
    }
}

impl From<&PlantRecord> for PlantSummary {
    fn from(plant: &PlantRecord) -> Self {
        Self {
            id: plant.id.clone(),
            name: plant.name.clone(),
            latin_name: plant.latin_name.clone(),
            family: plant.family.clone(),
            genus: plant.genus.clone(),
            color: plant.color.clone().unwrap_or_else(|| NEUTRAL_COLOR.into()),
        }
    }
}

/// One renderable 3D model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelVariant {
    pub resource: String,
    pub name: String,
    pub up_axis: String,
    /// Target scale applied by the renderer.
    pub target: f64,
}

/// The models shown for a cell during one season
/// (0 = spring, 1 = summer, 2 = autumn, 3 = winter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelGroup {
    pub season: u8,
    pub key_prefix: String,
    pub models: Vec<ModelVariant>,
}

/// Classification and planting result for one flower cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ZoneResult {
    pub position: GridPosition,
    #[serde(rename = "type")]
    pub zone: ZoneLabel,
    pub color: String,
    pub plant: PlantSummary,
    pub models: Vec<ModelGroup>,
}
