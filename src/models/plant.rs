use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// Separators used between entries of the multi-valued text fields
/// (`sunlight`, `garden_type`).
pub const FIELD_SEPARATORS: [char; 7] = [',', '，', '、', '/', '|', ';', '；'];

/// Splits a delimiter-joined catalogue field into trimmed, non-empty entries.
pub fn split_field(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| FIELD_SEPARATORS.contains(&c))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// A plant as stored in the catalogue. Free-text fields are kept verbatim and
/// interpreted by the eligibility filter.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct PlantRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub latin_name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub genus: String,
    /// `low`, `medium`, `high`, possibly several joined by a separator.
    #[serde(default)]
    pub sunlight: String,
    #[serde(default)]
    pub water_need: String,
    /// e.g. `耐寒（可耐-20℃低温）`, `不耐寒`.
    #[serde(default)]
    pub cold_resistance: String,
    /// e.g. `5-9月`, `全年`.
    #[serde(default)]
    pub ornamental_period: String,
    /// Style tags such as `观赏草甸、雨水花园`.
    #[serde(default)]
    pub garden_type: String,
    /// Display color used on the planting plan.
    pub color: Option<String>,
    pub lifecycle: Option<String>,
    pub flower_color: Option<String>,
    pub usage: Option<String>,
}

impl PlantRecord {
    pub fn sunlight_levels(&self) -> impl Iterator<Item = &str> {
        split_field(&self.sunlight)
    }

    pub fn style_tags(&self) -> impl Iterator<Item = &str> {
        split_field(&self.garden_type)
    }
}
