use serde::Serialize;
use utoipa::ToSchema;

use crate::models::zone::{LightLevel, ModelGroup, ModelVariant};

pub const SPRING: u8 = 0;
pub const SUMMER: u8 = 1;
pub const AUTUMN: u8 = 2;
pub const WINTER: u8 = 3;

/// Seasonal model groups rendered for one light category.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LightModels {
    pub light: LightLevel,
    pub groups: Vec<ModelGroup>,
}

fn group(season: u8, key_prefix: &str, name: &str, up_axis: &str, target: f64) -> ModelGroup {
    ModelGroup {
        season,
        key_prefix: key_prefix.into(),
        models: vec![ModelVariant {
            resource: format!("/models/{key_prefix}/"),
            name: name.into(),
            up_axis: up_axis.into(),
            target,
        }],
    }
}

/// The seasonal models drawn for cells of the given light category.
pub fn models_for(light: LightLevel) -> Vec<ModelGroup> {
    match light {
        LightLevel::FullSun => vec![
            group(SPRING, "crocus", "12974_crocus_flower_v1_l3", "-x", 0.05),
            group(SUMMER, "plant2", "plants2", "y", 0.005),
            group(AUTUMN, "grass", "ornamental_grass_autumn", "y", 0.01),
            group(WINTER, "grass_dry", "ornamental_grass_winter", "y", 0.01),
        ],
        LightLevel::HalfShade => vec![
            group(SPRING, "fern", "fern_spring", "y", 0.02),
            group(SUMMER, "hosta", "hosta_summer", "y", 0.02),
            group(AUTUMN, "hosta_autumn", "hosta_autumn", "y", 0.02),
            group(WINTER, "mulch", "mulch_bed", "y", 0.05),
        ],
        LightLevel::FullShade => vec![
            group(SPRING, "moss", "moss_carpet", "y", 0.05),
            group(SUMMER, "fern", "fern_summer", "y", 0.02),
            group(AUTUMN, "fern_autumn", "fern_autumn", "y", 0.02),
            group(WINTER, "moss", "moss_carpet", "y", 0.05),
        ],
    }
}

pub fn all_models() -> Vec<LightModels> {
    [LightLevel::FullShade, LightLevel::HalfShade, LightLevel::FullSun]
        .into_iter()
        .map(|light| LightModels {
            light,
            groups: models_for(light),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_light_has_four_seasons() {
        for entry in all_models() {
            let seasons: Vec<u8> = entry.groups.iter().map(|g| g.season).collect();
            assert_eq!(seasons, vec![SPRING, SUMMER, AUTUMN, WINTER], "{:?}", entry.light);
            assert!(entry.groups.iter().all(|g| !g.models.is_empty()));
        }
    }

    #[test]
    fn test_resource_follows_key_prefix() {
        let groups = models_for(LightLevel::FullSun);
        assert_eq!(groups[0].models[0].resource, "/models/crocus/");
    }
}
