use std::collections::HashSet;

use crate::logic::parse::{bloom_months, cold_limit, month_span, regional_min_temperature, MonthSet};
use crate::models::{
    plant::PlantRecord,
    request::{GardenStyle, Property, ViewSeason},
};

impl ViewSeason {
    /// Calendar months covered by the season; `None` for the "no season" sentinel.
    pub fn months(&self) -> Option<MonthSet> {
        match self {
            ViewSeason::Spring => Some(month_span(3, 6)),
            ViewSeason::Summer => Some(month_span(6, 9)),
            ViewSeason::Autumn => Some(month_span(9, 11)),
            ViewSeason::Winter => Some(month_span(12, 2)),
            ViewSeason::None => None,
        }
    }
}

/// Keeps plants whose ornamental period overlaps the season.
pub fn blooms_in(plant: &PlantRecord, season_months: &MonthSet) -> bool {
    !bloom_months(&plant.ornamental_period).is_disjoint(season_months)
}

pub fn has_style(plant: &PlantRecord, tag: &str) -> bool {
    plant.style_tags().any(|t| t == tag)
}

/// True when the plant survives the region's coldest winter. Plants whose
/// hardiness text gives no limit always pass.
pub fn survives_winter(plant: &PlantRecord, regional_min: i32) -> bool {
    cold_limit(&plant.cold_resistance).map_or(true, |limit| limit <= regional_min)
}

/// Narrows the catalogue by every criterion present in `property`.
/// Criteria are combined with AND; absent or "none" criteria are skipped.
pub fn filter_plants<'a>(catalog: &'a [PlantRecord], property: Option<&Property>) -> Vec<&'a PlantRecord> {
    let Some(property) = property else {
        return catalog.iter().collect();
    };

    let selection: Option<HashSet<&str>> = property
        .selected_plants
        .as_ref()
        .filter(|names| !names.is_empty())
        .map(|names| names.iter().map(String::as_str).collect());
    let season_months = property.view_season.as_ref().and_then(ViewSeason::months);
    let style_tag = property.style.as_ref().and_then(GardenStyle::tag);
    let regional_min = property.lat.map(regional_min_temperature);

    let eligible: Vec<&PlantRecord> = catalog
        .iter()
        .filter(|plant| {
            // Filter by name whitelist
            if let Some(ref names) = selection {
                if !names.contains(plant.name.as_str()) {
                    return false;
                }
            }
            // Filter by bloom season
            if let Some(ref months) = season_months {
                if !blooms_in(plant, months) {
                    return false;
                }
            }
            // Filter by garden style
            if let Some(tag) = style_tag {
                if !has_style(plant, tag) {
                    return false;
                }
            }
            // Filter by cold hardiness
            if let Some(min) = regional_min {
                if !survives_winter(plant, min) {
                    return false;
                }
            }
            true
        })
        .collect();

    log::debug!(
        "eligibility filter kept {} of {} plants",
        eligible.len(),
        catalog.len()
    );
    eligible
}
