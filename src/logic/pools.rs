use std::collections::BTreeMap;

use crate::logic::rules::{ZoneRule, ZoneRules};
use crate::models::{plant::PlantRecord, zone::ZoneLabel};

/// Eligible plants grouped by the zone they suit. A plant may sit in several pools.
pub type ZonePools<'a> = BTreeMap<ZoneLabel, Vec<&'a PlantRecord>>;

/// A plant suits a zone when any of its sunlight levels is the zone's level
/// and its water need is one the zone accepts.
pub fn suits_zone(plant: &PlantRecord, rule: &ZoneRule) -> bool {
    plant.sunlight_levels().any(|level| level == rule.sunlight)
        && rule.accepts_water(&plant.water_need)
}

/// Builds one pool per zone label. Zones without a rule get an empty pool.
pub fn build_pools<'a>(eligible: &[&'a PlantRecord], rules: &ZoneRules) -> ZonePools<'a> {
    ZoneLabel::ALL
        .into_iter()
        .map(|label| {
            let pool: Vec<&PlantRecord> = match rules.get(label) {
                Some(rule) => eligible
                    .iter()
                    .copied()
                    .filter(|plant| suits_zone(plant, rule))
                    .collect(),
                None => Vec::new(),
            };
            log::debug!("zone {label}: {} candidate plant(s)", pool.len());
            (label, pool)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str, sunlight: &str, water: &str) -> PlantRecord {
        PlantRecord {
            id: name.into(),
            name: name.into(),
            sunlight: sunlight.into(),
            water_need: water.into(),
            ..Default::default()
        }
    }

    fn pool_names(pools: &ZonePools, label: ZoneLabel) -> Vec<String> {
        pools[&label].iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_every_zone_has_a_pool() {
        let pools = build_pools(&[], &ZoneRules::default());
        assert_eq!(pools.len(), 6);
        assert!(pools.values().all(Vec::is_empty));
    }

    #[test]
    fn test_multi_level_sunlight_joins_several_pools() {
        let hosta = plant("玉簪", "low、medium", "medium");
        let eligible = vec![&hosta];
        let pools = build_pools(&eligible, &ZoneRules::default());
        assert_eq!(pool_names(&pools, ZoneLabel::FullShadeDry), vec!["玉簪"]);
        assert_eq!(pool_names(&pools, ZoneLabel::HalfShadeDry), vec!["玉簪"]);
        assert!(pools[&ZoneLabel::FullSunDry].is_empty());
        assert!(pools[&ZoneLabel::HalfShadeWet].is_empty());
    }

    #[test]
    fn test_composite_water_need_matches_listed_variant() {
        let salvia = plant("鼠尾草", "medium", "medium-low");
        let eligible = vec![&salvia];
        let pools = build_pools(&eligible, &ZoneRules::default());
        assert_eq!(pool_names(&pools, ZoneLabel::HalfShadeDry), vec!["鼠尾草"]);
    }

    #[test]
    fn test_unknown_sunlight_joins_no_pool() {
        let odd = plant("怪草", "partial", "medium");
        let eligible = vec![&odd];
        let pools = build_pools(&eligible, &ZoneRules::default());
        assert!(pools.values().all(Vec::is_empty));
    }

    #[test]
    fn test_zone_without_rule_gets_empty_pool() {
        let sedum = plant("景天", "high", "low");
        let eligible = vec![&sedum];
        let mut rules = ZoneRules::default();
        rules.0.remove(&ZoneLabel::FullSunDry);
        let pools = build_pools(&eligible, &rules);
        assert!(pools[&ZoneLabel::FullSunDry].is_empty());
    }
}
