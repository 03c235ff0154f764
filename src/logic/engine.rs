use rand::Rng;

use crate::catalog::PlantCatalog;
use crate::error::CatalogError;
use crate::logic::{
    assign::assign_cells, classifier::classify, filter::filter_plants, influence::InfluenceMap,
    pools::build_pools, rules::ZoneRules,
};
use crate::models::{
    plant::PlantRecord,
    request::ZoneRequest,
    zone::{ZoneLabel, ZoneResult},
    GridPosition,
};

/// Classifies every flower cell of the request and picks a plant for it from
/// `plants`. Results follow the order of `flower_positions`.
pub fn classify_and_assign<R: Rng + ?Sized>(
    plants: &[PlantRecord],
    request: &ZoneRequest,
    rules: &ZoneRules,
    rng: &mut R,
) -> Vec<ZoneResult> {
    let map = InfluenceMap::build(
        &request.building_positions,
        &request.wall_positions,
        &request.water_positions,
    );

    let cells: Vec<(GridPosition, ZoneLabel)> = request
        .flower_positions
        .iter()
        .map(|flower| {
            let position = flower.position();
            (position, classify(&map, &position))
        })
        .collect();

    let eligible = filter_plants(plants, request.property.as_ref());
    let pools = build_pools(&eligible, rules);

    assign_cells(&cells, &pools, rules, rng)
}

/// Reads the catalogue once, then runs the pipeline on that snapshot.
/// A failed catalogue read aborts the whole request.
pub async fn plan_zones<R: Rng + ?Sized>(
    catalog: &dyn PlantCatalog,
    request: &ZoneRequest,
    rules: &ZoneRules,
    rng: &mut R,
) -> Result<Vec<ZoneResult>, CatalogError> {
    let plants = catalog.all_plants().await.inspect_err(|e| {
        log::warn!("plant catalogue unavailable: {e}");
    })?;
    log::debug!(
        "classifying {} flower cell(s) against {} catalogue plant(s)",
        request.flower_positions.len(),
        plants.len()
    );
    Ok(classify_and_assign(&plants, request, rules, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::data::plants::get_all_plants;
    use crate::logic::pools::suits_zone;
    use crate::models::{request::Property, Footprint};
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_building_cell_is_full_shade_and_open_cell_full_sun() {
        let request = ZoneRequest {
            building_positions: vec![Footprint::at(2.0, 2.0)],
            flower_positions: vec![Footprint::at(2.0, 2.0), Footprint::at(10.0, 10.0)],
            ..Default::default()
        };
        let results = classify_and_assign(&get_all_plants(), &request, &ZoneRules::default(), &mut rng());
        assert_eq!(results.len(), 2);
        assert!(results[0].zone.as_str().starts_with("full-shade"));
        assert_eq!(results[1].zone, ZoneLabel::FullSunDry);
    }

    #[test]
    fn test_no_flowers_no_results() {
        let request = ZoneRequest {
            building_positions: vec![Footprint::at(0.0, 0.0)],
            ..Default::default()
        };
        let results = classify_and_assign(&get_all_plants(), &request, &ZoneRules::default(), &mut rng());
        assert!(results.is_empty());
    }

    #[test]
    fn test_assigned_plants_are_eligible_and_suit_their_zone() {
        let plants = get_all_plants();
        let rules = ZoneRules::default();
        let property = Property {
            lat: Some(45.0),
            ..Default::default()
        };
        let request = ZoneRequest {
            building_positions: vec![Footprint::at(0.0, 0.0)],
            water_positions: vec![Footprint::at(4.0, 0.0)],
            flower_positions: (-1..7).map(|x| Footprint::at(x as f64, 0.0)).collect(),
            property: Some(property.clone()),
            ..Default::default()
        };
        let eligible = filter_plants(&plants, Some(&property));
        for result in classify_and_assign(&plants, &request, &rules, &mut rng()) {
            if result.plant.is_placeholder() {
                continue;
            }
            let record = eligible
                .iter()
                .find(|p| p.id == result.plant.id)
                .unwrap_or_else(|| panic!("{} is not eligible", result.plant.name));
            assert!(suits_zone(record, rules.get(result.zone).unwrap()));
        }
    }

    #[test]
    fn test_unmatched_zone_gets_placeholder() {
        let request = ZoneRequest {
            flower_positions: vec![Footprint::at(0.0, 0.0)],
            property: Some(Property {
                selected_plants: Some(vec!["不存在的植物".into()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let results = classify_and_assign(&get_all_plants(), &request, &ZoneRules::default(), &mut rng());
        assert!(results[0].plant.is_placeholder());
        assert!(results[0].models.is_empty());
    }

    #[actix_web::test]
    async fn test_plan_zones_reads_catalog() {
        let catalog = InMemoryCatalog::default();
        let request = ZoneRequest {
            flower_positions: vec![Footprint::at(3.0, 3.0)],
            ..Default::default()
        };
        let results = plan_zones(&catalog, &request, &ZoneRules::default(), &mut rng())
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(!results[0].plant.is_placeholder());
    }
}
