use rand::{seq::SliceRandom, Rng};

use crate::data::models::models_for;
use crate::logic::{pools::ZonePools, rules::ZoneRules};
use crate::models::{
    plant::PlantRecord,
    zone::{PlantSummary, ZoneLabel, ZoneResult},
    GridPosition,
};

/// Picks a plant for one classified cell, uniformly from the zone's pool.
/// An empty pool yields the placeholder plant and no models.
pub fn assign_cell<R: Rng + ?Sized>(
    position: GridPosition,
    zone: ZoneLabel,
    pool: &[&PlantRecord],
    rules: &ZoneRules,
    rng: &mut R,
) -> ZoneResult {
    let (plant, models) = match pool.choose(rng) {
        Some(chosen) => (PlantSummary::from(*chosen), models_for(zone.light())),
        None => (PlantSummary::placeholder(), Vec::new()),
    };
    ZoneResult {
        position,
        zone,
        color: rules.color(zone).to_string(),
        plant,
        models,
    }
}

/// Assigns every classified cell, preserving input order.
pub fn assign_cells<R: Rng + ?Sized>(
    cells: &[(GridPosition, ZoneLabel)],
    pools: &ZonePools,
    rules: &ZoneRules,
    rng: &mut R,
) -> Vec<ZoneResult> {
    cells
        .iter()
        .map(|&(position, zone)| {
            let pool = pools.get(&zone).map(Vec::as_slice).unwrap_or_default();
            assign_cell(position, zone, pool, rules, &mut *rng)
        })
        .collect()
}
