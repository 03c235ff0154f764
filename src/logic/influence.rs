use std::collections::HashSet;

use crate::models::{Footprint, GridPosition};

/// Reach of structures and water into surrounding cells.
pub const INFLUENCE_RADIUS: i64 = 1;

/// Coordinate sets derived from the garden's structures and water features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfluenceMap {
    pub full_shade: HashSet<GridPosition>,
    pub half_shade: HashSet<GridPosition>,
    pub wet: HashSet<GridPosition>,
}

impl InfluenceMap {
    /// Builds the shade and moisture sets. Buildings and walls shade alike:
    /// their own cell is fully shaded and every cell within
    /// [`INFLUENCE_RADIUS`] is half shaded. Cells around water are wet.
    pub fn build(buildings: &[Footprint], walls: &[Footprint], water: &[Footprint]) -> Self {
        let mut map = Self::default();

        for structure in buildings.iter().chain(walls) {
            let center = structure.position();
            map.full_shade.insert(center);
            map.half_shade.extend(center.neighborhood(INFLUENCE_RADIUS));
        }

        for feature in water {
            map.wet
                .extend(feature.position().neighborhood(INFLUENCE_RADIUS));
        }

        map
    }
}
