use crate::logic::influence::InfluenceMap;
use crate::models::{
    zone::{LightLevel, Moisture, ZoneLabel},
    GridPosition,
};

/// Light exposure of a cell. Full shade wins over half shade.
pub fn light_level(map: &InfluenceMap, position: &GridPosition) -> LightLevel {
    if map.full_shade.contains(position) {
        LightLevel::FullShade
    } else if map.half_shade.contains(position) {
        LightLevel::HalfShade
    } else {
        LightLevel::FullSun
    }
}

pub fn moisture(map: &InfluenceMap, position: &GridPosition) -> Moisture {
    if map.wet.contains(position) {
        Moisture::Wet
    } else {
        Moisture::Dry
    }
}

pub fn classify(map: &InfluenceMap, position: &GridPosition) -> ZoneLabel {
    ZoneLabel::new(light_level(map, position), moisture(map, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Footprint;

    fn at(x: i64, y: i64) -> GridPosition {
        GridPosition::new(x, y)
    }

    #[test]
    fn test_structure_cell_is_full_shade() {
        let buildings = [Footprint::at(2.0, 2.0), Footprint::at(7.0, 1.0)];
        let map = InfluenceMap::build(&buildings, &[Footprint::at(0.0, 9.0)], &[]);
        for footprint in buildings.iter().chain(&[Footprint::at(0.0, 9.0)]) {
            assert_eq!(light_level(&map, &footprint.position()), LightLevel::FullShade);
        }
    }

    #[test]
    fn test_full_shade_beats_half_shade() {
        // (3,3) is occupied and also next to (2,2)
        let map = InfluenceMap::build(&[Footprint::at(2.0, 2.0), Footprint::at(3.0, 3.0)], &[], &[]);
        assert_eq!(classify(&map, &at(3, 3)), ZoneLabel::FullShadeDry);
    }

    #[test]
    fn test_ring_is_half_shade_and_wet_near_water() {
        let map = InfluenceMap::build(
            &[Footprint::at(5.0, 5.0)],
            &[],
            &[Footprint::at(7.0, 5.0)],
        );
        assert_eq!(classify(&map, &at(4, 5)), ZoneLabel::HalfShadeDry);
        assert_eq!(classify(&map, &at(6, 5)), ZoneLabel::HalfShadeWet);
    }

    #[test]
    fn test_open_ground_is_full_sun_dry() {
        let map = InfluenceMap::build(&[Footprint::at(2.0, 2.0)], &[], &[]);
        assert_eq!(classify(&map, &at(10, 10)), ZoneLabel::FullSunDry);
    }

    #[test]
    fn test_order_of_footprints_does_not_matter() {
        let mut buildings = vec![
            Footprint::at(1.0, 1.0),
            Footprint::at(4.0, 2.0),
            Footprint::at(2.0, 6.0),
        ];
        let mut water = vec![Footprint::at(3.0, 3.0), Footprint::at(6.0, 6.0)];
        let forward = InfluenceMap::build(&buildings, &[], &water);
        buildings.reverse();
        water.reverse();
        let backward = InfluenceMap::build(&buildings, &[], &water);
        for x in -1..9 {
            for y in -1..9 {
                assert_eq!(classify(&forward, &at(x, y)), classify(&backward, &at(x, y)));
            }
        }
    }
}
