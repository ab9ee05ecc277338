//! Landing-site safety scoring.

use lander_core::grid;

use crate::terrain::TerrainMap;

/// Score lost per metre of absolute elevation.
const ELEVATION_WEIGHT: f64 = 10.0;
/// Score lost per metre of height difference to each neighbour.
const SLOPE_WEIGHT: f64 = 5.0;

/// Safety score in `[0, 100]` for touching down at world coordinate `x`.
///
/// Coordinates outside the mapped terrain score zero.
pub fn landing_safety(terrain: &TerrainMap, x: f64) -> f64 {
    let Some(index) = grid::index_for(x) else {
        return 0.0;
    };
    let heights = terrain.heights();
    let mut safety = 100.0 - heights[index].abs() * ELEVATION_WEIGHT;
    if grid::is_interior(index) {
        let slope_left = (heights[index] - heights[index - 1]).abs();
        let slope_right = (heights[index + 1] - heights[index]).abs();
        safety -= (slope_left + slope_right) * SLOPE_WEIGHT;
    }
    safety.max(0.0)
}
