use lander_core::grid::SAMPLES;
use moon_lander::flight::FlightState;
use moon_lander::landing::{LandingOutcome, evaluate, terrain_penalty};
use moon_lander::terrain::TerrainMap;

fn touchdown(x: f64, vh: f64, vv: f64, terrain: TerrainMap) -> FlightState {
    FlightState::at(x, 0.0, vh, vv, terrain)
}

#[test]
fn airborne_is_still_flying_regardless_of_speed() {
    let state = FlightState::at(0.0, 0.1, 40.0, -80.0, TerrainMap::flat());
    assert_eq!(evaluate(&state), LandingOutcome::Flying);
    assert!(!evaluate(&state).is_terminal());
}

#[test]
fn gentle_touchdown_on_flat_ground_succeeds() {
    let state = touchdown(0.0, 1.4, -1.9, TerrainMap::flat());
    assert_eq!(evaluate(&state), LandingOutcome::Landed);
}

#[test]
fn limits_are_strict() {
    assert_eq!(
        evaluate(&touchdown(0.0, 0.0, -2.0, TerrainMap::flat())),
        LandingOutcome::Crashed
    );
    assert_eq!(
        evaluate(&touchdown(0.0, -1.5, 0.0, TerrainMap::flat())),
        LandingOutcome::Crashed
    );
}

#[test]
fn rough_ground_narrows_both_limits() {
    let terrain = TerrainMap::from_heights([-2.5; SAMPLES]);
    let state = touchdown(0.0, 0.0, -1.6, terrain.clone());
    assert!((terrain_penalty(&state) - 0.5).abs() < 1e-12);
    assert_eq!(evaluate(&state), LandingOutcome::Crashed);
    assert_eq!(
        evaluate(&touchdown(0.0, 0.0, -1.4, terrain.clone())),
        LandingOutcome::Landed
    );
    assert_eq!(
        evaluate(&touchdown(0.0, 1.1, 0.0, terrain)),
        LandingOutcome::Crashed
    );
}

#[test]
fn off_map_touchdown_has_no_penalty() {
    let terrain = TerrainMap::from_heights([9.0; SAMPLES]);
    let state = touchdown(150.0, 0.0, -1.9, terrain);
    assert_eq!(terrain_penalty(&state), 0.0);
    assert_eq!(evaluate(&state), LandingOutcome::Landed);
}

#[test]
fn penalty_uses_sample_left_of_position() {
    let mut heights = [0.0; SAMPLES];
    heights[20] = 5.0;
    let terrain = TerrainMap::from_heights(heights);
    assert_eq!(terrain_penalty(&touchdown(99.0, 0.0, 0.0, terrain.clone())), 0.0);
    assert!((terrain_penalty(&touchdown(100.0, 0.0, 0.0, terrain)) - 1.0).abs() < 1e-12);
}

#[test]
fn just_past_right_edge_has_no_penalty() {
    let terrain = TerrainMap::from_heights([5.0; SAMPLES]);
    let state = touchdown(105.0, 0.0, -1.9, terrain);
    assert_eq!(terrain_penalty(&state), 0.0);
    assert_eq!(evaluate(&state), LandingOutcome::Landed);
}
