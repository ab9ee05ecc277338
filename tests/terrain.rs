use lander_core::grid::{self, SAMPLES};
use moon_lander::safety::landing_safety;
use moon_lander::terrain::{LandingZone, TerrainMap};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn generated_maps_have_one_sample_per_ten_metres() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let terrain = TerrainMap::generate(&mut rng);
        assert_eq!(terrain.heights().len(), SAMPLES);
        for i in 0..SAMPLES {
            assert_eq!(grid::x_for(i), -100.0 + 10.0 * i as f64);
            assert_eq!(grid::index_for(grid::x_for(i)), Some(i));
        }
        assert_eq!(terrain.height_at(SAMPLES), None);
    }
}

#[test]
fn heights_stay_within_sinusoid_plus_hazard_envelope() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let terrain = TerrainMap::generate(&mut rng);
        // |5 sin| + |3 cos| + max hazard of 5
        assert!(terrain.heights().iter().all(|h| h.abs() <= 13.0));
    }
}

#[test]
fn recommendation_matches_rescan_of_interior_samples() {
    for seed in [1_u64, 7, 42, 1234, 98_765] {
        let mut rng = StdRng::seed_from_u64(seed);
        let terrain = TerrainMap::generate(&mut rng);

        let mut best = LandingZone {
            x_m: 0.0,
            safety: -1.0,
        };
        for i in 1..SAMPLES - 1 {
            let x = grid::x_for(i);
            let safety = landing_safety(&terrain, x);
            if safety > best.safety {
                best = LandingZone { x_m: x, safety };
            }
        }
        assert_eq!(terrain.recommend_landing_zone(), best, "seed {seed}");
    }
}

#[test]
fn same_seed_produces_same_terrain() {
    let a = TerrainMap::generate(&mut StdRng::seed_from_u64(3));
    let b = TerrainMap::generate(&mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
}

#[test]
fn ties_keep_leftmost_interior_sample() {
    let zone = TerrainMap::flat().recommend_landing_zone();
    assert_eq!(zone.x_m, -90.0);
    assert_eq!(zone.safety, 100.0);
}

#[test]
fn endpoints_are_never_recommended() {
    // Perfectly flat only at the edges; interior is rough everywhere.
    let mut heights = [4.0; SAMPLES];
    heights[0] = 0.0;
    heights[SAMPLES - 1] = 0.0;
    let zone = TerrainMap::from_heights(heights).recommend_landing_zone();
    assert!(zone.x_m > -100.0 && zone.x_m < 100.0);
}

#[test]
fn interpolation_blends_neighbouring_samples() {
    let mut heights = [0.0; SAMPLES];
    heights[1] = 10.0;
    let terrain = TerrainMap::from_heights(heights);
    assert_eq!(terrain.interpolated_height(0.0), 0.0);
    assert_eq!(terrain.interpolated_height(1.0), 10.0);
    assert!((terrain.interpolated_height(0.25) - 2.5).abs() < 1e-12);
    assert!((terrain.interpolated_height(1.5) - 5.0).abs() < 1e-12);
    assert_eq!(terrain.interpolated_height(25.0), 0.0);
}
