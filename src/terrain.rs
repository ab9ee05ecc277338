//! Heightmap generation and landing-zone recommendation.

use lander_core::grid::{self, SAMPLES};
use rand::Rng;

use crate::safety::landing_safety;

/// Probability that a sample carries a crater or boulder offset.
const HAZARD_PROBABILITY: f64 = 0.15;

/// Fixed-resolution heightmap spanning the play area.
///
/// Sample `i` sits at world x = `grid::x_for(i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMap {
    heights: [f64; SAMPLES],
}

/// Best interior landing coordinate and its safety score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingZone {
    pub x_m: f64,
    pub safety: f64,
}

impl TerrainMap {
    /// Build a map from explicit heights.
    pub fn from_heights(heights: [f64; SAMPLES]) -> Self {
        Self { heights }
    }

    /// Flat terrain at zero elevation.
    pub fn flat() -> Self {
        Self::from_heights([0.0; SAMPLES])
    }

    /// Generate a fresh heightmap: two low-frequency sinusoids plus occasional hazards.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut heights = [0.0; SAMPLES];
        for (i, height) in heights.iter_mut().enumerate() {
            let x = grid::x_for(i);
            let variation = (x * 0.1).sin() * 5.0 + (x * 0.05).cos() * 3.0;
            let hazard = if rng.gen_bool(HAZARD_PROBABILITY) {
                // Half-metre steps in [-5.0, 4.5].
                rng.gen_range(-10..10) as f64 * 0.5
            } else {
                0.0
            };
            *height = variation + hazard;
        }
        Self { heights }
    }

    pub fn heights(&self) -> &[f64; SAMPLES] {
        &self.heights
    }

    /// Height of sample `index`, or `None` past the last sample.
    pub fn height_at(&self, index: usize) -> Option<f64> {
        self.heights.get(index).copied()
    }

    /// Height under `x` using the truncating grid lookup.
    pub fn height_under(&self, x: f64) -> Option<f64> {
        grid::index_for(x).map(|index| self.heights[index])
    }

    /// Linearly interpolated height at fractional sample position `pos`, clamped to the grid.
    pub fn interpolated_height(&self, pos: f64) -> f64 {
        let last = (SAMPLES - 1) as f64;
        let lower = pos.floor().clamp(0.0, last) as usize;
        let upper = pos.ceil().clamp(0.0, last) as usize;
        if lower == upper {
            return self.heights[lower];
        }
        let a = self.heights[lower];
        let b = self.heights[upper];
        a + (b - a) * (pos - lower as f64)
    }

    /// Scan interior samples for the safest landing coordinate.
    ///
    /// Ties keep the leftmost candidate.
    pub fn recommend_landing_zone(&self) -> LandingZone {
        let mut best = LandingZone {
            x_m: 0.0,
            safety: -1.0,
        };
        for index in 1..SAMPLES - 1 {
            let x = grid::x_for(index);
            let safety = landing_safety(self, x);
            if safety > best.safety {
                best = LandingZone { x_m: x, safety };
            }
        }
        best
    }
}
