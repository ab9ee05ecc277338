//! Touchdown classification.

use lander_core::constants::{
    SAFE_HORIZONTAL_SPEED_M_S, SAFE_VERTICAL_SPEED_M_S, TERRAIN_PENALTY_FACTOR,
};
use lander_core::grid;

use crate::flight::FlightState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOutcome {
    Flying,
    Landed,
    Crashed,
}

impl LandingOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, LandingOutcome::Flying)
    }
}

/// Reduction of both speed limits for the terrain under the lander.
///
/// Zero off the mapped terrain span, even where a sample index would still resolve.
pub fn terrain_penalty(state: &FlightState) -> f64 {
    if !grid::in_bounds(state.position_m) {
        return 0.0;
    }
    state
        .terrain
        .height_under(state.position_m)
        .map(|height| height.abs() * TERRAIN_PENALTY_FACTOR)
        .unwrap_or(0.0)
}

/// Classify the flight once altitude reaches the ground.
pub fn evaluate(state: &FlightState) -> LandingOutcome {
    if state.altitude_m > 0.0 {
        return LandingOutcome::Flying;
    }
    let penalty = terrain_penalty(state);
    let vertical_ok = state.velocity_v_m_s.abs() < SAFE_VERTICAL_SPEED_M_S - penalty;
    let horizontal_ok = state.velocity_h_m_s.abs() < SAFE_HORIZONTAL_SPEED_M_S - penalty;
    if vertical_ok && horizontal_ok {
        LandingOutcome::Landed
    } else {
        LandingOutcome::Crashed
    }
}
