//! One-turn physics integration.

use lander_config::GameConfig;
use lander_core::constants::LATERAL_THRUST_FACTOR;

use crate::flight::FlightState;

/// Thrust choice for a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    /// Fire the left thruster: lift plus a push toward +x.
    BurnLeft,
    /// Fire the right thruster: lift plus a push toward -x.
    BurnRight,
    Drift,
}

impl Maneuver {
    pub fn is_burn(self) -> bool {
        !matches!(self, Maneuver::Drift)
    }
}

/// Advance velocity and position by one turn.
///
/// Gravity always applies; thrust only when the engines are on and the maneuver
/// is a burn. Altitude is floored at zero. Fuel is left untouched.
pub fn integrate(state: &mut FlightState, config: &GameConfig, maneuver: Maneuver) {
    let dt = state.turn_duration_s;
    state.prev_velocity_h_m_s = state.velocity_h_m_s;
    state.prev_velocity_v_m_s = state.velocity_v_m_s;

    state.velocity_v_m_s -= config.gravity_m_s2 * dt;

    if state.engines_on && maneuver.is_burn() {
        let thrust = config.engine_force_m_s2 * dt;
        let lateral = thrust * LATERAL_THRUST_FACTOR;
        state.velocity_v_m_s += thrust;
        match maneuver {
            Maneuver::BurnLeft => state.velocity_h_m_s += lateral,
            Maneuver::BurnRight => state.velocity_h_m_s -= lateral,
            Maneuver::Drift => {}
        }
    }

    state.position_m += state.velocity_h_m_s * dt;
    state.altitude_m = (state.altitude_m + state.velocity_v_m_s * dt).max(0.0);
}
