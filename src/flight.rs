//! State of a single in-progress flight.

use lander_config::GameConfig;
use lander_core::constants::TURN_DURATION_S;
use rand::Rng;

use crate::radar::Radar;
use crate::terrain::TerrainMap;

/// Mutable record of one descent, recreated on every new flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub position_m: f64,
    pub altitude_m: f64,
    pub velocity_h_m_s: f64,
    pub velocity_v_m_s: f64,
    /// Velocities before the last integration step, for delta-V display.
    pub prev_velocity_h_m_s: f64,
    pub prev_velocity_v_m_s: f64,
    pub fuel: u32,
    pub engines_on: bool,
    pub turn_duration_s: f64,
    pub terrain: TerrainMap,
    pub radar: Radar,
}

impl FlightState {
    /// Start a flight from a random position and velocity over freshly generated terrain.
    pub fn launch<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let position_m = rng.gen_range(-100..100) as f64;
        let altitude_m = rng.gen_range(100..600) as f64;
        let velocity_h_m_s = rng.gen_range(-10..10) as f64 / 2.0;
        let velocity_v_m_s = rng.gen_range(-15..5) as f64;
        let terrain = TerrainMap::generate(rng);
        let mut state = Self::at(position_m, altitude_m, velocity_h_m_s, velocity_v_m_s, terrain);
        state.fuel = config.initial_fuel;
        state
    }

    /// Flight at an explicit position and velocity with no fuel and engines off.
    pub fn at(
        position_m: f64,
        altitude_m: f64,
        velocity_h_m_s: f64,
        velocity_v_m_s: f64,
        terrain: TerrainMap,
    ) -> Self {
        let radar = Radar::new(terrain.recommend_landing_zone());
        Self {
            position_m,
            altitude_m,
            velocity_h_m_s,
            velocity_v_m_s,
            prev_velocity_h_m_s: velocity_h_m_s,
            prev_velocity_v_m_s: velocity_v_m_s,
            fuel: 0,
            engines_on: false,
            turn_duration_s: TURN_DURATION_S,
            terrain,
            radar,
        }
    }

    pub fn with_fuel(mut self, fuel: u32) -> Self {
        self.fuel = fuel;
        self
    }

    pub fn with_engines(mut self, engines_on: bool) -> Self {
        self.engines_on = engines_on;
        self
    }

    /// Velocity change over the last turn as `(horizontal, vertical)`.
    pub fn delta_v(&self) -> (f64, f64) {
        (
            self.velocity_h_m_s - self.prev_velocity_h_m_s,
            self.velocity_v_m_s - self.prev_velocity_v_m_s,
        )
    }
}
