//! Time-limited landing radar.

use lander_core::constants::RADAR_WINDOW_TURNS;
use thiserror::Error;

use crate::terrain::LandingZone;

/// Distance beyond which the radar recommends lateral maneuvering (m).
const MANEUVER_DISTANCE_M: f64 = 50.0;
/// Distance within which the lander counts as on approach (m).
const APPROACH_DISTANCE_M: f64 = 10.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadarError {
    #[error("no fuel remaining to power the radar")]
    NoFuel,
}

/// Radar state owned by a flight.
///
/// The recommended zone is computed when the flight starts and exists before
/// the first activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    active: bool,
    turns_remaining: u32,
    zone: LandingZone,
}

/// Result of advancing the radar by one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadarTick {
    Inactive,
    Active { turns_remaining: u32 },
    SignalLost,
}

/// Advisory derived from the distance to the recommended zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    Maneuver,
    OnApproach,
    None,
}

impl Advisory {
    pub fn for_distance(distance_m: f64) -> Self {
        if distance_m > MANEUVER_DISTANCE_M {
            Advisory::Maneuver
        } else if distance_m < APPROACH_DISTANCE_M {
            Advisory::OnApproach
        } else {
            Advisory::None
        }
    }
}

/// What an active radar reveals for a given lander position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarReadout {
    pub turns_remaining: u32,
    pub zone: LandingZone,
    pub distance_m: f64,
    pub advisory: Advisory,
}

impl Radar {
    pub fn new(zone: LandingZone) -> Self {
        Self {
            active: false,
            turns_remaining: 0,
            zone,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn turns_remaining(&self) -> u32 {
        self.turns_remaining
    }

    pub fn zone(&self) -> LandingZone {
        self.zone
    }

    /// Power the radar, spending one unit from `fuel`.
    ///
    /// Re-activating an active radar restarts its window.
    pub fn activate(&mut self, fuel: &mut u32) -> Result<(), RadarError> {
        if *fuel == 0 {
            return Err(RadarError::NoFuel);
        }
        *fuel -= 1;
        self.active = true;
        self.turns_remaining = RADAR_WINDOW_TURNS;
        log::info!("radar activated, {} fuel left", fuel);
        Ok(())
    }

    /// Consume one turn of the radar window.
    pub fn tick(&mut self) -> RadarTick {
        if !self.active || self.turns_remaining == 0 {
            return RadarTick::Inactive;
        }
        self.turns_remaining -= 1;
        if self.turns_remaining == 0 {
            self.active = false;
            return RadarTick::SignalLost;
        }
        RadarTick::Active {
            turns_remaining: self.turns_remaining,
        }
    }

    /// Readout for a lander at `x_m`, or `None` while the radar is off.
    pub fn readout(&self, x_m: f64) -> Option<RadarReadout> {
        if !self.active {
            return None;
        }
        let distance_m = (x_m - self.zone.x_m).abs();
        Some(RadarReadout {
            turns_remaining: self.turns_remaining,
            zone: self.zone,
            distance_m,
            advisory: Advisory::for_distance(distance_m),
        })
    }
}
