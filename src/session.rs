//! Turn orchestrator that owns the configuration, the RNG, and the current flight.
//!
//! [`Session::handle`] applies one player command and returns what happened as a
//! list of [`Event`]s. Nothing here writes to the terminal; see [`crate::display`].

use std::path::{Path, PathBuf};

use chrono::Local;
use lander_config::GameConfig;
use lander_export::{OutcomeLabel, ResultRecord, append_record};
use rand::rngs::StdRng;

use crate::command::Command;
use crate::flight::FlightState;
use crate::landing::{self, LandingOutcome};
use crate::physics::{self, Maneuver};
use crate::radar::{RadarReadout, RadarTick};
use crate::safety::landing_safety;
use crate::visualizer::{self, Canvas};

/// Everything the status panel shows after an action.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub position_m: f64,
    pub altitude_m: f64,
    pub velocity_h_m_s: f64,
    pub velocity_v_m_s: f64,
    pub delta_v_h_m_s: f64,
    pub delta_v_v_m_s: f64,
    pub display_delta_v: bool,
    pub fuel: u32,
    pub engines_on: bool,
    /// Turns left on the radar, `None` when it is off.
    pub radar_turns: Option<u32>,
    /// Radar screen, rendered only while the radar is active.
    pub canvas: Option<Canvas>,
}

impl StatusSnapshot {
    pub fn capture(state: &FlightState, config: &GameConfig) -> Self {
        let (delta_v_h_m_s, delta_v_v_m_s) = state.delta_v();
        let radar_active = state.radar.is_active();
        Self {
            position_m: state.position_m,
            altitude_m: state.altitude_m,
            velocity_h_m_s: state.velocity_h_m_s,
            velocity_v_m_s: state.velocity_v_m_s,
            delta_v_h_m_s,
            delta_v_v_m_s,
            display_delta_v: config.display_delta_v,
            fuel: state.fuel,
            engines_on: state.engines_on,
            radar_turns: radar_active.then(|| state.radar.turns_remaining()),
            canvas: radar_active.then(|| visualizer::render(state)),
        }
    }
}

/// Observable result of handling a command, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FlightStarted,
    Status(Box<StatusSnapshot>),
    EnginesOn,
    EnginesOff,
    RadarActivated,
    RadarRefused,
    RadarReadout {
        readout: RadarReadout,
        /// Data reflects the position before the turn just resolved.
        stale: bool,
    },
    RadarSignalLost,
    OutOfFuelDrift,
    EnginesOffBurnRejected,
    FuelDepleted,
    NoActiveFlight,
    Landed,
    Crashed,
    ResultSaved(PathBuf),
    ResultSaveFailed { path: PathBuf, reason: String },
    OpenConfigMenu,
    Quit,
}

/// Single-player game context: one flight at a time.
pub struct Session {
    config: GameConfig,
    rng: StdRng,
    results_path: PathBuf,
    flight: Option<FlightState>,
    in_progress: bool,
}

impl Session {
    pub fn new(config: GameConfig, rng: StdRng, results_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            rng,
            results_path: results_path.into(),
            flight: None,
            in_progress: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Settings edited here apply from the next flight on.
    pub fn config_mut(&mut self) -> &mut GameConfig {
        &mut self.config
    }

    pub fn results_path(&self) -> &Path {
        &self.results_path
    }

    /// The current flight, or the last one once it has ended.
    pub fn flight(&self) -> Option<&FlightState> {
        self.flight.as_ref()
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Replace the current flight with `state` and mark it in progress.
    pub fn start_with(&mut self, state: FlightState) {
        self.flight = Some(state);
        self.in_progress = true;
    }

    /// Apply one player command.
    pub fn handle(&mut self, command: Command) -> Vec<Event> {
        if !self.in_progress && !command.allowed_between_flights() {
            return vec![Event::NoActiveFlight];
        }
        if let Some(maneuver) = command.maneuver() {
            return self.resolve_turn(maneuver);
        }
        match command {
            Command::NewFlight => self.new_flight(),
            Command::Configure => vec![Event::OpenConfigMenu],
            Command::Quit => vec![Event::Quit],
            Command::EnginesOn => self.set_engines(true),
            Command::EnginesOff => self.set_engines(false),
            Command::Radar => self.activate_radar(),
            Command::BurnLeft | Command::BurnRight | Command::Drift => Vec::new(),
        }
    }

    fn new_flight(&mut self) -> Vec<Event> {
        let state = FlightState::launch(&self.config, &mut self.rng);
        log::info!(
            "new flight: x={:.1} alt={:.1} vh={:.1} vv={:.1} fuel={} zone={:.1} ({:.0}%)",
            state.position_m,
            state.altitude_m,
            state.velocity_h_m_s,
            state.velocity_v_m_s,
            state.fuel,
            state.radar.zone().x_m,
            state.radar.zone().safety
        );
        self.start_with(state);
        vec![Event::FlightStarted, self.status()]
    }

    fn set_engines(&mut self, on: bool) -> Vec<Event> {
        let Some(state) = self.flight.as_mut() else {
            return vec![Event::NoActiveFlight];
        };
        state.engines_on = on;
        vec![if on { Event::EnginesOn } else { Event::EnginesOff }]
    }

    fn activate_radar(&mut self) -> Vec<Event> {
        let Some(state) = self.flight.as_mut() else {
            return vec![Event::NoActiveFlight];
        };
        if state.radar.activate(&mut state.fuel).is_err() {
            return vec![Event::RadarRefused];
        }
        let mut events = vec![Event::RadarActivated];
        if let Some(readout) = state.radar.readout(state.position_m) {
            events.push(Event::RadarReadout {
                readout,
                stale: false,
            });
        }
        let fuel = state.fuel;
        events.push(self.status());
        if fuel == 0 {
            events.push(Event::FuelDepleted);
        }
        events
    }

    fn resolve_turn(&mut self, requested: Maneuver) -> Vec<Event> {
        let Some(state) = self.flight.as_mut() else {
            return vec![Event::NoActiveFlight];
        };
        let mut events = Vec::new();

        let mut maneuver = requested;
        if state.fuel == 0 {
            events.push(Event::OutOfFuelDrift);
            state.engines_on = false;
            maneuver = Maneuver::Drift;
        }
        if maneuver.is_burn() && !state.engines_on {
            events.push(Event::EnginesOffBurnRejected);
            return events;
        }

        if let Some(readout) = state.radar.readout(state.position_m) {
            events.push(Event::RadarReadout {
                readout,
                stale: true,
            });
        }

        physics::integrate(state, &self.config, maneuver);
        if maneuver.is_burn() {
            state.fuel = state.fuel.saturating_sub(1);
        }
        if state.radar.tick() == RadarTick::SignalLost {
            events.push(Event::RadarSignalLost);
        }
        log::debug!(
            "turn {:?}: x={:.1} alt={:.1} vh={:.2} vv={:.2} fuel={}",
            maneuver,
            state.position_m,
            state.altitude_m,
            state.velocity_h_m_s,
            state.velocity_v_m_s,
            state.fuel
        );

        let outcome = landing::evaluate(state);
        let fuel = state.fuel;
        events.push(self.status());

        match outcome {
            LandingOutcome::Flying => {
                if fuel == 0 {
                    events.push(Event::FuelDepleted);
                }
            }
            LandingOutcome::Landed | LandingOutcome::Crashed => {
                events.push(if outcome == LandingOutcome::Landed {
                    Event::Landed
                } else {
                    Event::Crashed
                });
                events.push(self.save_result(outcome));
                self.in_progress = false;
            }
        }
        events
    }

    fn save_result(&self, outcome: LandingOutcome) -> Event {
        let Some(state) = self.flight.as_ref() else {
            return Event::NoActiveFlight;
        };
        let label = if outcome == LandingOutcome::Landed {
            OutcomeLabel::Success
        } else {
            OutcomeLabel::Crashed
        };
        log::info!(
            "flight ended {}: x={:.1} vh={:.2} vv={:.2} fuel={}",
            label.as_str(),
            state.position_m,
            state.velocity_h_m_s,
            state.velocity_v_m_s,
            state.fuel
        );
        let record = ResultRecord {
            timestamp: Local::now(),
            outcome: label,
            position_m: state.position_m,
            altitude_m: state.altitude_m,
            velocity_h_m_s: state.velocity_h_m_s,
            velocity_v_m_s: state.velocity_v_m_s,
            fuel_remaining: state.fuel,
            safety_score: landing_safety(&state.terrain, state.position_m),
        };
        match append_record(&self.results_path, &record) {
            Ok(()) => Event::ResultSaved(self.results_path.clone()),
            Err(err) => {
                log::warn!(
                    "could not append result to {}: {err}",
                    self.results_path.display()
                );
                Event::ResultSaveFailed {
                    path: self.results_path.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn status(&self) -> Event {
        match self.flight.as_ref() {
            Some(state) => Event::Status(Box::new(StatusSnapshot::capture(state, &self.config))),
            None => Event::NoActiveFlight,
        }
    }
}
