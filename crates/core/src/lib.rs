//! Core constants and shared primitives for the Moon Lander workspace.

/// Physical and gameplay constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Lunar surface gravity used by default (m/s²).
    pub const DEFAULT_GRAVITY_M_S2: f64 = 1.6;
    /// Default engine thrust acceleration (m/s²).
    pub const DEFAULT_ENGINE_FORCE_M_S2: f64 = 3.0;
    /// Default number of burn units loaded at the start of a flight.
    pub const DEFAULT_INITIAL_FUEL: u32 = 50;
    /// Fixed simulation step (s).
    pub const TURN_DURATION_S: f64 = 1.0;
    /// Fraction of the main engine thrust redirected sideways on a directional burn.
    pub const LATERAL_THRUST_FACTOR: f64 = 0.3;

    /// Touchdown limit for vertical speed on flat ground (m/s).
    pub const SAFE_VERTICAL_SPEED_M_S: f64 = 2.0;
    /// Touchdown limit for horizontal speed on flat ground (m/s).
    pub const SAFE_HORIZONTAL_SPEED_M_S: f64 = 1.5;
    /// Safety margin lost per metre of terrain height at the touchdown sample.
    pub const TERRAIN_PENALTY_FACTOR: f64 = 0.2;

    /// Number of turns a radar activation stays valid.
    pub const RADAR_WINDOW_TURNS: u32 = 3;
}

/// Terrain grid geometry and the single world-x <-> sample-index mapping.
///
/// Terrain lookups by horizontal position go through [`grid::index_for`];
/// [`grid::in_bounds`] is the narrower check for the mapped span itself.
pub mod grid {
    /// Number of terrain samples.
    pub const SAMPLES: usize = 21;
    /// Left edge of the mapped terrain (m).
    pub const X_MIN: f64 = -100.0;
    /// Right edge of the mapped terrain (m).
    pub const X_MAX: f64 = 100.0;
    /// Horizontal spacing between samples (m).
    pub const SPACING: f64 = 10.0;

    /// World x-coordinate of sample `index`.
    #[inline]
    pub fn x_for(index: usize) -> f64 {
        X_MIN + SPACING * index as f64
    }

    /// Sample index covering `x`: `floor((x - X_MIN) / SPACING)`.
    ///
    /// Returns `None` when that index falls outside the grid, so coordinates in
    /// `[X_MIN, X_MAX + SPACING)` resolve and `X_MAX` maps to the last sample.
    #[inline]
    pub fn index_for(x: f64) -> Option<usize> {
        let index = ((x - X_MIN) / SPACING).floor();
        if index >= 0.0 && index < SAMPLES as f64 {
            Some(index as usize)
        } else {
            None
        }
    }

    /// Whether `x` lies on the mapped terrain span `[X_MIN, X_MAX]`.
    #[inline]
    pub fn in_bounds(x: f64) -> bool {
        (X_MIN..=X_MAX).contains(&x)
    }

    /// Whether `index` has neighbours on both sides.
    #[inline]
    pub fn is_interior(index: usize) -> bool {
        index > 0 && index < SAMPLES - 1
    }
}

/// Fixed dimensions and zoom windows of the ASCII radar viewport.
pub mod viewport {
    /// Character columns in the rendered canvas.
    pub const WIDTH: usize = 61;
    /// Character rows in the rendered canvas.
    pub const HEIGHT: usize = 16;
    /// Altitude below which the viewport switches to landing mode (m).
    pub const LANDING_MODE_ALTITUDE_M: f64 = 60.0;
    /// Vertical extent of the landing-mode window (m).
    pub const LANDING_WINDOW_M: f64 = 40.0;
    /// Bottom of the landing-mode window (m).
    pub const LANDING_FLOOR_M: f64 = -15.0;
    /// Vertical extent of the approach-mode window (m).
    pub const APPROACH_WINDOW_M: f64 = 150.0;
    /// Headroom kept above the lander in approach mode (m).
    pub const APPROACH_HEADROOM_M: f64 = 30.0;
}
