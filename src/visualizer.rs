//! Side-on ASCII cross-section of the terrain and lander.
//!
//! [`render`] produces a [`Canvas`] as plain data; its `Display` impl draws the
//! framed radar screen used by the terminal front-end.

use std::fmt;

use lander_core::grid::{self, X_MAX, X_MIN};
use lander_core::viewport::{
    APPROACH_HEADROOM_M, APPROACH_WINDOW_M, HEIGHT, LANDING_FLOOR_M, LANDING_MODE_ALTITUDE_M,
    LANDING_WINDOW_M, WIDTH,
};

use crate::flight::FlightState;

pub const EMPTY: char = ' ';
pub const SURFACE_FLAT: char = '_';
pub const SURFACE_RISING: char = '/';
pub const SURFACE_FALLING: char = '\\';
pub const GROUND_FILL: char = '#';
pub const LANDER: char = 'A';
pub const EXHAUST: char = '*';

/// Height change between columns needed to draw a slope glyph (m).
const SLOPE_THRESHOLD_M: f64 = 0.5;

/// Zoom level chosen from the lander's altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Coarse window that follows the lander down.
    Approach,
    /// Fixed close-up window around ground level.
    Landing,
}

/// Vertical extent of the viewport in world metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalWindow {
    pub mode: ViewMode,
    pub bottom_m: f64,
    pub height_m: f64,
}

impl VerticalWindow {
    pub fn for_altitude(altitude_m: f64) -> Self {
        if altitude_m < LANDING_MODE_ALTITUDE_M {
            Self {
                mode: ViewMode::Landing,
                bottom_m: LANDING_FLOOR_M,
                height_m: LANDING_WINDOW_M,
            }
        } else {
            let top = altitude_m + APPROACH_HEADROOM_M;
            Self {
                mode: ViewMode::Approach,
                bottom_m: top - APPROACH_WINDOW_M,
                height_m: APPROACH_WINDOW_M,
            }
        }
    }

    pub fn top_m(&self) -> f64 {
        self.bottom_m + self.height_m
    }

    /// Canvas row for world height `y_m`; may fall outside the canvas.
    pub fn row_for(&self, y_m: f64) -> i64 {
        let scale = (HEIGHT - 1) as f64;
        (HEIGHT as i64 - 1) - (((y_m - self.bottom_m) / self.height_m) * scale).round() as i64
    }

    /// World altitude represented by canvas row `row`.
    pub fn altitude_for(&self, row: usize) -> f64 {
        self.top_m() - (row as f64 / (HEIGHT - 1) as f64) * self.height_m
    }
}

/// World x-coordinate of canvas column `column`.
pub fn world_x_for_column(column: usize) -> f64 {
    X_MIN + (column as f64 / (WIDTH - 1) as f64) * (X_MAX - X_MIN)
}

/// Canvas column for world x-coordinate `x_m`; may fall outside the canvas.
pub fn column_for(x_m: f64) -> i64 {
    (((x_m - X_MIN) / (X_MAX - X_MIN)) * (WIDTH - 1) as f64).round() as i64
}

/// Rendered character grid with per-row altitude annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub window: VerticalWindow,
    cells: Vec<[char; WIDTH]>,
}

impl Canvas {
    fn blank(window: VerticalWindow) -> Self {
        Self {
            window,
            cells: vec![[EMPTY; WIDTH]; HEIGHT],
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn row_text(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        (0..HEIGHT).map(|row| (self.row_text(row), self.window.altitude_for(row)))
    }

    /// `(row, column)` of the first cell holding `glyph`.
    pub fn find(&self, glyph: char) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&c| c == glyph)
                .map(|column| (row, column))
        })
    }

    fn set_if_blank(&mut self, row: i64, column: i64, glyph: char) -> bool {
        if !(0..HEIGHT as i64).contains(&row) || !(0..WIDTH as i64).contains(&column) {
            return false;
        }
        let cell = &mut self.cells[row as usize][column as usize];
        if *cell == EMPTY {
            *cell = glyph;
            true
        } else {
            false
        }
    }
}

/// Render the terrain silhouette and lander for `state`.
pub fn render(state: &FlightState) -> Canvas {
    let window = VerticalWindow::for_altitude(state.altitude_m);
    let mut canvas = Canvas::blank(window);

    let mut prev_height = 0.0;
    for column in 0..WIDTH {
        let pos = (world_x_for_column(column) - X_MIN) / grid::SPACING;
        let height = state.terrain.interpolated_height(pos);
        let glyph = if column == 0 {
            SURFACE_FLAT
        } else if height > prev_height + SLOPE_THRESHOLD_M {
            SURFACE_RISING
        } else if height < prev_height - SLOPE_THRESHOLD_M {
            SURFACE_FALLING
        } else {
            SURFACE_FLAT
        };
        prev_height = height;

        let row = window.row_for(height);
        if (0..HEIGHT as i64).contains(&row) {
            let row = row as usize;
            canvas.cells[row][column] = glyph;
            for fill in canvas.cells.iter_mut().skip(row + 1) {
                fill[column] = GROUND_FILL;
            }
        }
    }

    let lander_row = window.row_for(state.altitude_m);
    let lander_column = column_for(state.position_m);
    let on_canvas = (0..HEIGHT as i64).contains(&lander_row)
        && (0..WIDTH as i64).contains(&lander_column);
    if on_canvas {
        canvas.set_if_blank(lander_row, lander_column, LANDER);
        if state.engines_on {
            canvas.set_if_blank(lander_row + 1, lander_column, EXHAUST);
        }
    }

    canvas
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".---[ RADAR VISUALS ]{}.", "-".repeat(WIDTH - 15))?;
        for (text, altitude) in self.rows() {
            writeln!(f, "| {text} | {altitude:+.0}m")?;
        }
        writeln!(f, "`{}´", "-".repeat(WIDTH + 5))?;
        write!(f, "  {:<30} 0m {:>28}", "-100m", "+100m")
    }
}
