use lander_core::grid::SAMPLES;
use lander_core::viewport::{HEIGHT, WIDTH};
use moon_lander::flight::FlightState;
use moon_lander::terrain::TerrainMap;
use moon_lander::visualizer::{
    EXHAUST, GROUND_FILL, LANDER, SURFACE_FALLING, SURFACE_FLAT, SURFACE_RISING, VerticalWindow,
    ViewMode, column_for, render, world_x_for_column,
};

#[test]
fn altitude_selects_zoom_level() {
    let high = VerticalWindow::for_altitude(200.0);
    assert_eq!(high.mode, ViewMode::Approach);
    assert_eq!(high.top_m(), 230.0);
    assert_eq!(high.bottom_m, 80.0);

    let edge = VerticalWindow::for_altitude(60.0);
    assert_eq!(edge.mode, ViewMode::Approach);

    let low = VerticalWindow::for_altitude(59.9);
    assert_eq!(low.mode, ViewMode::Landing);
    assert_eq!(low.bottom_m, -15.0);
    assert_eq!(low.top_m(), 25.0);
}

#[test]
fn columns_span_the_mapped_terrain() {
    assert_eq!(world_x_for_column(0), -100.0);
    assert_eq!(world_x_for_column(WIDTH - 1), 100.0);
    assert_eq!(column_for(0.0), 30);
    assert_eq!(column_for(-100.0), 0);
    assert_eq!(column_for(100.0), (WIDTH - 1) as i64);
}

#[test]
fn flat_ground_fills_below_surface_row() {
    let state = FlightState::at(0.0, 100.0, 0.0, 0.0, TerrainMap::flat());
    let canvas = render(&state);
    // Approach window [-20, 130]: ground at row 13.
    for column in 0..WIDTH {
        assert_eq!(canvas.cell(13, column), Some(SURFACE_FLAT));
        assert_eq!(canvas.cell(14, column), Some(GROUND_FILL));
        assert_eq!(canvas.cell(15, column), Some(GROUND_FILL));
    }
    assert_eq!(canvas.cell(HEIGHT, 0), None);
}

#[test]
fn lander_and_exhaust_are_overlaid() {
    let state = FlightState::at(0.0, 100.0, 0.0, 0.0, TerrainMap::flat()).with_engines(true);
    let canvas = render(&state);
    assert_eq!(canvas.find(LANDER), Some((3, 30)));
    assert_eq!(canvas.cell(4, 30), Some(EXHAUST));

    let coasting = render(&state.clone().with_engines(false));
    assert_eq!(coasting.find(EXHAUST), None);
}

#[test]
fn lander_in_landing_mode() {
    let state = FlightState::at(-50.0, 20.0, 0.0, 0.0, TerrainMap::flat());
    let canvas = render(&state);
    assert_eq!(canvas.window.mode, ViewMode::Landing);
    assert_eq!(canvas.find(LANDER), Some((2, 15)));
    assert_eq!(canvas.cell(9, 15), Some(SURFACE_FLAT));
}

#[test]
fn lander_does_not_overwrite_terrain() {
    let state = FlightState::at(0.0, 0.0, 0.0, 0.0, TerrainMap::flat());
    let canvas = render(&state);
    assert_eq!(canvas.find(LANDER), None);
}

#[test]
fn off_screen_lander_is_skipped() {
    let state = FlightState::at(150.0, 100.0, 0.0, 0.0, TerrainMap::flat());
    assert_eq!(render(&state).find(LANDER), None);
}

#[test]
fn slopes_use_directional_glyphs() {
    let mut heights = [0.0; SAMPLES];
    for (i, h) in heights.iter_mut().enumerate().take(11) {
        *h = i as f64 * 3.0;
    }
    for (i, h) in heights.iter_mut().enumerate().skip(11) {
        *h = (20 - i) as f64 * 3.0;
    }
    let state = FlightState::at(0.0, 100.0, 0.0, 0.0, TerrainMap::from_heights(heights));
    let canvas = render(&state);
    let text: String = (0..HEIGHT).map(|row| canvas.row_text(row)).collect();
    assert!(text.contains(SURFACE_RISING));
    assert!(text.contains(SURFACE_FALLING));

    let (left, _) = canvas.rows().next().unwrap();
    assert_eq!(left.chars().count(), WIDTH);
}

#[test]
fn rows_are_annotated_with_altitude() {
    let state = FlightState::at(0.0, 100.0, 0.0, 0.0, TerrainMap::flat());
    let canvas = render(&state);
    let altitudes: Vec<f64> = canvas.rows().map(|(_, alt)| alt).collect();
    assert_eq!(altitudes.len(), HEIGHT);
    assert_eq!(altitudes[0], 130.0);
    assert!((altitudes[HEIGHT - 1] + 20.0).abs() < 1e-9);

    let framed = canvas.to_string();
    assert!(framed.contains("RADAR VISUALS"));
    assert!(framed.contains("+130m"));
    assert!(framed.contains("-100m"));
}

#[test]
fn slope_glyph_compares_with_previous_column_even_when_off_screen() {
    // Landing window [-15, 25]: the cliff at the left edge rises above the top.
    let mut heights = [0.0; SAMPLES];
    heights[0] = 40.0;
    let state = FlightState::at(80.0, 50.0, 0.0, 0.0, TerrainMap::from_heights(heights));
    let canvas = render(&state);
    assert_eq!(canvas.window.mode, ViewMode::Landing);
    assert_eq!(canvas.cell(0, 0), Some(' '));
    assert_eq!(canvas.cell(0, 1), Some(' '));
    // Column 2 sits at ~13.3 m, below column 1's off-screen ~26.7 m.
    assert_eq!(canvas.cell(4, 2), Some(SURFACE_FALLING));
}
