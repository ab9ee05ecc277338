//! Terminal text for session events.

use std::io::{self, Write};

use crate::radar::{Advisory, RadarReadout};
use crate::session::{Event, StatusSnapshot};

pub const COMMAND_HELP: &str = "Unknown command. Use: V, W, S, Y, Z, X, R, C, Q";

/// Startup banner shown once by the interactive front-end.
pub fn write_banner(out: &mut dyn Write, display_mode: &str) -> io::Result<()> {
    writeln!(out, "=== MOON LANDER WITH DYNAMIC RADAR VISUALS ===")?;
    writeln!(out, "Olivetti Programma 101 Style Implementation")?;
    writeln!(
        out,
        "Commands: V-Start, W-Engines On, S-Engines Off, Y-Left Burn, Z-Right Burn"
    )?;
    writeln!(
        out,
        "          X-Drift (skip burn), R-Activate Radar, C-Configure, Q-Quit"
    )?;
    writeln!(out, "Display Mode: {display_mode}")?;
    writeln!(out)?;
    writeln!(
        out,
        "NOTE: Use Radar (R) to activate the visual display, which zooms in on approach."
    )?;
    writeln!(out, "Press 'V' to begin a new game.")
}

/// Write the text for one event.
pub fn write_event(out: &mut dyn Write, event: &Event) -> io::Result<()> {
    match event {
        Event::FlightStarted => writeln!(out, "\n=== NEW GAME STARTED ==="),
        Event::Status(status) => write_status(out, status),
        Event::EnginesOn => writeln!(out, ">>> Main Engines ON. <<<"),
        Event::EnginesOff => writeln!(out, ">>> Main Engines OFF. <<<"),
        Event::RadarActivated => {
            writeln!(out, "\n=== ACTIVATING LANDING RADAR (1 fuel consumed) ===")
        }
        Event::RadarRefused => writeln!(out, "No fuel remaining! Cannot activate radar."),
        Event::RadarReadout { readout, stale } => {
            if *stale {
                writeln!(out, "\n[Radar data from previous position]")?;
            }
            write_radar(out, readout)
        }
        Event::RadarSignalLost => writeln!(
            out,
            ">>> Landing radar signal lost. Visuals deactivated. <<<"
        ),
        Event::OutOfFuelDrift => {
            writeln!(out, "No fuel remaining! Lander is now drifting.")
        }
        Event::EnginesOffBurnRejected => writeln!(
            out,
            "Cannot burn. Main engines are OFF (use 'W' to turn on)."
        ),
        Event::FuelDepleted => writeln!(out, "\n*** WARNING: FUEL DEPLETED. ***"),
        Event::NoActiveFlight => writeln!(
            out,
            "Game over. Press 'V' to start a new game or 'Q' to quit."
        ),
        Event::Landed => writeln!(
            out,
            "\n*** THE EAGLE HAS LANDED! SUCCESSFUL LANDING! ***"
        ),
        Event::Crashed => writeln!(out, "\n*** CRASHED! High impact speed. ***"),
        Event::ResultSaved(path) => writeln!(out, "Result saved to {}", path.display()),
        Event::ResultSaveFailed { path, reason } => writeln!(
            out,
            "Error: Could not save result to {} ({reason}).",
            path.display()
        ),
        Event::OpenConfigMenu => Ok(()),
        Event::Quit => writeln!(out, "Thanks for playing Moon Lander!"),
    }
}

fn write_radar(out: &mut dyn Write, readout: &RadarReadout) -> io::Result<()> {
    writeln!(
        out,
        "\n--- LANDING RADAR DATA (Valid for {} more turns) ---",
        readout.turns_remaining
    )?;
    writeln!(
        out,
        "RECOMMENDED LANDING ZONE: A={:.1} m (Safety: {:.0}%)",
        readout.zone.x_m, readout.zone.safety
    )?;
    writeln!(
        out,
        "Distance to recommended zone: {:.1} m",
        readout.distance_m
    )?;
    match readout.advisory {
        Advisory::Maneuver => writeln!(out, "ADVISORY: Recommend horizontal maneuvering")?,
        Advisory::OnApproach => writeln!(out, "ADVISORY: On approach to safe zone")?,
        Advisory::None => {}
    }
    writeln!(out, "-----------------------------------------------")
}

fn write_status(out: &mut dyn Write, status: &StatusSnapshot) -> io::Result<()> {
    if let Some(canvas) = &status.canvas {
        writeln!(out)?;
        writeln!(out, "{canvas}")?;
    }

    writeln!(out, "\n--- LANDER STATUS ---")?;
    writeln!(out, "A (X pos): {:8.1} m", status.position_m)?;
    writeln!(out, "B (Alt):   {:8.1} m", status.altitude_m)?;
    if status.display_delta_v {
        writeln!(out, "ΔV H:      {:8.1} m/s", status.delta_v_h_m_s)?;
        writeln!(out, "ΔV V:      {:8.1} m/s", status.delta_v_v_m_s)?;
    } else {
        let h_arrow = if status.velocity_h_m_s > 0.0 { "->" } else { "<-" };
        let v_arrow = if status.velocity_v_m_s < 0.0 {
            "v (Down)"
        } else {
            "^ (Up)"
        };
        writeln!(
            out,
            "Vel H:     {:8.1} m/s  {h_arrow}",
            status.velocity_h_m_s
        )?;
        writeln!(
            out,
            "Vel V:     {:8.1} m/s  {v_arrow}",
            status.velocity_v_m_s
        )?;
    }
    writeln!(out, "C (Fuel):  {:8} burns", status.fuel)?;
    writeln!(
        out,
        "Engines:   {}",
        if status.engines_on { "ON" } else { "OFF" }
    )?;
    match status.radar_turns {
        Some(turns) => writeln!(out, "Radar:     ACTIVE ({turns} turns remaining)")?,
        None => writeln!(out, "Radar:     INACTIVE (use 'R' for visuals)")?,
    }
    writeln!(out, "---------------------")
}
