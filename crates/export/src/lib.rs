//! Append-only results log written once per completed flight.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

/// Default file name for the results log.
pub const DEFAULT_RESULTS_PATH: &str = "lander_results.txt";

/// How a flight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeLabel {
    Success,
    Crashed,
}

impl OutcomeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeLabel::Success => "SUCCESS",
            OutcomeLabel::Crashed => "CRASHED",
        }
    }
}

/// One block of the results log.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub timestamp: DateTime<Local>,
    pub outcome: OutcomeLabel,
    pub position_m: f64,
    pub altitude_m: f64,
    pub velocity_h_m_s: f64,
    pub velocity_v_m_s: f64,
    pub fuel_remaining: u32,
    /// Safety score of the terrain under the touchdown point.
    pub safety_score: f64,
}

impl ResultRecord {
    /// Serialize the record as a text block terminated by a blank line.
    pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(
            writer,
            "[{}] - {}",
            self.timestamp.format("%a %b %e %H:%M:%S %Y"),
            self.outcome.as_str()
        )?;
        writeln!(
            writer,
            "  Final Position: H={:.1} m, V={:.1} m",
            self.position_m, self.altitude_m
        )?;
        writeln!(
            writer,
            "  Impact Velocity: H={:.1} m/s, V={:.1} m/s",
            self.velocity_h_m_s, self.velocity_v_m_s
        )?;
        writeln!(writer, "  Fuel Remaining: {} burns", self.fuel_remaining)?;
        writeln!(
            writer,
            "  Landing Zone Safety: {:.0}% (at A={:.1} m)",
            self.safety_score, self.position_m
        )?;
        writeln!(writer)
    }
}

/// Append `record` to the log at `path`, creating the file (and parent directories) if needed.
///
/// The file is opened and closed within the call.
pub fn append_record(path: &Path, record: &ResultRecord) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut buffer = Vec::new();
    record.write_to(&mut buffer)?;
    file.write_all(&buffer)
}
