//! Single-character player commands.

use std::str::FromStr;

use thiserror::Error;

use crate::physics::Maneuver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewFlight,
    EnginesOn,
    EnginesOff,
    BurnLeft,
    BurnRight,
    Drift,
    Radar,
    Configure,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
}

impl Command {
    /// Commands accepted while no flight is in progress.
    pub fn allowed_between_flights(self) -> bool {
        matches!(
            self,
            Command::NewFlight | Command::Configure | Command::Quit
        )
    }

    /// The maneuver this command resolves as a turn, if any.
    pub fn maneuver(self) -> Option<Maneuver> {
        match self {
            Command::BurnLeft => Some(Maneuver::BurnLeft),
            Command::BurnRight => Some(Maneuver::BurnRight),
            Command::Drift => Some(Maneuver::Drift),
            _ => None,
        }
    }
}

impl TryFrom<char> for Command {
    type Error = CommandError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let command = match value.to_ascii_uppercase() {
            'V' => Command::NewFlight,
            'W' => Command::EnginesOn,
            'S' => Command::EnginesOff,
            'Y' => Command::BurnLeft,
            'Z' => Command::BurnRight,
            'X' => Command::Drift,
            'R' => Command::Radar,
            'C' => Command::Configure,
            'Q' => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse the first non-whitespace character of a line; the rest is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.trim_start().chars().next().ok_or(CommandError::Empty)?;
        Command::try_from(first)
    }
}
