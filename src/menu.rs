//! Numbered configuration menu shown between flights.

use std::io::{self, BufRead, Write};

use lander_config::GameConfig;

/// Option number that leaves the menu.
const RETURN_CHOICE: u32 = 5;

/// Run the menu until the player picks "return" or input ends.
///
/// Unparseable choices count as invalid; unparseable values leave the setting as it was.
pub fn run_menu<R, W>(config: &mut GameConfig, input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        writeln!(out, "\n=== GAME CONFIGURATION ===")?;
        writeln!(out, "1. Gravity:       {:.2} m/s²", config.gravity_m_s2)?;
        writeln!(out, "2. Engine Force:  {:.2} m/s²", config.engine_force_m_s2)?;
        writeln!(out, "3. Initial Fuel:  {} burns", config.initial_fuel)?;
        writeln!(out, "4. Display Mode:  {}", config.display_mode_label())?;
        writeln!(out, "{RETURN_CHOICE}. Return to game")?;
        write!(out, "Choose setting to change (1-5): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match line.trim().parse::<u32>().unwrap_or(0) {
            1 => {
                write!(out, "Enter new gravity (e.g., 1.6 for Moon): ")?;
                out.flush()?;
                if let Some(value) = read_value(input, out)? {
                    config.gravity_m_s2 = value;
                }
            }
            2 => {
                write!(out, "Enter new engine force (m/s²): ")?;
                out.flush()?;
                if let Some(value) = read_value(input, out)? {
                    config.engine_force_m_s2 = value;
                }
            }
            3 => {
                write!(out, "Enter new initial fuel: ")?;
                out.flush()?;
                if let Some(value) = read_value(input, out)? {
                    config.initial_fuel = value;
                }
            }
            4 => {
                config.display_delta_v = !config.display_delta_v;
                writeln!(out, "Display mode set to {}", config.display_mode_label())?;
            }
            RETURN_CHOICE => {
                writeln!(out, "Returning to main menu...")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn read_value<T, R, W>(input: &mut R, out: &mut W) -> io::Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Invalid value; setting unchanged.")?;
            Ok(None)
        }
    }
}
