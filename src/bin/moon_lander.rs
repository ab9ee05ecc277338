use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use moon_lander::command::{Command, CommandError};
use moon_lander::config::{GameConfig, load_config};
use moon_lander::display::{COMMAND_HELP, write_banner, write_event};
use moon_lander::export::DEFAULT_RESULTS_PATH;
use moon_lander::menu::run_menu;
use moon_lander::session::{Event, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(author, version, about = "Moon Lander - turn-based lunar descent")]
struct Cli {
    /// Display velocity changes as Delta V
    #[arg(short = 'd', long)]
    delta_v: bool,

    /// Load settings from a TOML or YAML file before applying flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append flight results to this file
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Seed for terrain and launch conditions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if cli.delta_v {
        config.display_delta_v = true;
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config, rng, cli.results);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_banner(&mut out, session.config().display_mode_label())?;

    loop {
        write!(out, "\nCommand: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(CommandError::Unknown(_)) if !session.in_progress() => {
                write_event(&mut out, &Event::NoActiveFlight)?;
                continue;
            }
            Err(CommandError::Unknown(_)) => {
                writeln!(out, "{COMMAND_HELP}")?;
                continue;
            }
        };

        for event in session.handle(command) {
            write_event(&mut out, &event)?;
            match event {
                Event::OpenConfigMenu => {
                    run_menu(session.config_mut(), &mut input, &mut out)?;
                    writeln!(
                        out,
                        "\nConfiguration updated. Press 'V' to start a new game with these settings."
                    )?;
                }
                Event::Quit => return Ok(()),
                _ => {}
            }
        }
    }
}
