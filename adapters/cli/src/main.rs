#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for playing Ladders matches.

mod render;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ladders_core::{Command, Difficulty, Event, OvershootRule, StartPosition};
use ladders_engine::{self as engine, query, BoardTopology, GameEngine};
use ladders_system_autoplay::{Autoplay, Config};
use ladders_system_dice::Dice;

use crate::settings::Settings;

/// Snakes and ladders, played out by the computer.
#[derive(Parser, Debug)]
#[command(name = "ladders")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a full match with automatic dice rolls
    Play {
        /// Board preset: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Player name, repeat once per player
        #[arg(short, long = "player")]
        players: Vec<String>,

        /// Dice seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Die values to play instead of rolling, e.g. `--rolls 3,5,6`
        #[arg(short, long, value_delimiter = ',', conflicts_with = "seed")]
        rolls: Vec<u8>,

        /// Where tokens wait before their first move
        #[arg(long, value_enum)]
        start: Option<StartArg>,

        /// What happens when a roll passes the final square
        #[arg(long, value_enum)]
        overshoot: Option<OvershootArg>,

        /// Stop after this many moves
        #[arg(long, default_value = "1000")]
        max_turns: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Settings file providing defaults for the options above
        #[arg(long, default_value = "ladders.toml")]
        settings: PathBuf,

        /// Write the effective settings back to the settings file
        #[arg(long)]
        save_settings: bool,
    },

    /// Print a board with its snakes and ladders
    Board {
        /// Board preset: easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
    },

    /// Print a share code for the saved settings
    Share {
        /// Settings file to encode
        #[arg(long, default_value = "ladders.toml")]
        settings: PathBuf,
    },

    /// Decode a share code and print the settings it carries
    Import {
        /// Share code produced by `ladders share`
        code: String,

        /// Also write the decoded settings to the settings file
        #[arg(long)]
        save: bool,

        /// Settings file written by `--save`
        #[arg(long, default_value = "ladders.toml")]
        settings: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartArg {
    /// Tokens start off the board
    OffBoard,
    /// Tokens start on square 1
    FirstSquare,
}

impl From<StartArg> for StartPosition {
    fn from(value: StartArg) -> Self {
        match value {
            StartArg::OffBoard => Self::OffBoard,
            StartArg::FirstSquare => Self::FirstSquare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OvershootArg {
    /// Walk the excess back from the final square
    BounceBack,
    /// Refuse the move
    StayPut,
}

impl From<OvershootArg> for OvershootRule {
    fn from(value: OvershootArg) -> Self {
        match value {
            OvershootArg::BounceBack => Self::BounceBack,
            OvershootArg::StayPut => Self::StayPut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable log and standings
    Text,
    /// One JSON event per line
    Json,
}

/// Where die values come from during `play`.
#[derive(Debug)]
enum RollSource {
    Random(Dice),
    Scripted(std::vec::IntoIter<u8>),
}

impl RollSource {
    /// Caps the match length so a script is never asked for more values than it holds.
    fn turn_limit(&self, max_turns: u32) -> u32 {
        match self {
            Self::Random(_) => max_turns,
            Self::Scripted(rolls) => {
                max_turns.min(u32::try_from(rolls.len()).unwrap_or(u32::MAX))
            }
        }
    }

    fn roll(&mut self) -> u8 {
        match self {
            Self::Random(dice) => dice.roll(),
            Self::Scripted(rolls) => rolls.next().unwrap_or_default(),
        }
    }
}

/// Entry point for the Ladders command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Play {
            difficulty,
            players,
            seed,
            rolls,
            start,
            overshoot,
            max_turns,
            format,
            settings,
            save_settings,
        } => {
            let mut effective = Settings::load_or_default(&settings)
                .with_context(|| format!("loading {}", settings.display()))?;
            if let Some(difficulty) = difficulty {
                effective.difficulty = difficulty;
            }
            if !players.is_empty() {
                effective.player_names = players;
            }
            if let Some(start) = start {
                effective.start = start.into();
            }
            if let Some(overshoot) = overshoot {
                effective.overshoot = overshoot.into();
            }
            if save_settings {
                effective
                    .save(&settings)
                    .with_context(|| format!("saving {}", settings.display()))?;
            }
            let source = if rolls.is_empty() {
                RollSource::Random(seed.map_or_else(Dice::from_entropy, Dice::new))
            } else {
                RollSource::Scripted(rolls.into_iter())
            };
            play(&effective, source, max_turns, format)
        }
        Commands::Board { difficulty } => {
            let board = BoardTopology::new(difficulty)?;
            print!("{}", render::board(&board));
            Ok(())
        }
        Commands::Share { settings } => {
            let saved = load_existing(&settings)?;
            println!("{}", saved.encode()?);
            Ok(())
        }
        Commands::Import {
            code,
            save,
            settings,
        } => {
            let imported = Settings::decode(&code).context("decoding share code")?;
            print!("{}", toml::to_string_pretty(&imported)?);
            if save {
                imported
                    .save(&settings)
                    .with_context(|| format!("saving {}", settings.display()))?;
            }
            Ok(())
        }
    }
}

fn load_existing(path: &Path) -> Result<Settings> {
    Settings::load(path).with_context(|| format!("loading {}", path.display()))
}

fn play(
    settings: &Settings,
    mut source: RollSource,
    max_turns: u32,
    format: OutputFormat,
) -> Result<()> {
    let mut game = GameEngine::with_rules(settings.rules());
    let mut autoplay = Autoplay::new(Config::new(source.turn_limit(max_turns)));
    let mut printed = 0;

    let mut commands = vec![Command::Initialize {
        difficulty: settings.difficulty,
        player_names: settings.player_names.clone(),
    }];

    while !commands.is_empty() {
        let mut events = Vec::new();
        for command in commands.drain(..) {
            engine::apply(&mut game, command, &mut events);
        }

        match format {
            OutputFormat::Text => {
                for entry in &game.log().all()[printed..] {
                    println!("{entry}");
                }
                printed = game.log().len();
            }
            OutputFormat::Json => {
                for event in &events {
                    println!("{}", serde_json::to_string(event)?);
                }
            }
        }

        if let Some(error) = events.iter().find_map(|event| match event {
            Event::CommandRejected { error } => Some(error),
            _ => None,
        }) {
            bail!("the engine refused to continue: {error}");
        }

        autoplay.handle(&events, || source.roll(), &mut commands);
    }

    if format == OutputFormat::Text {
        println!();
        if query::winner(&game).is_none() {
            println!("No winner after {} moves.", autoplay.turns_played());
        }
        println!("{}", render::standings(&game.state().standings));
    }
    Ok(())
}
