#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that plays a match to completion.
//!
//! [`Autoplay`] reads the events emitted by the engine and answers with the
//! commands that keep the match going: roll for the player whose turn it is,
//! then pass the turn. The die is a caller-supplied closure so the system
//! itself stays deterministic.

use ladders_core::{Command, Event};

/// Configuration parameters required to construct the autoplay system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    max_turns: u32,
}

impl Config {
    /// Creates a configuration that stops after `max_turns` resolved moves.
    #[must_use]
    pub const fn new(max_turns: u32) -> Self {
        Self { max_turns }
    }

    /// Upper bound on resolved moves.
    #[must_use]
    pub const fn max_turns(&self) -> u32 {
        self.max_turns
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(1_000)
    }
}

/// Drives turns until the match is won, a command is refused or the turn
/// budget runs out. A fresh `GameStarted` resumes play.
#[derive(Debug)]
pub struct Autoplay {
    max_turns: u32,
    turns_played: u32,
    stopped: bool,
}

impl Autoplay {
    /// Creates a new autoplay system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            max_turns: config.max_turns,
            turns_played: 0,
            stopped: false,
        }
    }

    /// Consumes engine events and emits the commands that continue play.
    pub fn handle<F>(&mut self, events: &[Event], mut roll: F, out: &mut Vec<Command>)
    where
        F: FnMut() -> u8,
    {
        for event in events {
            if let Event::GameStarted { .. } = event {
                self.turns_played = 0;
                self.stopped = false;
            }
            if self.stopped {
                continue;
            }
            match event {
                Event::GameStarted { .. } | Event::TurnAdvanced { .. } => {
                    self.request_roll(&mut roll, out);
                }
                Event::MoveResolved { result } => {
                    self.turns_played = self.turns_played.saturating_add(1);
                    if !result.is_winner && !self.exhausted() {
                        out.push(Command::AdvanceTurn);
                    }
                }
                Event::GameWon { .. } | Event::CommandRejected { .. } | Event::GameAbandoned => {
                    self.stopped = true;
                }
            }
        }
    }

    fn request_roll<F>(&self, roll: &mut F, out: &mut Vec<Command>)
    where
        F: FnMut() -> u8,
    {
        if !self.exhausted() {
            out.push(Command::ResolveMove { dice_value: roll() });
        }
    }

    /// Resolved moves seen since the match started.
    #[must_use]
    pub const fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Whether the turn budget has been used up.
    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.turns_played >= self.max_turns
    }

    /// Whether the system has stopped issuing commands.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped || self.exhausted()
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
