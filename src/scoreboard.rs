/*
scoreboard.rs

Copyright 2025 Hervé Quatremain

This file is part of Guessnum.

Guessnum is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Guessnum is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Guessnum. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Keep track of the games played since Guessnum started.
//!
//! The scoreboard lives in memory only and is lost when the player quits.

use std::collections::HashMap;
use std::fmt;

use crate::difficulty::Difficulty;
use crate::session::Outcome;

/// Game mode: a difficulty level, or the classic game that has none.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    Classic,
    Level(Difficulty),
}

impl From<Option<Difficulty>> for Mode {
    fn from(difficulty: Option<Difficulty>) -> Self {
        match difficulty {
            Some(d) => Mode::Level(d),
            None => Mode::Classic,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Classic => write!(f, "Classic"),
            Mode::Level(d) => write!(f, "{d}"),
        }
    }
}

/// Results for one game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub played: u32,
    pub won: u32,

    /// Fewest attempts for a win.
    pub best: Option<u32>,
}

/// Results per game mode.
#[derive(Debug, Default)]
pub struct Scoreboard {
    board: HashMap<Mode, Tally>,
}

impl Scoreboard {
    /// Create a [`Scoreboard`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a game and return whether the player beat their best result.
    ///
    /// Only terminal outcomes are recorded.
    pub fn record(&mut self, mode: Mode, outcome: &Outcome) -> bool {
        let tally: &mut Tally = match outcome {
            Outcome::Correct { .. } | Outcome::Exhausted { .. } => {
                self.board.entry(mode).or_default()
            }
            _ => return false,
        };

        tally.played += 1;
        if let Outcome::Correct { attempts_used, .. } = outcome {
            tally.won += 1;
            if tally.best.is_none_or(|b| *attempts_used < b) {
                tally.best = Some(*attempts_used);
                return true;
            }
        }
        false
    }

    /// Return the results for the given mode.
    pub fn get(&self, mode: Mode) -> Tally {
        self.board.get(&mode).copied().unwrap_or_default()
    }

    /// Whether no game has been completed yet.
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// Return one line per played mode, in menu order.
    pub fn summary(&self) -> Vec<String> {
        let modes = Difficulty::ALL
            .iter()
            .map(|d| Mode::Level(*d))
            .chain([Mode::Classic]);

        let mut lines: Vec<String> = Vec::new();
        for mode in modes {
            let t: Tally = self.get(mode);
            if t.played > 0 {
                let best: String = match t.best {
                    Some(b) => format!(", best {b} attempts"),
                    None => String::new(),
                };
                lines.push(format!("{mode}: {} won out of {}{best}", t.won, t.played));
            }
        }
        lines
    }
}
