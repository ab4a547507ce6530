/*
difficulty.rs

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

//! Difficulty levels and the rules they select.
//!
//! Each [`Difficulty`] maps to a [`Rules`] object that gives the range of the number to guess and
//! the number of attempts the player gets:
//!
//! | Difficulty | Range   | Attempts |
//! |------------|---------|----------|
//! | Easy       | 1 - 50  | 10       |
//! | Medium     | 1 - 100 | 8        |
//! | Hard       | 1 - 200 | 5        |
//!
//! The classic game has no difficulty level and uses [`Rules::classic`].

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use strum_macros::FromRepr;

/// Difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// All the difficulty levels, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Return the rules for the difficulty level.
    pub fn rules(self) -> Rules {
        match self {
            Difficulty::Easy => Rules::new(1, 50, 10),
            Difficulty::Medium => Rules::new(1, 100, 8),
            Difficulty::Hard => Rules::new(1, 200, 5),
        }
    }

    /// Return the difficulty at the given position in the start menu.
    ///
    /// Menu positions start at 1.
    pub fn from_menu(position: usize) -> Option<Self> {
        position.checked_sub(1).and_then(Difficulty::from_repr)
    }
}

/// Range of the number to guess and attempt budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rules {
    /// Lowest possible value of the number to guess.
    pub low: i64,

    /// Highest possible value of the number to guess (inclusive).
    pub high: i64,

    /// Number of guesses the player gets.
    pub max_attempts: u32,
}

impl Rules {
    /// Create a [`Rules`] object.
    pub const fn new(low: i64, high: i64, max_attempts: u32) -> Self {
        Self {
            low,
            high,
            max_attempts,
        }
    }

    /// Rules of the classic game, which has no difficulty level.
    pub const fn classic() -> Self {
        Self::new(1, 100, 10)
    }

    /// Return the inclusive range of the number to guess.
    pub fn range(&self) -> RangeInclusive<i64> {
        self.low..=self.high
    }
}
