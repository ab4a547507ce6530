/*
session.rs

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

//! Manage the status of a game in progress.
//!
//! A [`GuessSession`] holds the number to guess and counts the player's attempts.
//! Each guess goes through [`GuessSession::submit`], which returns an [`Outcome`].
//! Once the player finds the number or runs out of attempts, the session is terminal and
//! [`GuessSession::reset`] must be called before playing again.

use log::debug;
use rand::Rng;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::num::IntErrorKind;

use crate::difficulty::{Difficulty, Rules};

/// Result of one guess.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess is above the number.
    TooHigh { attempts_remaining: u32 },

    /// The guess is below the number.
    TooLow { attempts_remaining: u32 },

    /// The player found the number.
    Correct { target: i64, attempts_used: u32 },

    /// The last attempt was wrong.
    Exhausted { target: i64 },

    /// The input is not an integer. No attempt is consumed.
    InvalidInput,
}

impl Outcome {
    /// Whether the outcome ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Correct { .. } | Outcome::Exhausted { .. })
    }
}

/// Status of the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum SessionError {
    /// The game is over (won or lost) and must be reset first.
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::Finished => write!(f, "the game is over, restart to play again"),
        }
    }
}

impl Error for SessionError {}

/// Manage the game in progress.
#[derive(Debug)]
pub struct GuessSession<R: Rng> {
    /// Number to guess.
    target: i64,

    /// Number of valid guesses so far.
    attempts_used: u32,

    /// Range and attempt budget.
    rules: Rules,

    /// Difficulty level, or None for the classic game.
    difficulty: Option<Difficulty>,

    status: Status,

    /// Random source, only used when drawing the number to guess.
    rng: R,
}

impl<R: Rng> GuessSession<R> {
    /// Create a [`GuessSession`] object for the given difficulty level.
    ///
    /// Without a difficulty level, the session uses the classic rules.
    pub fn new(difficulty: Option<Difficulty>, rng: R) -> Self {
        let rules: Rules = difficulty.map_or_else(Rules::classic, Difficulty::rules);
        let mut session = Self {
            target: rules.low,
            attempts_used: 0,
            rules,
            difficulty,
            status: Status::InProgress,
            rng,
        };
        session.draw_target();
        session
    }

    /// Draw a new number to guess from the range of the current rules.
    fn draw_target(&mut self) {
        self.target = self.rng.random_range(self.rules.range());
        debug!(
            "New number to guess in {}..={}: {}",
            self.rules.low, self.rules.high, self.target
        );
    }

    /// Start a new game.
    ///
    /// When a difficulty level is given, the session switches to its rules. Otherwise the
    /// current rules are kept.
    pub fn reset(&mut self, difficulty: Option<Difficulty>) {
        if let Some(d) = difficulty {
            self.difficulty = Some(d);
            self.rules = d.rules();
        }
        self.attempts_used = 0;
        self.status = Status::InProgress;
        self.draw_target();
    }

    /// Process a guess from the player.
    ///
    /// Input that is not an integer returns [`Outcome::InvalidInput`] and does not change the
    /// session.
    pub fn submit(&mut self, raw_input: &str) -> Result<Outcome, SessionError> {
        if self.status != Status::InProgress {
            return Err(SessionError::Finished);
        }

        // Integers too large for i64 are still valid guesses, beyond any possible number.
        let guess: &str = raw_input.trim();
        let ordering: Ordering = match guess.parse::<i64>() {
            Ok(g) => g.cmp(&self.target),
            Err(error) => match error.kind() {
                IntErrorKind::PosOverflow => Ordering::Greater,
                IntErrorKind::NegOverflow => Ordering::Less,
                _ => {
                    debug!("Not a number: {raw_input:?}");
                    return Ok(Outcome::InvalidInput);
                }
            },
        };
        self.attempts_used += 1;
        debug!(
            "Attempt {}/{}: {guess}",
            self.attempts_used, self.rules.max_attempts
        );

        let attempts_remaining: u32 = self.attempts_remaining();
        let outcome: Outcome = match ordering {
            Ordering::Equal => {
                self.status = Status::Won;
                return Ok(Outcome::Correct {
                    target: self.target,
                    attempts_used: self.attempts_used,
                });
            }
            Ordering::Greater => Outcome::TooHigh { attempts_remaining },
            Ordering::Less => Outcome::TooLow { attempts_remaining },
        };

        if attempts_remaining == 0 {
            self.status = Status::Lost;
            return Ok(Outcome::Exhausted {
                target: self.target,
            });
        }
        Ok(outcome)
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn max_attempts(&self) -> u32 {
        self.rules.max_attempts
    }

    /// Return the number of guesses left.
    pub fn attempts_remaining(&self) -> u32 {
        self.rules.max_attempts - self.attempts_used
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the game is won or lost.
    pub fn is_terminal(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Force the number to guess.
    #[cfg(test)]
    pub fn set_target(&mut self, target: i64) {
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn medium_session(target: i64) -> GuessSession<StdRng> {
        let mut session = GuessSession::new(Some(Difficulty::Medium), StdRng::seed_from_u64(7));
        session.set_target(target);
        session
    }

    #[test]
    fn too_high_then_correct() {
        let mut session = medium_session(42);

        assert_eq!(
            session.submit("50"),
            Ok(Outcome::TooHigh {
                attempts_remaining: 7
            })
        );
        assert_eq!(
            session.submit("42"),
            Ok(Outcome::Correct {
                target: 42,
                attempts_used: 2
            })
        );
        assert_eq!(session.status(), Status::Won);
        assert!(session.is_terminal());
    }

    #[test]
    fn invalid_input_consumes_nothing() {
        let mut session = medium_session(42);

        for raw in ["abc", "", "  ", "4.2", "12abc", "0x10"] {
            assert_eq!(session.submit(raw), Ok(Outcome::InvalidInput));
        }
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.target(), 42);
        assert!(!session.is_terminal());
    }

    #[test]
    fn signed_and_padded_input() {
        let mut session = medium_session(42);

        assert_eq!(
            session.submit(" 30\n"),
            Ok(Outcome::TooLow {
                attempts_remaining: 7
            })
        );
        assert_eq!(
            session.submit("-5"),
            Ok(Outcome::TooLow {
                attempts_remaining: 6
            })
        );
        assert_eq!(
            session.submit("+42"),
            Ok(Outcome::Correct {
                target: 42,
                attempts_used: 3
            })
        );
    }

    #[test]
    fn out_of_range_guess_consumes_an_attempt() {
        let mut session = medium_session(42);

        assert_eq!(
            session.submit("1000"),
            Ok(Outcome::TooHigh {
                attempts_remaining: 7
            })
        );
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn huge_integers_are_valid_guesses() {
        let mut session = medium_session(42);

        assert_eq!(
            session.submit("99999999999999999999"),
            Ok(Outcome::TooHigh {
                attempts_remaining: 7
            })
        );
        assert_eq!(
            session.submit("-99999999999999999999"),
            Ok(Outcome::TooLow {
                attempts_remaining: 6
            })
        );
        assert_eq!(session.attempts_used(), 2);
        assert_eq!(session.submit("9999999999999999999x"), Ok(Outcome::InvalidInput));
        assert_eq!(session.attempts_used(), 2);
    }

    #[test]
    fn last_wrong_guess_exhausts() {
        let mut session = medium_session(42);

        for (i, raw) in ["1", "99", "2", "98", "3", "97", "4"].iter().enumerate() {
            let outcome: Outcome = session.submit(raw).unwrap();
            assert!(!outcome.is_terminal(), "attempt {i} ended the game");
        }
        assert_eq!(session.submit("60"), Ok(Outcome::Exhausted { target: 42 }));
        assert_eq!(session.attempts_used(), 8);
        assert_eq!(session.status(), Status::Lost);

        let mut session = medium_session(42);
        for _ in 0..7 {
            session.submit("60").unwrap();
        }
        assert_eq!(session.submit("10"), Ok(Outcome::Exhausted { target: 42 }));
    }

    #[test]
    fn correct_on_last_attempt_wins() {
        let mut session = medium_session(42);

        for _ in 0..7 {
            session.submit("10").unwrap();
        }
        assert_eq!(
            session.submit("42"),
            Ok(Outcome::Correct {
                target: 42,
                attempts_used: 8
            })
        );
    }

    #[test]
    fn terminal_session_rejects_guesses() {
        let mut session = medium_session(42);

        session.submit("42").unwrap();
        assert_eq!(session.submit("42"), Err(SessionError::Finished));
        assert_eq!(session.submit("abc"), Err(SessionError::Finished));
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn attempts_never_exceed_budget() {
        for difficulty in Difficulty::ALL {
            let mut session = GuessSession::new(Some(difficulty), StdRng::seed_from_u64(3));
            let high: i64 = session.rules().high;

            for guess in (0..=high + 10).rev() {
                match session.submit(&guess.to_string()) {
                    Ok(_) => assert!(session.attempts_used() <= session.max_attempts()),
                    Err(SessionError::Finished) => break,
                }
            }
            assert!(session.is_terminal());
            assert!(session.attempts_used() <= session.max_attempts());
        }
    }

    #[test]
    fn targets_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in Difficulty::ALL {
            let rules: Rules = difficulty.rules();
            let mut session = GuessSession::new(Some(difficulty), StdRng::seed_from_u64(rng.random()));

            for _ in 0..500 {
                assert!(rules.range().contains(&session.target()));
                session.reset(None);
            }
        }

        let mut session = GuessSession::new(None, StdRng::seed_from_u64(5));
        for _ in 0..500 {
            assert!(Rules::classic().range().contains(&session.target()));
            session.reset(None);
        }
    }

    #[test]
    fn reset_after_game_over() {
        let mut session = medium_session(42);

        for _ in 0..8 {
            session.submit("1").unwrap();
        }
        assert!(session.is_terminal());

        session.reset(None);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.max_attempts(), 8);
        assert!(session.submit("1").is_ok());
    }

    #[test]
    fn reset_with_new_difficulty() {
        let mut session = GuessSession::new(None, StdRng::seed_from_u64(1));
        assert_eq!(session.difficulty(), None);
        assert_eq!(session.max_attempts(), 10);

        session.reset(Some(Difficulty::Hard));
        assert_eq!(session.difficulty(), Some(Difficulty::Hard));
        assert_eq!(session.rules(), Difficulty::Hard.rules());
        assert_eq!(session.attempts_remaining(), 5);
        assert!((1..=200).contains(&session.target()));
    }

    #[test]
    fn seeded_sessions_repeat() {
        let a = GuessSession::new(Some(Difficulty::Hard), StdRng::seed_from_u64(99));
        let b = GuessSession::new(Some(Difficulty::Hard), StdRng::seed_from_u64(99));
        assert_eq!(a.target(), b.target());
    }
}
