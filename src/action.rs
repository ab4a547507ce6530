/*
action.rs

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

//! Translate the lines that the player types into actions.
//!
//! The same line can mean different things depending on the view. For example `1` selects the
//! easy level in the start view, but is a guess in the game view.

use crate::application::View;
use crate::difficulty::Difficulty;

/// Player actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectDifficulty(Difficulty),
    Start,
    Guess(String),
    Restart,
    Home,
    Scores,
    Help,
    Quit,

    /// The line means nothing in the current view.
    Unknown(String),
}

/// Return the action for the line typed in the given view.
pub fn parse(view: View, line: &str) -> Action {
    let word: String = line.trim().to_lowercase();

    match (view, word.as_str()) {
        (_, "q" | "quit" | "exit") => Action::Quit,
        (_, "h" | "help" | "?") => Action::Help,

        (View::Start, "" | "s" | "start") => Action::Start,
        (View::Start, "scores") => Action::Scores,
        (View::Start, "easy") => Action::SelectDifficulty(Difficulty::Easy),
        (View::Start, "medium") => Action::SelectDifficulty(Difficulty::Medium),
        (View::Start, "hard") => Action::SelectDifficulty(Difficulty::Hard),
        (View::Start, w) => match w.parse::<usize>().ok().and_then(Difficulty::from_menu) {
            Some(d) => Action::SelectDifficulty(d),
            None => Action::Unknown(line.trim().to_string()),
        },

        (View::Game, "r" | "restart") => Action::Restart,
        (View::Game, "home") => Action::Home,
        (View::Game, _) => Action::Guess(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_view_actions() {
        assert_eq!(
            parse(View::Start, "2"),
            Action::SelectDifficulty(Difficulty::Medium)
        );
        assert_eq!(
            parse(View::Start, " HARD \n"),
            Action::SelectDifficulty(Difficulty::Hard)
        );
        assert_eq!(parse(View::Start, "\n"), Action::Start);
        assert_eq!(parse(View::Start, "start"), Action::Start);
        assert_eq!(parse(View::Start, "Q"), Action::Quit);
        assert_eq!(parse(View::Start, "scores"), Action::Scores);
        assert_eq!(parse(View::Start, "7"), Action::Unknown("7".to_string()));
        assert_eq!(parse(View::Start, "home"), Action::Unknown("home".to_string()));
    }

    #[test]
    fn game_view_actions() {
        assert_eq!(parse(View::Game, "r"), Action::Restart);
        assert_eq!(parse(View::Game, "Home"), Action::Home);
        assert_eq!(parse(View::Game, "?"), Action::Help);
        assert_eq!(parse(View::Game, "quit"), Action::Quit);
        assert_eq!(parse(View::Game, "2"), Action::Guess("2".to_string()));
        assert_eq!(parse(View::Game, "abc"), Action::Guess("abc".to_string()));
        assert_eq!(parse(View::Game, ""), Action::Guess(String::new()));
    }
}
