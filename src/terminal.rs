/*
terminal.rs

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

//! Terminal front end.
//!
//! [`Terminal`] reads the player's lines, hands the corresponding actions to the
//! [`Application`] controller, and renders the views, the feedback, and the popups.
//!
//! The feedback to a guess is animated: the text is first printed in a flash color and then
//! redrawn in its final color.

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use formatx::formatx;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::action::{self, Action};
use crate::application::{Application, Response, View};
use crate::difficulty::{Difficulty, Rules};
use crate::scoreboard::Mode;
use crate::session::{Outcome, Status};

/// Default duration of the flash step of the feedback animation.
pub const FRAME: Duration = Duration::from_millis(500);

const TITLE_COLOR: Color = Color::Yellow;
const RESULT_COLOR: Color = Color::Red;
const FLASH_CORRECT: Color = Color::Green;
const FLASH_WRONG: Color = Color::Rgb {
    r: 255,
    g: 128,
    b: 128,
};

const MSG_INSTRUCTION: &str = "I am thinking of a number between {low} and {high}. Try to guess it!";
const MSG_ATTEMPTS_LEFT: &str = "Attempts left: {attempts}";
const MSG_WIN: &str = "You guessed the number {target} in {attempts} attempts!";
const MSG_EXHAUSTED: &str =
    "Sorry, you've reached the maximum number of attempts. The number was {target}.";
const MSG_LOSS: &str = "The number was {target}. Better luck next time!";
const MSG_NEW_BEST: &str = "New best result for the {mode} level!";
const MSG_RULES: &str = "{low} - {high}, {attempts} attempts";

/// Rendering options.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Print in color.
    pub color: bool,

    /// Flash the feedback. Only applies when `color` is set.
    pub animation: bool,

    /// How long the flash color stays before the final color.
    pub frame: Duration,
}

/// Terminal front end.
pub struct Terminal<I: BufRead, W: Write> {
    input: I,
    output: W,
    style: Style,
}

impl<I: BufRead, W: Write> Terminal<I, W> {
    /// Create a [`Terminal`] object.
    pub fn new(input: I, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    /// Return the output, consuming the object.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Main loop. Return when the player quits or when the input is closed.
    pub fn run<R: Rng>(&mut self, app: &mut Application<R>) -> io::Result<()> {
        self.render_start(app)?;

        while app.is_running() {
            self.prompt(app)?;

            let mut line: String = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                self.newline()?;
                app.quit();
                break;
            }

            let action: Action = action::parse(app.view(), &line);
            let response: Response = app.dispatch(action);
            self.render(app, &response)?;
        }
        self.output.flush()
    }

    fn prompt<R: Rng>(&mut self, app: &Application<R>) -> io::Result<()> {
        let session = app.session();
        let text: String = match app.view() {
            View::Game if !session.is_terminal() => format!(
                "Guess {} of {}: ",
                session.attempts_used() + 1,
                session.max_attempts()
            ),
            _ => "> ".to_string(),
        };
        queue!(self.output, Print(text))?;
        self.output.flush()
    }

    fn newline(&mut self) -> io::Result<()> {
        queue!(self.output, Print("\n"))
    }

    /// Print a line in the given color, or in the default color when colors are disabled.
    fn line(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(c) if self.style.color => {
                queue!(
                    self.output,
                    SetForegroundColor(c),
                    Print(text),
                    ResetColor,
                    Print("\n")
                )
            }
            _ => queue!(self.output, Print(text), Print("\n")),
        }
    }

    fn title(&mut self, text: &str) -> io::Result<()> {
        if self.style.color {
            queue!(
                self.output,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(TITLE_COLOR),
                Print(text),
                ResetColor,
                SetAttribute(Attribute::Reset),
                Print("\n")
            )
        } else {
            self.line(text, None)
        }
    }

    /// Print the feedback to a guess, with the flash animation when enabled.
    fn feedback(&mut self, text: &str, correct: bool) -> io::Result<()> {
        if self.style.color && self.style.animation {
            let flash: Color = if correct { FLASH_CORRECT } else { FLASH_WRONG };
            queue!(self.output, SetForegroundColor(flash), Print(text), ResetColor)?;
            self.output.flush()?;
            thread::sleep(self.style.frame);
            queue!(self.output, MoveToColumn(0))?;
        }
        self.line(text, Some(RESULT_COLOR))
    }

    /// Print a message in a box.
    fn popup(&mut self, title: &str, message: &str) -> io::Result<()> {
        let width: usize = title.chars().count().max(message.chars().count()) + 2;
        let border: String = format!("+{}+", "-".repeat(width));

        self.newline()?;
        self.line(&border, None)?;
        self.line(&format!("| {title:<w$} |", w = width - 2), None)?;
        self.line(&border, None)?;
        self.line(&format!("| {message:<w$} |", w = width - 2), None)?;
        self.line(&border, None)?;
        self.newline()
    }

    fn render_start<R: Rng>(&mut self, app: &Application<R>) -> io::Result<()> {
        self.newline()?;
        self.title("Welcome to the Guess the Number Game!")?;
        self.newline()?;

        if app.is_classic() {
            let rules: String = describe_rules(&Rules::classic());
            self.line(&format!("Classic game: {rules}"), None)?;
        } else {
            for (i, d) in Difficulty::ALL.iter().enumerate() {
                let mark: char = if *d == app.difficulty() { '*' } else { ' ' };
                let text: String = format!(
                    " {mark} {}. {:<7} ({})",
                    i + 1,
                    d.to_string(),
                    describe_rules(&d.rules())
                );
                self.line(&text, None)?;
            }
        }

        if !app.scoreboard().is_empty() {
            self.newline()?;
            for l in app.scoreboard().summary() {
                self.line(&l, None)?;
            }
        }

        self.newline()?;
        if app.is_classic() {
            self.line("Press Enter to start the game, h for help, q to quit.", None)
        } else {
            self.line(
                "Type 1, 2, or 3 to select the difficulty, Enter to start, h for help, q to quit.",
                None,
            )
        }
    }

    fn render_game(&mut self, rules: &Rules, mode: Mode) -> io::Result<()> {
        self.newline()?;
        self.title(&format!("Guess the Number Game - {mode}"))?;
        self.line(
            &formatx!(MSG_INSTRUCTION, low = rules.low, high = rules.high)
                .unwrap_or_else(|_| MSG_INSTRUCTION.to_string()),
            None,
        )?;
        self.attempts_left(rules.max_attempts)
    }

    fn attempts_left(&mut self, attempts: u32) -> io::Result<()> {
        self.line(
            &formatx!(MSG_ATTEMPTS_LEFT, attempts = attempts)
                .unwrap_or_else(|_| MSG_ATTEMPTS_LEFT.to_string()),
            None,
        )
    }

    fn game_over_hint(&mut self) -> io::Result<()> {
        self.line(
            "Type r to play again, home to go back to the start page, or q to quit.",
            None,
        )
    }

    fn render_outcome(&mut self, outcome: &Outcome, new_best: bool, mode: Mode) -> io::Result<()> {
        match outcome {
            Outcome::TooHigh { attempts_remaining } => {
                self.feedback("Your guess is too high.", false)?;
                self.attempts_left(*attempts_remaining)
            }
            Outcome::TooLow { attempts_remaining } => {
                self.feedback("Your guess is too low.", false)?;
                self.attempts_left(*attempts_remaining)
            }
            Outcome::Correct {
                target,
                attempts_used,
            } => {
                self.feedback("You guessed it right!", true)?;
                self.popup(
                    "Congratulations",
                    &formatx!(MSG_WIN, target = target, attempts = attempts_used)
                        .unwrap_or_else(|_| MSG_WIN.to_string()),
                )?;
                if new_best {
                    self.line(
                        &formatx!(MSG_NEW_BEST, mode = mode)
                            .unwrap_or_else(|_| MSG_NEW_BEST.to_string()),
                        Some(FLASH_CORRECT),
                    )?;
                }
                self.game_over_hint()
            }
            Outcome::Exhausted { target } => {
                self.feedback(
                    &formatx!(MSG_EXHAUSTED, target = target)
                        .unwrap_or_else(|_| MSG_EXHAUSTED.to_string()),
                    false,
                )?;
                self.popup(
                    "Game Over",
                    &formatx!(MSG_LOSS, target = target).unwrap_or_else(|_| MSG_LOSS.to_string()),
                )?;
                self.game_over_hint()
            }
            Outcome::InvalidInput => {
                self.line("Invalid input! Please enter a number.", Some(RESULT_COLOR))
            }
        }
    }

    fn render_help(&mut self, view: View) -> io::Result<()> {
        let lines: &[&str] = match view {
            View::Start => &[
                "1, 2, 3       select Easy, Medium, or Hard",
                "Enter, start  start the game",
                "scores        show the results of this session",
                "q, quit       quit the game",
            ],
            View::Game => &[
                "<number>      submit a guess",
                "r, restart    restart the game with a new number",
                "home          go back to the start page",
                "q, quit       quit the game",
            ],
        };
        for l in lines {
            self.line(l, None)?;
        }
        Ok(())
    }

    /// Render the response to an action.
    fn render<R: Rng>(&mut self, app: &Application<R>, response: &Response) -> io::Result<()> {
        match response {
            Response::DifficultySelected(d) => {
                let rules: String = describe_rules(&d.rules());
                self.line(&format!("Difficulty: {d} ({rules})"), None)
            }
            Response::GameStarted { mode, rules } => self.render_game(rules, *mode),
            Response::Feedback { outcome, new_best } => {
                let mode: Mode = app.session().difficulty().into();
                self.render_outcome(outcome, *new_best, mode)
            }
            Response::SessionFinished => {
                let session = app.session();
                let text: String = match session.status() {
                    Status::Won => format!("You already found the number {}.", session.target()),
                    _ => formatx!(MSG_LOSS, target = session.target())
                        .unwrap_or_else(|_| MSG_LOSS.to_string()),
                };
                self.line(&format!("The game is over. {text}"), None)?;
                self.game_over_hint()
            }
            Response::NoDifficultyLevel => {
                self.line("The classic game has no difficulty level.", None)
            }
            Response::WentHome => self.render_start(app),
            Response::Scores(lines) => {
                if lines.is_empty() {
                    return self.line("No game completed yet.", None);
                }
                for l in lines {
                    self.line(l, None)?;
                }
                Ok(())
            }
            Response::Help(view) => self.render_help(*view),
            Response::Unavailable(text) => {
                self.line(&format!("Unknown action \"{text}\". Type h for help."), None)
            }
            Response::Quit => self.line("Goodbye!", None),
        }
    }
}

fn describe_rules(rules: &Rules) -> String {
    formatx!(
        MSG_RULES,
        low = rules.low,
        high = rules.high,
        attempts = rules.max_attempts
    )
    .unwrap_or_else(|_| MSG_RULES.to_string())
}
