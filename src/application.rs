/*
application.rs

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

//! Application controller.
//!
//! [`Application`] owns the game in progress and the current view, and processes the player's
//! actions. It does not perform any input or output: each handler returns a [`Response`] that
//! the terminal front end renders (see [`crate::terminal`]).

use log::{debug, info};
use rand::Rng;

use crate::action::Action;
use crate::difficulty::{Difficulty, Rules};
use crate::scoreboard::{Mode, Scoreboard};
use crate::session::{GuessSession, Outcome, SessionError};
use crate::settings::{SaverSettings, Settings};

/// Views.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    /// Welcome page with the difficulty levels.
    Start,

    /// Game in progress.
    Game,
}

/// What the front end must display after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The player selected a difficulty level in the start view.
    DifficultySelected(Difficulty),

    /// A new game started, either from the start view or with the restart action.
    GameStarted { mode: Mode, rules: Rules },

    /// Result of a guess. `new_best` is set when the win beats the best result of the run.
    Feedback { outcome: Outcome, new_best: bool },

    /// The game is over and the player tried to guess again.
    SessionFinished,

    /// Back to the start view.
    WentHome,

    /// Scoreboard lines.
    Scores(Vec<String>),

    /// The player asked for the list of actions of the given view.
    Help(View),

    /// The player tried to select a difficulty level in the classic game.
    NoDifficultyLevel,

    /// The action is not available in the current view.
    Unavailable(String),

    Quit,
}

/// Application controller.
pub struct Application<R: Rng> {
    view: View,

    /// Difficulty level selected in the start view.
    difficulty: Difficulty,

    /// Classic game: no difficulty level, 1 to 100 in 10 attempts.
    classic: bool,

    /// The game. Restarting a game resets this object.
    session: GuessSession<R>,

    scoreboard: Scoreboard,

    settings: Settings,

    /// Where to save the settings when the player selects another difficulty level.
    saver: Option<SaverSettings>,

    running: bool,
}

impl<R: Rng> Application<R> {
    /// Create an [`Application`] object.
    ///
    /// The difficulty level comes from the settings. The game is created now but the player
    /// starts from the start view.
    pub fn new(settings: Settings, classic: bool, saver: Option<SaverSettings>, rng: R) -> Self {
        let difficulty: Difficulty = settings.difficulty;
        let session: GuessSession<R> =
            GuessSession::new(if classic { None } else { Some(difficulty) }, rng);

        info!(
            "Starting in {} mode",
            if classic {
                "classic".to_string()
            } else {
                difficulty.to_string()
            }
        );
        Self {
            view: View::Start,
            difficulty,
            classic,
            session,
            scoreboard: Scoreboard::new(),
            settings,
            saver,
            running: true,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Return the difficulty level selected in the start view.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_classic(&self) -> bool {
        self.classic
    }

    pub fn session(&self) -> &GuessSession<R> {
        &self.session
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the player has not quit yet.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Return the game mode for the next game.
    fn mode(&self) -> Mode {
        if self.classic {
            Mode::Classic
        } else {
            Mode::Level(self.difficulty)
        }
    }

    /// Process an action.
    pub fn dispatch(&mut self, action: Action) -> Response {
        debug!("Action {action:?} in view {:?}", self.view);
        match action {
            Action::SelectDifficulty(d) => self.select_difficulty(d),
            Action::Start => self.start_game(),
            Action::Guess(text) => self.submit_guess(&text),
            Action::Restart => self.restart(),
            Action::Home => self.go_home(),
            Action::Scores => Response::Scores(self.scoreboard.summary()),
            Action::Help => Response::Help(self.view),
            Action::Quit => self.quit(),
            Action::Unknown(text) => Response::Unavailable(text),
        }
    }

    /// Select the difficulty level for the next game, and save it in the settings.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Response {
        if self.view != View::Start {
            return Response::Unavailable(difficulty.to_string());
        }
        if self.classic {
            return Response::NoDifficultyLevel;
        }

        self.difficulty = difficulty;
        if self.settings.difficulty != difficulty {
            self.settings.difficulty = difficulty;
            if let Some(saver) = &self.saver
                && let Err(error) = saver.save_settings(&self.settings)
            {
                debug!("Error saving the settings: {error}");
            }
        }
        Response::DifficultySelected(difficulty)
    }

    /// Leave the start view and play a new game.
    pub fn start_game(&mut self) -> Response {
        if self.view != View::Start {
            return Response::Unavailable("start".to_string());
        }

        debug!("Switch to the game view");
        let difficulty: Option<Difficulty> = if self.classic {
            None
        } else {
            Some(self.difficulty)
        };
        self.session.reset(difficulty);
        self.view = View::Game;
        Response::GameStarted {
            mode: self.mode(),
            rules: self.session.rules(),
        }
    }

    /// Submit a guess to the game in progress.
    pub fn submit_guess(&mut self, text: &str) -> Response {
        if self.view != View::Game {
            return Response::Unavailable(text.trim().to_string());
        }

        match self.session.submit(text) {
            Ok(outcome) => {
                let mut new_best: bool = false;
                if outcome.is_terminal() {
                    let mode: Mode = self.session.difficulty().into();
                    new_best = self.scoreboard.record(mode, &outcome);
                    info!("Game over: {outcome:?}");
                }
                Response::Feedback { outcome, new_best }
            }
            Err(SessionError::Finished) => Response::SessionFinished,
        }
    }

    /// Play again with the same rules.
    pub fn restart(&mut self) -> Response {
        if self.view != View::Game {
            return Response::Unavailable("restart".to_string());
        }

        debug!("Restart the game");
        self.session.reset(None);
        Response::GameStarted {
            mode: self.session.difficulty().into(),
            rules: self.session.rules(),
        }
    }

    /// Go back to the start view. The game in progress is abandoned.
    pub fn go_home(&mut self) -> Response {
        if self.view != View::Game {
            return Response::Unavailable("home".to_string());
        }

        debug!("Back to starting page");
        self.view = View::Start;
        Response::WentHome
    }

    pub fn quit(&mut self) -> Response {
        debug!("Quit");
        self.running = false;
        Response::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(classic: bool) -> Application<StdRng> {
        let settings = Settings {
            difficulty: Difficulty::Medium,
            ..Settings::default()
        };
        Application::new(settings, classic, None, StdRng::seed_from_u64(42))
    }

    #[test]
    fn start_then_win() {
        let mut app = app(false);
        assert_eq!(app.view(), View::Start);

        assert_eq!(
            app.start_game(),
            Response::GameStarted {
                mode: Mode::Level(Difficulty::Medium),
                rules: Difficulty::Medium.rules()
            }
        );
        assert_eq!(app.view(), View::Game);

        let target: i64 = app.session().target();
        assert_eq!(
            app.submit_guess(&target.to_string()),
            Response::Feedback {
                outcome: Outcome::Correct {
                    target,
                    attempts_used: 1
                },
                new_best: true
            }
        );
        assert_eq!(
            app.scoreboard().get(Mode::Level(Difficulty::Medium)).won,
            1
        );
        assert_eq!(app.submit_guess("1"), Response::SessionFinished);
    }

    #[test]
    fn select_difficulty_then_lose() {
        let mut app = app(false);

        assert_eq!(
            app.select_difficulty(Difficulty::Hard),
            Response::DifficultySelected(Difficulty::Hard)
        );
        assert_eq!(app.settings().difficulty, Difficulty::Hard);
        app.start_game();
        assert_eq!(app.session().max_attempts(), 5);

        let target: i64 = app.session().target();
        let wrong: String = (target + 1).to_string();
        for _ in 0..4 {
            assert!(matches!(
                app.submit_guess(&wrong),
                Response::Feedback {
                    outcome: Outcome::TooHigh { .. },
                    ..
                }
            ));
        }
        assert_eq!(
            app.submit_guess(&wrong),
            Response::Feedback {
                outcome: Outcome::Exhausted { target },
                new_best: false
            }
        );
        assert_eq!(app.scoreboard().get(Mode::Level(Difficulty::Hard)).played, 1);
    }

    #[test]
    fn restart_gives_a_fresh_game() {
        let mut app = app(false);
        app.start_game();
        app.submit_guess("abc");
        app.submit_guess("0");
        assert_eq!(app.session().attempts_used(), 1);

        assert!(matches!(app.restart(), Response::GameStarted { .. }));
        assert_eq!(app.view(), View::Game);
        assert_eq!(app.session().attempts_used(), 0);
        assert!(!app.session().is_terminal());
    }

    #[test]
    fn actions_outside_their_view() {
        let mut app = app(false);

        assert!(matches!(app.submit_guess("5"), Response::Unavailable(_)));
        assert!(matches!(app.restart(), Response::Unavailable(_)));
        assert!(matches!(app.go_home(), Response::Unavailable(_)));

        app.start_game();
        assert!(matches!(app.start_game(), Response::Unavailable(_)));
        assert!(matches!(
            app.select_difficulty(Difficulty::Easy),
            Response::Unavailable(_)
        ));
        assert_eq!(app.go_home(), Response::WentHome);
        assert_eq!(app.view(), View::Start);
    }

    #[test]
    fn classic_mode_has_no_difficulty() {
        let mut app = app(true);

        assert_eq!(
            app.select_difficulty(Difficulty::Hard),
            Response::NoDifficultyLevel
        );
        assert_eq!(app.difficulty(), Difficulty::Medium);
        assert_eq!(
            app.start_game(),
            Response::GameStarted {
                mode: Mode::Classic,
                rules: Rules::classic()
            }
        );
        assert_eq!(app.session().difficulty(), None);
    }

    #[test]
    fn dispatch_parsed_lines() {
        let mut app = app(false);

        for line in ["3", "start"] {
            let a: Action = action::parse(app.view(), line);
            app.dispatch(a);
        }
        assert_eq!(app.view(), View::Game);
        assert_eq!(app.session().difficulty(), Some(Difficulty::Hard));

        assert_eq!(
            app.dispatch(action::parse(app.view(), "abc")),
            Response::Feedback {
                outcome: Outcome::InvalidInput,
                new_best: false
            }
        );
        assert_eq!(app.dispatch(action::parse(app.view(), "q")), Response::Quit);
        assert!(!app.is_running());
    }
}
