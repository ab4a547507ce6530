/*
main.rs

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

mod action;
mod application;
mod cli_options;
mod config;
mod difficulty;
mod scoreboard;
mod session;
mod settings;
mod terminal;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

use self::application::Application;
use self::settings::{SaverSettings, Settings};
use self::terminal::{Style, Terminal};

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();
    info!("{} {}", config::APPLICATION_NAME, config::VERSION);

    // Without a configuration directory the preferences are not saved.
    let saver: Option<SaverSettings> = args
        .config_dir
        .clone()
        .or_else(settings::default_config_dir)
        .map(SaverSettings::new);
    let mut settings: Settings = match &saver {
        Some(s) => s.load(),
        None => Settings::default(),
    };
    if let Some(d) = args.difficulty {
        settings.difficulty = d;
    }

    let rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut app: Application<StdRng> = Application::new(settings, args.classic, saver, rng);

    let style: Style = Style {
        color: !args.no_color && app.settings().color,
        animation: app.settings().animation,
        frame: terminal::FRAME,
    };
    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout(), style);

    match term.run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
