/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play the hard level with a fixed random seed, without colors:
//!
//! ```
//! $ guessnum -f hard --seed 1234 --no-color
//! ```
//!
//! Play the classic game (1 to 100 in 10 attempts) with debug messages:
//!
//! ```
//! $ guessnum --classic --debug
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use crate::difficulty::Difficulty;

/// Guess the number in a limited number of attempts.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Difficulty level. Defaults to the last selected level
    #[arg(value_enum, short = 'f', long, conflicts_with = "classic")]
    pub difficulty: Option<Difficulty>,

    /// Play the classic game: 1 to 100 in 10 attempts, no difficulty level
    #[arg(short, long, default_value_t = false)]
    pub classic: bool,

    /// Seed for the random numbers, to replay the same games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colors and animations
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Directory of the settings file
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Command-line options: {args:?}");
    args
}
