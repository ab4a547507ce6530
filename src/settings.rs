/*
settings.rs

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

//! Save and restore the player's preferences.
//!
//! The preferences are stored in the `settings.json` file, a serialization of the [`Settings`]
//! object in JSON format by using [`serde`].
//! The file is in `$XDG_CONFIG_HOME/guessnum`, or in `$HOME/.config/guessnum` when
//! `XDG_CONFIG_HOME` is not set.

use log::debug;
use std::env;
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::APPLICATION_NAME;
use crate::difficulty::Difficulty;

/// Player's preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Difficulty level selected in the start view.
    pub difficulty: Difficulty,

    /// Whether to print the feedback in color.
    pub color: bool,

    /// Whether to flash the feedback colors.
    pub animation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            color: true,
            animation: true,
        }
    }
}

/// Return the default directory for the settings file.
pub fn default_config_dir() -> Option<PathBuf> {
    let mut dir: PathBuf = match env::var_os("XDG_CONFIG_HOME") {
        Some(d) if !d.is_empty() => PathBuf::from(d),
        _ => {
            let mut home: PathBuf = PathBuf::from(env::var_os("HOME")?);
            home.push(".config");
            home
        }
    };
    dir.push(APPLICATION_NAME);
    Some(dir)
}

/// Object to save and restore the preferences.
pub struct SaverSettings {
    /// Absolute path to the settings file.
    save_file: PathBuf,
}

impl SaverSettings {
    /// Create a [`SaverSettings`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the settings must be saved.
    pub fn new(mut config_dir: PathBuf) -> Self {
        config_dir.push("settings.json");
        debug!("Settings file: {config_dir:?}");
        Self {
            save_file: config_dir,
        }
    }

    /// Retrieve the [`Settings`] object from the settings file.
    ///
    /// Return None if the settings file does not exist.
    pub fn get_settings(&self) -> Result<Option<Settings>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        Ok(Some(settings))
    }

    /// Retrieve the settings, falling back to the defaults.
    ///
    /// A settings file that cannot be read is deleted so that the next save starts clean.
    pub fn load(&self) -> Settings {
        match self.get_settings() {
            Ok(Some(s)) => {
                debug!("Settings = {s:?}");
                s
            }
            Ok(None) => {
                debug!("No saved settings");
                Settings::default()
            }
            Err(error) => {
                debug!("Error getting the settings: {error}");
                self.delete_save();
                Settings::default()
            }
        }
    }

    /// Save the provided [`Settings`] object.
    pub fn save_settings(&self, settings: &Settings) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, settings)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the settings file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
