//! JSON snapshot of items and suggestions handed over by upstream
//! producers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CalendarError, Result},
    models::{ScheduledItem, Suggestion},
};

/// File name of the default dataset under the XDG data directory.
pub const DATA_FILE: &str = "calendar.json";

/// Items and suggestions as read from disk. Nothing is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub items: Vec<ScheduledItem>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Serialization` for malformed JSON or records
    /// missing required fields.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::FileSystem` if the file cannot be read and
    /// `CalendarError::Serialization` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| CalendarError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dataset = Self::from_json(&raw)?;
        debug!(
            "Loaded {} items and {} suggestions from {}",
            dataset.items.len(),
            dataset.suggestions.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Reads the dataset at the default location, or an empty one if no
    /// file exists there yet.
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::load`], plus `CalendarError::XdgDirectory` when
    /// the data directory cannot be determined.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            debug!("No dataset at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Returns the default dataset path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/cadence/calendar.json`.
    ///
    /// Nothing is created on disk; the file may not exist.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::XdgDirectory` when neither `XDG_DATA_HOME`
    /// nor a home directory is available.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence")
            .get_data_file(DATA_FILE)
            .ok_or_else(|| {
                CalendarError::XdgDirectory("cannot determine the data directory".to_string())
            })
    }
}
