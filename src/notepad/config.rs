use crate::error::{NotepadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Session settings, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotepadConfig {
    /// Maximum number of notes; when unset the user is asked at startup
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Colour the `[OK]` / `[Error]` / `[Info]` tags
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print the interactive prompts
    #[serde(default = "default_true")]
    pub prompt: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotepadConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            color: true,
            prompt: true,
        }
    }
}

impl NotepadConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(NotepadError::Io)?;
        let config: NotepadConfig =
            serde_json::from_str(&content).map_err(NotepadError::Serialization)?;
        Ok(config)
    }
}
