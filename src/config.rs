//! Persisted user preferences.
//!
//! The only persisted state is the dark-mode flag. It is loaded once at
//! startup and saved once at shutdown; in between, the value lives in `App`
//! and is passed to whoever needs it — nothing reads the file ambiently.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = ".termdash.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Default preferences path (`$HOME/.termdash.json`), if a home is set.
pub fn default_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(FILE_NAME))
}

/// Load preferences from `path`.
///
/// Total: a missing or corrupt file yields the defaults. Startup never
/// fails on account of preferences.
pub fn load(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(body) => serde_json::from_str(&body).unwrap_or_default(),
        Err(_) => Preferences::default(),
    }
}

/// Save preferences to `path`.
pub fn save(path: &Path, prefs: Preferences) -> Result<()> {
    let body = serde_json::to_string_pretty(&prefs)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
