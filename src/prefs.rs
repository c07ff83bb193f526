//! The single persisted preference: dark mode. Read once at startup, written
//! on every toggle. A missing or corrupt file falls back to the default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name the preference lives under.
pub const PREFS_FILE: &str = "tzconv-prefs.json";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::warn!("ignoring corrupt preference file {}: {e}", path.display());
                    Preferences::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Preferences::default(),
            Err(e) => {
                log::warn!("cannot read {}: {e}", path.display());
                Preferences::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let raw = serde_json::to_string(self).map_err(io::Error::other)?;
        fs::write(path, raw)
    }
}

/// Preference location: `$TZCONV_PREFS` override, else the home directory,
/// else the working directory.
pub fn default_path() -> PathBuf {
    if let Ok(p) = std::env::var("TZCONV_PREFS") {
        return PathBuf::from(p);
    }
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => Path::new(&home).join(PREFS_FILE),
        _ => PathBuf::from(PREFS_FILE),
    }
}
