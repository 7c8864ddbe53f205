//! JSON-backed store for persisted user settings
//!
//! A `ConfigStore` is bound to one directory and owns the in-memory copy of
//! the configuration. Reads fall back to defaults when the file is absent;
//! writes always replace the whole file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::ConfigError;
use crate::constants;

const HOTKEY_KEY: &str = "hotkey";

/// On-disk configuration schema: `{ "hotkey": "<string>" }`
///
/// Keys are matched case-insensitively on load and `hotkey` is always
/// written lowercase. A missing or `null` hotkey falls back to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct Config {
    pub hotkey: String,

    /// Keys we don't know about, carried through to the next write
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_hotkey() -> String {
    constants::defaults::HOTKEY.to_string()
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for Config {
    type Error = String;

    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> Result<Self, Self::Error> {
        let mut exact = None;
        let mut variant = None;
        let mut extra = serde_json::Map::new();

        for (key, value) in map {
            if key == HOTKEY_KEY {
                exact = Some(value);
            } else if key.eq_ignore_ascii_case(HOTKEY_KEY) {
                // First case variant wins when the exact key is absent
                if variant.is_none() {
                    variant = Some(value);
                }
            } else {
                extra.insert(key, value);
            }
        }

        let hotkey = match exact.or(variant) {
            None | Some(serde_json::Value::Null) => default_hotkey(),
            Some(serde_json::Value::String(hotkey)) => hotkey,
            Some(other) => {
                return Err(format!(
                    "invalid type for `{}`: expected a string, found {}",
                    HOTKEY_KEY, other
                ));
            }
        };

        Ok(Self { hotkey, extra })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: default_hotkey(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Single point of access to the persisted settings
#[derive(Debug)]
pub struct ConfigStore {
    dir: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Create a store for `<dir>/nyrna_config.json`. No I/O happens until
    /// `load` or `write` is called.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            config: Config::default(),
        }
    }

    /// Platform config directory, e.g. `~/.config/nyrna`
    pub fn default_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(constants::config::APP_DIR);
        path
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(constants::config::FILENAME)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hotkey(&self) -> &str {
        &self.config.hotkey
    }

    /// Load the config file, keeping defaults for anything missing.
    ///
    /// A missing file (or directory) is not an error. Any other read failure
    /// and any parse failure is returned as a read error.
    pub fn load(&mut self) -> Result<&str, ConfigError> {
        let path = self.path();

        match fs::read_to_string(&path) {
            Ok(contents) => {
                self.config = serde_json::from_str(&contents)
                    .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                self.config = Config::default();
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        }

        info!("Hotkey is: {}", self.config.hotkey);
        Ok(&self.config.hotkey)
    }

    /// Set the hotkey and persist the full configuration.
    ///
    /// The in-memory value is updated even when the write fails. The
    /// directory must already exist.
    pub fn write(&mut self, new_hotkey: &str) -> Result<(), ConfigError> {
        self.config.hotkey = new_hotkey.to_string();
        self.save()
    }

    /// Write the current configuration if no config file exists yet,
    /// creating the directory as needed. Returns whether a file was created.
    pub fn create_if_missing(&self) -> Result<bool, ConfigError> {
        let path = self.path();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(&self.dir).map_err(|source| ConfigError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        self.save()?;

        info!(path = %path.display(), "Created default config file");
        Ok(true)
    }

    fn save(&self) -> Result<(), ConfigError> {
        let path = self.path();
        let json_string =
            serde_json::to_string_pretty(&self.config).map_err(ConfigError::Serialize)?;

        fs::write(&path, json_string).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), hotkey = %self.config.hotkey, "Saved config");
        Ok(())
    }
}
