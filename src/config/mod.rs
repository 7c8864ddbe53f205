//! Configuration management
//!
//! Handles the persisted user settings with JSON persistence.
//! Currently a single `hotkey` setting, stored in `nyrna_config.json`.

pub mod error;
pub mod store;

pub use error::ConfigError;
pub use store::{Config, ConfigStore};
