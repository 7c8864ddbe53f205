use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file content is not valid JSON of the expected shape.
    #[error("failed to parse JSON from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config directory could not be created.
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written.
    #[error("failed to write config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory config could not be serialized.
    #[error("failed to serialize config to JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ConfigError {
    /// True for failures while loading an existing config file.
    /// Callers treat these as fatal.
    pub fn is_read_error(&self) -> bool {
        matches!(self, ConfigError::Read { .. } | ConfigError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_classification() {
        let read = ConfigError::Read {
            path: PathBuf::from("/x"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let write = ConfigError::Write {
            path: PathBuf::from("/x"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(read.is_read_error());
        assert!(!write.is_read_error());
    }

    #[test]
    fn test_display_names_path() {
        let err = ConfigError::Write {
            path: PathBuf::from("/missing/nyrna_config.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/missing/nyrna_config.json"));
    }
}
