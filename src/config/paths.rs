//! Path management for fincalc
//!
//! Provides XDG-compliant path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `FINCALC_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fincalc` or `~/.config/fincalc`
//! 3. Windows: `%APPDATA%\fincalc`

use std::path::PathBuf;

use crate::error::FincalcError;

/// Manages all paths used by fincalc
#[derive(Debug, Clone)]
pub struct FincalcPaths {
    /// Base directory for all fincalc configuration
    base_dir: PathBuf,
}

impl FincalcPaths {
    /// Create a new FincalcPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FincalcError> {
        let base_dir = if let Ok(custom) = std::env::var("FINCALC_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FincalcPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fincalc/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), FincalcError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FincalcError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default configuration directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FincalcError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| FincalcError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("fincalc"))
}

/// Resolve the default configuration directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FincalcError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FincalcError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fincalc"))
}
