//! User settings for fincalc
//!
//! Persists display and parsing preferences. Command-line flags always
//! override the stored values.

use serde::{Deserialize, Serialize};

use super::paths::FincalcPaths;
use crate::error::FincalcError;
use crate::models::{Money, Strictness};

/// User settings for fincalc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Fraction digits used when formatting results
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: u32,

    /// Input handling policy: lenient substitutes zero for bad numbers,
    /// strict fails
    #[serde(default)]
    pub strictness: Strictness,

    /// VAT rate (percent) assumed when the command line omits one
    #[serde(default = "default_vat_rate_pct")]
    pub default_vat_rate_pct: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_fraction_digits() -> u32 {
    2
}

fn default_vat_rate_pct() -> Money {
    Money::from_int(20)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            fraction_digits: default_fraction_digits(),
            strictness: Strictness::default(),
            default_vat_rate_pct: default_vat_rate_pct(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &FincalcPaths) -> Result<Self, FincalcError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FincalcError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FincalcError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FincalcPaths) -> Result<(), FincalcError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FincalcError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FincalcError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.fraction_digits, 2);
        assert_eq!(settings.strictness, Strictness::Lenient);
        assert_eq!(settings.default_vat_rate_pct, Money::from_int(20));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FincalcPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.fraction_digits = 4;
        settings.strictness = Strictness::Strict;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.fraction_digits, 4);
        assert_eq!(loaded.strictness, Strictness::Strict);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FincalcPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.fraction_digits, 2);
    }
}
