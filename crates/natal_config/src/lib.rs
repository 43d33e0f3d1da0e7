//! Configuration for the `natal` command-line tool.
//!
//! A config file is plain TOML:
//!
//! ```toml
//! utc_offset_minutes = 60
//!
//! [location]
//! latitude = 50.7374
//! longitude = 7.0982
//!
//! [output]
//! format = "json"
//! precision = 2
//! dms = true
//! ```
//!
//! Every key is optional. Engine constants are not configurable; only CLI
//! defaults and presentation live here.

pub mod error;

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use natal_time::MAX_UTC_OFFSET_MINUTES;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "NATAL_CONFIG";

/// Largest number of decimals accepted for `output.precision`.
pub const MAX_PRECISION: usize = 12;

const DEFAULT_PRECISION: usize = 4;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format '{s}' (expected text or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Birthplace used when a command omits `--lat` / `--lon`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationDefaults {
    /// Degrees, north positive.
    pub latitude: Option<f64>,
    /// Degrees, east positive.
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places for angles in text output.
    pub precision: usize,
    /// Render angles as degrees/minutes/seconds in text output.
    pub dms: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
            dms: false,
        }
    }
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Offset applied to local birth times when `--offset` is absent.
    pub utc_offset_minutes: i32,
    pub location: LocationDefaults,
    pub output: OutputConfig,
}

impl CliConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every value against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lat) = self.location.latitude {
            if !lat.is_finite() || lat.abs() > 90.0 {
                return Err(ConfigError::Invalid(format!(
                    "location.latitude {lat} outside [-90, 90]"
                )));
            }
        }
        if let Some(lon) = self.location.longitude {
            if !lon.is_finite() || lon.abs() > 180.0 {
                return Err(ConfigError::Invalid(format!(
                    "location.longitude {lon} outside [-180, 180]"
                )));
            }
        }
        if self.utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES.unsigned_abs() {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_minutes {} exceeds ±{MAX_UTC_OFFSET_MINUTES}",
                self.utc_offset_minutes
            )));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "output.precision {} exceeds {MAX_PRECISION}",
                self.output.precision
            )));
        }
        Ok(())
    }
}

/// Which config file to read: the explicit path, else the env value.
pub fn config_path(explicit: Option<&Path>, env_value: Option<&OsStr>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Resolve and load the CLI config.
///
/// Lookup order: `explicit`, then `$NATAL_CONFIG`, then built-in defaults.
/// A named file that is missing is an error; no file at all is not.
pub fn load_config(explicit: Option<&Path>) -> Result<CliConfig, ConfigError> {
    let env_value = std::env::var_os(CONFIG_ENV_VAR);
    match config_path(explicit, env_value.as_deref()) {
        Some(path) => CliConfig::load(&path),
        None => {
            debug!("no config file; using defaults");
            Ok(CliConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.precision, 4);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.location.latitude.is_none());
    }

    #[test]
    fn full_document() {
        let text = r#"
            utc_offset_minutes = 120

            [location]
            latitude = 50.7374
            longitude = 7.0982

            [output]
            format = "json"
            precision = 2
            dms = true
        "#;
        let config = CliConfig::from_toml_str(text).unwrap();
        assert_eq!(config.utc_offset_minutes, 120);
        assert_eq!(config.location.latitude, Some(50.7374));
        assert_eq!(config.location.longitude, Some(7.0982));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.precision, 2);
        assert!(config.output.dms);
    }

    #[test]
    fn partial_output_table_keeps_defaults() {
        let config = CliConfig::from_toml_str("[output]\ndms = true\n").unwrap();
        assert!(config.output.dms);
        assert_eq!(config.output.precision, 4);
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let err = CliConfig::from_toml_str("[output]\ncolour = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn bad_format_is_parse_error() {
        let err = CliConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_values_rejected() {
        for text in [
            "[location]\nlatitude = 91.0\n",
            "[location]\nlongitude = -180.5\n",
            "utc_offset_minutes = 1200\n",
            "[output]\nprecision = 20\n",
        ] {
            let err = CliConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text}: {err}");
        }
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn explicit_path_wins_over_env() {
        let env = OsStr::new("/etc/natal.toml");
        assert_eq!(
            config_path(Some(Path::new("mine.toml")), Some(env)),
            Some(PathBuf::from("mine.toml"))
        );
        assert_eq!(
            config_path(None, Some(env)),
            Some(PathBuf::from("/etc/natal.toml"))
        );
        assert_eq!(config_path(None, Some(OsStr::new(""))), None);
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CliConfig::load(Path::new("/nonexistent/natal.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/natal.toml"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "utc_offset_minutes = -300").unwrap();
        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.utc_offset_minutes, -300);
    }

    #[test]
    fn extreme_offset_rejected_without_overflow() {
        for offset in [i32::MIN, i32::MAX] {
            let err = CliConfig::from_toml_str(&format!("utc_offset_minutes = {offset}\n")).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{offset}: {err}");
        }
    }
}
