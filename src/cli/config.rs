//! CLI configuration
//!
//! Optional JSON file. Every field has a default, so an absent file and
//! `{}` configure the same run.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::observability::{log_event_with_fields, Event, Severity};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Stop at the first rejected value (default: false)
    #[serde(default)]
    pub fail_fast: bool,

    /// Minimum log level: trace, info, warn, error or fatal (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Table constraint for `record` when none is given (default: any)
    #[serde(default)]
    pub default_table: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_fast: false,
            log_level: default_log_level(),
            default_table: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        let shown = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.log_severity().map(|_| ())
    }

    /// Returns the configured minimum log severity
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(|e| {
            CliError::config_error(format!("Invalid log_level: {}", e))
        })
    }

    /// Returns the table constraint, preferring an explicit one
    pub fn table<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or(&self.default_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.fail_fast);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_table, "");
        assert_eq!(config.log_severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_empty_object_is_default() {
        let file = write_config("{}");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_all_fields() {
        let file = write_config(
            r#"{"fail_fast": true, "log_level": "warn", "default_table": "person"}"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert!(config.fail_fast);
        assert_eq!(config.log_severity().unwrap(), Severity::Warn);
        assert_eq!(config.default_table, "person");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let file = write_config(r#"{"log_level": "loud"}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "AERO_CLI_CONFIG_ERROR");
        assert!(err.message().contains("loud"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let file = write_config("{ not json");
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_table_wins() {
        let config = Config {
            default_table: "person".into(),
            ..Config::default()
        };
        assert_eq!(config.table(None), "person");
        assert_eq!(config.table(Some("animal")), "animal");
        assert_eq!(config.table(Some("")), "");
    }
}
