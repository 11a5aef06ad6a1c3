#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::adapters::file_store::DEFAULT_STORE_PATH;
use crate::utils::error::{QuizError, Result};
use crate::utils::logger::LogFormat;
use std::path::PathBuf;

/// Effective settings after merging command-line values over the TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store_path: PathBuf,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Settings {
    /// Precedence: explicit value, then TOML file, then built-in default.
    pub fn resolve(
        store: Option<&str>,
        verbose: bool,
        log_format: Option<LogFormat>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let store_path = store
            .or_else(|| file.and_then(TomlConfig::store_path))
            .unwrap_or(DEFAULT_STORE_PATH);

        let log_format = match (log_format, file.and_then(TomlConfig::log_format)) {
            (Some(format), _) => format,
            (None, Some(raw)) => parse_log_format(raw)?,
            (None, None) => LogFormat::default(),
        };

        Ok(Self {
            store_path: PathBuf::from(store_path),
            verbose: verbose || file.map(TomlConfig::verbose).unwrap_or(false),
            log_format,
        })
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    raw.parse::<LogFormat>()
        .map_err(|reason| QuizError::InvalidConfigValueError {
            field: "logging.format".to_string(),
            value: raw.to_string(),
            reason,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_anything() {
        let settings = Settings::resolve(None, false, None, None).unwrap();
        assert_eq!(settings.store_path, PathBuf::from("repo.yaml"));
        assert!(!settings.verbose);
        assert_eq!(settings.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file =
            TomlConfig::from_toml_str("[store]\npath = \"file.yaml\"\n[logging]\nformat = \"json\"\n")
                .unwrap();

        let settings =
            Settings::resolve(Some("cli.yaml"), false, Some(LogFormat::Compact), Some(&file))
                .unwrap();
        assert_eq!(settings.store_path, PathBuf::from("cli.yaml"));
        assert_eq!(settings.log_format, LogFormat::Compact);

        let settings = Settings::resolve(None, false, None, Some(&file)).unwrap();
        assert_eq!(settings.store_path, PathBuf::from("file.yaml"));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_in_file_is_rejected() {
        let file = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();

        assert!(matches!(
            Settings::resolve(None, false, None, Some(&file)),
            Err(QuizError::InvalidConfigValueError { field, .. }) if field == "logging.format"
        ));

        // an explicit command-line format wins over the bad file value
        let settings = Settings::resolve(None, false, Some(LogFormat::Json), Some(&file)).unwrap();
        assert_eq!(settings.log_format, LogFormat::Json);
    }
}
