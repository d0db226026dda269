//! Process-level settings loaded via OrthoConfig.

use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{OwnerId, OwnerIdValidationError};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

/// Error returned when a log format label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{value}', expected json or pretty")]
pub struct ParseLogFormatError {
    value: String,
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ParseLogFormatError {
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        })
    }
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `owner_id` is not a UUID.
    #[error("invalid owner id: {0}")]
    OwnerId(#[from] OwnerIdValidationError),
    /// `log_format` is not recognised.
    #[error(transparent)]
    LogFormat(#[from] ParseLogFormatError),
}

/// Settings for the `stringlog` binary.
///
/// Without a `database_url` the binary runs against in-memory repositories.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STRINGLOG")]
pub struct AppSettings {
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Owner whose strings are reported on.
    pub owner_id: Option<String>,
    /// `json` or `pretty`.
    pub log_format: Option<String>,
}

impl AppSettings {
    /// Database URL, treating a blank value as absent.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Parse the configured owner, if any.
    pub fn owner_id(&self) -> Result<Option<OwnerId>, SettingsError> {
        self.owner_id
            .as_deref()
            .map(OwnerId::new)
            .transpose()
            .map_err(SettingsError::from)
    }

    /// Parse the configured log format, defaulting to JSON.
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), str::parse)
            .map_err(SettingsError::from)
    }
}
