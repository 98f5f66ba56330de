use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::scoring::{ScoringConfig, ThresholdError};

/// Distinguishes runtime behavior for different stages of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Staging,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the screening tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    /// Loads configuration from the environment, falling back to the built-in
    /// Indonesian classification standard when `APP_SCORING_CONFIG` is unset.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let scoring = match env::var("APP_SCORING_CONFIG") {
            Ok(path) => load_scoring_override(PathBuf::from(path))?,
            Err(_) => ScoringConfig::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring,
        })
    }
}

/// Tracing controls for the binaries.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Reads and validates a JSON threshold override document. Fields absent
/// from the document keep their defaults.
pub fn load_scoring_override(path: PathBuf) -> Result<ScoringConfig, ConfigError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::ScoringOverrideRead {
        path: path.clone(),
        source,
    })?;
    let scoring: ScoringConfig = serde_json::from_str(&raw)
        .map_err(|source| ConfigError::ScoringOverrideParse { path, source })?;
    scoring.validate()?;
    Ok(scoring)
}

#[derive(Debug)]
pub enum ConfigError {
    ScoringOverrideRead {
        path: PathBuf,
        source: std::io::Error,
    },
    ScoringOverrideParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Thresholds(ThresholdError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ScoringOverrideRead { path, .. } => {
                write!(f, "could not read scoring override {}", path.display())
            }
            ConfigError::ScoringOverrideParse { path, .. } => {
                write!(f, "scoring override {} is not valid JSON", path.display())
            }
            ConfigError::Thresholds(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ScoringOverrideRead { source, .. } => Some(source),
            ConfigError::ScoringOverrideParse { source, .. } => Some(source),
            ConfigError::Thresholds(err) => Some(err),
        }
    }
}

impl From<ThresholdError> for ConfigError {
    fn from(value: ThresholdError) -> Self {
        Self::Thresholds(value)
    }
}
