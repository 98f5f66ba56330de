use std::fmt;

use crate::config::ConfigError;
use crate::scoring::ScoringError;
use crate::telemetry::TelemetryError;
use crate::workflows::family::FamilyServiceError;
use crate::workflows::intervention::InterventionServiceError;
use crate::workflows::penjaringan::PenjaringanImportError;
use crate::workflows::school::SchoolServiceError;

/// Process-edge error for the binaries: everything a command can fail
/// with, rendered once to stderr.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Scoring(ScoringError),
    Import(PenjaringanImportError),
    Family(FamilyServiceError),
    School(SchoolServiceError),
    Intervention(InterventionServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Scoring(err) => write!(f, "scoring error: {err}"),
            AppError::Import(err) => write!(f, "import error: {err}"),
            AppError::Family(err) => write!(f, "family workflow error: {err}"),
            AppError::School(err) => write!(f, "stratification error: {err}"),
            AppError::Intervention(err) => write!(f, "intervention workflow error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Family(err) => Some(err),
            AppError::School(err) => Some(err),
            AppError::Intervention(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<PenjaringanImportError> for AppError {
    fn from(value: PenjaringanImportError) -> Self {
        Self::Import(value)
    }
}

impl From<FamilyServiceError> for AppError {
    fn from(value: FamilyServiceError) -> Self {
        Self::Family(value)
    }
}

impl From<SchoolServiceError> for AppError {
    fn from(value: SchoolServiceError) -> Self {
        Self::School(value)
    }
}

impl From<InterventionServiceError> for AppError {
    fn from(value: InterventionServiceError) -> Self {
        Self::Intervention(value)
    }
}
