use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Error surfaced by the engine's service layer.
#[derive(Error, Debug)]
pub enum AppError {
    /// An action or engine fault reported by the rules layer.
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("AI error: {0}")]
    Ai(#[from] AiError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        AppError::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::Ai(_) => ErrorCode::AiFailure,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Whether the error is a rejected action the caller can correct.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Domain(err) if !err.is_invariant())
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }
}
