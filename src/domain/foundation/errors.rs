//! Domain error vocabulary.
//!
//! `ValidationError` rejects malformed input before anything changes.
//! `ErrorCode` classifies failures for callers, and `DomainError` is what
//! ports return.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Why an input value was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} must lie in [{min}, {max}], got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("{field} already contains '{value}'")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::Duplicate { field, .. } => field,
        }
    }
}

/// Stable failure classes shared by operations and ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    CompanyNotSet,
    ModelNotInitialized,
    DecisionNotFound,
    TensionNotFound,
    OptionNotFound,
    KpiNotTracked,
    InvalidStateTransition,
    PublishFailed,
    InternalError,
}

impl ErrorCode {
    /// Upper snake case form used in messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::CompanyNotSet => "COMPANY_NOT_SET",
            Self::ModelNotInitialized => "MODEL_NOT_INITIALIZED",
            Self::DecisionNotFound => "DECISION_NOT_FOUND",
            Self::TensionNotFound => "TENSION_NOT_FOUND",
            Self::OptionNotFound => "OPTION_NOT_FOUND",
            Self::KpiNotTracked => "KPI_NOT_TRACKED",
            Self::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            Self::PublishFailed => "PUBLISH_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// True for failures caused by the caller rather than infrastructure.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::PublishFailed | Self::InternalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported across a port, with free-form context.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Builder: attach one piece of context.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
