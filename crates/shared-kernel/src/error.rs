// crates/shared-kernel/src/error.rs
use thiserror::Error;

use crate::value_objects::{Attribute, ValueKind};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SlideAccessError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SlideAccessError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, SlideAccessError>;

/// Visitor-data failures raised while building a rule-set.
///
/// These are the only two kinds an access check converts into a denial.
/// Everything else travels as a [`SlideAccessError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitationError {
    #[error("expected an integer for `{attribute}`, got {found}")]
    IncorrectType { attribute: Attribute, found: ValueKind },

    #[error("{attribute} must be between {min} and {max}, got {value}")]
    OutOfRange {
        attribute: Attribute,
        min: i64,
        max: i64,
        value: i64,
    },
}

impl LimitationError {
    /// The attribute whose check failed.
    pub const fn attribute(&self) -> Attribute {
        match self {
            Self::IncorrectType { attribute, .. } | Self::OutOfRange { attribute, .. } => *attribute,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Limitation(#[from] LimitationError),

    #[error("Unknown rule category '{name}' (expected 'children' or 'adult')")]
    UnknownCategory { name: String },

    #[error("Invalid visitor '{input}': {reason}")]
    InvalidVisitor { input: String, reason: String },

    #[error("Invalid slide '{input}': {reason}")]
    InvalidSlide { input: String, reason: String },

    #[error("Invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: i64, max: i64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Access check for '{visitor}' on '{slide}' failed: {reason}")]
    CheckFailed {
        slide: String,
        visitor: String,
        reason: String,
        #[source]
        source: Option<Box<SlideAccessError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<LimitationError> for SlideAccessError {
    fn from(err: LimitationError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for SlideAccessError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SlideAccessError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SlideAccessError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SlideAccessError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
