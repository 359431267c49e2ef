//! Application error model.
//!
//! Every failure the core can produce is an [`AppError`]. It nests three
//! families, each detected at a different layer:
//!
//! - [`ValidationError`]: value object construction (domain layer)
//! - [`InfrastructureError`]: repositories, stores, the message bus
//! - [`LogicError`]: command handler pre-conditions
//!
//! Errors are raised where they are detected and propagate unmodified (via `?`)
//! up to the presentation boundary.

use thiserror::Error;

/// Result type used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Root application error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Logic(#[from] LogicError),
}

impl AppError {
    /// Human-readable message, suitable for logging at the boundary.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, AppError::Infrastructure(_))
    }

    pub fn is_logic(&self) -> bool {
        matches!(self, AppError::Logic(_))
    }
}

/// Construction-time failures of value objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("text cannot be empty")]
    EmptyText,

    #[error("value is too long: {value}")]
    TooLong { value: String },

    #[error("text contains obscene language: {value}")]
    ObsceneText { value: String },

    #[error("name has a bad format, expected 'First [Middle] Last': {value}")]
    BadNameFormat { value: String },

    #[error("year {value} is not a real publication year")]
    FakeYear { value: i32 },

    #[error("invalid book status: {value}")]
    InvalidStatus { value: String },
}

impl ValidationError {
    pub fn too_long(value: impl Into<String>) -> Self {
        Self::TooLong {
            value: value.into(),
        }
    }

    pub fn obscene(value: impl Into<String>) -> Self {
        Self::ObsceneText {
            value: value.into(),
        }
    }

    pub fn bad_name(value: impl Into<String>) -> Self {
        Self::BadNameFormat {
            value: value.into(),
        }
    }

    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            value: value.into(),
        }
    }
}

/// Failures of the persistence and dispatch plumbing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InfrastructureError {
    /// A record addressed by identifier does not exist in the working set.
    #[error("book {0} not found")]
    NotFound(String),

    /// A dynamically-typed value was not of the expected concrete type.
    #[error("instance mismatch: expected {expected}")]
    InstanceMismatch { expected: &'static str },

    /// A message was queued as the wrong kind (command vs event).
    #[error("message bus message should be either an event or a command, got {message_type}")]
    MessageKind { message_type: &'static str },

    /// No handler is registered for a dispatched command type.
    #[error("no handler registered for command {command_type}")]
    HandlerNotRegistered { command_type: &'static str },

    /// A unit of work scope was entered while another one was still open.
    #[error("unit of work scope is already open")]
    ScopeAlreadyOpen,

    /// Reading or writing durable state failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// Durable state could not be (de)serialized.
    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl InfrastructureError {
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound(identifier.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Violated command pre-conditions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error("book {0} already exists")]
    AlreadyExists(String),

    #[error("book does not exist")]
    NotExists,

    #[error("no books in library")]
    EmptyLibrary,
}
