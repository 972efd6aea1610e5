//! # Error Taxonomy
//!
//! The closed set of error kinds used uniformly across layers, built with
//! `thiserror`. Each variant carries a default human-readable message; the
//! mapping to HTTP status codes lives in the API crate, keeping this crate
//! transport-agnostic.
//!
//! Storage driver errors are translated into this taxonomy exactly once, at
//! the repository boundary. No other layer ever sees a driver error type.

use thiserror::Error;

/// The error taxonomy for the Roster service.
///
/// Errors are values: they are returned through `Result`, never thrown
/// across layer boundaries without translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A caller-supplied value is missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested entity does not exist.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// An unexpected failure with no more specific classification.
    #[error("Internal server error")]
    Internal,

    /// The storage layer reported a failure. Carries the driver's message
    /// as context; the message is logged server-side, never sent to clients.
    #[error("Database error: {0}")]
    Database(String),

    /// No storage connection handle is available.
    #[error("Database connection is not established")]
    NotConnected,
}

impl RosterError {
    /// Return the machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal => "INTERNAL",
            Self::Database(_) => "DATABASE",
            Self::NotConnected => "NOT_CONNECTED",
        }
    }

    /// Construct an invalid-argument error.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument(context.into())
    }

    /// Construct a not-found error.
    pub fn not_found(context: impl Into<String>) -> Self {
        Self::NotFound(context.into())
    }

    /// Construct a database error carrying the driver's message.
    pub fn database(context: impl Into<String>) -> Self {
        Self::Database(context.into())
    }
}
