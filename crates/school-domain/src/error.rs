//! Error handling types
//!
//! Four domain failure kinds (`NotFound`, `Duplicate`, `NotValid`, `Business`)
//! plus the generic failures raised by collaborators. Every failure carries the
//! conventional status code a transport maps it to.

use crate::constants::{
    MSG_DATA_DUPLICATED, MSG_DATA_NOT_FOUND, MSG_DATA_NOT_VALID, STATUS_BUSINESS,
    STATUS_DATA_DUPLICATED, STATUS_DATA_NOT_FOUND, STATUS_DATA_NOT_VALID, STATUS_INTERNAL,
};
use crate::value_objects::Violation;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the School Service
#[derive(Error, Debug)]
pub enum Error {
    /// Requested entity, or a sub-entity inside its parent, does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// A uniqueness invariant would be violated
    #[error("Duplicate: {message}")]
    Duplicate {
        /// Description of the duplicate
        message: String,
    },

    /// Field-level rule set violations
    #[error("Not valid: {message}")]
    NotValid {
        /// Summary message
        message: String,
        /// Every violated field, in rule declaration order
        violations: Vec<Violation>,
    },

    /// A cross-aggregate guard rejected the operation
    #[error("Business rule violation: {message}")]
    Business {
        /// Which guard failed
        message: String,
        /// Status code reported to the transport
        status_code: u16,
    },

    /// Persistence collaborator failure
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Domain failure creation methods
impl Error {
    /// Create a not found error with the default message
    pub fn data_not_found() -> Self {
        Self::not_found(MSG_DATA_NOT_FOUND)
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a duplicate error with the default message
    pub fn data_duplicated() -> Self {
        Self::duplicate(MSG_DATA_DUPLICATED)
    }

    /// Create a duplicate error
    pub fn duplicate<S: Into<String>>(message: S) -> Self {
        Self::Duplicate {
            message: message.into(),
        }
    }

    /// Create a not valid error carrying the violated fields
    pub fn not_valid(violations: Vec<Violation>) -> Self {
        Self::not_valid_with_message(MSG_DATA_NOT_VALID, violations)
    }

    /// Create a not valid error with a custom summary
    pub fn not_valid_with_message<S: Into<String>>(message: S, violations: Vec<Violation>) -> Self {
        Self::NotValid {
            message: message.into(),
            violations,
        }
    }

    /// Create a business rule error with the default status code
    pub fn business<S: Into<String>>(message: S) -> Self {
        Self::business_with_status(message, STATUS_BUSINESS)
    }

    /// Create a business rule error with an explicit status code
    pub fn business_with_status<S: Into<String>>(message: S, status_code: u16) -> Self {
        Self::Business {
            message: message.into(),
            status_code,
        }
    }
}

// Collaborator failure creation methods
impl Error {
    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Transport mapping helpers
impl Error {
    /// Conventional HTTP status code for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => STATUS_DATA_NOT_FOUND,
            Self::Duplicate { .. } => STATUS_DATA_DUPLICATED,
            Self::NotValid { .. } => STATUS_DATA_NOT_VALID,
            Self::Business { status_code, .. } => *status_code,
            Self::Database { .. } | Self::Configuration { .. } | Self::Internal { .. } => {
                STATUS_INTERNAL
            }
        }
    }

    /// Message suitable for a response body
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Duplicate { message }
            | Self::NotValid { message, .. }
            | Self::Business { message, .. }
            | Self::Database { message, .. }
            | Self::Configuration { message, .. }
            | Self::Internal { message } => message,
        }
    }

    /// Field violations; empty for every kind except `NotValid`
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::NotValid { violations, .. } => violations,
            _ => &[],
        }
    }
}
