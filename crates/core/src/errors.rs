//! Error types for credential operations.
//!
//! Store calls only ever fail with one of the three [`KeychainError`] kinds,
//! all of which come out of the status translator. Building domain values
//! and loading configuration have their own error types so they never mix
//! with what the store reported.

use thiserror::Error;

use crate::keychain::StatusCode;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, KeychainError>;

/// Errors reported by a keychain operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeychainError {
    /// No item matches the requested namespace and identifier.
    #[error("Keychain item not found")]
    NotFound,

    /// The store reported success but returned data of the wrong shape.
    #[error("Keychain returned an item in an unexpected format")]
    InvalidItemFormat,

    /// Any other non-success status, preserved as reported by the store.
    #[error("Unexpected keychain status: {0}")]
    Unexpected(StatusCode),
}

impl KeychainError {
    /// Raw status carried by an `Unexpected` error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            KeychainError::Unexpected(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KeychainError::NotFound)
    }
}

/// Validation errors raised while building domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),
}

/// Errors raised while loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
