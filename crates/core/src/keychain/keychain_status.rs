//! Store status codes and their translation into [`KeychainError`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{KeychainError, Result};

/// Raw status returned by a store operation.
///
/// The named constants use the platform keychain's numbering so codes coming
/// from a real keychain and from test doubles read the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    pub const SUCCESS: StatusCode = StatusCode(0);
    pub const UNIMPLEMENTED: StatusCode = StatusCode(-4);
    pub const PARAM: StatusCode = StatusCode(-50);
    pub const MEMORY_ERROR: StatusCode = StatusCode(-108);
    pub const BAD_REQUEST: StatusCode = StatusCode(-909);
    pub const NOT_AVAILABLE: StatusCode = StatusCode(-25291);
    pub const DUPLICATE_ITEM: StatusCode = StatusCode(-25299);
    pub const ITEM_NOT_FOUND: StatusCode = StatusCode(-25300);
    pub const DECODE: StatusCode = StatusCode(-26275);
    pub const INTERNAL_ERROR: StatusCode = StatusCode(-26276);

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Short name for the well-known codes.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::SUCCESS => "success",
            Self::UNIMPLEMENTED => "unimplemented",
            Self::PARAM => "invalid parameter",
            Self::MEMORY_ERROR => "memory error",
            Self::BAD_REQUEST => "bad request",
            Self::NOT_AVAILABLE => "keychain not available",
            Self::DUPLICATE_ITEM => "duplicate item",
            Self::ITEM_NOT_FOUND => "item not found",
            Self::DECODE => "decode error",
            Self::INTERNAL_ERROR => "internal error",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        StatusCode(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", self.code(), name),
            None => write!(f, "{}", self.code()),
        }
    }
}

/// Maps a store status to the operation outcome.
///
/// Not-found wins over every other classification; any other non-success
/// code is returned untouched inside `Unexpected`.
pub fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::ITEM_NOT_FOUND {
        return Err(KeychainError::NotFound);
    }

    if !status.is_success() {
        return Err(KeychainError::Unexpected(status));
    }

    Ok(())
}
