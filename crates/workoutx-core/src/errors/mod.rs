// ABOUTME: Caller-facing error type for the workout store with stable error codes
// ABOUTME: Defines AppError (caller-facing) and re-exports DatabaseError (persistence-facing)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! # Error Handling
//!
//! Two layers of errors exist in the workout store:
//!
//! - [`DatabaseError`] is produced by the persistence port. It keeps the raw
//!   backend detail (SQL error text, constraint names) for diagnostics.
//! - [`AppError`] is what callers of the store see. Persistence failures are
//!   collapsed into a single opaque [`AppError::unexpected`] after being logged,
//!   so backend detail never crosses the store boundary.

/// Persistence-level error kinds reported by the persistence port
pub mod database;

pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message surfaced to callers for every persistence failure
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Error codes surfaced by the workout store and its setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// A value handed to the store could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
    /// Setup failure outside persistence (logging, runtime)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Persistence backend failure (opaque to callers)
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Short label used as the prefix of the rendered error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "Internal error",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Error returned by every public operation of the crate
///
/// Carries no source chain. Whatever caused a persistence failure is logged
/// where it happened and is not reachable from here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Caller-safe message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Opaque persistence failure surfaced by the workout store
    #[must_use]
    pub fn unexpected() -> Self {
        Self::new(ErrorCode::DatabaseError, UNEXPECTED_ERROR_MESSAGE)
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Setup failure outside persistence
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Invalid configuration value
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_error_is_opaque() {
        let error = AppError::unexpected();

        assert_eq!(error.code, ErrorCode::DatabaseError);
        assert_eq!(error.message, UNEXPECTED_ERROR_MESSAGE);
        assert!(std::error::Error::source(&error).is_none());
        assert_eq!(
            error.to_string(),
            format!("Database operation failed: {UNEXPECTED_ERROR_MESSAGE}")
        );
    }

    #[test]
    fn test_codes_serialize_as_screaming_names() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }
}
