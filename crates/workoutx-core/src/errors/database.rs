// ABOUTME: Structured error types reported by the workout persistence port
// ABOUTME: Classifies backend failures while keeping their raw context for logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use thiserror::Error;

/// Failure reported by the persistence port
///
/// Every variant carries the backend's own description in `context`. That text
/// may contain SQL fragments or constraint names, so it is only ever written to
/// logs; the workout store replaces it with an opaque error before returning.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The backend could not be reached or the pool is exhausted
    #[error("database connection failed: {context}")]
    ConnectionError {
        /// Raw backend description
        context: String,
    },

    /// A statement failed for a reason other than a constraint
    #[error("database query failed: {context}")]
    QueryError {
        /// Raw backend description
        context: String,
    },

    /// A unique, foreign key, check, or not-null constraint rejected a write
    #[error("constraint violation: {context}")]
    ConstraintViolation {
        /// Raw backend description
        context: String,
    },

    /// Beginning, committing, or rolling back a transaction failed
    #[error("transaction failed: {context}")]
    TransactionError {
        /// Raw backend description
        context: String,
    },

    /// A stored row could not be decoded into a model
    #[error("malformed row in {table}: {context}")]
    MalformedRow {
        /// Table the row came from
        table: &'static str,
        /// Raw decode failure
        context: String,
    },

    /// The caller handed the port a payload it cannot persist
    #[error("invalid input: {context}")]
    InvalidInput {
        /// What was wrong with the payload
        context: String,
    },
}

impl DatabaseError {
    /// Whether retrying the same operation could succeed
    ///
    /// Busy/locked databases and timeouts are transient. Constraint
    /// violations and malformed payloads never are.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionError { context }
            | Self::QueryError { context }
            | Self::TransactionError { context } => is_transient_message(context),
            Self::ConstraintViolation { .. }
            | Self::MalformedRow { .. }
            | Self::InvalidInput { .. } => false,
        }
    }
}

fn is_transient_message(message: &str) -> bool {
    let lower = message.to_lowercase();

    lower.contains("database is locked")
        || lower.contains("locked")
        || lower.contains("busy")
        || lower.contains("timeout")
        || lower.contains("timed out")
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        let context = error.to_string();
        match &error {
            sqlx::Error::Database(db_error) => match db_error.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation { context },
                _ => Self::QueryError { context },
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => Self::ConnectionError { context },
            _ => Self::QueryError { context },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_database_is_retryable() {
        let error = DatabaseError::QueryError {
            context: "error returned from database: (code: 5) database is locked".to_owned(),
        };
        assert!(error.is_retryable());
    }

    #[test]
    fn test_constraint_violation_is_not_retryable() {
        let error = DatabaseError::ConstraintViolation {
            context: "CHECK constraint failed: length(name) <= 255".to_owned(),
        };
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_unknown_query_error_is_not_retryable() {
        let error = DatabaseError::QueryError {
            context: "no such table: workouts".to_owned(),
        };
        assert!(!error.is_retryable());
    }
}
