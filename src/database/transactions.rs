// ABOUTME: Transaction management with RAII guards and retry patterns for database operations
// ABOUTME: Provides automatic rollback on drop and exponential backoff for locked SQLite databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Transaction management with RAII guards and retry patterns
//!
//! - `TransactionGuard`: RAII wrapper ensuring automatic rollback if not committed
//! - `retry_transaction`: exponential backoff for busy/locked database recovery
//!
//! ```text
//! retry_transaction(|| async {
//!     let tx = pool.begin().await?;
//!     let mut guard = TransactionGuard::new(tx);
//!
//!     sqlx::query("INSERT INTO workouts ...").execute(guard.executor()?).await?;
//!     sqlx::query("INSERT INTO exercises ...").execute(guard.executor()?).await?;
//!
//!     guard.commit().await
//! }, 3).await
//! ```

use std::future::Future;
use std::time::Duration;

use sqlx::{Database, Transaction};
use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::constants::database::RETRY_BASE_DELAY_MS;
use crate::errors::DatabaseError;

/// What `retry_transaction` does with a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryStep {
    /// The error is permanent; return it as is
    Permanent,
    /// Transient, but `max_retries` attempts were made
    Exhausted,
    /// Transient; sleep this many milliseconds and try again
    Backoff(u64),
}

/// Classify the `attempts`-th failure
///
/// Permanence is checked first so a constraint violation is never reported as
/// retry exhaustion.
fn next_step(error: &DatabaseError, attempts: u32, max_retries: u32) -> RetryStep {
    if !error.is_retryable() {
        RetryStep::Permanent
    } else if attempts >= max_retries {
        RetryStep::Exhausted
    } else {
        RetryStep::Backoff(RETRY_BASE_DELAY_MS << attempts.min(10))
    }
}

/// Retry a transaction operation if it fails with a transient error
///
/// Backoff doubles from `RETRY_BASE_DELAY_MS` on each attempt (20ms, 40ms, ...).
/// Non-retryable errors (constraint violations, malformed input) are returned
/// immediately, as is the last error once `max_retries` attempts were made.
///
/// # Errors
///
/// Returns the operation's error if it is not retryable or retries run out
pub async fn retry_transaction<F, Fut, T>(mut f: F, max_retries: u32) -> Result<T, DatabaseError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DatabaseError>>,
{
    let max_retries = max_retries.max(1);
    let mut attempts: u32 = 0;
    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                attempts += 1;
                match next_step(&e, attempts, max_retries) {
                    RetryStep::Permanent => {
                        debug!(attempts, error = %e, "Transaction failed with non-retryable error");
                        return Err(e);
                    }
                    RetryStep::Exhausted => {
                        error!(
                            attempts,
                            max_retries,
                            error = %e,
                            "Transaction failed after max retries"
                        );
                        return Err(e);
                    }
                    RetryStep::Backoff(backoff_ms) => {
                        warn!(
                            attempt = attempts,
                            max_retries,
                            backoff_ms,
                            error = %e,
                            "Transaction failed with retryable error, retrying after backoff"
                        );
                        sleep(Duration::from_millis(backoff_ms)).await;
                    }
                }
            }
        }
    }
}

/// RAII guard for database transactions ensuring automatic rollback on drop
///
/// If an error occurs before `commit()`, the guard is dropped and `SQLx` rolls
/// the transaction back. Nothing written through the guard becomes visible to
/// other connections until `commit()` succeeds.
pub struct TransactionGuard<'c, DB: Database> {
    transaction: Option<Transaction<'c, DB>>,
}

impl<'c, DB: Database> TransactionGuard<'c, DB> {
    /// Wrap a transaction obtained from `pool.begin().await`
    #[must_use]
    pub fn new(transaction: Transaction<'c, DB>) -> Self {
        Self {
            transaction: Some(transaction),
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or the commit fails
    pub async fn commit(mut self) -> Result<(), DatabaseError> {
        match self.transaction.take() {
            Some(tx) => tx
                .commit()
                .await
                .map_err(|e| DatabaseError::TransactionError {
                    context: format!("commit failed: {e}"),
                }),
            None => Err(DatabaseError::TransactionError {
                context: "transaction already consumed - cannot commit".to_owned(),
            }),
        }
    }

    /// Connection to execute queries inside the transaction
    ///
    /// ```text
    /// sqlx::query("INSERT INTO ...").execute(guard.executor()?).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the guard is used after commit
    pub fn executor(&mut self) -> Result<&mut <DB as Database>::Connection, DatabaseError> {
        self.transaction
            .as_deref_mut()
            .ok_or_else(|| DatabaseError::TransactionError {
                context: "transaction already consumed - guard used after commit".to_owned(),
            })
    }
}

impl<DB: Database> Drop for TransactionGuard<'_, DB> {
    fn drop(&mut self) {
        if self.transaction.is_some() {
            debug!("TransactionGuard dropped without commit - transaction will be rolled back");
        }
    }
}

/// Type alias for `SQLite` transaction guard
pub type SqliteTransactionGuard<'c> = TransactionGuard<'c, sqlx::Sqlite>;
