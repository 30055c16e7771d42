// ABOUTME: Application constants for the workout store organized by domain
// ABOUTME: Database defaults, field limits, and ingestion placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging subscriber
    pub const WORKOUTX_SERVER: &str = "workoutx-server";
}

/// Database connection defaults
pub mod database {
    /// Database used when `DATABASE_URL` is not set
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/workoutx.db";

    /// Default pool ceiling for file-backed `SQLite`
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

    /// Default attempts for retryable transactions
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Base delay for exponential transaction backoff
    pub const RETRY_BASE_DELAY_MS: u64 = 10;

    /// How long a connection waits on a locked `SQLite` database
    pub const BUSY_TIMEOUT_SECS: u64 = 5;
}

/// Field limits enforced by the schema
pub mod limits {
    /// Maximum characters in an exercise name (CHECK constraint)
    pub const MAX_EXERCISE_NAME_LENGTH: usize = 255;
}

/// AI ingestion constants
pub mod ingestion {
    /// Text stored for a null or absent field in a generated workout
    pub const ABSENT_TEXT: &str = "";

    /// Separator used when a generated field holds an array
    pub const ARRAY_SEPARATOR: &str = ",";
}
