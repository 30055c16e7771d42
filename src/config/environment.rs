// ABOUTME: Environment configuration for the workout store process
// ABOUTME: Bundles database and logging settings loaded from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Environment-based configuration management

use tracing::info;

use super::database::DatabaseConfig;
use crate::errors::AppResult;
use crate::logging::LoggingConfig;

/// Process-wide configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Log a summary of the loaded configuration (no secrets are held here)
    pub fn log_summary(&self) {
        info!(
            database.url = %self.database.url,
            database.max_connections = self.database.max_connections,
            database.max_retries = self.database.max_retries,
            database.auto_migrate = self.database.auto_migrate,
            environment = %self.logging.environment,
            "Configuration loaded"
        );
    }
}
