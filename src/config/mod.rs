// ABOUTME: Configuration management module for the workout store
// ABOUTME: Environment-only settings for the database backend and process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Configuration module
//!
//! All settings come from environment variables; there are no config files.
//!
//! - **Database**: `DATABASE_URL`, pool size, transaction retries, migrations
//! - **Environment**: [`ServerConfig`] bundling database and logging settings

/// Database connection settings
pub mod database;
/// Process-wide configuration loaded from the environment
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::ServerConfig;
