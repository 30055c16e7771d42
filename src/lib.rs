// ABOUTME: Main library entry point for the WorkoutX workout store
// ABOUTME: Workouts, exercises, and likes behind an opaque-error, atomic-write store over SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

#![deny(unsafe_code)]

//! # WorkoutX Server
//!
//! Data-access layer for a fitness application. Users own workouts, workouts
//! own an ordered list of exercises, and users like workouts.
//!
//! ## Architecture
//!
//! - **Services**: [`services::WorkoutStore`], the only entry point callers use
//! - **Database**: the [`database::WorkoutRepository`] port and its `SQLite`
//!   implementation, schema migrations, and transaction helpers
//! - **Models** and **Errors**: re-exported from `workoutx-core`
//! - **Config** and **Logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workoutx_server::config::DatabaseConfig;
//! use workoutx_server::database::Database;
//! use workoutx_server::models::{ExerciseSpec, Visibility};
//! use workoutx_server::services::WorkoutStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Database::new(&DatabaseConfig::from_env()?).await?;
//!     let store = WorkoutStore::from_database(db);
//!
//!     let bench = ExerciseSpec {
//!         name: "Bench".into(),
//!         series: "4".into(),
//!         repetitions: "8".into(),
//!         ..ExerciseSpec::default()
//!     };
//!     let workout = store
//!         .create_workout("u1", "Push Day", Visibility::Public, vec![bench])
//!         .await?;
//!     store.like_workout(&workout.id, "u2").await?;
//!
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` persistence: pool, schema, managers, and the repository port
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Workout aggregate data models
pub mod models;

/// Domain services
pub mod services;

/// Coercion of loosely typed AI-generated workouts
pub use workoutx_core::coercion;
