// ABOUTME: Core types and constants for the WorkoutX workout store
// ABOUTME: Foundation crate with error handling, workout models, and ingestion coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

#![deny(unsafe_code)]

//! # `WorkoutX` Core
//!
//! Foundation crate providing the shared types of the workout store. This crate
//! has no I/O of its own and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the persistence-level `DatabaseError`
//! - **models**: Workout aggregate (workouts, exercises, likes) and user projection
//! - **coercion**: Total to-text normalization for AI-generated payloads
//! - **constants**: Defaults and limits shared by the store and its backend

/// Unified error handling with error codes and the persistence error kind
pub mod errors;

/// Workout aggregate models and read projections
pub mod models;

/// To-text coercion applied at the AI ingestion boundary
pub mod coercion;

/// Application constants organized by domain
pub mod constants;
