// ABOUTME: Unified error handling re-exported from workoutx-core
// ABOUTME: Keeps crate::errors paths stable for the server crate and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! # Unified Error Handling System
//!
//! The error types live in `workoutx-core` so the models crate can use them
//! without depending on the server. See [`AppError`] for the caller-facing
//! error and [`DatabaseError`] for the persistence port's error.

pub use workoutx_core::errors::*;
