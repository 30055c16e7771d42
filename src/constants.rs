// ABOUTME: Application constants re-exported from workoutx-core
// ABOUTME: Database defaults, field limits, service names, and ingestion placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Constants module
//!
//! Constants are grouped by domain in `workoutx-core` and re-exported here so
//! server code can keep using `crate::constants::<domain>` paths.

pub use workoutx_core::constants::*;
