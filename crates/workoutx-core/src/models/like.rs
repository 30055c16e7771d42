// ABOUTME: Like relation between a workout and a user
// ABOUTME: Keyed by the (workout_id, user_id) pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user liking a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLike {
    /// Row id
    pub id: String,
    /// Liked workout
    pub workout_id: String,
    /// Liking user
    pub user_id: String,
    /// When the like was recorded
    pub created_at: DateTime<Utc>,
}

/// Liking user as embedded in workout projections
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRef {
    /// Liking user
    pub user_id: String,
}
