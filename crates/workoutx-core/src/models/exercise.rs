// ABOUTME: Exercise input spec and the two exercise projections (nested and standalone)
// ABOUTME: Exercises are owned by exactly one workout and are free-form text fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-supplied exercise, stored as given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSpec {
    /// Exercise name
    pub name: String,
    /// Number of series (sets)
    pub series: String,
    /// Repetitions per series
    pub repetitions: String,
    /// Load, free-form ("60kg", "bodyweight")
    pub weight: String,
    /// Rest between series, free-form ("90s")
    pub rest_time: String,
    /// Demonstration video link
    pub video_url: String,
    /// Execution notes
    pub instructions: String,
}

/// Exercise as projected inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Generated exercise id
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Number of series (sets)
    pub series: String,
    /// Repetitions per series
    pub repetitions: String,
    /// Load
    pub weight: String,
    /// Rest between series
    pub rest_time: String,
    /// Demonstration video link
    pub video_url: String,
    /// Execution notes
    pub instructions: String,
}

impl Exercise {
    /// Whether this exercise carries exactly the fields of `spec`
    #[must_use]
    pub fn matches_spec(&self, spec: &ExerciseSpec) -> bool {
        self.name == spec.name
            && self.series == spec.series
            && self.repetitions == spec.repetitions
            && self.weight == spec.weight
            && self.rest_time == spec.rest_time
            && self.video_url == spec.video_url
            && self.instructions == spec.instructions
    }
}

/// Full exercise row returned by point lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    /// Parent workout
    pub workout_id: String,
    /// Position within the parent workout
    pub position: u32,
    /// Exercise fields
    #[serde(flatten)]
    pub exercise: Exercise,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
