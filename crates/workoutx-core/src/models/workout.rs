// ABOUTME: Workout visibility enum, creation request, list filter, and workout projections
// ABOUTME: CreatedWorkout is the creation result; WorkoutDetails is the read projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Exercise, ExerciseSpec, LikeRef, UserProfile};
use crate::errors::AppError;

/// Access scope of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Listed for every user
    Public,
    /// Only meaningful to the owner
    #[default]
    Private,
}

impl Visibility {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl FromStr for Visibility {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            other => Err(AppError::invalid_input(format!(
                "Unknown workout visibility: {other}"
            ))),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to persist a workout together with its exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    /// Owner, trusted as already authenticated
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Requested visibility; `None` takes the backend's column default
    pub visibility: Option<Visibility>,
    /// Exercises in the order they should be stored
    pub exercises: Vec<ExerciseSpec>,
}

/// Result of creating a workout
///
/// Carries the owner id and the created exercises, but neither likes nor the
/// owner's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedWorkout {
    /// Generated workout id
    pub id: String,
    /// Display name
    pub name: String,
    /// Visibility as stored
    pub visibility: Visibility,
    /// Owner id
    pub user_id: String,
    /// Created exercises in insertion order
    pub exercises: Vec<Exercise>,
}

/// Read projection of a workout used by listings and point lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDetails {
    /// Workout id
    pub id: String,
    /// Display name
    pub name: String,
    /// Visibility as stored
    pub visibility: Visibility,
    /// Users who liked the workout
    pub likes: Vec<LikeRef>,
    /// Owner's public profile, absent until the identity sync has seen the user
    pub user: Option<UserProfile>,
    /// Exercises in stored order
    pub exercises: Vec<Exercise>,
}

/// Optional constraints for listing workouts
///
/// An unset field places no constraint on that dimension. An empty owner id
/// counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    /// Only workouts owned by this user
    pub user_id: Option<String>,
    /// Only workouts with this visibility
    pub visibility: Option<Visibility>,
}

impl WorkoutFilter {
    /// Filter that matches every workout
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one owner
    #[must_use]
    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Owner constraint actually applied; `None` for an unset or empty id
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Restrict to one visibility
    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_round_trips_through_database_text() {
        for visibility in [Visibility::Public, Visibility::Private] {
            assert_eq!(visibility.as_str().parse::<Visibility>().unwrap(), visibility);
        }
    }

    #[test]
    fn test_unknown_visibility_is_rejected() {
        assert!("public".parse::<Visibility>().is_err());
        assert!("FRIENDS".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_visibility_serializes_as_upper_case() {
        let json = serde_json::to_string(&Visibility::Public).unwrap();
        assert_eq!(json, "\"PUBLIC\"");
    }

    #[test]
    fn test_filter_builders() {
        let filter = WorkoutFilter::all()
            .for_user("u1")
            .with_visibility(Visibility::Public);

        assert_eq!(filter.user_id.as_deref(), Some("u1"));
        assert_eq!(filter.visibility, Some(Visibility::Public));
        assert_eq!(WorkoutFilter::all(), WorkoutFilter::default());
    }

    #[test]
    fn test_empty_owner_is_no_constraint() {
        assert_eq!(WorkoutFilter::all().for_user("").owner(), None);
        assert_eq!(WorkoutFilter::all().owner(), None);
        assert_eq!(WorkoutFilter::all().for_user("u1").owner(), Some("u1"));
    }
}
