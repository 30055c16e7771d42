// ABOUTME: Public projection of a user owned by the external identity service
// ABOUTME: Read-only from the workout store's point of view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

use serde::{Deserialize, Serialize};

/// Public fields of a workout owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity-service user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar: Option<String>,
}
