// ABOUTME: Shared test helpers for workout store integration tests
// ABOUTME: In-memory store construction, exercise fixtures, and user projection seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use workoutx_server::config::DatabaseConfig;
use workoutx_server::database::Database;
use workoutx_server::models::{ExerciseSpec, UserProfile};
use workoutx_server::services::WorkoutStore;

/// Fresh in-memory database with the schema applied, plus a store over it
pub async fn memory_store() -> (Database, WorkoutStore) {
    let db = Database::new(&DatabaseConfig::in_memory()).await.unwrap();
    let store = WorkoutStore::from_database(db.clone());
    (db, store)
}

/// The bench press exercise used throughout the "Push Day" scenario
pub fn bench() -> ExerciseSpec {
    ExerciseSpec {
        name: "Bench".to_owned(),
        series: "4".to_owned(),
        repetitions: "8".to_owned(),
        weight: "60kg".to_owned(),
        rest_time: "90s".to_owned(),
        video_url: String::new(),
        instructions: String::new(),
    }
}

pub fn exercise(name: &str) -> ExerciseSpec {
    ExerciseSpec {
        name: name.to_owned(),
        series: "3".to_owned(),
        repetitions: "12".to_owned(),
        weight: "20kg".to_owned(),
        rest_time: "60s".to_owned(),
        video_url: format!("https://videos.example.com/{}", name.to_lowercase()),
        instructions: format!("Perform {name} with control"),
    }
}

/// An exercise the schema refuses: its name exceeds the column limit
pub fn oversized_exercise() -> ExerciseSpec {
    exercise(&"x".repeat(256))
}

pub async fn seed_user(db: &Database, id: &str, name: &str, avatar: Option<&str>) -> UserProfile {
    let user = UserProfile {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar: avatar.map(str::to_owned),
    };
    db.users().upsert_user(&user).await.unwrap();
    user
}

/// Row count of a table, bypassing the store
pub async fn count_rows(db: &Database, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(db.pool())
        .await
        .unwrap();
    count
}
