// ABOUTME: Integration tests for creating workouts from AI-generated payloads
// ABOUTME: Exercises total text coercion, default visibility, and malformed shape rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use anyhow::Result;
use helpers::{count_rows, memory_store};
use serde_json::json;
use workoutx_server::constants::ingestion::ABSENT_TEXT;
use workoutx_server::errors::{ErrorCode, UNEXPECTED_ERROR_MESSAGE};
use workoutx_server::models::{Visibility, WorkoutFilter};

#[tokio::test]
async fn test_loosely_typed_fields_are_stored_as_text() -> Result<()> {
    let (_db, store) = memory_store().await;

    let payload = json!({
        "name": "AI Strength",
        "exercises": [
            {
                "name": "Goblet Squat",
                "series": 4,
                "repetitions": 12.5,
                "weight": null,
                "restTime": true,
                "videoUrl": ["https://a.example.com", "https://b.example.com"],
                "instructions": {"tempo": "3-1-1"}
            }
        ]
    });

    let created = store.create_generated_workout("u1", &payload).await?;
    let exercise = &created.exercises[0];

    assert_eq!(created.name, "AI Strength");
    assert_eq!(exercise.name, "Goblet Squat");
    assert_eq!(exercise.series, "4");
    assert_eq!(exercise.repetitions, "12.5");
    assert_eq!(exercise.weight, ABSENT_TEXT);
    assert_eq!(exercise.rest_time, "true");
    assert_eq!(
        exercise.video_url,
        "https://a.example.com,https://b.example.com"
    );
    assert_eq!(exercise.instructions, r#"{"tempo":"3-1-1"}"#);

    let stored = store.get_workout(&created.id).await?.unwrap();
    assert_eq!(stored.exercises, created.exercises);

    Ok(())
}

#[tokio::test]
async fn test_whole_number_floats_are_stored_without_fraction() -> Result<()> {
    let (_db, store) = memory_store().await;

    let payload = json!({"name": 1.0, "exercises": [{"series": 4.0, "weight": 22.5}]});

    let created = store.create_generated_workout("u1", &payload).await?;

    assert_eq!(created.name, "1");
    assert_eq!(created.exercises[0].series, "4");
    assert_eq!(created.exercises[0].weight, "22.5");

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_get_the_placeholder() -> Result<()> {
    let (_db, store) = memory_store().await;

    let payload = json!({
        "exercises": [{"name": "Plank"}, "not an object", 42]
    });

    let created = store.create_generated_workout("u1", &payload).await?;

    assert_eq!(created.name, ABSENT_TEXT);
    assert_eq!(created.exercises.len(), 3);
    assert_eq!(created.exercises[0].name, "Plank");
    assert_eq!(created.exercises[0].series, ABSENT_TEXT);
    for exercise in &created.exercises[1..] {
        assert_eq!(exercise.name, ABSENT_TEXT);
        assert_eq!(exercise.instructions, ABSENT_TEXT);
    }

    Ok(())
}

#[tokio::test]
async fn test_generated_workouts_take_the_default_visibility() -> Result<()> {
    let (_db, store) = memory_store().await;

    let created = store
        .create_generated_workout("u1", &json!({"name": 7, "exercises": []}))
        .await?;

    assert_eq!(created.name, "7");
    assert_eq!(created.visibility, Visibility::Private);

    let public = store
        .list_workouts(&WorkoutFilter::all().with_visibility(Visibility::Public))
        .await?;
    assert!(public.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_malformed_shapes_are_rejected_without_writes() -> Result<()> {
    let (db, store) = memory_store().await;

    for payload in [
        json!({"name": "No exercises"}),
        json!({"name": "Null exercises", "exercises": null}),
        json!({"name": "Wrong type", "exercises": {"name": "Squat"}}),
        json!(["Squat", "Lunge"]),
        json!(null),
    ] {
        let err = store
            .create_generated_workout("u1", &payload)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, UNEXPECTED_ERROR_MESSAGE);
    }

    assert_eq!(count_rows(&db, "workouts").await, 0);

    Ok(())
}

#[tokio::test]
async fn test_generated_creation_is_atomic() -> Result<()> {
    let (db, store) = memory_store().await;

    let payload = json!({
        "name": "Too long",
        "exercises": [
            {"name": "Row", "series": 3},
            {"name": "y".repeat(300), "series": 3}
        ]
    });

    assert!(store.create_generated_workout("u1", &payload).await.is_err());
    assert_eq!(count_rows(&db, "workouts").await, 0);
    assert_eq!(count_rows(&db, "exercises").await, 0);

    Ok(())
}
