// ABOUTME: Integration tests for liking, unliking, and like lookups
// ABOUTME: Checks idempotent unlike, pair uniqueness, and the like toggle scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use anyhow::Result;
use helpers::{bench, count_rows, memory_store};
use workoutx_server::errors::{ErrorCode, UNEXPECTED_ERROR_MESSAGE};
use workoutx_server::models::{LikeRef, Visibility};

#[tokio::test]
async fn test_like_toggle_scenario() -> Result<()> {
    let (_db, store) = memory_store().await;
    let workout = store
        .create_workout("u1", "Push Day", Visibility::Public, vec![bench()])
        .await?;

    let like = store.like_workout(&workout.id, "u2").await?;
    assert_eq!(like.workout_id, workout.id);
    assert_eq!(like.user_id, "u2");

    let found = store.find_like(&workout.id, "u2").await?.unwrap();
    assert_eq!(found, like);

    store.unlike_workout(&workout.id, "u2").await?;
    assert!(store.find_like(&workout.id, "u2").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_unlike_twice_is_idempotent() -> Result<()> {
    let (db, store) = memory_store().await;
    let workout = store
        .create_workout("u1", "Pull Day", Visibility::Public, vec![])
        .await?;
    store.like_workout(&workout.id, "u2").await?;

    store.unlike_workout(&workout.id, "u2").await?;
    assert!(store.find_like(&workout.id, "u2").await?.is_none());
    assert_eq!(count_rows(&db, "workout_likes").await, 0);

    store.unlike_workout(&workout.id, "u2").await?;
    assert!(store.find_like(&workout.id, "u2").await?.is_none());
    assert_eq!(count_rows(&db, "workout_likes").await, 0);

    Ok(())
}

#[tokio::test]
async fn test_unlike_without_prior_like_succeeds() -> Result<()> {
    let (_db, store) = memory_store().await;

    store.unlike_workout("never-created", "u2").await?;

    Ok(())
}

#[tokio::test]
async fn test_repeated_like_keeps_a_single_relation() -> Result<()> {
    let (db, store) = memory_store().await;
    let workout = store
        .create_workout("u1", "Legs", Visibility::Public, vec![])
        .await?;

    let first = store.like_workout(&workout.id, "u2").await?;
    let second = store.like_workout(&workout.id, "u2").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(count_rows(&db, "workout_likes").await, 1);

    let details = store.get_workout(&workout.id).await?.unwrap();
    assert_eq!(
        details.likes,
        vec![LikeRef {
            user_id: "u2".to_owned()
        }]
    );

    Ok(())
}

#[tokio::test]
async fn test_likes_are_scoped_to_their_pair() -> Result<()> {
    let (_db, store) = memory_store().await;
    let a = store
        .create_workout("u1", "A", Visibility::Public, vec![])
        .await?;
    let b = store
        .create_workout("u1", "B", Visibility::Public, vec![])
        .await?;

    store.like_workout(&a.id, "u2").await?;
    store.like_workout(&b.id, "u3").await?;

    assert!(store.find_like(&a.id, "u3").await?.is_none());
    assert!(store.find_like(&b.id, "u2").await?.is_none());

    store.unlike_workout(&a.id, "u3").await?;
    assert!(store.find_like(&a.id, "u2").await?.is_some());

    Ok(())
}

#[tokio::test]
async fn test_like_on_missing_workout_is_opaque_failure() -> Result<()> {
    let (db, store) = memory_store().await;

    let err = store.like_workout("missing", "u2").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.message, UNEXPECTED_ERROR_MESSAGE);
    assert!(!err.to_string().to_lowercase().contains("foreign key"));
    assert_eq!(count_rows(&db, "workout_likes").await, 0);

    Ok(())
}
