// ABOUTME: Demo data seeder for the WorkoutX workout store
// ABOUTME: Creates demo users, human-authored and generated workouts, and random likes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Workout data seeder.
//!
//! Populates the database through [`WorkoutStore`] so seeded rows go through
//! the same atomic creation and coercion paths as real traffic.
//!
//! Usage:
//! ```bash
//! # Seed with default settings
//! cargo run --bin seed-workouts
//!
//! # Wipe workouts and users first, seed 12 users
//! cargo run --bin seed-workouts -- --reset --users 12
//!
//! # Verbose output
//! cargo run --bin seed-workouts -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::info;
use workoutx_server::config::{DatabaseConfig, DatabaseUrl};
use workoutx_server::database::Database;
use workoutx_server::models::{ExerciseSpec, UserProfile, Visibility};
use workoutx_server::services::WorkoutStore;

const RNG_SEED: u64 = 0x5EED_F17;

#[derive(Parser)]
#[command(
    name = "seed-workouts",
    about = "WorkoutX Workout Data Seeder",
    long_about = "Populate the database with demo users, workouts, exercises, and likes"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Delete all workouts and users before seeding
    #[arg(long)]
    reset: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Number of demo users to create
    #[arg(long, default_value_t = 6)]
    users: usize,
}

/// Human-authored workout template
struct WorkoutTemplate {
    name: &'static str,
    exercises: &'static [(&'static str, &'static str, &'static str, &'static str)],
}

const TEMPLATES: &[WorkoutTemplate] = &[
    WorkoutTemplate {
        name: "Push Day",
        exercises: &[
            ("Bench Press", "4", "8", "60kg"),
            ("Overhead Press", "3", "10", "35kg"),
            ("Dips", "3", "12", "bodyweight"),
        ],
    },
    WorkoutTemplate {
        name: "Pull Day",
        exercises: &[
            ("Deadlift", "5", "5", "100kg"),
            ("Barbell Row", "4", "8", "55kg"),
            ("Pull-ups", "3", "max", "bodyweight"),
        ],
    },
    WorkoutTemplate {
        name: "Leg Day",
        exercises: &[
            ("Back Squat", "5", "5", "90kg"),
            ("Romanian Deadlift", "3", "10", "70kg"),
            ("Walking Lunges", "3", "20", "2x12kg"),
            ("Calf Raises", "4", "15", "40kg"),
        ],
    },
    WorkoutTemplate {
        name: "Core Circuit",
        exercises: &[
            ("Plank", "3", "60s", "bodyweight"),
            ("Hanging Leg Raise", "3", "12", "bodyweight"),
        ],
    },
];

const USER_NAMES: &[&str] = &[
    "Alex Rivera",
    "Sam Okafor",
    "Jordan Lee",
    "Taylor Nakamura",
    "Morgan Silva",
    "Casey Novak",
    "Riley Haddad",
    "Jamie Costa",
];

fn demo_users(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|i| {
            let name = USER_NAMES[i % USER_NAMES.len()];
            UserProfile {
                id: format!("demo-user-{:02}", i + 1),
                name: if i < USER_NAMES.len() {
                    name.to_owned()
                } else {
                    format!("{name} {}", i / USER_NAMES.len() + 1)
                },
                avatar: (i % 2 == 0).then(|| format!("https://avatars.example.com/{}.png", i + 1)),
            }
        })
        .collect()
}

fn template_exercises(template: &WorkoutTemplate) -> Vec<ExerciseSpec> {
    template
        .exercises
        .iter()
        .map(|&(name, series, repetitions, weight)| ExerciseSpec {
            name: name.to_owned(),
            series: series.to_owned(),
            repetitions: repetitions.to_owned(),
            weight: weight.to_owned(),
            rest_time: "90s".to_owned(),
            video_url: String::new(),
            instructions: String::new(),
        })
        .collect()
}

/// Generation output shaped the way language models actually return it:
/// numbers where text was asked for and nulls for unknown fields
fn generated_payload(rng: &mut StdRng) -> serde_json::Value {
    let minutes: u32 = rng.gen_range(20..=60);
    json!({
        "name": format!("AI Conditioning {minutes}min"),
        "exercises": [
            {
                "name": "Kettlebell Swing",
                "series": rng.gen_range(3..=5),
                "repetitions": 15,
                "weight": 16,
                "restTime": 60,
                "videoUrl": null,
                "instructions": ["Hinge at the hips", "Snap the hips forward"]
            },
            {
                "name": "Burpees",
                "series": 4,
                "repetitions": "10",
                "weight": null,
                "restTime": "45s",
                "instructions": "Keep a steady pace"
            }
        ]
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== WorkoutX Workout Data Seeder ===");

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.url = DatabaseUrl::parse_url(url)?;
    }
    config.auto_migrate = true;

    info!("Connecting to database: {}", config.url);
    let db = Database::new(&config).await?;

    if args.reset {
        info!("Resetting workout data...");
        let workouts = sqlx::query("DELETE FROM workouts")
            .execute(db.pool())
            .await?
            .rows_affected();
        let users = sqlx::query("DELETE FROM users")
            .execute(db.pool())
            .await?
            .rows_affected();
        info!("  Deleted {workouts} workouts and {users} users");
    }

    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    let store = WorkoutStore::from_database(db.clone());

    info!("Step 1: Creating demo users...");
    let users = demo_users(args.users);
    for user in &users {
        db.users().upsert_user(user).await?;
    }
    info!("  Upserted {} users", users.len());

    info!("Step 2: Creating workouts...");
    let mut workout_ids = Vec::new();
    for user in &users {
        let picks = rng.gen_range(1..=TEMPLATES.len());
        for template in TEMPLATES.choose_multiple(&mut rng, picks) {
            let visibility = if rng.gen_bool(0.6) {
                Visibility::Public
            } else {
                Visibility::Private
            };
            let created = store
                .create_workout(&user.id, template.name, visibility, template_exercises(template))
                .await?;
            workout_ids.push(created.id);
        }

        if rng.gen_bool(0.5) {
            let created = store
                .create_generated_workout(&user.id, &generated_payload(&mut rng))
                .await?;
            workout_ids.push(created.id);
        }
    }
    info!("  Created {} workouts", workout_ids.len());

    info!("Step 3: Creating likes...");
    let mut like_count = 0_usize;
    for workout_id in &workout_ids {
        for user in &users {
            if rng.gen_bool(0.3) {
                store.like_workout(workout_id, &user.id).await?;
                like_count += 1;
            }
        }
    }
    info!("  Created {like_count} likes");

    db.close().await;
    info!("=== Seeding complete ===");

    Ok(())
}
