// ABOUTME: Total to-text coercion for loosely typed AI-generated workouts
// ABOUTME: Turns any JSON value into a string and normalizes generated payloads into NewWorkout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WorkoutX

//! Ingestion of AI-generated workouts.
//!
//! Generation models return numbers where strings were asked for, `null` for
//! fields they could not fill, and occasionally nested values. Every field is
//! therefore coerced to text with [`coerce_to_text`], which never fails.
//! Only the overall shape is checked: the payload must be an object with an
//! `exercises` array.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::constants::ingestion::{ABSENT_TEXT, ARRAY_SEPARATOR};
use crate::models::{ExerciseSpec, NewWorkout};

/// Shape problems that make a generated payload unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPayload {
    /// The payload itself is not a JSON object
    #[error("generated workout must be an object, got {0}")]
    NotAnObject(&'static str),
    /// The `exercises` key is absent or null
    #[error("generated workout has no exercises collection")]
    MissingExercises,
    /// The `exercises` key holds something other than an array
    #[error("generated workout exercises must be an array, got {0}")]
    ExercisesNotArray(&'static str),
}

/// Coerce any JSON value (or its absence) to text
///
/// Strings are kept verbatim, booleans use their JSON spelling, numbers are
/// rendered by [`number_to_text`], null and absent values become [`ABSENT_TEXT`], arrays are joined with
/// [`ARRAY_SEPARATOR`] after coercing each element, and objects are rendered as
/// compact JSON.
#[must_use]
pub fn coerce_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => ABSENT_TEXT.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_text(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_to_text(Some(item)))
            .collect::<Vec<_>>()
            .join(ARRAY_SEPARATOR),
        Some(object @ Value::Object(_)) => object.to_string(),
    }
}

/// Render a JSON number the way a reader expects to see it in a form field
///
/// A float with no fractional part loses its `.0`, so `4.0` and `4` both
/// become `"4"`. Negative zero renders as `"0"`.
#[must_use]
pub fn number_to_text(number: &Number) -> String {
    match number.as_f64() {
        Some(f) if number.is_f64() && f == 0.0 => "0".to_owned(),
        Some(f) if number.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{f:.0}")
        }
        _ => number.to_string(),
    }
}

/// Normalize a generated workout payload into a creation request
///
/// The resulting request has no visibility, so the backend default applies.
///
/// # Errors
///
/// Returns [`MalformedPayload`] when the payload is not an object or lacks an
/// `exercises` array. Individual field values never cause an error.
pub fn normalize_generated_workout(
    user_id: &str,
    payload: &Value,
) -> Result<NewWorkout, MalformedPayload> {
    let Value::Object(workout) = payload else {
        return Err(MalformedPayload::NotAnObject(json_type_name(payload)));
    };

    let exercises = match workout.get("exercises") {
        None | Some(Value::Null) => return Err(MalformedPayload::MissingExercises),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(MalformedPayload::ExercisesNotArray(json_type_name(other))),
    };

    Ok(NewWorkout {
        user_id: user_id.to_owned(),
        name: coerce_to_text(workout.get("name")),
        visibility: None,
        exercises: exercises.iter().map(normalize_generated_exercise).collect(),
    })
}

fn normalize_generated_exercise(exercise: &Value) -> ExerciseSpec {
    let field = |key: &str| coerce_to_text(exercise.get(key));

    ExerciseSpec {
        name: field("name"),
        series: field("series"),
        repetitions: field("repetitions"),
        weight: field("weight"),
        rest_time: field("restTime"),
        video_url: field("videoUrl"),
        instructions: field("instructions"),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_coerce_to_their_json_spelling() {
        assert_eq!(coerce_to_text(Some(&json!("Bench"))), "Bench");
        assert_eq!(coerce_to_text(Some(&json!(4))), "4");
        assert_eq!(coerce_to_text(Some(&json!(62.5))), "62.5");
        assert_eq!(coerce_to_text(Some(&json!(-1))), "-1");
        assert_eq!(coerce_to_text(Some(&json!(true))), "true");
        assert_eq!(coerce_to_text(Some(&json!(false))), "false");
    }

    #[test]
    fn test_integral_floats_drop_the_fraction() {
        assert_eq!(coerce_to_text(Some(&json!(4.0))), "4");
        assert_eq!(coerce_to_text(Some(&json!(1.0))), "1");
        assert_eq!(coerce_to_text(Some(&json!(-3.0))), "-3");
        assert_eq!(coerce_to_text(Some(&json!(-0.0))), "0");
        assert_eq!(coerce_to_text(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(coerce_to_text(Some(&json!([2.0, 2.5]))), "2,2.5");
    }

    #[test]
    fn test_null_and_absent_share_one_placeholder() {
        assert_eq!(coerce_to_text(None), ABSENT_TEXT);
        assert_eq!(coerce_to_text(Some(&Value::Null)), ABSENT_TEXT);
    }

    #[test]
    fn test_nested_values_coerce_without_failing() {
        assert_eq!(coerce_to_text(Some(&json!([8, 8, 6]))), "8,8,6");
        assert_eq!(coerce_to_text(Some(&json!([1, null, "x"]))), "1,,x");
        assert_eq!(coerce_to_text(Some(&json!({"min": 60}))), r#"{"min":60}"#);
    }

    #[test]
    fn test_normalize_generated_workout_coerces_every_field() {
        let payload = json!({
            "name": 42,
            "exercises": [
                {
                    "name": "Squat",
                    "series": 5,
                    "repetitions": null,
                    "weight": 100.5,
                    "restTime": true,
                    "instructions": ["brace", "descend"]
                }
            ]
        });

        let workout = normalize_generated_workout("u1", &payload).unwrap();

        assert_eq!(workout.user_id, "u1");
        assert_eq!(workout.name, "42");
        assert_eq!(workout.visibility, None);
        assert_eq!(workout.exercises.len(), 1);

        let exercise = &workout.exercises[0];
        assert_eq!(exercise.name, "Squat");
        assert_eq!(exercise.series, "5");
        assert_eq!(exercise.repetitions, ABSENT_TEXT);
        assert_eq!(exercise.weight, "100.5");
        assert_eq!(exercise.rest_time, "true");
        assert_eq!(exercise.video_url, ABSENT_TEXT);
        assert_eq!(exercise.instructions, "brace,descend");
    }

    #[test]
    fn test_non_object_exercise_becomes_placeholders() {
        let payload = json!({"name": "Legs", "exercises": [7]});

        let workout = normalize_generated_workout("u1", &payload).unwrap();

        assert_eq!(workout.exercises[0], ExerciseSpec::default());
    }

    #[test]
    fn test_missing_exercises_is_malformed() {
        let err = normalize_generated_workout("u1", &json!({"name": "Legs"})).unwrap_err();
        assert_eq!(err, MalformedPayload::MissingExercises);

        let err =
            normalize_generated_workout("u1", &json!({"name": "Legs", "exercises": null}))
                .unwrap_err();
        assert_eq!(err, MalformedPayload::MissingExercises);
    }

    #[test]
    fn test_wrong_shapes_are_malformed() {
        let err = normalize_generated_workout("u1", &json!("Legs")).unwrap_err();
        assert_eq!(err, MalformedPayload::NotAnObject("string"));

        let err = normalize_generated_workout("u1", &json!({"exercises": {"name": "Squat"}}))
            .unwrap_err();
        assert_eq!(err, MalformedPayload::ExercisesNotArray("object"));
    }
}
