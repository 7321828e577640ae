use std::fs;
use std::path::PathBuf;

use fitness_tracker::{ProfileForm, UserProfile, WorkoutForm, WorkoutRecord};
use tempfile::TempDir;

/// A scratch directory and a `.txt` path inside it.
/// Keep the directory alive for as long as the path is used.
pub fn scratch_file(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    (dir, path)
}

/// Writes `contents` verbatim to a fresh workout file.
pub fn workout_file(contents: &str) -> (TempDir, PathBuf) {
    let (dir, path) = scratch_file("workouts.txt");
    fs::write(&path, contents).expect("Failed to write workout file");
    (dir, path)
}

pub fn make_user() -> UserProfile {
    UserProfile::new("Jordan", 34, 68.2)
}

pub fn running() -> WorkoutRecord {
    WorkoutRecord::new("2024-01-01", "Running", 30, 300)
}

pub fn cycling() -> WorkoutRecord {
    WorkoutRecord::new("2024-01-02", "Cycling", 45, 400)
}

/// A profile holding the running and cycling workouts, in that order.
pub fn user_with_two_workouts() -> UserProfile {
    let mut user = make_user();
    user.add_workout(running());
    user.add_workout(cycling());
    user
}

/// Profile form as a front end would fill it in.
pub fn profile_form() -> ProfileForm {
    ProfileForm {
        name: "Jordan".to_string(),
        age: "34".to_string(),
        weight: "68.2".to_string(),
    }
}

pub fn workout_form(date: &str, exercise: &str, duration: &str, calories: &str) -> WorkoutForm {
    WorkoutForm {
        date: date.to_string(),
        exercise_type: exercise.to_string(),
        duration: duration.to_string(),
        calories_burned: calories.to_string(),
    }
}
