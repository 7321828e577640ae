//! Workout records and the user profile that owns them.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TrackerResult;
use crate::storage;

/// Listing returned when a profile has no workouts.
pub const NO_WORKOUTS: &str = "No workouts recorded.";

/// One logged exercise session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Exercise")]
    exercise_type: String,
    #[serde(rename = "Duration")]
    duration_minutes: u32,
    #[serde(rename = "Calories")]
    calories_burned: u32,
}

impl WorkoutRecord {
    pub fn new(
        date: impl Into<String>,
        exercise_type: impl Into<String>,
        duration_minutes: u32,
        calories_burned: u32,
    ) -> Self {
        Self {
            date: date.into(),
            exercise_type: exercise_type.into(),
            duration_minutes,
            calories_burned,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn exercise_type(&self) -> &str {
        &self.exercise_type
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn calories_burned(&self) -> u32 {
        self.calories_burned
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} for {} minutes, {} calories burned",
            self.date, self.exercise_type, self.duration_minutes, self.calories_burned
        )
    }
}

/// The tracked person plus their workout history, in entry order.
///
/// Only the workouts are persisted; identity fields live for the session.
#[derive(Clone, Debug)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    workouts: Vec<WorkoutRecord>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, age: u32, weight: f64) -> Self {
        Self {
            name: name.into(),
            age,
            weight,
            workouts: Vec::new(),
        }
    }

    pub fn add_workout(&mut self, workout: WorkoutRecord) {
        self.workouts.push(workout);
    }

    pub fn workouts(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// One rendered line per workout, or [`NO_WORKOUTS`] when there are none.
    pub fn list_workouts(&self) -> String {
        if self.workouts.is_empty() {
            return NO_WORKOUTS.to_string();
        }
        self.workouts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Overwrites `path` with one comma-separated line per workout.
    pub fn save(&self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        storage::write_workouts(path, &self.workouts)?;
        info!(path = %path.display(), count = self.workouts.len(), "saved workouts");
        Ok(())
    }

    /// Appends every workout stored in `path`.
    ///
    /// Lines are appended as they parse. If a later line is malformed the
    /// error is returned and the earlier lines stay in the profile. Loading
    /// the same file twice duplicates its workouts.
    pub fn load(&mut self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        let before = self.workouts.len();
        let result = storage::read_workouts_into(path, &mut self.workouts);
        let added = self.workouts.len() - before;
        match result {
            Ok(_) => {
                info!(path = %path.display(), added, "loaded workouts");
                Ok(())
            }
            Err(err) => {
                debug!(path = %path.display(), added, error = %err, "load stopped early");
                Err(err)
            }
        }
    }

    /// Like [`UserProfile::load`], but leaves the profile untouched unless
    /// every line parses.
    pub fn load_all_or_nothing(&mut self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        let records = storage::read_workouts(path)?;
        info!(path = %path.display(), added = records.len(), "loaded workouts");
        self.workouts.extend(records);
        Ok(())
    }

    pub fn export_json(&self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        storage::write_json(path, &self.workouts)?;
        info!(path = %path.display(), count = self.workouts.len(), "exported workouts");
        Ok(())
    }

    /// Appends the workouts of a JSON document. All or nothing.
    pub fn import_json(&mut self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        let records = storage::read_json(path)?;
        info!(path = %path.display(), added = records.len(), "imported workouts");
        self.workouts.extend(records);
        Ok(())
    }
}
