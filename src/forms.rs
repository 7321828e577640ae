//! Raw text input for creating profiles and workouts.
//!
//! Front ends fill one of these forms field by field and call `validate`
//! to get typed values. All checks happen here so the model never sees
//! half-parsed input.

use std::str::FromStr;

use crate::error::ValidationError;
use crate::models::{UserProfile, WorkoutRecord};

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub weight: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let name = required("name", &self.name)?;
        let age = required("age", &self.age)?;
        let weight = required("weight", &self.weight)?;

        let age = number("age", age)?;
        let weight = number("weight", weight)?;
        Ok(UserProfile::new(name, age, weight))
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    pub date: String,
    pub exercise_type: String,
    pub duration: String,
    pub calories_burned: String,
}

impl WorkoutForm {
    pub fn validate(&self) -> Result<WorkoutRecord, ValidationError> {
        let date = required("date", &self.date)?;
        let exercise_type = required("exercise_type", &self.exercise_type)?;
        let duration = required("duration", &self.duration)?;
        let calories = required("calories_burned", &self.calories_burned)?;

        let duration = number("duration", duration)?;
        let calories = number("calories_burned", calories)?;
        Ok(WorkoutRecord::new(date, exercise_type, duration, calories))
    }
}

fn required<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value)
}

fn number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}
