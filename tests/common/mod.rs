#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

pub use fitness_tracker::{
    Format, ParseErrorKind, ProfileForm, Session, TrackerError, UserProfile, ValidationError,
    WorkoutForm, WorkoutRecord, NO_WORKOUTS,
};
