//! Personal workout log: a user profile, its workouts, and a flat-file
//! format to save and load them.

pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod session;
pub mod storage;

pub use config::TrackerConfig;
pub use error::{ParseErrorKind, TrackerError, TrackerResult, ValidationError};
pub use forms::{ProfileForm, WorkoutForm};
pub use models::{UserProfile, WorkoutRecord, NO_WORKOUTS};
pub use session::Session;
pub use storage::Format;
