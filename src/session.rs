//! Interactive command loop.
//!
//! A session starts without a profile, reads one command per line until
//! `quit` or end of input, and reports every outcome on its writer. Errors
//! from the core are turned into messages here and never end the loop.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult, ValidationError};
use crate::forms::{ProfileForm, WorkoutForm};
use crate::models::UserProfile;
use crate::storage::Format;

pub const HELP: &str = "\
Commands:
  user <name> | <age> | <weight>                        create the user
  add <date> | <exercise> | <duration> | <calories>     add a workout
  list                                                  view workouts
  save [path]                                           save workouts
  load [path]                                           load workouts
  help                                                  show this help
  quit                                                  leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct Session<W: Write> {
    user: Option<UserProfile>,
    default_path: PathBuf,
    prompt: Option<String>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(out: W, default_path: impl Into<PathBuf>) -> Self {
        Self {
            user: None,
            default_path: default_path.into(),
            prompt: None,
            out,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{prompt}")?;
                self.out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute(&line?)? == Step::Quit {
                break;
            }
        }
        debug!("session ended");
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> io::Result<Step> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Step::Continue);
        }
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(command, "session command");

        match command.to_ascii_lowercase().as_str() {
            "user" => self.create_user(rest)?,
            "add" => self.add_workout(rest)?,
            "list" | "view" => self.view_workouts()?,
            "save" => self.save(rest)?,
            "load" => self.load(rest)?,
            "help" => writeln!(self.out, "{HELP}")?,
            "quit" | "exit" => return Ok(Step::Quit),
            other => writeln!(
                self.out,
                "Error: Unknown command: {other}. Type 'help' for a list of commands."
            )?,
        }
        Ok(Step::Continue)
    }

    fn create_user(&mut self, args: &str) -> io::Result<()> {
        let Some([name, age, weight]) = split_fields::<3>(args) else {
            return writeln!(self.out, "Error: Usage: user <name> | <age> | <weight>");
        };
        let form = ProfileForm { name, age, weight };
        match form.validate() {
            Ok(user) => {
                self.user = Some(user);
                writeln!(self.out, "User created successfully!")
            }
            Err(ValidationError::MissingField { .. }) => {
                writeln!(self.out, "Error: All fields are required.")
            }
            Err(ValidationError::InvalidNumber { .. }) => {
                writeln!(self.out, "Error: Age and Weight must be numbers.")
            }
        }
    }

    fn add_workout(&mut self, args: &str) -> io::Result<()> {
        let Some(user) = self.user.as_mut() else {
            return report_no_profile(&mut self.out);
        };
        let Some([date, exercise_type, duration, calories_burned]) = split_fields::<4>(args) else {
            return writeln!(
                self.out,
                "Error: Usage: add <date> | <exercise> | <duration> | <calories>"
            );
        };
        let form = WorkoutForm {
            date,
            exercise_type,
            duration,
            calories_burned,
        };
        match form.validate() {
            Ok(workout) => {
                user.add_workout(workout);
                writeln!(self.out, "Workout added successfully!")
            }
            Err(ValidationError::MissingField { .. }) => {
                writeln!(self.out, "Error: All fields are required.")
            }
            Err(ValidationError::InvalidNumber { .. }) => writeln!(
                self.out,
                "Error: Duration and Calories Burned must be numbers."
            ),
        }
    }

    fn view_workouts(&mut self) -> io::Result<()> {
        match &self.user {
            Some(user) => writeln!(self.out, "{}", user.list_workouts()),
            None => report_no_profile(&mut self.out),
        }
    }

    fn save(&mut self, arg: &str) -> io::Result<()> {
        let path = self.target_path(arg);
        let result = match &self.user {
            Some(user) => save_profile(user, &path),
            None => Err(TrackerError::NoProfile),
        };
        self.report(result, "Data saved successfully!")
    }

    fn load(&mut self, arg: &str) -> io::Result<()> {
        let path = self.target_path(arg);
        let result = match self.user.as_mut() {
            Some(user) => load_profile(user, &path),
            None => Err(TrackerError::NoProfile),
        };
        self.report(result, "Data loaded successfully!")
    }

    fn target_path(&self, arg: &str) -> PathBuf {
        if arg.is_empty() {
            self.default_path.clone()
        } else {
            PathBuf::from(arg)
        }
    }

    fn report(&mut self, result: TrackerResult<()>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.out, "{success}"),
            Err(TrackerError::NoProfile) => report_no_profile(&mut self.out),
            Err(err) => {
                warn!(error = %err, "session command failed");
                writeln!(self.out, "Error: {err}")
            }
        }
    }
}

/// Saves in the format implied by the extension of `path`.
pub fn save_profile(user: &UserProfile, path: &Path) -> TrackerResult<()> {
    match Format::from_path(path) {
        Format::Text => user.save(path),
        Format::Json => user.export_json(path),
    }
}

/// Loads in the format implied by the extension of `path`.
pub fn load_profile(user: &mut UserProfile, path: &Path) -> TrackerResult<()> {
    match Format::from_path(path) {
        Format::Text => user.load(path),
        Format::Json => user.import_json(path),
    }
}

/// Loads `path` into `user` if it exists. A missing file leaves `user`
/// as it was; a malformed one is an error and nothing from it is kept.
pub fn load_existing(user: &mut UserProfile, path: &Path) -> TrackerResult<()> {
    let loaded = match Format::from_path(path) {
        Format::Text => user.load_all_or_nothing(path),
        Format::Json => user.import_json(path),
    };
    match loaded {
        Err(TrackerError::NotFound { .. }) => {
            debug!(path = %path.display(), "no workout file yet");
            Ok(())
        }
        other => other,
    }
}

/// Validates both forms, then rewrites `path` with its current workouts
/// plus the new one. The file is not touched unless it loads cleanly.
pub fn append_to_file(
    path: &Path,
    profile: &ProfileForm,
    workout: &WorkoutForm,
) -> TrackerResult<UserProfile> {
    let mut user = profile.validate()?;
    let workout = workout.validate()?;

    load_existing(&mut user, path)?;
    user.add_workout(workout);
    save_profile(&user, path)?;
    Ok(user)
}

fn report_no_profile(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Error: Please create a user first.")
}

/// Splits `|`-separated arguments into exactly `N` trimmed fields.
/// Missing trailing fields come back empty; too many is `None`.
fn split_fields<const N: usize>(args: &str) -> Option<[String; N]> {
    let mut fields: [String; N] = std::array::from_fn(|_| String::new());
    if args.is_empty() {
        return Some(fields);
    }
    let parts: Vec<&str> = args.split('|').collect();
    if parts.len() > N {
        return None;
    }
    for (slot, part) in fields.iter_mut().zip(parts) {
        *slot = part.trim().to_string();
    }
    Some(fields)
}
