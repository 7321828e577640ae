//! Flat-file persistence for workouts.
//!
//! The text format is one workout per line:
//!
//! ```text
//! <date>,<exercise_type>,<duration_minutes>,<calories_burned>
//! ```
//!
//! No header and no escaping. A field containing a comma will not read back.
//! Each line is trimmed before it is split, so leading whitespace on the date
//! and trailing whitespace on the calories are lost. Duration and calories
//! are `u32`; a stored value above 4294967295 is a parse error.
//! A JSON document is also supported for interchange with other tools.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ParseErrorKind, TrackerError, TrackerResult};
use crate::models::WorkoutRecord;

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// `.json` files are JSON documents; anything else is the line format.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Text,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
struct WorkoutDocument {
    #[serde(rename = "Workouts")]
    workouts: Vec<WorkoutRecord>,
}

pub fn encode_line(workout: &WorkoutRecord) -> String {
    format!(
        "{},{},{},{}",
        workout.date(),
        workout.exercise_type(),
        workout.duration_minutes(),
        workout.calories_burned()
    )
}

/// Parses one stored line. Surrounding whitespace is ignored.
pub fn parse_line(line: &str) -> Result<WorkoutRecord, ParseErrorKind> {
    let fields: Vec<&str> = line.trim().split(',').collect();
    let [date, exercise_type, duration, calories] = fields.as_slice() else {
        return Err(ParseErrorKind::FieldCount {
            found: fields.len(),
        });
    };

    let duration = parse_count("duration", duration)?;
    let calories = parse_count("calories_burned", calories)?;
    Ok(WorkoutRecord::new(*date, *exercise_type, duration, calories))
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, ParseErrorKind> {
    raw.trim()
        .parse()
        .map_err(|_| ParseErrorKind::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

/// Truncates `path` and writes every workout on its own line.
///
/// Every failure, a missing parent directory included, is reported as `Io`.
pub fn write_workouts(path: &Path, workouts: &[WorkoutRecord]) -> TrackerResult<()> {
    let file = File::create(path).map_err(|e| TrackerError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for workout in workouts {
        if workout.date().contains(',') || workout.exercise_type().contains(',') {
            warn!(
                path = %path.display(),
                workout = %workout,
                "field contains a comma and will not load back"
            );
        }
        writeln!(writer, "{}", encode_line(workout)).map_err(|e| TrackerError::io(path, e))?;
    }

    writer.flush().map_err(|e| TrackerError::io(path, e))?;
    debug!(path = %path.display(), count = workouts.len(), "wrote workout file");
    Ok(())
}

/// Appends each parsed line of `path` to `out` as soon as it parses.
///
/// On error, `out` keeps whatever was appended before the bad line.
/// Blank lines are skipped. Returns the number of workouts appended.
pub fn read_workouts_into(path: &Path, out: &mut Vec<WorkoutRecord>) -> TrackerResult<usize> {
    let file = File::open(path).map_err(|e| TrackerError::from_io(path, e))?;
    let reader = BufReader::new(file);
    let mut added = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| TrackerError::from_io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let workout = parse_line(&line).map_err(|kind| TrackerError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            kind,
        })?;
        out.push(workout);
        added += 1;
    }

    debug!(path = %path.display(), added, "read workout file");
    Ok(added)
}

/// Reads the whole file, failing without partial results.
pub fn read_workouts(path: &Path) -> TrackerResult<Vec<WorkoutRecord>> {
    let mut workouts = Vec::new();
    read_workouts_into(path, &mut workouts)?;
    Ok(workouts)
}

pub fn write_json(path: &Path, workouts: &[WorkoutRecord]) -> TrackerResult<()> {
    let file = File::create(path).map_err(|e| TrackerError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let document = WorkoutDocument {
        workouts: workouts.to_vec(),
    };
    serde_json::to_writer_pretty(&mut writer, &document).map_err(|source| TrackerError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writeln!(writer).map_err(|e| TrackerError::io(path, e))?;
    writer.flush().map_err(|e| TrackerError::io(path, e))?;
    Ok(())
}

pub fn read_json(path: &Path) -> TrackerResult<Vec<WorkoutRecord>> {
    let file = File::open(path).map_err(|e| TrackerError::from_io(path, e))?;
    let document: WorkoutDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| TrackerError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document.workouts)
}
