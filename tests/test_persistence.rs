mod common;

use std::fs;

use common::*;

#[test]
fn added_workouts_render_with_their_values() {
    let mut user = make_user();
    user.add_workout(WorkoutRecord::new("2024-03-05", "Rowing", 20, 180));

    let listing = user.list_workouts();
    assert!(listing.ends_with("calories burned"));
    assert!(listing.contains("2024-03-05"));
    assert!(listing.contains("Rowing"));
    assert!(listing.contains("20 minutes"));
    assert!(listing.contains("180 calories"));
}

#[test]
fn two_workouts_list_in_entry_order() {
    let user = user_with_two_workouts();

    assert_eq!(
        user.list_workouts(),
        "2024-01-01 - Running for 30 minutes, 300 calories burned\n\
         2024-01-02 - Cycling for 45 minutes, 400 calories burned"
    );
}

#[test]
fn empty_profile_lists_sentinel_not_blank() {
    let user = make_user();
    let listing = user.list_workouts();
    assert!(!listing.is_empty());
    assert_eq!(listing, NO_WORKOUTS);
}

#[test]
fn save_writes_plain_lines() {
    let (_dir, path) = scratch_file("out.txt");
    user_with_two_workouts().save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "2024-01-01,Running,30,300\n2024-01-02,Cycling,45,400\n");
}

#[test]
fn save_truncates_previous_contents() {
    let (_dir, path) = workout_file("2023-12-31,Swimming,60,500\n2023-12-30,Yoga,30,100\n");
    let mut user = make_user();
    user.add_workout(running());
    user.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "2024-01-01,Running,30,300\n");
}

#[test]
fn round_trip_into_fresh_profile() {
    let (_dir, path) = scratch_file("round.txt");
    let original = user_with_two_workouts();
    original.save(&path).unwrap();

    let mut fresh = UserProfile::new("Someone Else", 50, 90.0);
    fresh.load(&path).unwrap();

    assert_eq!(fresh.workouts(), original.workouts());
}

#[test]
fn loading_twice_doubles_the_workouts() {
    let (_dir, path) = scratch_file("twice.txt");
    user_with_two_workouts().save(&path).unwrap();

    let mut user = make_user();
    user.load(&path).unwrap();
    user.load(&path).unwrap();

    assert_eq!(user.len(), 4);
    assert_eq!(user.workouts()[0], user.workouts()[2]);
    assert_eq!(user.workouts()[1], user.workouts()[3]);
}

#[test]
fn load_appends_to_existing_workouts() {
    let (_dir, path) = workout_file("2024-01-02,Cycling,45,400\n");
    let mut user = make_user();
    user.add_workout(running());
    user.load(&path).unwrap();

    assert_eq!(user.workouts(), &[running(), cycling()]);
}

#[test]
fn short_line_fails_and_keeps_earlier_lines() {
    let (_dir, path) = workout_file(
        "2024-01-01,Running,30,300\n\
         2024-01-02,Cycling,45\n\
         2024-01-03,Rowing,20,180\n",
    );
    let mut user = make_user();

    let err = user.load(&path).unwrap_err();
    match err {
        TrackerError::Parse { line, kind, .. } => {
            assert_eq!(line, 2);
            assert_eq!(kind, ParseErrorKind::FieldCount { found: 3 });
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert_eq!(user.workouts(), &[running()]);
}

#[test]
fn non_integer_calories_is_a_parse_error() {
    let (_dir, path) = workout_file("2024-01-01,Running,30,lots\n");
    let mut user = make_user();

    let err = user.load(&path).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::Parse {
            line: 1,
            kind: ParseErrorKind::InvalidInteger {
                field: "calories_burned",
                ..
            },
            ..
        }
    ));
    assert!(user.is_empty());
}

#[test]
fn all_or_nothing_load_leaves_profile_untouched() {
    let (_dir, path) = workout_file("2024-01-02,Cycling,45,400\n2024-01-03,Rowing\n");
    let mut user = make_user();
    user.add_workout(running());

    assert!(user.load_all_or_nothing(&path).is_err());
    assert_eq!(user.workouts(), &[running()]);

    let (_dir, good) = workout_file("2024-01-02,Cycling,45,400\n");
    user.load_all_or_nothing(&good).unwrap();
    assert_eq!(user.workouts(), &[running(), cycling()]);
}

#[test]
fn blank_lines_are_skipped() {
    let (_dir, path) = workout_file("\n2024-01-01,Running,30,300\n   \n2024-01-02,Cycling,45,400\n\n");
    let mut user = make_user();
    user.load(&path).unwrap();
    assert_eq!(user.workouts(), &[running(), cycling()]);
}

#[test]
fn empty_profile_round_trip() {
    let (_dir, path) = scratch_file("empty.txt");
    make_user().save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    let mut user = make_user();
    user.load(&path).unwrap();
    assert!(user.is_empty());
    assert_eq!(user.list_workouts(), NO_WORKOUTS);
}

#[test]
fn missing_file_is_not_found() {
    let (_dir, path) = scratch_file("nowhere.txt");
    let mut user = make_user();
    assert!(matches!(user.load(&path), Err(TrackerError::NotFound { .. })));
}

#[test]
fn unwritable_path_is_io_error() {
    let (dir, _) = scratch_file("unused.txt");
    let user = user_with_two_workouts();

    // A directory cannot be opened as a file.
    assert!(matches!(user.save(dir.path()), Err(TrackerError::Io { .. })));
    let missing_parent = dir.path().join("no-such-dir").join("w.txt");
    assert!(matches!(user.save(&missing_parent), Err(TrackerError::Io { .. })));
}

#[test]
fn comma_in_exercise_breaks_round_trip() {
    let (_dir, path) = scratch_file("comma.txt");
    let mut user = make_user();
    user.add_workout(WorkoutRecord::new("2024-01-01", "Run, then swim", 60, 700));
    user.save(&path).unwrap();

    let mut fresh = make_user();
    assert!(matches!(
        fresh.load(&path),
        Err(TrackerError::Parse {
            kind: ParseErrorKind::FieldCount { found: 5 },
            ..
        })
    ));
}

#[test]
fn json_round_trip_keeps_commas() {
    let (_dir, path) = scratch_file("workouts.json");
    let mut user = user_with_two_workouts();
    user.add_workout(WorkoutRecord::new("2024-01-03", "Run, then swim", 60, 700));
    user.export_json(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"Workouts\""));
    assert!(raw.contains("\"Exercise\": \"Run, then swim\""));

    let mut fresh = make_user();
    fresh.import_json(&path).unwrap();
    assert_eq!(fresh.workouts(), user.workouts());
}

#[test]
fn malformed_json_is_rejected_whole() {
    let (_dir, path) = scratch_file("bad.json");
    fs::write(&path, r#"{"Workouts": [{"Date": "2024-01-01"}]}"#).unwrap();

    let mut user = make_user();
    assert!(matches!(user.import_json(&path), Err(TrackerError::Json { .. })));
    assert!(user.is_empty());
}
