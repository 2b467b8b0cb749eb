use std::fs;

use weekplan::core::persist::{load_state, save_state};
use weekplan::core::session::Session;
use weekplan::core::types::DayOfWeek;

use crate::common::{make_temp_dir, normalized_lines, run_with_input, write_config};

#[test]
fn save_then_read_restores_the_week() {
    let dir = make_temp_dir("persist");
    write_config(&dir, false);
    let first = run_with_input(&dir, "fixed F 14 16 Lab Coursework\nsave week\nexit\n");
    assert!(first.status.success());
    assert!(dir.join("saves").join("week.json").exists());

    let second = run_with_input(&dir, "clear W\nread week\nshow F\nexit\n");
    let stdout = normalized_lines(&second.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("Loaded 3 entries from")));
    assert!(stdout.iter().any(|l| l.contains("2:00 PM - 4:00 PM") && l.contains("Lab")));
}

#[test]
fn reading_a_broken_file_keeps_the_session() {
    let dir = make_temp_dir("persist");
    write_config(&dir, false);
    fs::create_dir_all(dir.join("saves")).unwrap();
    fs::write(dir.join("saves").join("bad.json"), "{ not json").unwrap();

    let output = run_with_input(&dir, "read bad\nshow\nexit\n");
    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Writing Seminar"));
}

#[test]
fn library_round_trip_preserves_catalogs() {
    let dir = make_temp_dir("persist");
    let mut session = Session::with_defaults().unwrap();
    session.reminders.add("Return library books").unwrap();

    let path = save_state(&session, &dir.join("nested").join("plan.json")).unwrap();
    let loaded = load_state(&path).unwrap();

    assert_eq!(loaded.schedule.len(), session.schedule.len());
    assert_eq!(loaded.categories.names(), session.categories.names());
    assert_eq!(loaded.activities.len(), session.activities.len());
    assert_eq!(loaded.reminders.len(), 3);
    assert_eq!(loaded.schedule.entries_for_day(DayOfWeek::Wed).len(), 2);
}
