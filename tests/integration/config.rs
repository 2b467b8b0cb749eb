use std::fs;

use weekplan::config::Config;

use crate::common::{make_temp_dir, normalized_lines, run_with_args, run_with_input, write_config};

#[test]
fn missing_config_exits_with_error() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr was: {stderr}");
}

#[test]
fn config_without_search_window_is_rejected() {
    let dir = make_temp_dir("config");
    fs::write(
        dir.join("config.json"),
        r#"{ "slot_step_minutes": { "value": 30, "description": "step" } }"#,
    )
    .unwrap();
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("day_window"), "stderr was: {stderr}");
}

#[test]
fn config_command_prints_table() {
    let dir = make_temp_dir("config");
    write_config(&dir, false);
    let output = run_with_input(&dir, "config\nexit\n");

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "CONFIGURATION"));
    assert!(stdout.iter().any(|l| l.starts_with("SLOT_STEP_MINUTES")));
}

#[test]
fn config_set_persists_to_disk() {
    let dir = make_temp_dir("config");
    write_config(&dir, false);
    let output = run_with_input(&dir, "config set SLOT_STEP_MINUTES 15\nexit\n");

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "SLOT_STEP_MINUTES: 30 => 15"));

    let reloaded = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(reloaded.slot_step_minutes(), 15);
}

#[test]
fn invalid_config_value_leaves_file_alone() {
    let dir = make_temp_dir("config");
    write_config(&dir, false);
    let before = fs::read_to_string(dir.join("config.json")).unwrap();
    let output = run_with_input(&dir, "config set DAY_WINDOW 6PM-9AM\nexit\n");

    assert!(output.status.success());
    assert!(!output.stderr.is_empty());
    assert_eq!(fs::read_to_string(dir.join("config.json")).unwrap(), before);
}

#[test]
fn narrower_window_changes_placement() {
    let dir = make_temp_dir("config");
    write_config(&dir, false);
    let input = "config set DAY_WINDOW 1PM-5PM\nplace \"Take a Nap\"\nexit\n";
    let output = run_with_input(&dir, input);

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("Placed on W: 1:00 PM - 2:00 PM: Take a Nap")));
}

#[test]
fn paths_can_be_overridden_on_the_command_line() {
    let dir = make_temp_dir("config");
    let elsewhere = dir.join("conf");
    fs::create_dir_all(&elsewhere).unwrap();
    write_config(&elsewhere, true);

    let output = run_with_args(
        &dir,
        &["--config", "conf/config.json", "--saves", "out", "--logs", "trace"],
        "save\nexit\n",
    );

    assert!(output.status.success());
    assert!(dir.join("out").join("weekplan.json").exists());
    assert!(fs::read_dir(dir.join("trace")).unwrap().next().is_some());
}
