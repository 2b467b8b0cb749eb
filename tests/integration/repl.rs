use crate::common::{
    make_temp_dir, normalized_lines, read_log_contents, run_with_input, write_config,
};

#[test]
fn startup_prints_banner_and_paths() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let output = run_with_input(&dir, "exit\n");

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.contains("W E E K P L A N")));
    assert!(stdout.iter().any(|l| l.starts_with("Config path:")));
    assert!(stdout.iter().any(|l| l == "Planning Wednesday. Switch with 'day <day>'."));
}

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let output = run_with_input(&dir, "frobnicate\nshow\nexit\n");

    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    let expected = "Command execution failed for 'frobnicate'. Unknown command: frobnicate";
    assert!(
        stderr.iter().any(|l| l.ends_with(expected)),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WEDNESDAY"));
}

#[test]
fn missing_arguments_print_usage() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let output = run_with_input(&dir, "slot\nexit\n");

    let stderr = normalized_lines(&output.stderr);
    assert!(stderr.iter().any(|l| l.contains("Missing argument(s).")));
    assert!(stderr.iter().any(|l| l.contains("slot <hours> [day]")));
}

#[test]
fn place_uses_first_free_slot_around_seeded_classes() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let input = "place \"Take a Nap\"\nplace \"Lift Weights\"\nplace \"Self Care\"\nshow\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.starts_with("Placed on W: 8:00 AM - 9:00 AM: Take a Nap")));
    assert!(stdout.iter().any(|l| l.starts_with("Placed on W: 9:00 AM - 10:00 AM: Lift Weights")));
    // 10-11 and 12-13 are taken by the seeded lectures.
    assert!(stdout.iter().any(|l| l.starts_with("Placed on W: 11:00 AM - 12:00 PM: Self Care")));
}

#[test]
fn slot_reports_without_scheduling() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let output = run_with_input(&dir, "clear\nfixed W 8 10 Work Coursework\nslot 1.5\nexit\n");

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout
        .iter()
        .any(|l| l == "First free 1.5h slot on Wednesday: 10:00 AM - 11:30 AM"));
}

#[test]
fn totals_sum_every_day() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let output = run_with_input(&dir, "fixed M 9 11 Run Recreation\ntotals\nexit\n");

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l.contains("WEEKLY TOTALS")));
    assert!(stdout.iter().any(|l| l == "Total: 4.0h"));
}

#[test]
fn man_prints_topic_page() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    let output = run_with_input(&dir, "man\nman quick\nexit\n");

    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "weekplan - Weekly schedule planner."));
    assert!(stdout.iter().any(|l| l.contains("quick <at> <hours>")));
}

#[test]
fn commands_are_logged_to_file_when_enabled() {
    let dir = make_temp_dir("repl");
    write_config(&dir, true);
    let output = run_with_input(&dir, "day F\nplace \"Take a Nap\"\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Command run: day F"));
    assert!(log.contains("Placed 'Take a Nap' on F"));
}

#[test]
fn no_log_file_when_file_logging_disabled() {
    let dir = make_temp_dir("repl");
    write_config(&dir, false);
    run_with_input(&dir, "show\nexit\n");
    assert!(read_log_contents(&dir).is_none());
}
