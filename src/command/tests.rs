use super::command_parser::CommandParser;
use super::command_resolver::{CatalogResolver, CommandResolver, GlobalResolver, ScheduleResolver};
use super::commands::execute;
use super::manual::{ManualCatalog, ManualTopic};
use super::request::{ActivityRequest, CategoryRequest, ReminderRequest, Request, Response};
use super::tokens::tokenize;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::types::{DayOfWeek, Rgb};
use crate::errors::Error;
use crate::planner::EntryEdit;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use strum::IntoEnumIterator;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("weekplan-command-{nanos}-{uniq}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn test_ctx() -> AppContext {
    let dir = temp_dir();
    let config_path = dir.join("config.json");
    let mut config = Config::create_default(&config_path).unwrap();
    config.set("FILE_LOGGING_ENABLED", "false").unwrap();
    AppContext::new_with_paths(config_path, dir.join("saves"), dir.join("logs")).unwrap()
}

fn parse(line: &str) -> Request {
    CommandParser::new().parse_line(line).unwrap()
}

fn run(ctx: &mut AppContext, line: &str) -> Response {
    execute(ctx, parse(line)).unwrap()
}

// ---------- tokens.rs ----------
#[test]
fn tokenizer_groups_quoted_words() {
    assert_eq!(
        tokenize(r#"place "Take a Nap"  W"#).unwrap(),
        vec!["place", "Take a Nap", "W"]
    );
    assert_eq!(tokenize(r#"reminder add """#).unwrap(), vec!["reminder", "add", ""]);
    assert!(tokenize("   ").unwrap().is_empty());
    assert!(matches!(tokenize(r#"place "Nap"#), Err(Error::Parse(_))));
}

// ---------- parsing ----------
#[test]
fn parses_schedule_commands() {
    assert_eq!(parse("day th"), Request::SelectDay(DayOfWeek::Thu));
    assert_eq!(parse("show"), Request::Show(None));
    assert_eq!(
        parse(r#"place "Lift Weights" F"#),
        Request::Place {
            activity: "Lift Weights".into(),
            day: Some(DayOfWeek::Fri)
        }
    );
    assert_eq!(
        parse("slot 1.5"),
        Request::FindSlot {
            hours: 1.5,
            day: None
        }
    );
    assert_eq!(
        parse(r#"fixed M 9AM 10:30AM "Lab Section" Coursework"#),
        Request::AddFixed {
            day: DayOfWeek::Mon,
            start: 9.0,
            end: 10.5,
            name: "Lab Section".into(),
            category: "Coursework".into(),
        }
    );
    assert_eq!(
        parse(r#"quick 14.2 0.5 "Coffee""#),
        Request::QuickAdd {
            at: 14.2,
            hours: 0.5,
            name: "Coffee".into(),
            category: None
        }
    );
    assert_eq!(
        parse(r#"edit 2 "Lecture" 12 1PM Coursework yes"#),
        Request::Edit {
            index: 1,
            edit: EntryEdit {
                name: "Lecture".into(),
                start: 12.0,
                end: 13.0,
                category: "Coursework".into(),
                fixed: true,
            }
        }
    );
    assert_eq!(parse("remove 1"), Request::Remove { index: 0 });
    assert_eq!(parse("clear Su"), Request::Clear(Some(DayOfWeek::Sun)));
    assert_eq!(parse("TOTALS"), Request::Totals);
}

#[test]
fn parses_catalog_commands() {
    assert_eq!(parse("activity"), Request::Activity(ActivityRequest::List));
    assert_eq!(
        parse(r#"activity edit "Take a Nap" "Power Nap" Sleep 0.5"#),
        Request::Activity(ActivityRequest::Edit {
            old_name: "Take a Nap".into(),
            name: "Power Nap".into(),
            category: "Sleep".into(),
            hours: 0.5
        })
    );
    assert_eq!(
        parse("category add Chores #a0b0c0"),
        Request::Category(CategoryRequest::Add {
            name: "Chores".into(),
            color: Some(Rgb::new(0xa0, 0xb0, 0xc0))
        })
    );
    assert_eq!(
        parse("category delete Chores"),
        Request::Category(CategoryRequest::Delete("Chores".into()))
    );
    assert_eq!(
        parse(r#"reminder edit 2 "Email TA""#),
        Request::Reminder(ReminderRequest::Edit {
            index: 1,
            text: "Email TA".into()
        })
    );
}

#[test]
fn parses_global_commands() {
    assert_eq!(parse("save"), Request::Save(None));
    assert_eq!(parse("read week"), Request::Read("week".into()));
    assert_eq!(parse("config"), Request::ShowConfig);
    assert_eq!(
        parse("config set DEFAULT_DAY F"),
        Request::SetConfig {
            key: "DEFAULT_DAY".into(),
            value: "F".into()
        }
    );
    assert_eq!(parse("man place"), Request::Man(Some("place".into())));
}

#[test]
fn missing_arguments_include_usage() {
    match CommandParser::new().parse_line("fixed M 9AM") {
        Err(Error::Parse(msg)) => {
            assert!(msg.starts_with("Missing argument(s)."));
            assert!(msg.contains("\nUsage: fixed <day> <start> <end>"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn rejects_bad_arguments() {
    let parser = CommandParser::new();
    assert!(matches!(parser.parse_line("remove 0"), Err(Error::Parse(_))));
    assert!(matches!(parser.parse_line("remove one"), Err(Error::Parse(_))));
    assert!(matches!(
        parser.parse_line("slot -1"),
        Err(Error::InvalidDuration { .. })
    ));
    assert!(matches!(parser.parse_line("day X"), Err(Error::Parse(_))));
    assert!(matches!(parser.parse_line("totals now"), Err(Error::Parse(_))));
    assert!(matches!(
        parser.parse_line("activity color Nap #ffffff"),
        Err(Error::Parse(_))
    ));
    assert!(matches!(
        parser.parse_line("teleport W"),
        Err(Error::UnknownCommand(_))
    ));
    assert!(matches!(parser.parse_line(""), Err(Error::Parse(_))));
}

#[test]
fn resolvers_claim_their_own_words() {
    assert!(ScheduleResolver.can_resolve("place"));
    assert!(!ScheduleResolver.can_resolve("save"));
    assert!(CatalogResolver.can_resolve("Category"));
    assert!(GlobalResolver.can_resolve("man"));
    assert!(!GlobalResolver.can_resolve("exit"));
}

// ---------- execution ----------
#[test]
fn place_and_show_use_the_selected_day() {
    let mut ctx = test_ctx();
    assert_eq!(ctx.selected_day, DayOfWeek::Wed);
    match run(&mut ctx, r#"place "Take a Nap""#) {
        Response::Done(msg) => assert!(msg.starts_with("Placed on W: 8:00 AM - 9:00 AM: Take a Nap")),
        other => panic!("unexpected response {other:?}"),
    }
    assert_eq!(run(&mut ctx, "day F"), Response::Agenda(DayOfWeek::Fri));
    assert_eq!(run(&mut ctx, "show"), Response::Agenda(DayOfWeek::Fri));
    assert_eq!(
        run(&mut ctx, "slot 2 W"),
        Response::Slot {
            day: DayOfWeek::Wed,
            start: 13.0,
            hours: 2.0
        }
    );
}

#[test]
fn failed_requests_change_nothing() {
    let mut ctx = test_ctx();
    let before = ctx.session.schedule.len();
    assert!(execute(&mut ctx, parse(r#"place "Juggling""#)).is_err());
    assert!(execute(&mut ctx, parse(r#"fixed W 3PM 2PM "Backwards" Social"#)).is_err());
    assert!(execute(&mut ctx, parse("remove 9")).is_err());
    assert_eq!(ctx.session.schedule.len(), before);
}

#[test]
fn quick_add_defaults_to_personal_and_edit_remove_by_index() {
    let mut ctx = test_ctx();
    run(&mut ctx, r#"quick 8.2 1 "Breakfast""#);
    let first = ctx
        .session
        .schedule
        .entry_for_day_at(DayOfWeek::Wed, 0)
        .unwrap()
        .clone();
    assert_eq!((first.start, first.category.as_str()), (8.0, "Personal"));

    run(&mut ctx, r#"edit 1 "Brunch" 9 10 Social false"#);
    let names: Vec<String> = ctx
        .session
        .schedule
        .entries_for_day(DayOfWeek::Wed)
        .into_iter()
        .map(|e| e.name.clone())
        .collect();
    assert_eq!(names, vec!["Brunch", "Writing Seminar", "Psychology Lecture"]);

    run(&mut ctx, "remove 2");
    run(&mut ctx, "clear");
    assert!(ctx.session.schedule.is_empty());
}

#[test]
fn catalog_requests_update_the_session() {
    let mut ctx = test_ctx();
    run(&mut ctx, r#"activity add "Read" Personal 0.5"#);
    run(&mut ctx, r#"activity del "Self Care""#);
    assert_eq!(ctx.session.activities.len(), 5);
    assert!(ctx.session.activities.get("Read").is_ok());

    run(&mut ctx, "category add Chores");
    assert_eq!(ctx.session.categories.color_for("Chores"), Rgb::FALLBACK);
    run(&mut ctx, "category rename Chores Errands");
    run(&mut ctx, "category color Errands #010203");
    assert_eq!(
        ctx.session.categories.color_for("Errands"),
        Rgb::new(1, 2, 3)
    );
    assert!(matches!(
        execute(&mut ctx, parse("category add Sleep")),
        Err(Error::DuplicateName { .. })
    ));

    match run(&mut ctx, r#"reminder add "Buy stamps""#) {
        Response::Done(msg) => assert_eq!(msg, "Added reminder #3: Buy stamps"),
        other => panic!("unexpected response {other:?}"),
    }
    run(&mut ctx, "reminder del 1");
    assert_eq!(ctx.session.reminders.len(), 2);
    assert_eq!(run(&mut ctx, "reminder"), Response::Reminders);
}

#[test]
fn totals_cover_the_seeded_week() {
    let mut ctx = test_ctx();
    match run(&mut ctx, "totals") {
        Response::Totals(totals) => {
            assert_eq!(totals.get("Coursework"), Some(2.0));
            assert_eq!(totals.get("Sleep"), Some(0.0));
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn save_and_read_replace_the_session() {
    let mut ctx = test_ctx();
    run(&mut ctx, r#"place "Lift Weights" M"#);
    run(&mut ctx, "save week");
    assert!(ctx.saves_dir.join("week.json").exists());

    run(&mut ctx, "clear M");
    run(&mut ctx, "category del Social");
    run(&mut ctx, "read week.json");
    assert_eq!(ctx.session.schedule.entries_for_day(DayOfWeek::Mon).len(), 1);
    assert!(ctx.session.categories.contains("Social"));

    fs::write(ctx.saves_dir.join("broken.json"), "{ not json").unwrap();
    assert!(execute(&mut ctx, parse("read broken")).is_err());
    assert_eq!(ctx.session.schedule.len(), 3);
}

#[test]
fn config_set_applies_to_the_next_search() {
    let mut ctx = test_ctx();
    run(&mut ctx, "config set DAY_WINDOW 1PM-6PM");
    assert_eq!(
        run(&mut ctx, "slot 1"),
        Response::Slot {
            day: DayOfWeek::Wed,
            start: 13.0,
            hours: 1.0
        }
    );
    assert!(execute(&mut ctx, parse("config set NOPE 1")).is_err());
    assert_eq!(run(&mut ctx, "config"), Response::ConfigTable);
}

// ---------- manual.rs ----------
#[test]
fn manual_catalog_renders_general_page() {
    let output = ManualCatalog::new().page_for(None).unwrap().render();
    assert!(output.starts_with("NAME\n  weekplan - Weekly schedule planner."));
    assert!(output.contains("place \"<activity>\" [day]"));
    assert!(output.contains("category rename <old> <new>"));
}

#[test]
fn manual_catalog_errors_on_unknown_topic() {
    match ManualCatalog::new().page_for(Some("unknown")).unwrap_err() {
        Error::Parse(msg) => assert!(msg.contains("Valid topics")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn manual_catalog_renders_pages_for_all_topics() {
    let catalog = ManualCatalog::new();
    for topic in ManualTopic::iter() {
        let output = catalog.page_for(Some(topic.as_ref())).unwrap().render();
        assert!(output.contains("NAME"));
    }
    let time = catalog.page_for(Some("TIME")).unwrap().render();
    assert!(time.contains("Supported formats"));
}

#[test]
fn man_request_returns_rendered_page() {
    let mut ctx = test_ctx();
    match run(&mut ctx, "man quick") {
        Response::Manual(text) => assert!(text.contains("nearest half hour")),
        other => panic!("unexpected response {other:?}"),
    }
}
