use weekplan::core::session::Session;
use weekplan::core::types::DayOfWeek;
use weekplan::errors::Error;
use weekplan::planner::Planner;
use weekplan::planner::slot::SlotWindow;

#[test]
fn planner_fills_a_day_then_reports_no_slot() {
    let mut session = Session::new();
    session
        .activities
        .add(weekplan::core::models::ActivityTemplate::new("Block", "Work", 4.0).unwrap())
        .unwrap();
    {
        let mut planner = Planner::new(&mut session, SlotWindow::default());
        let starts: Vec<f32> = (0..3)
            .map(|_| planner.place_activity("Block", DayOfWeek::Tue).unwrap().start)
            .collect();
        assert_eq!(starts, vec![8.0, 12.0, 16.0]);

        let err = planner.place_activity("Block", DayOfWeek::Tue).unwrap_err();
        assert!(matches!(err, Error::NoSlotAvailable { day: DayOfWeek::Tue, .. }));
    }
    assert!(session.categories.contains("Work"));
}

#[test]
fn totals_follow_category_order() {
    let mut session = Session::with_defaults().unwrap();
    let mut planner = Planner::new(&mut session, SlotWindow::default());
    planner
        .add_fixed(DayOfWeek::Sat, 22.0, 24.0, "Late show", "Social")
        .unwrap();

    let totals = planner.totals();
    let names: Vec<&str> = totals.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Coursework", "Sleep", "Personal", "Social", "Recreation"]);
    assert_eq!(totals.get("Social"), Some(2.0));
    assert_eq!(totals.grand_total(), 4.0);
}
