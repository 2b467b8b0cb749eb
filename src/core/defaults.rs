use once_cell::sync::Lazy;

use crate::core::types::{DayOfWeek, Rgb};

pub struct SeedEntry {
    pub day: DayOfWeek,
    pub start: f32,
    pub end: f32,
    pub name: &'static str,
    pub category: &'static str,
}

pub static SEED_CATEGORIES: Lazy<Vec<(&'static str, Rgb)>> = Lazy::new(|| {
    vec![
        ("Coursework", Rgb::new(0x4f, 0xa3, 0xc7)),
        ("Sleep", Rgb::new(0xb2, 0x96, 0xc7)),
        ("Personal", Rgb::new(0xf5, 0xa9, 0x62)),
        ("Social", Rgb::new(0x8f, 0xbc, 0x8f)),
        ("Recreation", Rgb::new(0xee, 0x6c, 0x6c)),
    ]
});

/// name, category, duration in hours
pub static SEED_ACTIVITIES: Lazy<Vec<(&'static str, &'static str, f32)>> = Lazy::new(|| {
    vec![
        ("Take a Nap", "Sleep", 1.0),
        ("Eat Breakfast", "Personal", 0.5),
        ("Lift Weights", "Recreation", 1.0),
        ("TV with Friends", "Social", 0.5),
        ("Self Care", "Personal", 1.0),
    ]
});

/// Seeded entries are all fixed.
pub static SEED_ENTRIES: Lazy<Vec<SeedEntry>> = Lazy::new(|| {
    vec![
        SeedEntry {
            day: DayOfWeek::Wed,
            start: 10.0,
            end: 11.0,
            name: "Writing Seminar",
            category: "Coursework",
        },
        SeedEntry {
            day: DayOfWeek::Wed,
            start: 12.0,
            end: 13.0,
            name: "Psychology Lecture",
            category: "Coursework",
        },
    ]
});

pub static SEED_REMINDERS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["Bring notes to Writing Seminar", "Email professor by 4 PM"]);

/// Category used when a quick add does not name one.
pub const DEFAULT_CATEGORY: &str = "Personal";
