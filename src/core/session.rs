use crate::core::catalog::{ActivityBook, CategoryBook, ReminderList};
use crate::core::defaults::{SEED_ACTIVITIES, SEED_CATEGORIES, SEED_ENTRIES, SEED_REMINDERS};
use crate::core::models::{ActivityTemplate, ScheduleEntry};
use crate::core::store::ScheduleStore;
use crate::errors::Result;

/// All planner state for one run: schedule, categories, activity presets, reminders.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub schedule: ScheduleStore,
    pub categories: CategoryBook,
    pub activities: ActivityBook,
    pub reminders: ReminderList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-filled with the stock categories, activities, entries and reminders.
    pub fn with_defaults() -> Result<Self> {
        let mut session = Self::new();
        for (name, color) in SEED_CATEGORIES.iter() {
            session.categories.add(*name, *color)?;
        }
        for (name, category, duration) in SEED_ACTIVITIES.iter() {
            session
                .activities
                .add(ActivityTemplate::new(*name, *category, *duration)?)?;
        }
        for seed in SEED_ENTRIES.iter() {
            session.schedule.add(ScheduleEntry::new(
                seed.day,
                seed.start,
                seed.end,
                seed.name,
                seed.category,
                true,
            )?);
        }
        for text in SEED_REMINDERS.iter() {
            session.reminders.add(*text)?;
        }
        Ok(session)
    }

    /// Swaps in `other` wholesale.
    pub fn replace_with(&mut self, other: Session) {
        *self = other;
    }
}
