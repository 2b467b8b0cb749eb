use crate::core::models::ScheduleEntry;
use crate::core::session::Session;
use crate::core::types::{Clock, DayOfWeek};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};

pub mod grid;
pub mod slot;
#[cfg(test)]
mod tests;
pub mod totals;

use slot::{SlotWindow, find_slot};
use totals::{CategoryTotals, compute_totals};

/// How an entry reached the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// First-fit placement of an activity template.
    Auto,
    Fixed,
    /// Dropped at a grid position without an overlap check.
    Quick { overlapping: bool },
}

/// Receives every schedule mutation made through a [`Planner`].
pub trait PlanObserver {
    fn entry_added(&self, entry: &ScheduleEntry, placement: Placement);
    fn entry_changed(&self, before: &ScheduleEntry, after: &ScheduleEntry);
    fn entry_removed(&self, entry: &ScheduleEntry);
    fn day_cleared(&self, day: DayOfWeek, removed: usize);
    fn category_created(&self, name: &str);
}

pub struct LoggerObserver {
    pub logger: Logger,
}

impl PlanObserver for LoggerObserver {
    fn entry_added(&self, entry: &ScheduleEntry, placement: Placement) {
        let msg = match placement {
            Placement::Auto => format!("Placed '{}' on {} at first free slot", entry.name, entry.day),
            Placement::Fixed => format!("Added fixed '{}' on {}", entry.name, entry.day),
            Placement::Quick { overlapping: false } => {
                format!("Quick-added '{}' on {}", entry.name, entry.day)
            }
            Placement::Quick { overlapping: true } => {
                self.logger.warn(
                    format!(
                        "'{}' overlaps another entry on {} ({} - {}).",
                        entry.name,
                        entry.day,
                        Clock::format(entry.start),
                        Clock::format(entry.end)
                    ),
                    LogTarget::ConsoleAndFile,
                );
                format!("Quick-added overlapping '{}' on {}", entry.name, entry.day)
            }
        };
        self.logger.info(format!("{msg}: {entry}"), LogTarget::FileOnly);
    }

    fn entry_changed(&self, before: &ScheduleEntry, after: &ScheduleEntry) {
        self.logger.info(
            format!("Edited entry on {}: {before} => {after}", after.day),
            LogTarget::FileOnly,
        );
    }

    fn entry_removed(&self, entry: &ScheduleEntry) {
        self.logger.info(
            format!("Removed entry on {}: {entry}", entry.day),
            LogTarget::FileOnly,
        );
    }

    fn day_cleared(&self, day: DayOfWeek, removed: usize) {
        self.logger.info(
            format!("Cleared {removed} entries on {day}"),
            LogTarget::FileOnly,
        );
    }

    fn category_created(&self, name: &str) {
        self.logger.info(
            format!("Created category '{name}' with the default color"),
            LogTarget::ConsoleAndFile,
        );
    }
}

struct SilentObserver;

impl PlanObserver for SilentObserver {
    fn entry_added(&self, _: &ScheduleEntry, _: Placement) {}
    fn entry_changed(&self, _: &ScheduleEntry, _: &ScheduleEntry) {}
    fn entry_removed(&self, _: &ScheduleEntry) {}
    fn day_cleared(&self, _: DayOfWeek, _: usize) {}
    fn category_created(&self, _: &str) {}
}

/// Changes requested for an existing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryEdit {
    pub name: String,
    pub start: f32,
    pub end: f32,
    pub category: String,
    pub fixed: bool,
}

/// Schedule operations over one session, using a fixed search window.
pub struct Planner<'a> {
    session: &'a mut Session,
    window: SlotWindow,
    observer: Box<dyn PlanObserver>,
}

impl<'a> Planner<'a> {
    pub fn new(session: &'a mut Session, window: SlotWindow) -> Self {
        Self {
            session,
            window,
            observer: Box::new(SilentObserver),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn PlanObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn window(&self) -> &SlotWindow {
        &self.window
    }

    /// First start on `day` that fits `hours` without touching the store.
    pub fn first_free_start(&self, day: DayOfWeek, hours: f32) -> Result<f32> {
        find_slot(&self.session.schedule, day, hours, &self.window)
    }

    /// Schedules the template `activity` on `day` at the first free slot.
    pub fn place_activity(&mut self, activity: &str, day: DayOfWeek) -> Result<ScheduleEntry> {
        let template = self.session.activities.get(activity)?.clone();
        let start = self.first_free_start(day, template.duration)?;
        let entry = ScheduleEntry::new(
            day,
            start,
            start + template.duration,
            template.name,
            template.category,
            false,
        )?;
        self.ensure_category(&entry.category)?;
        self.session.schedule.add(entry.clone());
        self.observer.entry_added(&entry, Placement::Auto);
        Ok(entry)
    }

    pub fn add_fixed(
        &mut self,
        day: DayOfWeek,
        start: f32,
        end: f32,
        name: &str,
        category: &str,
    ) -> Result<ScheduleEntry> {
        let entry = ScheduleEntry::new(day, start, end, name, category, true)?;
        self.ensure_category(&entry.category)?;
        self.session.schedule.add(entry.clone());
        self.observer.entry_added(&entry, Placement::Fixed);
        Ok(entry)
    }

    /// Drops an entry at `at` (snapped to the half hour). Overlaps are allowed.
    pub fn quick_add(
        &mut self,
        day: DayOfWeek,
        at: f32,
        duration: f32,
        name: &str,
        category: &str,
    ) -> Result<ScheduleEntry> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(Error::InvalidDuration { hours: duration });
        }
        let start = Clock::snap_to_half_hour(at);
        let entry = ScheduleEntry::new(day, start, start + duration, name, category, false)?;
        let overlapping = self
            .session
            .schedule
            .query()
            .r#where(|e| e.day == day && e.overlaps(entry.start, entry.end))
            .exists();
        self.ensure_category(&entry.category)?;
        self.session.schedule.add(entry.clone());
        self.observer
            .entry_added(&entry, Placement::Quick { overlapping });
        Ok(entry)
    }

    /// Rewrites the `index`-th entry of `day` (agenda order).
    pub fn edit_entry(
        &mut self,
        day: DayOfWeek,
        index: usize,
        edit: EntryEdit,
    ) -> Result<ScheduleEntry> {
        let before = self.session.schedule.entry_for_day_at(day, index)?.clone();
        let after = ScheduleEntry::new(day, edit.start, edit.end, edit.name, edit.category, edit.fixed)?;
        self.ensure_category(&after.category)?;
        self.session.schedule.update(&before, after.clone())?;
        self.observer.entry_changed(&before, &after);
        Ok(after)
    }

    pub fn remove_entry_at(&mut self, day: DayOfWeek, index: usize) -> Result<ScheduleEntry> {
        let entry = self.session.schedule.entry_for_day_at(day, index)?.clone();
        if !self.session.schedule.remove_entry(&entry) {
            return Err(Error::not_found("Entry", entry.name));
        }
        self.observer.entry_removed(&entry);
        Ok(entry)
    }

    pub fn clear_day(&mut self, day: DayOfWeek) -> usize {
        let removed = self.session.schedule.clear_day(day);
        self.observer.day_cleared(day, removed);
        removed
    }

    pub fn totals(&self) -> CategoryTotals {
        compute_totals(self.session.schedule.iter(), &self.session.categories)
    }

    fn ensure_category(&mut self, name: &str) -> Result<()> {
        if self.session.categories.ensure(name)? {
            self.observer.category_created(name);
        }
        Ok(())
    }
}
