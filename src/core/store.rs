use std::cmp::Ordering;

use crate::core::models::ScheduleEntry;
use crate::core::types::DayOfWeek;
use crate::errors::{Error, Result};

/// Insertion-ordered collection of every scheduled entry in the week.
#[derive(Debug, Default, Clone)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Appends without any overlap check; placement is the caller's job.
    pub fn add(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Removes the first structurally-equal entry. Absent entries are a no-op.
    pub fn remove_entry(&mut self, entry: &ScheduleEntry) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replaces the first structurally-equal entry, keeping its position.
    pub fn update(&mut self, original: &ScheduleEntry, replacement: ScheduleEntry) -> Result<()> {
        replacement.validate()?;
        let slot = self
            .entries
            .iter_mut()
            .find(|e| **e == *original)
            .ok_or_else(|| Error::not_found("Entry", original.name.clone()))?;
        *slot = replacement;
        Ok(())
    }

    /// Entries of `day` by ascending start; equal starts keep insertion order.
    pub fn entries_for_day(&self, day: DayOfWeek) -> Vec<&ScheduleEntry> {
        self.query()
            .r#where(move |e| e.day == day)
            .order_with(|a, b| a.start.total_cmp(&b.start))
            .collect()
    }

    /// The `index`-th entry of [`ScheduleStore::entries_for_day`].
    pub fn entry_for_day_at(&self, day: DayOfWeek, index: usize) -> Result<&ScheduleEntry> {
        self.entries_for_day(day)
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::not_found("Entry", format!("#{index} on {day}")))
    }

    /// Drops every entry of `day` and reports how many went away.
    pub fn clear_day(&mut self, day: DayOfWeek) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.day != day);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn query(&self) -> Query<'_> {
        Query::new(&self.entries)
    }
}

pub struct Query<'a> {
    entries: &'a [ScheduleEntry],
    filters: Vec<Box<dyn Fn(&ScheduleEntry) -> bool + 'a>>,
    cmp: Option<Box<dyn Fn(&ScheduleEntry, &ScheduleEntry) -> Ordering + 'a>>,
}

impl<'a> Query<'a> {
    fn new(entries: &'a [ScheduleEntry]) -> Self {
        Self {
            entries,
            filters: Vec::new(),
            cmp: None,
        }
    }

    pub fn r#where(mut self, pred: impl Fn(&ScheduleEntry) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    pub fn order_with(
        mut self,
        cmp: impl Fn(&ScheduleEntry, &ScheduleEntry) -> Ordering + 'a,
    ) -> Self {
        self.cmp = Some(Box::new(cmp));
        self
    }

    /// Filtered entries; the sort is stable so ties stay in insertion order.
    pub fn collect(self) -> Vec<&'a ScheduleEntry> {
        let mut out: Vec<&'a ScheduleEntry> = self
            .entries
            .iter()
            .filter(|e| self.filters.iter().all(|f| f(*e)))
            .collect();
        if let Some(cmp) = &self.cmp {
            out.sort_by(|a, b| cmp(a, b));
        }
        out
    }

    pub fn exists(self) -> bool {
        self.entries
            .iter()
            .any(|e| self.filters.iter().all(|f| f(e)))
    }
}
