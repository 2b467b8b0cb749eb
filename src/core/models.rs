use crate::core::types::{Clock, DayOfWeek, Rgb};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open overlap test: `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`.
/// Touching intervals (`e1 == s2`) do not overlap.
#[inline]
pub fn overlaps(s1: f32, e1: f32, s2: f32, e2: f32) -> bool {
    s1 < e2 && s2 < e1
}

// =============
// ScheduleEntry
// =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: DayOfWeek,
    pub start: f32,
    pub end: f32,
    pub name: String,
    pub category: String,
    /// Not auto-movable.
    #[serde(default)]
    pub fixed: bool,
}

impl ScheduleEntry {
    pub fn new(
        day: DayOfWeek,
        start: f32,
        end: f32,
        name: impl Into<String>,
        category: impl Into<String>,
        fixed: bool,
    ) -> Result<Self> {
        Self::validate_interval(start, end)?;
        let category = Self::clean_category(category.into())?;
        Ok(Self {
            day,
            start,
            end,
            name: name.into(),
            category,
            fixed,
        })
    }

    /// Category labels are stored trimmed so they match the category book.
    fn clean_category(category: String) -> Result<String> {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("Category name cannot be empty.".into()));
        }
        Ok(trimmed.to_string())
    }

    pub fn validate_interval(start: f32, end: f32) -> Result<()> {
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        Self::validate_interval(self.start, self.end)?;
        if self.category.trim().is_empty() {
            return Err(Error::Parse("Category name cannot be empty.".into()));
        }
        Ok(())
    }

    /// Length in hours, clamped at zero for malformed entries.
    pub fn hours(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    pub fn overlaps(&self, start: f32, end: f32) -> bool {
        overlaps(self.start, self.end, start, end)
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = if self.fixed { " (Fixed)" } else { "" };
        write!(
            f,
            "{} - {}: {} — {}{}",
            Clock::format(self.start),
            Clock::format(self.end),
            self.name,
            self.category,
            fixed
        )
    }
}

// ========
// Category
// ========

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: Rgb,
}

impl Category {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.name, self.color)
    }
}

// ================
// ActivityTemplate
// ================

/// Preset used to create entries; never scheduled itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTemplate {
    pub name: String,
    pub category: String,
    pub duration: f32,
}

impl ActivityTemplate {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        duration: f32,
    ) -> Result<Self> {
        let template = Self {
            name: name.into(),
            category: category.into(),
            duration,
        };
        template.validate()?;
        Ok(template)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(Error::InvalidDuration {
                hours: self.duration,
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::Parse("Activity name cannot be empty.".into()));
        }
        Ok(())
    }
}

impl fmt::Display for ActivityTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {} • {}h", self.name, self.category, self.duration)
    }
}

// ========
// Reminder
// ========

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reminder(String);

impl Reminder {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::Parse("Reminder text cannot be empty.".into()));
        }
        Ok(Self(text))
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
