use crate::core::store::ScheduleStore;
use crate::core::types::{DayOfWeek, HourRange};
use crate::errors::{Error, Result};


/// Search bounds for automatic placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotWindow {
    pub day_start: f32,
    pub day_end: f32,
    pub step: f32,
}

impl Default for SlotWindow {
    fn default() -> Self {
        Self {
            day_start: 8.0,
            day_end: 20.0,
            step: 0.5,
        }
    }
}

impl SlotWindow {
    pub fn new(day_start: f32, day_end: f32, step: f32) -> Result<Self> {
        if day_end <= day_start {
            return Err(Error::InvalidInterval {
                start: day_start,
                end: day_end,
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::Parse(format!(
                "Slot step must be positive, got {step} hour(s)."
            )));
        }
        Ok(Self {
            day_start,
            day_end,
            step,
        })
    }

    pub fn from_range(range: &HourRange, step_minutes: u32) -> Result<Self> {
        Self::new(range.start, range.end, step_minutes as f32 / 60.0)
    }

    /// Same window, searching from `start` instead of the configured day start.
    pub fn starting_at(self, start: f32) -> Self {
        Self {
            day_start: start,
            ..self
        }
    }

    /// Candidate starts `day_start + k * step` that still leave room for `duration`.
    pub fn candidates(&self, duration: f32) -> impl Iterator<Item = f32> + '_ {
        (0u32..)
            .map(move |k| Self::snap_to_minute(self.day_start + k as f32 * self.step))
            .take_while(move |c| self.ends_in_window(c + duration))
    }

    /// `end <= day_end`, allowing one unit of f32 rounding at the window end.
    pub fn ends_in_window(&self, end: f32) -> bool {
        end <= self.day_end + self.day_end.abs().max(1.0) * f32::EPSILON
    }

    fn snap_to_minute(hours: f32) -> f32 {
        (hours * 60.0).round() / 60.0
    }
}

pub trait SlotPicker {
    /// Choose a start for `duration` hours given the `busy` intervals of one day.
    fn pick(&self, busy: &[(f32, f32)], duration: f32, window: &SlotWindow) -> Option<f32>;
}

/// Earliest valid candidate; gaps are not minimized.
pub struct FirstFitPicker;

impl SlotPicker for FirstFitPicker {
    fn pick(&self, busy: &[(f32, f32)], duration: f32, window: &SlotWindow) -> Option<f32> {
        window.candidates(duration).find(|&start| {
            let end = start + duration;
            !busy
                .iter()
                .any(|&(s, e)| crate::core::models::overlaps(start, end, s, e))
        })
    }
}

/// First free start on `day` for an entry of `duration` hours.
pub fn find_slot(
    store: &ScheduleStore,
    day: DayOfWeek,
    duration: f32,
    window: &SlotWindow,
) -> Result<f32> {
    find_slot_with(&FirstFitPicker, store, day, duration, window)
}

pub fn find_slot_with(
    picker: &dyn SlotPicker,
    store: &ScheduleStore,
    day: DayOfWeek,
    duration: f32,
    window: &SlotWindow,
) -> Result<f32> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(Error::InvalidDuration { hours: duration });
    }
    let busy: Vec<(f32, f32)> = store
        .entries_for_day(day)
        .into_iter()
        .map(|e| (e.start, e.end))
        .collect();

    picker
        .pick(&busy, duration, window)
        .ok_or(Error::NoSlotAvailable {
            day,
            hours: duration,
        })
}
