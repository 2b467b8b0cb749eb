use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::core::types::{DayOfWeek, Rgb};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::planner::EntryEdit;
use crate::planner::totals::CategoryTotals;

/// Commands that read or change the schedule itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ScheduleCommand {
    Day,
    Show,
    Place,
    Slot,
    Fixed,
    Quick,
    Edit,
    Remove,
    Clear,
    Totals,
}

/// Commands that manage presets, categories and reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CatalogCommand {
    Activity,
    Category,
    Reminder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GlobalCommand {
    Save,
    Read,
    Config,
    Man,
}

/// Sub-verb of a catalog command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CatalogAction {
    Add,
    Edit,
    Rename,
    Color,
    #[strum(serialize = "del", serialize = "delete", to_string = "del")]
    Del,
}

macro_rules! impl_try_from_word {
    ($ty:ty, $what:literal) => {
        impl $ty {
            pub fn try_from(s: &str) -> Result<Self> {
                Self::from_str(s.trim()).map_err(|_| {
                    Error::Parse(format!(
                        "Invalid {}: '{}'. Valid values: {}",
                        $what,
                        s.trim(),
                        valid_csv::<$ty>()
                    ))
                })
            }
        }
    };
}

impl_try_from_word!(ScheduleCommand, "schedule command");
impl_try_from_word!(CatalogCommand, "catalog command");
impl_try_from_word!(GlobalCommand, "command");
impl_try_from_word!(CatalogAction, "action");

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityRequest {
    List,
    Add {
        name: String,
        category: String,
        hours: f32,
    },
    Edit {
        old_name: String,
        name: String,
        category: String,
        hours: f32,
    },
    Delete(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryRequest {
    List,
    Add { name: String, color: Option<Rgb> },
    Rename { old: String, new: String },
    Recolor { name: String, color: Rgb },
    Delete(String),
}

/// Reminder indices are zero-based here; users type them one-based.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderRequest {
    List,
    Add(String),
    Edit { index: usize, text: String },
    Delete(usize),
}

/// One parsed command line. Entry indices are zero-based positions in the day's agenda.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    SelectDay(DayOfWeek),
    Show(Option<DayOfWeek>),
    Place {
        activity: String,
        day: Option<DayOfWeek>,
    },
    FindSlot {
        hours: f32,
        day: Option<DayOfWeek>,
    },
    AddFixed {
        day: DayOfWeek,
        start: f32,
        end: f32,
        name: String,
        category: String,
    },
    QuickAdd {
        at: f32,
        hours: f32,
        name: String,
        category: Option<String>,
    },
    Edit {
        index: usize,
        edit: EntryEdit,
    },
    Remove {
        index: usize,
    },
    Clear(Option<DayOfWeek>),
    Totals,
    Activity(ActivityRequest),
    Category(CategoryRequest),
    Reminder(ReminderRequest),
    Save(Option<String>),
    Read(String),
    ShowConfig,
    SetConfig {
        key: String,
        value: String,
    },
    Man(Option<String>),
}

/// What the REPL should show after a request succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// One-line confirmation.
    Done(String),
    Agenda(DayOfWeek),
    Slot {
        day: DayOfWeek,
        start: f32,
        hours: f32,
    },
    Totals(CategoryTotals),
    Activities,
    Categories,
    Reminders,
    ConfigTable,
    Manual(String),
}
