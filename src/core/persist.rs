use crate::core::catalog::{ActivityBook, CategoryBook, ReminderList};
use crate::core::models::{ActivityTemplate, Category, ScheduleEntry};
use crate::core::session::Session;
use crate::core::store::ScheduleStore;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension added to save names typed without one.
pub const SAVE_EXTENSION: &str = "json";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub activities: Vec<ActivityTemplate>,
    #[serde(default)]
    pub entries: Vec<ScheduleEntry>,
    #[serde(default)]
    pub reminders: Vec<String>,
}

impl SaveFile {
    pub fn from_session(session: &Session) -> Self {
        Self {
            categories: session.categories.iter().cloned().collect(),
            activities: session.activities.iter().cloned().collect(),
            entries: session.schedule.iter().cloned().collect(),
            reminders: session
                .reminders
                .iter()
                .map(|r| r.text().to_string())
                .collect(),
        }
    }

    /// Rebuilds a session, rejecting the whole file on the first invalid record.
    pub fn into_session(self) -> Result<Session> {
        let mut categories = CategoryBook::new();
        for category in self.categories {
            categories.add(category.name, category.color)?;
        }

        let mut activities = ActivityBook::new();
        for template in self.activities {
            activities.add(template)?;
        }

        let mut schedule = ScheduleStore::new();
        for (idx, entry) in self.entries.into_iter().enumerate() {
            entry.validate().map_err(|e| {
                Error::Domain(format!("Entry #{} ('{}') is invalid: {e}", idx + 1, entry.name))
            })?;
            schedule.add(entry);
        }

        let mut reminders = ReminderList::new();
        for text in self.reminders {
            reminders.add(text)?;
        }

        Ok(Session {
            schedule,
            categories,
            activities,
            reminders,
        })
    }
}

/// Adds the `.json` extension when `path` has none.
pub fn with_save_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(SAVE_EXTENSION)
    }
}

pub fn save_state(session: &Session, path: &Path) -> Result<PathBuf> {
    let path = with_save_extension(path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string_pretty(&SaveFile::from_session(session))?;
    fs::write(&path, contents)?;
    Ok(path)
}

/// Parses and validates `path`; the caller swaps the result in only on success.
pub fn load_state(path: &Path) -> Result<Session> {
    let path = with_save_extension(path);
    let contents = fs::read_to_string(&path)?;
    let file: SaveFile = serde_json::from_str(&contents)?;
    file.into_session()
}
