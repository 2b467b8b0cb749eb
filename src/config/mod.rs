pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, DayWindowConfigItem, DefaultDayConfigItem, FileLoggingConfigItem,
    MAX_SLOT_STEP_MINUTES, SeedDefaultsConfigItem, SlotStepConfigItem,
};
use crate::core::types::{DayOfWeek, HourRange};
use crate::errors::{Error, Result, require_config_item};
use crate::extensions::enums::valid_csv;
use crate::planner::slot::SlotWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    DayWindow,
    SlotStepMinutes,
    DefaultDay,
    SeedDefaults,
    FileLoggingEnabled,
}

impl ConfigKey {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                s.trim(),
                valid_csv::<ConfigKey>()
            ))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub day_window: DayWindowConfigItem,
    pub slot_step_minutes: SlotStepConfigItem,
    pub default_day: DefaultDayConfigItem,
    pub seed_defaults: SeedDefaultsConfigItem,
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// On-disk shape; the search window keys are mandatory, the rest fall back to defaults.
#[derive(Deserialize)]
struct RawConfigFile {
    day_window: Option<DayWindowConfigItem>,
    slot_step_minutes: Option<SlotStepConfigItem>,
    #[serde(default)]
    default_day: DefaultDayConfigItem,
    #[serde(default)]
    seed_defaults: SeedDefaultsConfigItem,
    #[serde(default)]
    file_logging_enabled: FileLoggingConfigItem,
}

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = Error;

    fn try_from(raw: RawConfigFile) -> Result<Self> {
        let slot_step_minutes = require_config_item(raw.slot_step_minutes, "slot_step_minutes")?;
        if slot_step_minutes.value == 0 || slot_step_minutes.value > MAX_SLOT_STEP_MINUTES {
            return Err(Error::config(format!(
                "slot_step_minutes must be between 1 and {MAX_SLOT_STEP_MINUTES}, got {}.",
                slot_step_minutes.value
            )));
        }
        Ok(Self {
            day_window: require_config_item(raw.day_window, "day_window")?,
            slot_step_minutes,
            default_day: raw.default_day,
            seed_defaults: raw.seed_defaults,
            file_logging_enabled: raw.file_logging_enabled,
        })
    }
}

/// Key, description, current value.
pub type ConfigRow = (String, String, String);

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<ConfigRow>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &ConfigRow> {
        self.0.iter()
    }
}

impl Index<usize> for ConfigRows {
    type Output = ConfigRow;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// A recorded `config set`: key, old value, new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub key: ConfigKey,
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let raw: RawConfigFile = serde_json::from_str(&text).map_err(|e| {
            Error::config(format!("Invalid JSON in '{}': {}", path.display(), e))
        })?;
        Ok(Self {
            path,
            data: ConfigFile::try_from(raw)?,
        })
    }

    /// Writes a config with every default value to `path`.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self {
            path: path.as_ref().to_path_buf(),
            data: ConfigFile::default(),
        };
        config.save()?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn day_window(&self) -> &HourRange {
        self.data.day_window.get_value()
    }
    pub fn slot_step_minutes(&self) -> u32 {
        *self.data.slot_step_minutes.get_value()
    }
    pub fn default_day(&self) -> DayOfWeek {
        *self.data.default_day.get_value()
    }
    pub fn seed_defaults(&self) -> bool {
        self.data.seed_defaults.get_value().0
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    /// Search window built from `DAY_WINDOW` and `SLOT_STEP_MINUTES`.
    pub fn slot_window(&self) -> Result<SlotWindow> {
        SlotWindow::from_range(self.day_window(), self.slot_step_minutes())
    }

    fn value_of(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DayWindow => self.day_window().to_string(),
            ConfigKey::SlotStepMinutes => self.slot_step_minutes().to_string(),
            ConfigKey::DefaultDay => self.default_day().to_string(),
            ConfigKey::SeedDefaults => self.data.seed_defaults.get_value().to_string(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.get_value().to_string(),
        }
    }

    fn description_of(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::DayWindow => self.data.day_window.description(),
            ConfigKey::SlotStepMinutes => self.data.slot_step_minutes.description(),
            ConfigKey::DefaultDay => self.data.default_day.description(),
            ConfigKey::SeedDefaults => self.data.seed_defaults.description(),
            ConfigKey::FileLoggingEnabled => self.data.file_logging_enabled.description(),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    (
                        key.to_string(),
                        self.description_of(key).to_string(),
                        self.value_of(key),
                    )
                })
                .collect(),
        )
    }

    pub fn set(&mut self, key: &str, new_value: &str) -> Result<ConfigChange> {
        self.set_key(ConfigKey::try_from(key)?, new_value)
    }

    /// Validates and applies one value, then writes the file back.
    /// A failed write leaves the in-memory value untouched.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<ConfigChange> {
        let old = self.value_of(key);
        let mut updated = self.data.clone();
        match key {
            ConfigKey::DayWindow => updated.day_window.set_value(new_value)?,
            ConfigKey::SlotStepMinutes => updated.slot_step_minutes.set_value(new_value)?,
            ConfigKey::DefaultDay => updated.default_day.set_value(new_value)?,
            ConfigKey::SeedDefaults => updated.seed_defaults.set_value(new_value)?,
            ConfigKey::FileLoggingEnabled => updated.file_logging_enabled.set_value(new_value)?,
        }
        Self::write(&self.path, &updated)?;
        self.data = updated;
        Ok(ConfigChange {
            key,
            old,
            new: self.value_of(key),
        })
    }

    pub fn save(&self) -> Result<()> {
        Self::write(&self.path, &self.data)
    }

    fn write(path: &Path, data: &ConfigFile) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).map_err(|e| {
            Error::config(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}
