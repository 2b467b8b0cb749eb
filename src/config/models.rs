use crate::core::types::{Bool, DayOfWeek, HourRange};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

/// Longest accepted search step, in minutes.
pub const MAX_SLOT_STEP_MINUTES: u32 = 240;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayWindowConfigItem {
    pub value: HourRange,
    pub description: String,
}

impl Default for DayWindowConfigItem {
    fn default() -> Self {
        Self {
            value: HourRange {
                start: 8.0,
                end: 20.0,
            },
            description: "Hours searched when placing an activity automatically.".into(),
        }
    }
}

impl ConfigItem<HourRange> for DayWindowConfigItem {
    fn get_value(&self) -> &HourRange {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = HourRange::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotStepConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for SlotStepConfigItem {
    fn default() -> Self {
        Self {
            value: 30,
            description: "Minutes between candidate start times.".into(),
        }
    }
}

impl ConfigItem<u32> for SlotStepConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let minutes: u32 = new_value.trim().parse().map_err(|_| {
            Error::Parse(format!(
                "Invalid step: '{}'. Expected whole minutes.",
                new_value.trim()
            ))
        })?;
        if minutes == 0 || minutes > MAX_SLOT_STEP_MINUTES {
            return Err(Error::config(format!(
                "Slot step must be between 1 and {MAX_SLOT_STEP_MINUTES} minutes."
            )));
        }
        self.value = minutes;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultDayConfigItem {
    pub value: DayOfWeek,
    pub description: String,
}

impl Default for DefaultDayConfigItem {
    fn default() -> Self {
        Self {
            value: DayOfWeek::Wed,
            description: "Day selected when the planner starts.".into(),
        }
    }
}

impl ConfigItem<DayOfWeek> for DefaultDayConfigItem {
    fn get_value(&self) -> &DayOfWeek {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = DayOfWeek::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDefaultsConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for SeedDefaultsConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Start with the stock categories, activities and entries.".into(),
        }
    }
}

impl ConfigItem<Bool> for SeedDefaultsConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Write session log files.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
