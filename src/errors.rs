use thiserror::Error;

use crate::core::types::DayOfWeek;

// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the planner can report. None of them is fatal to a session.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Input validation ---------------------------------------------------
    /// Durations must be strictly positive.
    #[error("Invalid duration: {hours} hour(s). Duration must be positive.")]
    InvalidDuration { hours: f32 },

    /// A manually timed entry whose end does not come after its start.
    #[error("Invalid interval: end {end} must be greater than start {start}.")]
    InvalidInterval { start: f32, end: f32 },

    /// The slot finder exhausted the day window.
    #[error("No available {hours:.1} hour slot on {day}.")]
    NoSlotAvailable { day: DayOfWeek, hours: f32 },

    /// Names of categories and activities are unique.
    #[error("{kind} '{name}' already exists.")]
    DuplicateName { kind: &'static str, name: String },

    /// Lookup by name or index failed.
    #[error("{kind} '{name}' not found.")]
    NotFound { kind: &'static str, name: String },

    // ---- Parsing & Routing --------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing configuration item: {item}")]
    ConfigItemMissing { item: &'static str },

    // ---- Plumbing -----------------------------------------------------------
    #[error("{0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }

    pub fn duplicate<S: Into<String>>(kind: &'static str, name: S) -> Self {
        Error::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    pub fn not_found<S: Into<String>>(kind: &'static str, name: S) -> Self {
        Error::NotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}

/// Map an `Option<T>` into `Result<T, Error::ConfigItemMissing>` with a static key.
pub fn require_config_item<T>(opt: Option<T>, item: &'static str) -> Result<T> {
    opt.ok_or_else(|| Error::ConfigItemMissing { item })
}
