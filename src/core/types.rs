use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

/// Hours in a day; entry times live in `0.0..=HOURS_PER_DAY`.
pub const HOURS_PER_DAY: f32 = 24.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Display, AsRefStr, EnumIterDerive,
)]
#[strum(ascii_case_insensitive)]
pub enum DayOfWeek {
    #[strum(serialize = "m", serialize = "mon", serialize = "monday", to_string = "M")]
    Mon,
    #[strum(
        serialize = "t",
        serialize = "tue",
        serialize = "tues",
        serialize = "tuesday",
        to_string = "T"
    )]
    Tue,
    #[strum(serialize = "w", serialize = "wed", serialize = "wednesday", to_string = "W")]
    Wed,
    #[strum(
        serialize = "th",
        serialize = "thu",
        serialize = "thur",
        serialize = "thursday",
        to_string = "Th"
    )]
    Thu,
    #[strum(serialize = "f", serialize = "fri", serialize = "friday", to_string = "F")]
    Fri,
    #[strum(serialize = "s", serialize = "sat", serialize = "saturday", to_string = "S")]
    Sat,
    #[strum(serialize = "su", serialize = "sun", serialize = "sunday", to_string = "Su")]
    Sun,
}

impl DayOfWeek {
    /// Accepts the short codes, common abbreviations, full names and `today`.
    pub fn try_from(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("today") {
            return Ok(crate::extensions::chrono::today());
        }
        Self::from_str(s.trim()).map_err(|_| {
            Error::Parse(format!(
                "Invalid day of the week: '{}'. Valid days: {}",
                s.trim(),
                Self::codes()
            ))
        })
    }

    /// Short codes in week order ("M, T, W, Th, F, S, Su").
    pub fn codes() -> String {
        Self::iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn full_name(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Monday",
            DayOfWeek::Tue => "Tuesday",
            DayOfWeek::Wed => "Wednesday",
            DayOfWeek::Thu => "Thursday",
            DayOfWeek::Fri => "Friday",
            DayOfWeek::Sat => "Saturday",
            DayOfWeek::Sun => "Sunday",
        }
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DayOfWeek, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        DayOfWeek::try_from(&s).map_err(serde::de::Error::custom)
    }
}

// =====
// Clock
// =====

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
enum ClockFormat {
    #[strum(serialize = "%I:%M%p")]
    Meridian,
    #[strum(serialize = "%H:%M")]
    TwentyFour,
}

/// Hours-since-midnight values as typed and printed by the planner.
pub struct Clock;

impl Clock {
    pub fn usage() -> String {
        "Supported formats: 13.5, 9:30AM, 1PM, 13:30".to_string()
    }

    /// Accepts decimal hours ("13.5") or clock times ("9:30AM", "1PM", "13:30").
    pub fn parse_hours(input: &str) -> Result<f32> {
        let token: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();

        let hours = match token.parse::<f32>() {
            Ok(h) => h,
            Err(_) => Self::parse_clock_token(&token)
                .ok_or_else(|| Error::Parse(Self::error_message(input)))?,
        };

        if !hours.is_finite() || !(0.0..=HOURS_PER_DAY).contains(&hours) {
            return Err(Error::Parse(format!(
                "Time '{}' is outside 0-24 hours.",
                input.trim()
            )));
        }
        Ok(hours)
    }

    /// Decimal hours, e.g. "1.5" or "0.25".
    pub fn parse_duration(input: &str) -> Result<f32> {
        let hours = input.trim().parse::<f32>().map_err(|_| {
            Error::Parse(format!(
                "Invalid duration: '{}'. Expected hours such as 1 or 0.5.",
                input.trim()
            ))
        })?;
        if !hours.is_finite() || hours <= 0.0 {
            return Err(Error::InvalidDuration { hours });
        }
        Ok(hours)
    }

    fn parse_clock_token(token: &str) -> Option<f32> {
        let token = Self::ensure_minutes(token);
        ClockFormat::iter()
            .find_map(|f| NaiveTime::parse_from_str(&token, f.as_ref()).ok())
            .map(|t| t.hour() as f32 + t.minute() as f32 / 60.0)
    }

    fn ensure_minutes(token: &str) -> String {
        if token.contains(':') {
            return token.to_string();
        }
        match token.strip_suffix("AM").or_else(|| token.strip_suffix("PM")) {
            Some(hour) => format!("{}:00{}", hour, &token[hour.len()..]),
            None => format!("{token}:00"),
        }
    }

    fn error_message(input: &str) -> String {
        format!("Invalid time: '{}'. {}", input.trim(), Self::usage())
    }

    /// "8:00 AM", "12:30 PM", "12:00 AM" for midnight.
    pub fn format(hours: f32) -> String {
        let mut h_int = hours.floor() as i32;
        let mut minutes = ((hours - h_int as f32) * 60.0).round() as i32;
        if minutes == 60 {
            h_int += 1;
            minutes = 0;
        }
        let suffix = if h_int < 12 { "AM" } else { "PM" };
        let h_disp = if (1..=12).contains(&h_int) {
            h_int
        } else if h_int > 12 {
            h_int - 12
        } else {
            12
        };
        format!("{h_disp}:{minutes:02} {suffix}")
    }

    /// Same as [`Clock::format`] without the space: "8:00AM".
    pub fn format_compact(hours: f32) -> String {
        Self::format(hours).replace(' ', "")
    }

    pub fn snap_to_half_hour(hours: f32) -> f32 {
        (hours * 2.0).round() / 2.0
    }
}

// ==========
// HourRange
// ==========

/// A validated `[start, end)` window in hours since midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourRange {
    pub start: f32,
    pub end: f32,
}

impl HourRange {
    pub fn new(start: f32, end: f32) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (start, end) = s.split_once('-').ok_or_else(|| {
            Error::Parse(format!(
                "Invalid time range format: '{}'. Expected format: '<start>-<end>'.",
                s
            ))
        })?;
        Self::new(Clock::parse_hours(start)?, Clock::parse_hours(end)?)
    }

    pub fn hours(&self) -> f32 {
        self.end - self.start
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            Clock::format_compact(self.start),
            Clock::format_compact(self.end)
        )
    }
}

impl Serialize for HourRange {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HourRange {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<HourRange, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        HourRange::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ====
// Rgb
// ====

/// 24-bit display color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Color used for categories that are missing or were created without one.
    pub const FALLBACK: Rgb = Rgb::new(0x99, 0x99, 0x99);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn try_from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Parse(format!(
                "Invalid color: '{}'. {}",
                raw,
                Self::usage()
            )));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => Err(Error::Parse(format!("Invalid color: '{}'.", raw))),
        }
    }

    pub fn usage() -> String {
        "Colors are written as #rrggbb, e.g. #4fa3c7.".to_string()
    }

    /// 24-bit foreground escape for terminals that support truecolor.
    pub fn ansi_fg(self) -> String {
        format!("\x1B[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    pub fn paint<S: AsRef<str>>(self, s: S) -> String {
        format!(
            "{}{}{}",
            self.ansi_fg(),
            s.as_ref(),
            crate::ui::ansi::STYLE_RESET
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Rgb, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// =====
// Bool
// =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "yes", serialize = "y", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "no", serialize = "n", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
