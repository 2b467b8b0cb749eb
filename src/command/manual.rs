use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive, EnumString};

use crate::command::request::{CatalogCommand, GlobalCommand, ScheduleCommand};
use crate::config::ConfigKey;
use crate::core::types::{Clock, DayOfWeek, Rgb};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, DisplayDerive, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ManualTopic {
    General,
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
    Activity,
    Category,
    Reminder,
    Save,
    Read,
    Config,
    Man,
    Time,
}

impl ManualTopic {
    pub fn try_from(input: &str) -> Result<Self> {
        Self::from_str(input.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unsupported manual topic: '{}'. Valid topics: {}",
                input.trim(),
                valid_csv::<ManualTopic>()
            ))
        })
    }
}

#[derive(Debug, Clone)]
pub struct ManualSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManualPage {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        Self::write_section("NAME", &[format!("{} - {}", self.name, self.summary)], &mut out);
        for section in &self.sections {
            Self::write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct ManualPageBuilder {
    page: ManualPage,
}

impl ManualPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            page: ManualPage {
                name: name.into(),
                summary: summary.into(),
                sections: Vec::new(),
            },
        }
    }

    pub fn section<S: Into<String>>(mut self, title: &str, body: impl IntoIterator<Item = S>) -> Self {
        self.page.sections.push(ManualSection {
            title: title.to_string(),
            body: body.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> ManualPage {
        self.page
    }
}

#[derive(Default)]
pub struct ManualCatalog;

impl ManualCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn page_for(&self, topic: Option<&str>) -> Result<ManualPage> {
        let topic = match topic {
            None => ManualTopic::General,
            Some(name) => ManualTopic::try_from(name)?,
        };
        Ok(self.build_page(topic))
    }

    pub fn topics(&self) -> Vec<String> {
        ManualTopic::iter().map(|t| t.to_string()).collect()
    }

    fn build_page(&self, topic: ManualTopic) -> ManualPage {
        use ScheduleCommand as S;
        match topic {
            ManualTopic::General => self.general_page(),
            ManualTopic::Day => self.command_page(
                S::Day.usage(),
                "Select the working day.",
                vec![
                    format!("Days: {}", DayOfWeek::codes()),
                    "Full names, three-letter abbreviations and 'today' also work.".into(),
                ],
            ),
            ManualTopic::Show => self.command_page(
                S::Show.usage(),
                "Show the agenda and time grid of a day.",
                vec![
                    "Entries are listed by start time; the # column is the index used by edit and remove.".into(),
                    "The grid shows 8:00 AM to 8:00 PM, two rows per hour.".into(),
                ],
            ),
            ManualTopic::Place => self.command_page(
                S::Place.usage(),
                "Schedule an activity preset at the first free slot.",
                vec![
                    "Candidate starts step through the configured DAY_WINDOW by SLOT_STEP_MINUTES.".into(),
                    "The earliest start that overlaps nothing on that day wins.".into(),
                ],
            ),
            ManualTopic::Slot => self.command_page(
                S::Slot.usage(),
                "Report the first free slot without scheduling anything.",
                vec!["Uses the same search as place.".into()],
            ),
            ManualTopic::Fixed => self.command_page(
                S::Fixed.usage(),
                "Add a fixed entry at an exact time.",
                vec![
                    "The end must come after the start.".into(),
                    "Overlaps with other entries are allowed.".into(),
                ],
            ),
            ManualTopic::Quick => self.command_page(
                S::Quick.usage(),
                "Drop an entry on the working day at a grid position.",
                vec![
                    "The start snaps to the nearest half hour.".into(),
                    "Overlaps are allowed and reported as warnings.".into(),
                    "The category defaults to Personal.".into(),
                ],
            ),
            ManualTopic::Edit => self.command_page(
                S::Edit.usage(),
                "Rewrite an entry of the working day.",
                vec!["<index> is the # column from show.".into()],
            ),
            ManualTopic::Remove => self.command_page(
                S::Remove.usage(),
                "Remove an entry of the working day.",
                vec!["<index> is the # column from show.".into()],
            ),
            ManualTopic::Clear => self.command_page(
                S::Clear.usage(),
                "Remove every entry of a day.",
                vec!["Defaults to the working day.".into()],
            ),
            ManualTopic::Totals => self.command_page(
                S::Totals.usage(),
                "Hours per category for the whole week.",
                vec!["Categories without hours are listed with 0.0h.".into()],
            ),
            ManualTopic::Activity => self.command_page(
                CatalogCommand::Activity.usage(),
                "List and manage activity presets.",
                vec!["Durations are decimal hours, e.g. 0.5.".into()],
            ),
            ManualTopic::Category => self.command_page(
                CatalogCommand::Category.usage(),
                "List and manage categories.",
                vec![
                    Rgb::usage(),
                    format!("New categories default to {}.", Rgb::FALLBACK),
                    "Renaming or deleting a category leaves existing entries unchanged.".into(),
                ],
            ),
            ManualTopic::Reminder => self.command_page(
                CatalogCommand::Reminder.usage(),
                "List and manage reminders.",
                vec!["<index> is the # column of the reminder list.".into()],
            ),
            ManualTopic::Save => self.command_page(
                GlobalCommand::Save.usage(),
                "Write the session to a JSON file.",
                vec![
                    "Bare file names go to the saves directory; .json is added when missing.".into(),
                    "Defaults to weekplan.json.".into(),
                ],
            ),
            ManualTopic::Read => self.command_page(
                GlobalCommand::Read.usage(),
                "Replace the session with a saved file.",
                vec!["The file is fully validated before anything is replaced.".into()],
            ),
            ManualTopic::Config => self.command_page(
                GlobalCommand::Config.usage(),
                "View or edit configuration values.",
                vec![format!("Keys: {}", valid_csv::<ConfigKey>())],
            ),
            ManualTopic::Man => self.command_page(
                GlobalCommand::Man.usage(),
                "Show manual pages for commands and topics.",
                vec![
                    format!("Topics: {}", self.topics().join(", ")),
                    "Use 'man' with no topic for the general manual.".into(),
                ],
            ),
            ManualTopic::Time => ManualPageBuilder::new("time", "Time and duration formats.")
                .section("DESCRIPTION", [
                    Clock::usage(),
                    "Durations are decimal hours: 1, 0.5, 1.25.".to_string(),
                    "Names containing spaces go in double quotes.".to_string(),
                ])
                .build(),
        }
    }

    fn general_page(&self) -> ManualPage {
        let commands = ScheduleCommand::iter()
            .map(|c| c.usage())
            .chain(CatalogCommand::iter().flat_map(|c| c.usage().split(" | ")))
            .chain(GlobalCommand::iter().flat_map(|c| c.usage().split(" | ")))
            .chain(["exit"]);
        ManualPageBuilder::new("weekplan", "Weekly schedule planner.")
            .section("SYNOPSIS", ["<command> [args]"])
            .section("COMMANDS", commands)
            .section(
                "TOPICS",
                [
                    "Use 'man <topic>' for command-specific details.".to_string(),
                    format!("Available topics: {}", self.topics().join(", ")),
                ],
            )
            .build()
    }

    fn command_page(&self, synopsis: &str, summary: &str, description: Vec<String>) -> ManualPage {
        let name = synopsis.split_whitespace().next().unwrap_or(synopsis);
        ManualPageBuilder::new(name, summary)
            .section("SYNOPSIS", synopsis.split(" | "))
            .section("DESCRIPTION", description)
            .section("SEE ALSO", ["man time", "show"])
            .build()
    }
}
