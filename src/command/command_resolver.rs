use crate::command::request::{
    ActivityRequest, CatalogAction, CatalogCommand, CategoryRequest, GlobalCommand,
    ReminderRequest, Request, ScheduleCommand,
};
use crate::command::tokens::TokenStream;
use crate::core::types::{Bool, Clock, DayOfWeek, Rgb};
use crate::errors::{Error, Result, require_parse};
use crate::planner::EntryEdit;

pub trait CommandResolver {
    fn can_resolve(&self, command: &str) -> bool;
    fn resolve(&self, command: &str, args: &[String]) -> Result<Request>;
}

impl ScheduleCommand {
    pub fn usage(self) -> &'static str {
        match self {
            ScheduleCommand::Day => "day <day>",
            ScheduleCommand::Show => "show [day]",
            ScheduleCommand::Place => "place \"<activity>\" [day]",
            ScheduleCommand::Slot => "slot <hours> [day]",
            ScheduleCommand::Fixed => "fixed <day> <start> <end> \"<name>\" <category>",
            ScheduleCommand::Quick => "quick <at> <hours> \"<name>\" [category]",
            ScheduleCommand::Edit => {
                "edit <index> \"<name>\" <start> <end> <category> <true/false>"
            }
            ScheduleCommand::Remove => "remove <index>",
            ScheduleCommand::Clear => "clear [day]",
            ScheduleCommand::Totals => "totals",
        }
    }
}

impl CatalogCommand {
    pub fn usage(self) -> &'static str {
        match self {
            CatalogCommand::Activity => {
                "activity | activity add \"<name>\" <category> <hours> | activity edit \"<old>\" \"<new>\" <category> <hours> | activity del \"<name>\""
            }
            CatalogCommand::Category => {
                "category | category add <name> [#rrggbb] | category rename <old> <new> | category color <name> <#rrggbb> | category del <name>"
            }
            CatalogCommand::Reminder => {
                "reminder | reminder add \"<text>\" | reminder edit <index> \"<text>\" | reminder del <index>"
            }
        }
    }
}

impl GlobalCommand {
    pub fn usage(self) -> &'static str {
        match self {
            GlobalCommand::Save => "save [file]",
            GlobalCommand::Read => "read <file>",
            GlobalCommand::Config => "config | config set <KEY> <value>",
            GlobalCommand::Man => "man [topic]",
        }
    }
}

// =======
// Helpers
// =======

fn missing(usage: &str) -> String {
    format!("Missing argument(s).\nUsage: {usage}")
}

fn take<'a>(ts: &mut TokenStream<'a>, usage: &str) -> Result<&'a str> {
    require_parse(ts.next(), missing(usage))
}

fn finish(ts: &mut TokenStream<'_>, usage: &str) -> Result<()> {
    match ts.next() {
        None => Ok(()),
        Some(extra) => Err(Error::parse(format!(
            "Unexpected argument '{extra}'.\nUsage: {usage}"
        ))),
    }
}

fn optional_day(ts: &mut TokenStream<'_>) -> Result<Option<DayOfWeek>> {
    ts.next().map(DayOfWeek::try_from).transpose()
}

fn name(token: &str, what: &str) -> Result<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(Error::parse(format!("{what} cannot be empty.")));
    }
    Ok(trimmed.to_string())
}

/// One-based index as typed, zero-based on return.
fn index(token: &str) -> Result<usize> {
    match token.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(Error::parse(format!(
            "Invalid index: '{}'. Indices start at 1.",
            token.trim()
        ))),
    }
}

// ========
// Resolvers
// ========

pub struct ScheduleResolver;

impl CommandResolver for ScheduleResolver {
    fn can_resolve(&self, command: &str) -> bool {
        ScheduleCommand::try_from(command).is_ok()
    }

    fn resolve(&self, command: &str, args: &[String]) -> Result<Request> {
        let cmd = ScheduleCommand::try_from(command)?;
        let usage = cmd.usage();
        let mut ts = TokenStream::new(args);
        let request = match cmd {
            ScheduleCommand::Day => Request::SelectDay(DayOfWeek::try_from(take(&mut ts, usage)?)?),
            ScheduleCommand::Show => Request::Show(optional_day(&mut ts)?),
            ScheduleCommand::Place => Request::Place {
                activity: name(take(&mut ts, usage)?, "Activity name")?,
                day: optional_day(&mut ts)?,
            },
            ScheduleCommand::Slot => Request::FindSlot {
                hours: Clock::parse_duration(take(&mut ts, usage)?)?,
                day: optional_day(&mut ts)?,
            },
            ScheduleCommand::Fixed => {
                let day = DayOfWeek::try_from(take(&mut ts, usage)?)?;
                let start = Clock::parse_hours(take(&mut ts, usage)?)?;
                let end = Clock::parse_hours(take(&mut ts, usage)?)?;
                Request::AddFixed {
                    day,
                    start,
                    end,
                    name: name(take(&mut ts, usage)?, "Entry name")?,
                    category: name(take(&mut ts, usage)?, "Category")?,
                }
            }
            ScheduleCommand::Quick => Request::QuickAdd {
                at: Clock::parse_hours(take(&mut ts, usage)?)?,
                hours: Clock::parse_duration(take(&mut ts, usage)?)?,
                name: name(take(&mut ts, usage)?, "Entry name")?,
                category: ts.next().map(|c| name(c, "Category")).transpose()?,
            },
            ScheduleCommand::Edit => {
                let index = index(take(&mut ts, usage)?)?;
                let entry_name = name(take(&mut ts, usage)?, "Entry name")?;
                let start = Clock::parse_hours(take(&mut ts, usage)?)?;
                let end = Clock::parse_hours(take(&mut ts, usage)?)?;
                let category = name(take(&mut ts, usage)?, "Category")?;
                let fixed = Bool::try_from_str(take(&mut ts, usage)?)?.0;
                Request::Edit {
                    index,
                    edit: EntryEdit {
                        name: entry_name,
                        start,
                        end,
                        category,
                        fixed,
                    },
                }
            }
            ScheduleCommand::Remove => Request::Remove {
                index: index(take(&mut ts, usage)?)?,
            },
            ScheduleCommand::Clear => Request::Clear(optional_day(&mut ts)?),
            ScheduleCommand::Totals => Request::Totals,
        };
        finish(&mut ts, usage)?;
        Ok(request)
    }
}

pub struct CatalogResolver;

impl CatalogResolver {
    fn activity(ts: &mut TokenStream<'_>, usage: &str) -> Result<ActivityRequest> {
        let Some(action) = ts.next() else {
            return Ok(ActivityRequest::List);
        };
        Ok(match CatalogAction::try_from(action)? {
            CatalogAction::Add => ActivityRequest::Add {
                name: name(take(ts, usage)?, "Activity name")?,
                category: name(take(ts, usage)?, "Category")?,
                hours: Clock::parse_duration(take(ts, usage)?)?,
            },
            CatalogAction::Edit => ActivityRequest::Edit {
                old_name: name(take(ts, usage)?, "Activity name")?,
                name: name(take(ts, usage)?, "Activity name")?,
                category: name(take(ts, usage)?, "Category")?,
                hours: Clock::parse_duration(take(ts, usage)?)?,
            },
            CatalogAction::Del => ActivityRequest::Delete(name(take(ts, usage)?, "Activity name")?),
            other => return Err(Error::parse(format!(
                "'activity {other}' is not supported.\nUsage: {usage}"
            ))),
        })
    }

    fn category(ts: &mut TokenStream<'_>, usage: &str) -> Result<CategoryRequest> {
        let Some(action) = ts.next() else {
            return Ok(CategoryRequest::List);
        };
        Ok(match CatalogAction::try_from(action)? {
            CatalogAction::Add => CategoryRequest::Add {
                name: name(take(ts, usage)?, "Category")?,
                color: ts.next().map(Rgb::try_from_str).transpose()?,
            },
            CatalogAction::Rename | CatalogAction::Edit => CategoryRequest::Rename {
                old: name(take(ts, usage)?, "Category")?,
                new: name(take(ts, usage)?, "Category")?,
            },
            CatalogAction::Color => CategoryRequest::Recolor {
                name: name(take(ts, usage)?, "Category")?,
                color: Rgb::try_from_str(take(ts, usage)?)?,
            },
            CatalogAction::Del => CategoryRequest::Delete(name(take(ts, usage)?, "Category")?),
        })
    }

    fn reminder(ts: &mut TokenStream<'_>, usage: &str) -> Result<ReminderRequest> {
        let Some(action) = ts.next() else {
            return Ok(ReminderRequest::List);
        };
        Ok(match CatalogAction::try_from(action)? {
            CatalogAction::Add => ReminderRequest::Add(name(take(ts, usage)?, "Reminder")?),
            CatalogAction::Edit => ReminderRequest::Edit {
                index: index(take(ts, usage)?)?,
                text: name(take(ts, usage)?, "Reminder")?,
            },
            CatalogAction::Del => ReminderRequest::Delete(index(take(ts, usage)?)?),
            other => return Err(Error::parse(format!(
                "'reminder {other}' is not supported.\nUsage: {usage}"
            ))),
        })
    }
}

impl CommandResolver for CatalogResolver {
    fn can_resolve(&self, command: &str) -> bool {
        CatalogCommand::try_from(command).is_ok()
    }

    fn resolve(&self, command: &str, args: &[String]) -> Result<Request> {
        let cmd = CatalogCommand::try_from(command)?;
        let usage = cmd.usage();
        let mut ts = TokenStream::new(args);
        let request = match cmd {
            CatalogCommand::Activity => Request::Activity(Self::activity(&mut ts, usage)?),
            CatalogCommand::Category => Request::Category(Self::category(&mut ts, usage)?),
            CatalogCommand::Reminder => Request::Reminder(Self::reminder(&mut ts, usage)?),
        };
        finish(&mut ts, usage)?;
        Ok(request)
    }
}

pub struct GlobalResolver;

impl CommandResolver for GlobalResolver {
    fn can_resolve(&self, command: &str) -> bool {
        GlobalCommand::try_from(command).is_ok()
    }

    fn resolve(&self, command: &str, args: &[String]) -> Result<Request> {
        let cmd = GlobalCommand::try_from(command)?;
        let usage = cmd.usage();
        let mut ts = TokenStream::new(args);
        let request = match cmd {
            GlobalCommand::Save => Request::Save(ts.next().map(|f| name(f, "File name")).transpose()?),
            GlobalCommand::Read => Request::Read(name(take(&mut ts, usage)?, "File name")?),
            GlobalCommand::Config => match ts.next() {
                None => Request::ShowConfig,
                Some(word) if word.eq_ignore_ascii_case("set") => Request::SetConfig {
                    key: take(&mut ts, usage)?.to_string(),
                    value: take(&mut ts, usage)?.to_string(),
                },
                Some(other) => {
                    return Err(Error::parse(format!(
                        "Unexpected argument '{other}'.\nUsage: {usage}"
                    )));
                }
            },
            GlobalCommand::Man => Request::Man(ts.next().map(str::to_string)),
        };
        finish(&mut ts, usage)?;
        Ok(request)
    }
}
