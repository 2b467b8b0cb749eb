use crate::command::manual::ManualCatalog;
use crate::command::request::{
    ActivityRequest, CategoryRequest, ReminderRequest, Request, Response,
};
use crate::core::context::AppContext;
use crate::core::defaults::DEFAULT_CATEGORY;
use crate::core::models::ActivityTemplate;
use crate::core::persist::{load_state, save_state, with_save_extension};
use crate::core::types::Rgb;
use crate::errors::Result;
use crate::logging::LogTarget;

/// Save name used by a bare `save`.
pub const DEFAULT_SAVE_NAME: &str = "weekplan.json";

/// Applies one request to the context. Nothing is changed when an error is returned.
pub fn execute(ctx: &mut AppContext, request: Request) -> Result<Response> {
    match request {
        Request::SelectDay(day) => {
            ctx.selected_day = day;
            Ok(Response::Agenda(day))
        }
        Request::Show(day) => Ok(Response::Agenda(day.unwrap_or(ctx.selected_day))),
        Request::Place { activity, day } => {
            let day = day.unwrap_or(ctx.selected_day);
            let entry = ctx.planner()?.place_activity(&activity, day)?;
            Ok(Response::Done(format!("Placed on {day}: {entry}")))
        }
        Request::FindSlot { hours, day } => {
            let day = day.unwrap_or(ctx.selected_day);
            let start = ctx.planner()?.first_free_start(day, hours)?;
            Ok(Response::Slot { day, start, hours })
        }
        Request::AddFixed {
            day,
            start,
            end,
            name,
            category,
        } => {
            let entry = ctx.planner()?.add_fixed(day, start, end, &name, &category)?;
            Ok(Response::Done(format!("Added on {day}: {entry}")))
        }
        Request::QuickAdd {
            at,
            hours,
            name,
            category,
        } => {
            let day = ctx.selected_day;
            let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            let entry = ctx.planner()?.quick_add(day, at, hours, &name, &category)?;
            Ok(Response::Done(format!("Added on {day}: {entry}")))
        }
        Request::Edit { index, edit } => {
            let day = ctx.selected_day;
            let entry = ctx.planner()?.edit_entry(day, index, edit)?;
            Ok(Response::Done(format!("Updated #{} on {day}: {entry}", index + 1)))
        }
        Request::Remove { index } => {
            let day = ctx.selected_day;
            let entry = ctx.planner()?.remove_entry_at(day, index)?;
            Ok(Response::Done(format!("Removed from {day}: {entry}")))
        }
        Request::Clear(day) => {
            let day = day.unwrap_or(ctx.selected_day);
            let removed = ctx.planner()?.clear_day(day);
            Ok(Response::Done(format!(
                "Cleared {removed} entries from {}.",
                day.full_name()
            )))
        }
        Request::Totals => Ok(Response::Totals(ctx.planner()?.totals())),
        Request::Activity(req) => activity(ctx, req),
        Request::Category(req) => category(ctx, req),
        Request::Reminder(req) => reminder(ctx, req),
        Request::Save(name) => {
            let name = name.unwrap_or_else(|| DEFAULT_SAVE_NAME.to_string());
            let path = ctx.resolve_save_path(&name);
            let saved = save_state(&ctx.session, &path)?;
            let msg = format!("Saved session to {}", saved.display());
            ctx.logger.info(&msg, LogTarget::FileOnly);
            Ok(Response::Done(msg))
        }
        Request::Read(name) => {
            let path = with_save_extension(&ctx.resolve_save_path(&name));
            let session = load_state(&path)?;
            ctx.session.replace_with(session);
            let msg = format!(
                "Loaded {} entries from {}",
                ctx.session.schedule.len(),
                path.display()
            );
            ctx.logger.info(&msg, LogTarget::FileOnly);
            Ok(Response::Done(msg))
        }
        Request::ShowConfig => Ok(Response::ConfigTable),
        Request::SetConfig { key, value } => {
            let change = ctx.config.set(&key, &value)?;
            ctx.logger
                .set_file_logging_enabled(ctx.config.file_logging_enabled());
            let msg = format!("{}: {} => {}", change.key, change.old, change.new);
            ctx.logger.info(format!("Config changed. {msg}"), LogTarget::FileOnly);
            Ok(Response::Done(msg))
        }
        Request::Man(topic) => {
            let page = ManualCatalog::new().page_for(topic.as_deref())?;
            Ok(Response::Manual(page.render()))
        }
    }
}

fn activity(ctx: &mut AppContext, req: ActivityRequest) -> Result<Response> {
    let msg = match req {
        ActivityRequest::List => return Ok(Response::Activities),
        ActivityRequest::Add {
            name,
            category,
            hours,
        } => {
            let template = ActivityTemplate::new(name, category, hours)?;
            let msg = format!("Added activity: {template}");
            ctx.session.activities.add(template)?;
            msg
        }
        ActivityRequest::Edit {
            old_name,
            name,
            category,
            hours,
        } => {
            let template = ActivityTemplate::new(name, category, hours)?;
            let msg = format!("Updated activity '{old_name}': {template}");
            ctx.session.activities.edit(&old_name, template)?;
            msg
        }
        ActivityRequest::Delete(name) => {
            let removed = ctx.session.activities.remove(&name)?;
            format!("Deleted activity: {removed}")
        }
    };
    ctx.logger.info(&msg, LogTarget::FileOnly);
    Ok(Response::Done(msg))
}

fn category(ctx: &mut AppContext, req: CategoryRequest) -> Result<Response> {
    let categories = &mut ctx.session.categories;
    let msg = match req {
        CategoryRequest::List => return Ok(Response::Categories),
        CategoryRequest::Add { name, color } => {
            let color = color.unwrap_or(Rgb::FALLBACK);
            categories.add(name.as_str(), color)?;
            format!("Added category '{name}' ({color})")
        }
        CategoryRequest::Rename { old, new } => {
            categories.rename(&old, new.as_str())?;
            format!("Renamed category '{old}' to '{new}'")
        }
        CategoryRequest::Recolor { name, color } => {
            categories.recolor(&name, color)?;
            format!("Category '{name}' is now {color}")
        }
        CategoryRequest::Delete(name) => {
            categories.remove(&name)?;
            format!("Deleted category '{name}'")
        }
    };
    ctx.logger.info(&msg, LogTarget::FileOnly);
    Ok(Response::Done(msg))
}

fn reminder(ctx: &mut AppContext, req: ReminderRequest) -> Result<Response> {
    let reminders = &mut ctx.session.reminders;
    let msg = match req {
        ReminderRequest::List => return Ok(Response::Reminders),
        ReminderRequest::Add(text) => {
            let added = reminders.add(text)?.to_string();
            format!("Added reminder #{}: {added}", reminders.len())
        }
        ReminderRequest::Edit { index, text } => {
            reminders.edit(index, text.as_str())?;
            format!("Updated reminder #{}: {text}", index + 1)
        }
        ReminderRequest::Delete(index) => {
            let removed = reminders.remove(index)?;
            format!("Deleted reminder #{}: {removed}", index + 1)
        }
    };
    ctx.logger.info(&msg, LogTarget::FileOnly);
    Ok(Response::Done(msg))
}
