use std::io::Write;

use crate::command::request::Response;
use crate::config::Config;
use crate::core::session::Session;
use crate::core::types::{Clock, DayOfWeek};
use crate::extensions::numbers::HoursLabel;
use crate::planner::totals::CategoryTotals;
use crate::ui::ansi::{STYLE_BOLD, STYLE_DIM, STYLE_RESET};
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::{Column, Table, TablePrinter};

/// Renders command responses against the current session.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    printer: TablePrinter,
    data: DisplayDataBuilder,
}

impl DisplayManager {
    /// Views sized to the current terminal.
    pub fn new() -> Self {
        Self::with_data(DisplayDataBuilder::new())
    }

    pub fn with_data(data: DisplayDataBuilder) -> Self {
        Self {
            printer: TablePrinter::new(),
            data,
        }
    }

    pub fn render_response<W: Write + ?Sized>(
        &self,
        response: &Response,
        session: &Session,
        config: &Config,
        out: &mut W,
    ) -> std::io::Result<()> {
        match response {
            Response::Done(msg) => writeln!(out, "{msg}"),
            Response::Agenda(day) => {
                self.render_agenda(*day, session, out)?;
                writeln!(out)?;
                self.render_grid(*day, session, out)
            }
            Response::Slot { day, start, hours } => self.render_slot(*day, *start, *hours, out),
            Response::Totals(totals) => self.render_totals(totals, session, out),
            Response::Activities => self.render_activities(session, out),
            Response::Categories => self.render_categories(session, out),
            Response::Reminders => self.render_reminders(session, out),
            Response::ConfigTable => self.render_config(config, out),
            Response::Manual(text) => writeln!(out, "{}", text.trim_end()),
        }
    }

    pub fn render_agenda<W: Write + ?Sized>(
        &self,
        day: DayOfWeek,
        session: &Session,
        out: &mut W,
    ) -> std::io::Result<()> {
        let table = Table::new(
            day.full_name(),
            vec![
                Column::right("#"),
                Column::left("TIME"),
                Column::left("NAME"),
                Column::left("CATEGORY"),
                Column::left("FIXED"),
            ],
        )
        .rows(self.data.agenda_rows(day, &session.schedule, &session.categories))
        .when_empty(format!("No entries on {}.", day.full_name()));
        self.printer.render(&table, out)
    }

    pub fn render_grid<W: Write + ?Sized>(
        &self,
        day: DayOfWeek,
        session: &Session,
        out: &mut W,
    ) -> std::io::Result<()> {
        for line in self
            .data
            .grid_lines(day, &session.schedule, &session.categories)
        {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn render_slot<W: Write + ?Sized>(
        &self,
        day: DayOfWeek,
        start: f32,
        hours: f32,
        out: &mut W,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "First free {} slot on {}: {} - {}",
            hours.hours_label(),
            day.full_name(),
            Clock::format(start),
            Clock::format(start + hours)
        )
    }

    pub fn render_totals<W: Write + ?Sized>(
        &self,
        totals: &CategoryTotals,
        session: &Session,
        out: &mut W,
    ) -> std::io::Result<()> {
        let table = Table::new(
            "Weekly totals",
            vec![
                Column::left("CATEGORY"),
                Column::right("HOURS"),
                Column::right("SHARE"),
                Column::left("CHART"),
            ],
        )
        .rows(self.data.totals_rows(totals, &session.categories))
        .when_empty("No categories yet.");
        self.printer.render(&table, out)?;

        let grand_total = totals.grand_total();
        writeln!(out, "{STYLE_BOLD}Total: {}{STYLE_RESET}", grand_total.hours_label())?;
        if grand_total <= 0.0 && !totals.is_empty() {
            writeln!(out, "{STYLE_DIM}Nothing scheduled yet; chart shows placeholders.{STYLE_RESET}")?;
        }
        Ok(())
    }

    pub fn render_activities<W: Write + ?Sized>(&self, session: &Session, out: &mut W) -> std::io::Result<()> {
        let table = Table::new(
            "Activities",
            vec![Column::left("NAME"), Column::left("CATEGORY"), Column::right("HOURS")],
        )
        .rows(self.data.activity_rows(&session.activities, &session.categories))
        .when_empty("No activities defined.");
        self.printer.render(&table, out)
    }

    pub fn render_categories<W: Write + ?Sized>(&self, session: &Session, out: &mut W) -> std::io::Result<()> {
        let table = Table::new(
            "Categories",
            vec![Column::left(""), Column::left("NAME"), Column::left("COLOR")],
        )
        .rows(self.data.category_rows(&session.categories))
        .when_empty("No categories defined.");
        self.printer.render(&table, out)
    }

    pub fn render_reminders<W: Write + ?Sized>(&self, session: &Session, out: &mut W) -> std::io::Result<()> {
        let table = Table::new("Reminders", vec![Column::right("#"), Column::left("TEXT")])
            .rows(self.data.reminder_rows(&session.reminders))
            .when_empty("No reminders.");
        self.printer.render(&table, out)
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> std::io::Result<()> {
        let table = Table::new(
            "Configuration",
            vec![Column::left("KEY"), Column::left("DESCRIPTION"), Column::left("VALUE")],
        )
        .rows(self.data.config_rows(config));
        self.printer.render(&table, out)
    }

    /// Renders to stdout; write errors on a closed terminal are dropped.
    pub fn print_response(&self, response: &Response, session: &Session, config: &Config) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        let _ = self.render_response(response, session, config, &mut lock);
        let _ = lock.flush();
    }
}
