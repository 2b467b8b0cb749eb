use crate::ui::width_util::WidthUtil;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Column header plus alignment.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align: Align,
}

impl Column {
    pub fn left(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Left,
        }
    }

    pub fn right(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Right,
        }
    }
}

/// A titled table with an optional message shown when it has no rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub empty_message: Option<String>,
}

impl Table {
    pub fn new(title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
            empty_message: None,
        }
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn when_empty(mut self, msg: impl Into<String>) -> Self {
        self.empty_message = Some(msg.into());
        self
    }
}

const COLUMN_GAP: &str = " │ ";

#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_widths(&self, table: &Table) -> Vec<usize> {
        table
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                table
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| self.util.visible_width(cell))
                    .chain([self.util.visible_width(col.header)])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn table_width(&self, table: &Table) -> usize {
        let widths = self.column_widths(table);
        let gaps = widths.len().saturating_sub(1) * COLUMN_GAP.chars().count();
        (widths.iter().sum::<usize>() + gaps).max(self.util.visible_width(&table.title))
    }

    pub fn render<W: Write + ?Sized>(&self, table: &Table, out: &mut W) -> std::io::Result<()> {
        let widths = self.column_widths(table);
        let mut width = self.table_width(table);
        if table.rows.is_empty() {
            if let Some(msg) = &table.empty_message {
                width = width.max(self.util.visible_width(msg));
                self.render_title(&table.title, width, out)?;
                writeln!(out, "{msg}")?;
                return self.rule(width, out);
            }
        }

        self.render_title(&table.title, width, out)?;
        let header: Vec<String> = table.columns.iter().map(|c| c.header.to_string()).collect();
        writeln!(out, "{}", self.line(&header, &table.columns, &widths))?;
        self.rule(width, out)?;
        for row in &table.rows {
            writeln!(out, "{}", self.line(row, &table.columns, &widths))?;
        }
        self.rule(width, out)
    }

    fn render_title<W: Write + ?Sized>(&self, title: &str, width: usize, out: &mut W) -> std::io::Result<()> {
        self.rule(width, out)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.rule(width, out)
    }

    fn rule<W: Write + ?Sized>(&self, width: usize, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", "─".repeat(width.max(1)))
    }

    fn line(&self, cells: &[String], columns: &[Column], widths: &[usize]) -> String {
        columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (col, &w))| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                match col.align {
                    Align::Left => self.util.pad_visible(cell, w),
                    Align::Right => self.util.pad_visible_left(cell, w),
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    }
}
