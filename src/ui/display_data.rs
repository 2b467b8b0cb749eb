use crate::config::Config;
use crate::core::catalog::{ActivityBook, CategoryBook, ReminderList};
use crate::core::store::ScheduleStore;
use crate::core::types::{Clock, DayOfWeek};
use crate::extensions::numbers::HoursLabel;
use crate::planner::grid::GridGeometry;
use crate::planner::totals::{CategoryTotals, ChartSegment, chart_segments};
use crate::ui::ansi::{FG_YELLOW, STYLE_DIM, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

/// Widest entry lane in the time grid.
pub const GRID_LANE_WIDTH: usize = 24;
/// Narrowest lane; still shows the edge and a few letters.
pub const GRID_MIN_LANE_WIDTH: usize = 6;
/// Hour label plus the `┊` separator in front of the lanes.
const GRID_LABEL_WIDTH: usize = 11;
/// Widest full bar in the totals chart.
pub const CHART_BAR_WIDTH: usize = 30;
/// Category, hours and share columns left of the chart.
const CHART_RESERVED_WIDTH: usize = 40;

const SWATCH: &str = "██";
const BAR_CELL: char = '█';
const LANE_EDGE: char = '▌';

/// Turns session state into table rows and grid lines sized for the terminal.
#[derive(Debug, Clone)]
pub struct DisplayDataBuilder {
    util: WidthUtil,
    width: usize,
}

impl Default for DisplayDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        let util = WidthUtil;
        let width = util.terminal_width();
        Self { util, width }
    }

    /// Fixed output width instead of the current terminal's.
    pub fn with_width(width: usize) -> Self {
        Self {
            util: WidthUtil,
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Lane width that fits `lanes` side by side, between the min and max lane widths.
    pub fn lane_width(&self, lanes: usize) -> usize {
        (self.width.saturating_sub(GRID_LABEL_WIDTH) / lanes.max(1))
            .clamp(GRID_MIN_LANE_WIDTH, GRID_LANE_WIDTH)
    }

    /// Cells of a 100% bar.
    pub fn bar_width(&self) -> usize {
        self.width
            .saturating_sub(CHART_RESERVED_WIDTH)
            .clamp(1, CHART_BAR_WIDTH)
    }

    /// `#`, time, name, category, fixed. Numbering starts at 1 in agenda order.
    pub fn agenda_rows(
        &self,
        day: DayOfWeek,
        schedule: &ScheduleStore,
        categories: &CategoryBook,
    ) -> Vec<Vec<String>> {
        schedule
            .entries_for_day(day)
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    (i + 1).to_string(),
                    format!("{} - {}", Clock::format(e.start), Clock::format(e.end)),
                    e.name.clone(),
                    categories.color_for(&e.category).paint(&e.category),
                    if e.fixed { format!("{FG_YELLOW}Fixed{STYLE_RESET}") } else { String::new() },
                ]
            })
            .collect()
    }

    /// One line per grid row: hour label on the hour, then one lane per overlapping entry.
    pub fn grid_lines(
        &self,
        day: DayOfWeek,
        schedule: &ScheduleStore,
        categories: &CategoryBook,
    ) -> Vec<String> {
        let grid = GridGeometry::terminal();
        let spans: Vec<_> = schedule
            .entries_for_day(day)
            .into_iter()
            .filter_map(|e| grid.span_of(e.start, e.end).map(|span| (e, span)))
            .collect();

        let rows = grid.height().ceil() as usize;
        let covers = |row: usize, (y0, y1): (f32, f32)| {
            let top = row as f32;
            top + 1.0 > y0 && top < y1
        };
        let busiest = (0..rows)
            .map(|row| spans.iter().filter(|(_, span)| covers(row, *span)).count())
            .max()
            .unwrap_or(0);
        let lane = self.lane_width(busiest);

        (0..rows)
            .map(|row| {
                let top = row as f32;
                let label = match grid.time_at(top) {
                    Some(t) if row % grid.hour_height as usize == 0 => Clock::format(t),
                    _ => String::new(),
                };
                let lanes: String = spans
                    .iter()
                    .filter(|(_, span)| covers(row, *span))
                    .map(|(e, (y0, _))| {
                        let color = categories.color_for(&e.category);
                        let text = if row == y0.floor() as usize {
                            format!("{LANE_EDGE} {}", self.util.truncate(&e.name, lane - 3))
                        } else {
                            LANE_EDGE.to_string()
                        };
                        self.util.pad_visible(&color.paint(text), lane)
                    })
                    .collect();
                format!("{:>8} {STYLE_DIM}┊{STYLE_RESET} {lanes}", label)
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Category, hours, share and a colored bar. Empty weeks show equal dimmed bars.
    pub fn totals_rows(&self, totals: &CategoryTotals, categories: &CategoryBook) -> Vec<Vec<String>> {
        let segments = chart_segments(totals, categories);
        totals
            .iter()
            .map(|(name, hours)| {
                let segment = segments.iter().find(|s| s.label == name);
                vec![
                    categories.color_for(name).paint(name),
                    hours.hours_label(),
                    segment
                        .filter(|s| !s.placeholder)
                        .map(|s| format!("{:.0}%", s.percent))
                        .unwrap_or_else(|| "-".into()),
                    segment.map(|s| self.bar(s)).unwrap_or_default(),
                ]
            })
            .collect()
    }

    fn bar(&self, segment: &ChartSegment) -> String {
        let cells = ((segment.percent / 100.0) * self.bar_width() as f32).round() as usize;
        let bar: String = std::iter::repeat_n(BAR_CELL, cells.max(1)).collect();
        if segment.placeholder {
            format!("{STYLE_DIM}{}{STYLE_RESET}", segment.color.paint(bar))
        } else {
            segment.color.paint(bar)
        }
    }

    pub fn activity_rows(&self, activities: &ActivityBook, categories: &CategoryBook) -> Vec<Vec<String>> {
        activities
            .iter()
            .map(|t| {
                vec![
                    t.name.clone(),
                    categories.color_for(&t.category).paint(&t.category),
                    t.duration.hours_label(),
                ]
            })
            .collect()
    }

    pub fn category_rows(&self, categories: &CategoryBook) -> Vec<Vec<String>> {
        categories
            .iter()
            .map(|c| vec![c.color.paint(SWATCH), c.name.clone(), c.color.to_string()])
            .collect()
    }

    pub fn reminder_rows(&self, reminders: &ReminderList) -> Vec<Vec<String>> {
        reminders
            .iter()
            .enumerate()
            .map(|(i, r)| vec![(i + 1).to_string(), r.text().to_string()])
            .collect()
    }

    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .map(|(k, d, v)| vec![k.clone(), d.clone(), v.clone()])
            .collect()
    }
}
