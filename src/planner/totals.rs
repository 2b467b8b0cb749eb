use crate::core::catalog::CategoryBook;
use crate::core::models::ScheduleEntry;
use crate::core::types::Rgb;

/// Scheduled hours per category, in category-book order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    rows: Vec<(String, f32)>,
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<f32> {
        self.rows
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, hours)| *hours)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.rows.iter().map(|(name, hours)| (name.as_str(), *hours))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn grand_total(&self) -> f32 {
        self.rows.iter().map(|(_, hours)| *hours).sum()
    }

    fn add(&mut self, category: &str, hours: f32) {
        match self.rows.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += hours,
            None => self.rows.push((category.to_string(), hours)),
        }
    }
}

/// Every known category starts at zero; each entry adds `max(0, end - start)`.
///
/// Entries whose category is missing from the book still get a row, appended
/// after the known categories in first-seen order.
pub fn compute_totals<'a, I>(entries: I, categories: &CategoryBook) -> CategoryTotals
where
    I: IntoIterator<Item = &'a ScheduleEntry>,
{
    let mut totals = CategoryTotals {
        rows: categories.iter().map(|c| (c.name.clone(), 0.0)).collect(),
    };
    for entry in entries {
        totals.add(&entry.category, entry.hours());
    }
    totals
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub label: String,
    pub hours: f32,
    pub percent: f32,
    pub color: Rgb,
    /// Display filler shown when nothing is scheduled.
    pub placeholder: bool,
}

/// Number of equal filler segments drawn for an empty week.
const PLACEHOLDER_SEGMENTS: usize = 3;

/// Chart slices for categories with hours; an empty week gets equal filler slices.
pub fn chart_segments(totals: &CategoryTotals, categories: &CategoryBook) -> Vec<ChartSegment> {
    let grand_total = totals.grand_total();
    if grand_total <= 0.0 {
        let fillers: Vec<_> = categories.iter().take(PLACEHOLDER_SEGMENTS).collect();
        let share = 100.0 / fillers.len().max(1) as f32;
        return fillers
            .into_iter()
            .map(|c| ChartSegment {
                label: c.name.clone(),
                hours: 0.0,
                percent: share,
                color: c.color,
                placeholder: true,
            })
            .collect();
    }

    totals
        .iter()
        .filter(|(_, hours)| *hours > 0.0)
        .map(|(name, hours)| ChartSegment {
            label: name.to_string(),
            hours,
            percent: hours / grand_total * 100.0,
            color: categories.color_for(name),
            placeholder: false,
        })
        .collect()
}
