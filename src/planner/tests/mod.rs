
use crate::core::models::ScheduleEntry;
use crate::core::store::ScheduleStore;
use crate::core::types::DayOfWeek;

pub(super) fn entry(day: DayOfWeek, start: f32, end: f32, category: &str) -> ScheduleEntry {
    ScheduleEntry::new(day, start, end, format!("{category} {start}"), category, false).unwrap()
}

pub(super) fn store_with(entries: &[(DayOfWeek, f32, f32)]) -> ScheduleStore {
    let mut store = ScheduleStore::new();
    for (day, start, end) in entries {
        store.add(entry(*day, *start, *end, "Coursework"));
    }
    store
}
