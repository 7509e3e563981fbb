use crate::models::HabitRecord;
use chrono::{Local, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses `yyyy-mm-dd`, ignoring any time suffix such as `T08:30:00Z`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Distinct completion days of a habit, oldest first. Unparseable entries are dropped.
pub fn completion_dates(habit: &HabitRecord) -> BTreeSet<NaiveDate> {
    collect_dates(&habit.id, &habit.completed_dates)
}

fn collect_dates<S: AsRef<str>>(habit_id: &str, values: &[S]) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for value in values {
        let value = value.as_ref();
        match parse_date(value) {
            Some(date) => {
                dates.insert(date);
            }
            None => debug!(habit = habit_id, value, "skipping unparseable completion date"),
        }
    }
    dates
}
