use crate::dates::completion_dates;
use crate::models::{HabitRecord, WeekdayPattern};
use chrono::Datelike;

/// Weekday labels in output order (Sunday first).
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Completion totals per weekday over all history, scaled against the busiest weekday.
pub fn get_day_of_week_patterns(habits: &[HabitRecord]) -> Vec<WeekdayPattern> {
    let totals = weekday_totals(habits);
    let max = totals.iter().copied().max().unwrap_or(0);

    WEEKDAY_NAMES
        .iter()
        .zip(totals)
        .map(|(day, completions)| WeekdayPattern {
            day: (*day).to_string(),
            completions,
            percentage: share_of_max(completions, max),
        })
        .collect()
}

/// Weekdays with at least one completion, busiest first.
pub fn best_days(habits: &[HabitRecord]) -> Vec<String> {
    let mut ranked: Vec<WeekdayPattern> = get_day_of_week_patterns(habits)
        .into_iter()
        .filter(|pattern| pattern.completions > 0)
        .collect();
    // stable sort keeps Sun..Sat order for ties
    ranked.sort_by(|a, b| b.completions.cmp(&a.completions));
    ranked.into_iter().map(|pattern| pattern.day).collect()
}

fn weekday_totals(habits: &[HabitRecord]) -> [u32; 7] {
    let mut totals = [0u32; 7];
    for habit in habits {
        for date in completion_dates(habit) {
            let slot = date.weekday().num_days_from_sunday() as usize;
            totals[slot] = totals[slot].saturating_add(1);
        }
    }
    totals
}

fn share_of_max(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (100.0 * f64::from(value) / f64::from(max)).round() as u32
}
