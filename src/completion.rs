use crate::dates::{completion_dates, parse_date, today};
use crate::models::{Frequency, HabitRecord};
use chrono::{Datelike, NaiveDate};

pub fn calculate_completion_rate(
    frequency: Frequency,
    start_date: &str,
    completed_count: u32,
    goal: u32,
    weekly_times_per_week: Option<u32>,
) -> u32 {
    calculate_completion_rate_at(
        today(),
        frequency,
        start_date,
        completed_count,
        goal,
        weekly_times_per_week,
    )
}

/// Percentage of expected occurrences completed since `start_date`, clamped to 0..=100.
pub fn calculate_completion_rate_at(
    today: NaiveDate,
    frequency: Frequency,
    start_date: &str,
    completed_count: u32,
    goal: u32,
    weekly_times_per_week: Option<u32>,
) -> u32 {
    let Some(start) = parse_date(start_date) else {
        return 0;
    };

    let effective_goal = match (frequency, weekly_times_per_week) {
        (Frequency::Weekly, Some(times)) => times,
        _ => goal,
    };
    let expected = u64::from(elapsed_periods(frequency, start, today)) * u64::from(effective_goal);
    if expected == 0 {
        return 0;
    }

    let rate = (100.0 * f64::from(completed_count) / expected as f64).round();
    rate.clamp(0.0, 100.0) as u32
}

/// Rate for a habit, counting distinct completions between its start date and today.
pub fn habit_completion_rate(habit: &HabitRecord) -> u32 {
    habit_completion_rate_at(today(), habit)
}

pub fn habit_completion_rate_at(today: NaiveDate, habit: &HabitRecord) -> u32 {
    let Some(start) = parse_date(&habit.start_date) else {
        return 0;
    };
    if start > today {
        return 0;
    }
    let completed = completion_dates(habit)
        .range(start..=today)
        .count();

    calculate_completion_rate_at(
        today,
        habit.frequency,
        &habit.start_date,
        u32::try_from(completed).unwrap_or(u32::MAX),
        habit.goal,
        habit.weekly_times_per_week,
    )
}

/// Periods that have begun since `start`; a habit started today has none.
pub fn elapsed_periods(frequency: Frequency, start: NaiveDate, today: NaiveDate) -> u32 {
    if today <= start {
        return 0;
    }
    let days = (today - start).num_days() as u32;
    match frequency {
        Frequency::Daily => days,
        Frequency::Weekly => days.div_ceil(7),
        Frequency::Monthly => {
            let mut months = (today.year() - start.year()) * 12 + today.month() as i32
                - start.month() as i32;
            if today.day() > start.day() {
                months += 1;
            }
            months.max(1) as u32
        }
    }
}
