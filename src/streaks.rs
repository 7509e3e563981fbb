use crate::dates::{completion_dates, today};
use crate::models::{DerivedStreak, HabitRecord};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

pub fn calculate_current_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    calculate_current_streak_at(today(), dates)
}

/// Consecutive days ending today, or ending yesterday while today is still open.
pub fn calculate_current_streak_at(today: NaiveDate, dates: &BTreeSet<NaiveDate>) -> u32 {
    let yesterday = today - Duration::days(1);
    let mut cursor = if dates.contains(&today) {
        today
    } else if dates.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0u32;
    while dates.contains(&cursor) {
        streak = streak.saturating_add(1);
        cursor -= Duration::days(1);
    }
    streak
}

pub fn calculate_best_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &date in dates {
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run.saturating_add(1),
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }
    best
}

pub fn calculate_streak(habit: &HabitRecord) -> DerivedStreak {
    calculate_streak_at(today(), habit)
}

pub fn calculate_streak_at(today: NaiveDate, habit: &HabitRecord) -> DerivedStreak {
    let dates = completion_dates(habit);
    DerivedStreak {
        current: calculate_current_streak_at(today, &dates),
        best: calculate_best_streak(&dates),
    }
}
