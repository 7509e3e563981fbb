use crate::completion::habit_completion_rate_at;
use crate::dates::{completion_dates, today};
use crate::models::{HabitRecord, HabitStrength};
use crate::streaks::calculate_current_streak_at;
use chrono::{Duration, NaiveDate};

/// Days without a completion after which recency bottoms out at zero.
pub const RECENCY_HORIZON_DAYS: i64 = 30;
/// Current streak length at which the streak score saturates.
pub const MATURE_STREAK_DAYS: u32 = 21;

pub const RECENCY_WEIGHT: f64 = 0.3;
pub const FREQUENCY_WEIGHT: f64 = 0.4;
pub const STREAK_WEIGHT: f64 = 0.3;

pub fn calculate_habit_strength(habit: &HabitRecord) -> HabitStrength {
    calculate_habit_strength_at(today(), habit)
}

pub fn calculate_habit_strength_at(today: NaiveDate, habit: &HabitRecord) -> HabitStrength {
    let dates = completion_dates(habit);

    let recency = match dates.range(..=today).next_back() {
        Some(last) => recency_score((today - *last).num_days()),
        None => 0,
    };
    let frequency = habit_completion_rate_at(today, habit).min(100);
    let streak = streak_score(calculate_current_streak_at(today, &dates));

    HabitStrength {
        overall: overall_score(recency, frequency, streak),
        recency,
        frequency,
        streak,
    }
}

/// Linear decay from 100 at a zero-day gap to 0 at the horizon.
pub fn recency_score(gap_days: i64) -> u32 {
    let gap = gap_days.clamp(0, RECENCY_HORIZON_DAYS) as f64;
    (100.0 * (1.0 - gap / RECENCY_HORIZON_DAYS as f64)).round() as u32
}

pub fn streak_score(current_streak: u32) -> u32 {
    let ratio = f64::from(current_streak) / f64::from(MATURE_STREAK_DAYS);
    (100.0 * ratio).round().min(100.0) as u32
}

pub fn overall_score(recency: u32, frequency: u32, streak: u32) -> u32 {
    let blended = RECENCY_WEIGHT * f64::from(recency)
        + FREQUENCY_WEIGHT * f64::from(frequency)
        + STREAK_WEIGHT * f64::from(streak);
    blended.round().clamp(0.0, 100.0) as u32
}

pub fn get_sparkline_data(habit: &HabitRecord, days: usize) -> Vec<bool> {
    get_sparkline_data_at(today(), habit, days)
}

/// Whether each of the trailing `days` days has a completion, oldest first.
pub fn get_sparkline_data_at(today: NaiveDate, habit: &HabitRecord, days: usize) -> Vec<bool> {
    let dates = completion_dates(habit);
    (0..days)
        .rev()
        .map(|offset| dates.contains(&(today - Duration::days(offset as i64))))
        .collect()
}
