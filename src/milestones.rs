use crate::completion::habit_completion_rate_at;
use crate::dates::{completion_dates, today};
use crate::models::{HabitRecord, Milestone, TargetStatus, TargetVsActual};
use crate::streaks::calculate_current_streak_at;
use chrono::NaiveDate;

/// Streak thresholds in days. Past the last one, every further year counts.
pub const MILESTONES: [u32; 7] = [7, 14, 30, 60, 100, 180, 365];
const YEAR: u32 = 365;

pub const DEFAULT_TARGET_RATE: u32 = 100;
/// Percentage points either side of the target still reported as on track.
pub const TARGET_MARGIN: u32 = 10;

pub fn next_milestone(current_streak: u32) -> u32 {
    MILESTONES
        .iter()
        .copied()
        .find(|&threshold| threshold > current_streak)
        .unwrap_or_else(|| (current_streak / YEAR + 1).saturating_mul(YEAR))
}

pub fn get_upcoming_milestones(habits: &[HabitRecord], limit: usize) -> Vec<Milestone> {
    get_upcoming_milestones_at(today(), habits, limit)
}

/// Habits with a live streak, closest to their next milestone first.
pub fn get_upcoming_milestones_at(
    today: NaiveDate,
    habits: &[HabitRecord],
    limit: usize,
) -> Vec<Milestone> {
    let mut upcoming: Vec<Milestone> = habits
        .iter()
        .filter_map(|habit| {
            let current = calculate_current_streak_at(today, &completion_dates(habit));
            if current == 0 {
                return None;
            }
            let next = next_milestone(current);
            Some(Milestone {
                habit_id: habit.id.clone(),
                habit_name: habit.name.clone(),
                habit_icon: habit.icon.clone(),
                current_streak: current,
                next_milestone: next,
                days_remaining: next - current,
                progress: (100.0 * f64::from(current) / f64::from(next)).round() as u32,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.days_remaining
            .cmp(&b.days_remaining)
            .then_with(|| b.current_streak.cmp(&a.current_streak))
            .then_with(|| a.habit_name.cmp(&b.habit_name))
    });
    upcoming.truncate(limit);
    upcoming
}

pub fn get_target_vs_actual(habits: &[HabitRecord]) -> Vec<TargetVsActual> {
    get_target_vs_actual_at(today(), habits)
}

pub fn get_target_vs_actual_at(today: NaiveDate, habits: &[HabitRecord]) -> Vec<TargetVsActual> {
    habits
        .iter()
        .map(|habit| {
            let target = habit.target_rate.unwrap_or(DEFAULT_TARGET_RATE).min(100);
            let actual = habit_completion_rate_at(today, habit);
            TargetVsActual {
                habit_id: habit.id.clone(),
                habit_name: habit.name.clone(),
                habit_icon: habit.icon.clone(),
                habit_icon_color: habit.icon_color.clone(),
                target,
                actual,
                status: classify(target, actual),
            }
        })
        .collect()
}

pub fn classify(target: u32, actual: u32) -> TargetStatus {
    if actual > target.saturating_add(TARGET_MARGIN) {
        TargetStatus::Ahead
    } else if actual.saturating_add(TARGET_MARGIN) < target {
        TargetStatus::Behind
    } else {
        TargetStatus::OnTrack
    }
}
