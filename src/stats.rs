use crate::completion::habit_completion_rate_at;
use crate::dates::{date_key, today};
use crate::heatmap::build_heatmap_data_at;
use crate::milestones::{get_target_vs_actual_at, get_upcoming_milestones_at};
use crate::models::{Dashboard, HabitInsight, HabitRecord};
use crate::patterns::get_day_of_week_patterns;
use crate::streaks::calculate_streak_at;
use crate::strength::{calculate_habit_strength_at, get_sparkline_data_at};
use chrono::NaiveDate;

pub const DEFAULT_WEEKS: u32 = 12;
pub const DEFAULT_MILESTONE_LIMIT: usize = 3;
pub const DEFAULT_SPARKLINE_DAYS: usize = 7;

#[derive(Debug, Clone, Copy)]
pub struct DashboardOptions {
    pub weeks: u32,
    pub milestone_limit: usize,
    pub sparkline_days: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
            milestone_limit: DEFAULT_MILESTONE_LIMIT,
            sparkline_days: DEFAULT_SPARKLINE_DAYS,
        }
    }
}

pub fn build_dashboard(habits: &[HabitRecord], options: DashboardOptions) -> Dashboard {
    build_dashboard_at(today(), habits, options)
}

pub fn build_dashboard_at(today: NaiveDate, habits: &[HabitRecord], options: DashboardOptions) -> Dashboard {
    Dashboard {
        generated_on: date_key(today),
        habit_count: habits.len(),
        heatmap: build_heatmap_data_at(today, habits, options.weeks),
        weekday_patterns: get_day_of_week_patterns(habits),
        milestones: get_upcoming_milestones_at(today, habits, options.milestone_limit),
        target_vs_actual: get_target_vs_actual_at(today, habits),
        habits: habits
            .iter()
            .map(|habit| build_insight_at(today, habit, options.sparkline_days))
            .collect(),
    }
}

pub fn build_insight_at(today: NaiveDate, habit: &HabitRecord, sparkline_days: usize) -> HabitInsight {
    HabitInsight {
        habit_id: habit.id.clone(),
        habit_name: habit.name.clone(),
        streak: calculate_streak_at(today, habit),
        completion_rate: habit_completion_rate_at(today, habit),
        strength: calculate_habit_strength_at(today, habit),
        sparkline: get_sparkline_data_at(today, habit, sparkline_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn dashboard_for_empty_snapshot_is_zeroed() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let dashboard = build_dashboard_at(today, &[], DashboardOptions::default());
        assert_eq!(dashboard.generated_on, "2026-01-05");
        assert_eq!(dashboard.habit_count, 0);
        assert_eq!(dashboard.heatmap.len(), 12 * 7);
        assert_eq!(dashboard.weekday_patterns.len(), 7);
        assert!(dashboard.milestones.is_empty());
        assert!(dashboard.target_vs_actual.is_empty());
        assert!(dashboard.habits.is_empty());
    }

    #[test]
    fn dashboard_bundles_per_habit_insight() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let habit = HabitRecord {
            id: "h1".into(),
            name: "Meditate".into(),
            start_date: (today - Duration::days(4)).to_string(),
            completed_dates: (0..4)
                .map(|offset| (today - Duration::days(offset)).to_string())
                .collect(),
            ..HabitRecord::default()
        };
        let options = DashboardOptions {
            weeks: 1,
            milestone_limit: 1,
            sparkline_days: 5,
        };
        let dashboard = build_dashboard_at(today, &[habit], options);

        assert_eq!(dashboard.heatmap.len(), 7);
        assert_eq!(dashboard.milestones.len(), 1);
        assert_eq!(dashboard.milestones[0].days_remaining, 3);

        let insight = &dashboard.habits[0];
        assert_eq!(insight.habit_name, "Meditate");
        assert_eq!(insight.streak.current, 4);
        assert_eq!(insight.completion_rate, 100);
        assert_eq!(insight.sparkline, vec![false, true, true, true, true]);
    }
}
