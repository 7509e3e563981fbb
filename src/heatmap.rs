use crate::dates::{completion_dates, date_key, today};
use crate::models::{HabitRecord, HeatmapCell};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub const MAX_LEVEL: u8 = 4;
/// Longest window the heatmap covers; larger requests are clamped.
pub const MAX_HEATMAP_WEEKS: u32 = 520;

pub fn build_heatmap_data(habits: &[HabitRecord], weeks: u32) -> Vec<HeatmapCell> {
    build_heatmap_data_at(today(), habits, weeks)
}

/// One cell per day for the trailing `weeks * 7` days ending at `today`, oldest first.
///
/// `weeks` is clamped to [`MAX_HEATMAP_WEEKS`], and the window never reaches
/// past the earliest representable date.
pub fn build_heatmap_data_at(today: NaiveDate, habits: &[HabitRecord], weeks: u32) -> Vec<HeatmapCell> {
    let requested = i64::from(weeks.min(MAX_HEATMAP_WEEKS)) * 7;
    if requested == 0 {
        return Vec::new();
    }
    let first = today
        .checked_sub_signed(Duration::days(requested - 1))
        .unwrap_or(NaiveDate::MIN);
    let day_count = (today - first).num_days() + 1;

    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for habit in habits {
        for date in completion_dates(habit).range(first..=today) {
            *counts.entry(*date).or_default() += 1;
        }
    }
    let max = counts.values().copied().max().unwrap_or(0);

    (0..day_count)
        .map(|offset| {
            let date = first + Duration::days(offset);
            let count = counts.get(&date).copied().unwrap_or(0);
            HeatmapCell {
                date: date_key(date),
                count,
                level: intensity_level(count, max),
            }
        })
        .collect()
}

/// Level 4 is reserved for the window maximum; lower counts scale into 1..=3.
pub fn intensity_level(count: u32, max: u32) -> u8 {
    if count == 0 || max == 0 {
        return 0;
    }
    if count >= max {
        return MAX_LEVEL;
    }
    let below_top = u64::from(MAX_LEVEL - 1);
    let scaled = (u64::from(count) * below_top).div_ceil(u64::from(max));
    scaled.clamp(1, below_top) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, dates: &[&str]) -> HabitRecord {
        HabitRecord {
            id: id.into(),
            start_date: "2026-01-01".into(),
            completed_dates: dates.iter().map(|d| d.to_string()).collect(),
            ..HabitRecord::default()
        }
    }

    #[test]
    fn two_weeks_yield_fourteen_contiguous_cells() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let cells = build_heatmap_data_at(today, &[], 2);
        assert_eq!(cells.len(), 14);
        assert_eq!(cells.first().unwrap().date, "2026-02-01");
        assert_eq!(cells.last().unwrap().date, "2026-02-14");
        assert!(cells.iter().all(|cell| cell.count == 0 && cell.level == 0));
    }

    #[test]
    fn busiest_day_gets_top_level() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let habits = vec![
            habit("a", &["2026-02-10", "2026-02-12", "2026-02-13"]),
            habit("b", &["2026-02-10", "2026-02-12"]),
            habit("c", &["2026-02-10", "2025-12-01"]),
            habit("d", &["2026-02-10"]),
        ];
        let cells = build_heatmap_data_at(today, &habits, 2);

        let cell = |date: &str| cells.iter().find(|c| c.date == date).unwrap().clone();
        assert_eq!(cell("2026-02-10").count, 4);
        assert_eq!(cell("2026-02-10").level, 4);
        assert_eq!(cell("2026-02-12").level, 2);
        assert_eq!(cell("2026-02-13").level, 1);
        assert_eq!(cell("2026-02-11").level, 0);
        assert_eq!(cells.iter().map(|c| c.count).sum::<u32>(), 7);
    }

    #[test]
    fn levels_stay_in_range() {
        for max in 1..=12 {
            for count in 0..=max {
                let level = intensity_level(count, max);
                assert!(level <= MAX_LEVEL);
                assert_eq!(level == 0, count == 0);
                assert_eq!(level == MAX_LEVEL, count == max);
            }
        }
        assert_eq!(intensity_level(3, 3), 4);
        assert_eq!(intensity_level(1, 10), 1);
    }

    #[test]
    fn oversized_window_is_clamped() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let cells = build_heatmap_data_at(today, &[], 20_000_000);
        assert_eq!(cells.len(), MAX_HEATMAP_WEEKS as usize * 7);
        assert_eq!(cells.last().unwrap().date, "2026-10-16");
    }

    #[test]
    fn window_stops_at_earliest_date() {
        let today = NaiveDate::MIN + Duration::days(3);
        let cells = build_heatmap_data_at(today, &[], 1);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].date, date_key(NaiveDate::MIN));
    }

    #[test]
    fn zero_weeks_is_empty() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert!(build_heatmap_data_at(today, &[habit("a", &["2026-02-14"])], 0).is_empty());
    }
}
