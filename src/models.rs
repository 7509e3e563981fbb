use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// One habit as handed over by the external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default = "default_goal")]
    pub goal: u32,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub completed_dates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_times_per_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rate: Option<u32>,
}

fn default_goal() -> u32 {
    1
}

impl Default for HabitRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            icon: None,
            icon_color: None,
            frequency: Frequency::Daily,
            goal: default_goal(),
            start_date: String::new(),
            completed_dates: Vec::new(),
            weekly_times_per_week: None,
            target_rate: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HabitSnapshot {
    pub habits: Vec<HabitRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DerivedStreak {
    pub current: u32,
    pub best: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub date: String,
    pub count: u32,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayPattern {
    pub day: String,
    pub completions: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HabitStrength {
    pub overall: u32,
    pub recency: u32,
    pub frequency: u32,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub habit_id: String,
    pub habit_name: String,
    pub habit_icon: Option<String>,
    pub current_streak: u32,
    pub next_milestone: u32,
    pub days_remaining: u32,
    pub progress: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetStatus {
    Ahead,
    OnTrack,
    Behind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetVsActual {
    pub habit_id: String,
    pub habit_name: String,
    pub habit_icon: Option<String>,
    pub habit_icon_color: Option<String>,
    pub target: u32,
    pub actual: u32,
    pub status: TargetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitInsight {
    pub habit_id: String,
    pub habit_name: String,
    pub streak: DerivedStreak,
    pub completion_rate: u32,
    pub strength: HabitStrength,
    pub sparkline: Vec<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub generated_on: String,
    pub habit_count: usize,
    pub heatmap: Vec<HeatmapCell>,
    pub weekday_patterns: Vec<WeekdayPattern>,
    pub milestones: Vec<Milestone>,
    pub target_vs_actual: Vec<TargetVsActual>,
    pub habits: Vec<HabitInsight>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub weeks: Option<u32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    pub habits: Vec<HabitRecord>,
    pub weeks: Option<u32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub habit_count: usize,
    pub completion_count: usize,
}
