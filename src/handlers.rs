use crate::dates::{date_key, parse_date, today};
use crate::errors::AppError;
use crate::models::{
    Dashboard, DashboardQuery, DashboardRequest, HabitInsight, HabitRecord, HabitSnapshot,
    SnapshotSummary,
};
use crate::state::AppState;
use crate::stats::{build_dashboard, build_insight_at, DashboardOptions, DEFAULT_SPARKLINE_DAYS};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use std::collections::HashSet;
use tracing::{info, warn};

pub const MAX_WEEKS: u32 = 53;
pub const MAX_MILESTONE_LIMIT: usize = 50;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.snapshot.lock().await;
    Html(render_index(&date_key(today()), snapshot.habits.len()))
}

pub async fn get_habits(State(state): State<AppState>) -> Json<HabitSnapshot> {
    let snapshot = state.snapshot.lock().await;
    Json(snapshot.clone())
}

pub async fn put_habits(
    State(state): State<AppState>,
    Json(payload): Json<HabitSnapshot>,
) -> Result<Json<SnapshotSummary>, AppError> {
    validate_habits(&payload.habits)?;

    let summary = summarize(&payload);
    state.replace_snapshot(payload).await?;

    info!(
        habits = summary.habit_count,
        completions = summary.completion_count,
        "habit snapshot replaced"
    );
    Ok(Json(summary))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let options = dashboard_options(query.weeks, query.limit)?;
    let snapshot = state.snapshot.lock().await;
    Ok(Json(build_dashboard(&snapshot.habits, options)))
}

pub async fn post_dashboard(Json(payload): Json<DashboardRequest>) -> Result<Json<Dashboard>, AppError> {
    let options = dashboard_options(payload.weeks, payload.limit)?;
    Ok(Json(build_dashboard(&payload.habits, options)))
}

pub async fn get_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HabitInsight>, AppError> {
    let snapshot = state.snapshot.lock().await;
    let habit = snapshot
        .habits
        .iter()
        .find(|habit| habit.id == id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id '{id}'")))?;

    Ok(Json(build_insight_at(today(), habit, DEFAULT_SPARKLINE_DAYS)))
}

fn dashboard_options(weeks: Option<u32>, limit: Option<usize>) -> Result<DashboardOptions, AppError> {
    let mut options = DashboardOptions::default();
    if let Some(weeks) = weeks {
        if !(1..=MAX_WEEKS).contains(&weeks) {
            return Err(AppError::bad_request(format!("weeks must be between 1 and {MAX_WEEKS}")));
        }
        options.weeks = weeks;
    }
    if let Some(limit) = limit {
        if !(1..=MAX_MILESTONE_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(format!(
                "limit must be between 1 and {MAX_MILESTONE_LIMIT}"
            )));
        }
        options.milestone_limit = limit;
    }
    Ok(options)
}

fn validate_habits(habits: &[HabitRecord]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for habit in habits {
        let id = habit.id.trim();
        if id.is_empty() {
            return Err(AppError::bad_request("habit id must not be empty"));
        }
        if !seen.insert(id) {
            return Err(AppError::bad_request(format!("duplicate habit id '{id}'")));
        }
        if habit.goal == 0 {
            return Err(AppError::bad_request(format!("habit '{id}' must have a goal of at least 1")));
        }
        if parse_date(&habit.start_date).is_none() {
            warn!(habit = id, start_date = %habit.start_date, "unparseable start date");
        }
    }
    Ok(())
}

fn summarize(snapshot: &HabitSnapshot) -> SnapshotSummary {
    SnapshotSummary {
        habit_count: snapshot.habits.len(),
        completion_count: snapshot
            .habits
            .iter()
            .map(|habit| habit.completed_dates.len())
            .sum(),
    }
}
