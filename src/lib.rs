pub mod app;
pub mod completion;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod heatmap;
pub mod milestones;
pub mod models;
pub mod patterns;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streaks;
pub mod strength;
pub mod ui;

pub use app::router;
pub use completion::{calculate_completion_rate, habit_completion_rate};
pub use config::ServerConfig;
pub use heatmap::build_heatmap_data;
pub use milestones::{get_target_vs_actual, get_upcoming_milestones};
pub use models::{Frequency, HabitRecord};
pub use patterns::get_day_of_week_patterns;
pub use state::AppState;
pub use stats::{build_dashboard, DashboardOptions};
pub use storage::{load_snapshot, persist_snapshot};
pub use streaks::{calculate_best_streak, calculate_current_streak};
pub use strength::{calculate_habit_strength, get_sparkline_data};
