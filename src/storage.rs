use crate::errors::AppError;
use crate::models::HabitSnapshot;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Reads the snapshot file. A missing or unreadable file yields an empty snapshot.
pub async fn load_snapshot(path: &Path) -> HabitSnapshot {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HabitSnapshot::default(),
        Err(err) => {
            error!(path = %path.display(), "failed to read habit snapshot: {err}");
            return HabitSnapshot::default();
        }
    };

    match decode_snapshot(&bytes) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!(path = %path.display(), "failed to parse habit snapshot: {err}");
            HabitSnapshot::default()
        }
    }
}

/// Parses snapshot JSON, dropping records whose id is blank.
pub fn decode_snapshot(bytes: &[u8]) -> Result<HabitSnapshot, serde_json::Error> {
    let mut snapshot: HabitSnapshot = serde_json::from_slice(bytes)?;
    let before = snapshot.habits.len();
    snapshot.habits.retain(|habit| !habit.id.trim().is_empty());
    let dropped = before - snapshot.habits.len();
    if dropped > 0 {
        warn!(dropped, "ignoring habit records without an id");
    }
    Ok(snapshot)
}

pub async fn persist_snapshot(path: &Path, snapshot: &HabitSnapshot) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(snapshot)?;
    fs::write(path, payload).await?;
    Ok(())
}
