use crate::errors::AppError;
use crate::models::HabitSnapshot;
use crate::storage::persist_snapshot;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Latest habit snapshot plus the file it is mirrored to.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub snapshot: Arc<Mutex<HabitSnapshot>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, snapshot: HabitSnapshot) -> Self {
        Self {
            data_path,
            snapshot: Arc::new(Mutex::new(snapshot)),
        }
    }

    /// Writes `next` to disk, then swaps it in. A failed write leaves the
    /// in-memory snapshot untouched.
    pub async fn replace_snapshot(&self, next: HabitSnapshot) -> Result<HabitSnapshot, AppError> {
        let mut current = self.snapshot.lock().await;
        persist_snapshot(&self.data_path, &next).await?;
        Ok(std::mem::replace(&mut *current, next))
    }
}
