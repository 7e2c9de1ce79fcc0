use crate::refresh::{RefreshOutcome, SnapshotStore};
use crate::stats::build_snapshot;
use crate::storage::load_data;
use std::{path::PathBuf, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub refresh_delay: Duration,
    pub snapshots: Arc<SnapshotStore>,
}

impl AppState {
    pub fn new(data_path: PathBuf, refresh_delay: Duration) -> Self {
        Self {
            data_path,
            refresh_delay,
            snapshots: Arc::new(SnapshotStore::new()),
        }
    }

    /// Rebuilds the snapshot after the configured pull-to-refresh delay.
    pub async fn refresh(&self) -> RefreshOutcome {
        self.refresh_after(self.refresh_delay).await
    }

    pub async fn refresh_after(&self, delay: Duration) -> RefreshOutcome {
        let path = self.data_path.clone();
        self.snapshots
            .refresh(delay, || async move {
                let data = load_data(&path).await?;
                Ok(build_snapshot(&data))
            })
            .await
    }
}
