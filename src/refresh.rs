use crate::errors::AppError;
use crate::models::DaySnapshot;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Superseded,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<DaySnapshot>>>,
    generation: AtomicU64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<Arc<DaySnapshot>> {
        self.current.read().await.clone()
    }

    pub async fn refresh<F, Fut>(&self, delay: Duration, load: F) -> RefreshOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<DaySnapshot, AppError>>,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(ticket, "refresh started");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.is_superseded(ticket) {
            debug!(ticket, "refresh superseded before load");
            return RefreshOutcome::Superseded;
        }

        let loaded = load().await;

        // only the newest refresh may publish, whatever an older load returned
        let mut current = self.current.write().await;
        if self.is_superseded(ticket) {
            debug!(ticket, "refresh superseded");
            return RefreshOutcome::Superseded;
        }
        let snapshot = match loaded {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(ticket, "refresh failed, keeping previous snapshot: {err}");
                return RefreshOutcome::Failed(err.message);
            }
        };
        info!(ticket, date = %snapshot.date, "snapshot replaced");
        *current = Some(Arc::new(snapshot));
        RefreshOutcome::Applied
    }

    fn is_superseded(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != ticket
    }
}
