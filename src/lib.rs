pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod refresh;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;

pub use app::router;
pub use config::AppConfig;
pub use refresh::{RefreshOutcome, SnapshotStore};
pub use state::AppState;
pub use stats::{build_snapshot, build_snapshot_at, build_stats, build_stats_at};
pub use storage::load_data;
