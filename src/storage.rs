use crate::errors::AppError;
use crate::models::LogData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Reads the day-log fixture. A missing file means nothing has been logged yet.
pub async fn load_data(path: &Path) -> Result<LogData, AppError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            error!("failed to parse day log {}: {err}", path.display());
            AppError::from(err)
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no day log at {}, starting empty", path.display());
            Ok(LogData::default())
        }
        Err(err) => {
            error!("failed to read day log {}: {err}", path.display());
            Err(err.into())
        }
    }
}
