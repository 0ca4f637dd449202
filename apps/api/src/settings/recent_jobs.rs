//! Bounded, newest-first history of jobs that outreach was generated for.

use std::sync::LazyLock;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::job::{JobRecord, RecentJob};
use crate::storage::KvStore;

pub const RECENT_JOBS: &str = "recentJobs";
pub const MAX_RECENT_JOBS: usize = 10;
/// Entries returned by the listing endpoint when no `limit` is given.
pub const DEFAULT_RECENT_JOBS_SHOWN: usize = 5;

/// Serializes read-modify-write cycles on the stored list.
static UPDATE_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Inserts `job` at the front, dropping any older entry for the same URL.
pub fn record_recent_job(list: &mut Vec<RecentJob>, job: JobRecord, now_ms: i64) {
    list.retain(|entry| entry.job.url != job.url);
    list.insert(
        0,
        RecentJob {
            job,
            timestamp: now_ms,
        },
    );
    list.truncate(MAX_RECENT_JOBS);
}

pub async fn load_recent_jobs(store: &dyn KvStore) -> Result<Vec<RecentJob>, AppError> {
    let Some(value) = store.get(RECENT_JOBS).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_value(value) {
        Ok(list) => Ok(list),
        Err(e) => {
            warn!("Stored recent jobs are unreadable, starting over: {e}");
            Ok(Vec::new())
        }
    }
}

pub async fn save_recent_job(store: &dyn KvStore, job: JobRecord) -> Result<(), AppError> {
    let _guard = UPDATE_LOCK.lock().await;
    let mut list = load_recent_jobs(store).await?;
    let url = job.url.clone();
    record_recent_job(&mut list, job, chrono::Utc::now().timestamp_millis());

    let value = serde_json::to_value(&list).map_err(|e| AppError::Internal(e.into()))?;
    store.set(RECENT_JOBS, value).await?;

    debug!("Recorded recent job {url} ({} stored)", list.len());
    Ok(())
}

pub async fn clear_recent_jobs(store: &dyn KvStore) -> Result<(), AppError> {
    let _guard = UPDATE_LOCK.lock().await;
    store.set(RECENT_JOBS, Value::Array(Vec::new())).await
}
