//! Page-level polling loop.
//!
//! Target sites render job details asynchronously and expose no "content ready"
//! signal, so extraction is retried at fixed offsets after the watch starts
//! (immediately, +2s, +5s). A URL change seen on any attempt discards the
//! cached record and re-runs extraction 1s later.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::extraction::extractor::extract_from_html;
use crate::extraction::ExtractionError;
use crate::models::job::JobRecord;

/// Offsets from watch start at which extraction is attempted.
pub const EXTRACTION_SCHEDULE: [Duration; 3] = [
    Duration::from_secs(0),
    Duration::from_secs(2),
    Duration::from_secs(5),
];

/// Delay before re-extracting after the page URL changed.
pub const URL_CHANGE_DELAY: Duration = Duration::from_secs(1);

/// What the watcher sees of the page at one instant.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: String,
    pub html: String,
}

/// Source of page snapshots. Implemented over HTTP in production and by
/// scripted fakes in tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn snapshot(&self) -> Result<PageSnapshot, ExtractionError>;
}

/// Fetches the page over HTTP. The page URL is the final URL after redirects.
pub struct HttpPageSource {
    client: Client,
    url: String,
}

impl HttpPageSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn snapshot(&self) -> Result<PageSnapshot, ExtractionError> {
        debug!("Fetching job page: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ExtractionError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ExtractionError::Fetch(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| ExtractionError::Fetch(e.to_string()))?;

        Ok(PageSnapshot { url, html })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchState {
    NotExtracted,
    Extracted(JobRecord),
}

pub struct ExtractionWatcher<S: PageSource> {
    source: S,
    state: WatchState,
    last_url: Option<String>,
}

impl<S: PageSource> ExtractionWatcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: WatchState::NotExtracted,
            last_url: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &WatchState {
        &self.state
    }

    /// Runs the fixed schedule until a record is extracted or the schedule is exhausted.
    /// Returns the error of the last failed attempt when nothing was extracted.
    pub async fn run(&mut self) -> Result<JobRecord, ExtractionError> {
        let start = Instant::now();
        let mut last_error = ExtractionError::MissingField("title");

        for offset in EXTRACTION_SCHEDULE {
            sleep_until(start + offset).await;

            match self.attempt().await {
                Ok(job) => return Ok(job),
                // Not a job page; later attempts cannot change that.
                Err(e @ ExtractionError::UnsupportedSite(_)) => {
                    debug!("Stopping watch: {e}");
                    return Err(e);
                }
                Err(e) => {
                    debug!("Extraction attempt at +{}s failed: {e}", offset.as_secs());
                    last_error = e;
                }
            }
        }

        warn!("No job extracted after {} attempts", EXTRACTION_SCHEDULE.len());
        Err(last_error)
    }

    /// One extraction attempt, including URL-change handling.
    pub async fn attempt(&mut self) -> Result<JobRecord, ExtractionError> {
        let mut snapshot = self.source.snapshot().await?;

        let changed = self
            .last_url
            .as_deref()
            .is_some_and(|last| last != snapshot.url);
        self.last_url = Some(snapshot.url.clone());

        if changed {
            info!("Page URL changed to {}, re-detecting job page", snapshot.url);
            self.state = WatchState::NotExtracted;
            sleep(URL_CHANGE_DELAY).await;
            snapshot = self.source.snapshot().await?;
            self.last_url = Some(snapshot.url.clone());
        }

        let job = extract_from_html(&snapshot.html, &snapshot.url)?;
        self.state = WatchState::Extracted(job.clone());
        Ok(job)
    }
}
