use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{EventRecord, Provider};
use crate::traits::{Extractor, Fetcher};

/// Outcome of one load through [`ScheduleService`].
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    pub provider: Provider,
    pub events: Vec<EventRecord>,
    /// Whether the markup passed the content-shape check.
    pub valid: bool,
    pub fetched_at: DateTime<Utc>,
}

/// Orchestrates the load pipeline: fetch → validate → extract.
///
/// Generic over the transport and the extraction engine so tests can run
/// without a network or fixture file.
pub struct ScheduleService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    fetcher: F,
    extractor: E,
}

impl<F, E> ScheduleService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    pub fn provider(&self) -> Provider {
        self.fetcher.provider()
    }

    /// Run the pipeline once.
    ///
    /// Markup that fails the content-shape check yields zero events rather
    /// than an error. Transport and parse failures are returned unchanged.
    pub async fn load(&self) -> Result<ScheduleResult, AppError> {
        let provider = self.fetcher.provider();

        // 1. Fetch
        tracing::info!(%provider, "Fetching schedule markup");
        let html = self.fetcher.fetch().await?;
        tracing::info!(%provider, "Fetched {} bytes of HTML", html.len());

        // 2. Validate
        let valid = self.extractor.validate(&html);
        if !valid {
            tracing::warn!(%provider, "Markup does not look like a schedule page, returning no events");
            return Ok(ScheduleResult {
                provider,
                events: Vec::new(),
                valid,
                fetched_at: Utc::now(),
            });
        }

        // 3. Extract
        let events = self.extractor.extract(&html)?;
        tracing::info!(%provider, count = events.len(), "Extraction complete");

        Ok(ScheduleResult {
            provider,
            events,
            valid,
            fetched_at: Utc::now(),
        })
    }
}
