//! Test utilities: mock implementations of the core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{EventRecord, EventType, Provider};
use crate::traits::{Extractor, Fetcher};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable response.
#[derive(Clone)]
pub struct MockFetcher {
    provider: Provider,
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
}

impl MockFetcher {
    pub fn new(provider: Provider, html: &str) -> Self {
        Self {
            provider,
            responses: Arc::new(Mutex::new(vec![Ok(html.to_string())])),
        }
    }

    pub fn with_error(provider: Provider, error: AppError) -> Self {
        Self {
            provider,
            responses: Arc::new(Mutex::new(vec![Err(error)])),
        }
    }
}

impl Fetcher for MockFetcher {
    fn provider(&self) -> Provider {
        self.provider
    }

    async fn fetch(&self) -> Result<String, AppError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>sailing</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor that returns configurable records.
#[derive(Clone)]
pub struct MockExtractor {
    valid: bool,
    response: Arc<Mutex<Option<Result<Vec<EventRecord>, AppError>>>>,
    pub extract_calls: Arc<Mutex<usize>>,
}

impl MockExtractor {
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self {
            valid: true,
            response: Arc::new(Mutex::new(Some(Ok(records)))),
            extract_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            valid: true,
            response: Arc::new(Mutex::new(Some(Err(error)))),
            extract_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Make `validate` report every document as the wrong shape.
    pub fn rejecting(mut self) -> Self {
        self.valid = false;
        self
    }
}

impl Extractor for MockExtractor {
    fn validate(&self, _html: &str) -> bool {
        self.valid
    }

    fn extract(&self, _html: &str) -> Result<Vec<EventRecord>, AppError> {
        *self.extract_calls.lock().unwrap() += 1;
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A record with only a title set.
pub fn sample_record(title: &str) -> EventRecord {
    EventRecord {
        title: title.to_string(),
        date: String::new(),
        start_time: String::new(),
        end_time: String::new(),
        day_of_week: String::new(),
        description: String::new(),
        boat: String::new(),
        branch: String::new(),
        pier: String::new(),
        event_type: EventType::from_title(title),
        more_url: String::new(),
        order_url: String::new(),
        price: String::new(),
    }
}
