use std::future::Future;

use crate::error::AppError;
use crate::models::{EventRecord, Provider};

/// Supplies raw schedule markup from a single source.
pub trait Fetcher: Send + Sync + Clone {
    /// Which provider this fetcher represents (reported in responses).
    fn provider(&self) -> Provider;

    fn fetch(&self) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns schedule markup into event records.
pub trait Extractor: Send + Sync + Clone {
    /// Cheap content-shape check on the raw text. Never fails.
    fn validate(&self, html: &str) -> bool;

    /// Parses the document and returns every titled event in document order.
    ///
    /// Fails only when the document cannot be parsed into a tree.
    fn extract(&self, html: &str) -> Result<Vec<EventRecord>, AppError>;
}
