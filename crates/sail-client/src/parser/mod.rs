//! Schedule page parser: markup in, [`EventRecord`]s out.
//!
//! Pure and stateless. Selection, field extraction, date handling and
//! metadata live in their own modules; this one composes them.

pub mod datetime;
pub mod fields;
pub mod metadata;
pub mod selectors;
pub mod validate;

use scraper::{ElementRef, Html};
use url::Url;

use sail_core::error::AppError;
use sail_core::models::{EventRecord, EventType};
use sail_core::traits::Extractor;

pub use datetime::{DateTime, day_of_week, parse_date_time};
pub use metadata::{Metadata, extract_metadata};
pub use validate::validate;

/// Parse raw markup into a tree.
///
/// html5ever recovers from any malformed markup, so the only input rejected
/// here is text with no tags at all.
pub fn parse_document(html: &str) -> Result<Html, AppError> {
    if !html.contains('<') {
        return Err(AppError::ParseError(format!(
            "document contains no markup ({} bytes)",
            html.len()
        )));
    }
    Ok(Html::parse_document(html))
}

/// Every event box in document order, either class spelling.
pub fn select_candidates(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&selectors::CANDIDATE).collect()
}

/// Build a record from one box. Missing parts become empty strings.
pub fn extract_record(element: ElementRef<'_>, base: Option<&Url>) -> EventRecord {
    let title = fields::title(element);
    let DateTime {
        date,
        start_time,
        end_time,
    } = parse_date_time(element);
    let Metadata { boat, branch, pier } = extract_metadata(element);

    EventRecord {
        event_type: EventType::from_title(&title),
        day_of_week: day_of_week(&date).to_string(),
        title,
        date,
        start_time,
        end_time,
        description: fields::description(element),
        boat,
        branch,
        pier,
        more_url: fields::more_url(element, base),
        order_url: fields::order_url(element, base),
        price: fields::price(element),
    }
}

/// Parse `html` and return all titled events in document order.
pub fn extract_all(html: &str, base: Option<&Url>) -> Result<Vec<EventRecord>, AppError> {
    let doc = parse_document(html)?;
    let candidates = select_candidates(&doc);
    let total = candidates.len();

    let records: Vec<EventRecord> = candidates
        .into_iter()
        .map(|element| extract_record(element, base))
        .filter(|record| !record.title.is_empty())
        .collect();

    if records.len() < total {
        tracing::debug!(
            dropped = total - records.len(),
            "Skipped event boxes without a title"
        );
    }
    tracing::debug!(candidates = total, events = records.len(), "Parsed schedule");

    Ok(records)
}

/// [`Extractor`] backed by the schedule parser.
///
/// Holds only the optional base URL used to make links absolute.
#[derive(Debug, Clone, Default)]
pub struct ScheduleExtractor {
    base_url: Option<Url>,
}

impl ScheduleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative links against `base_url`.
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid base URL '{base_url}': {e}")))?;
        Ok(Self {
            base_url: Some(base_url),
        })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }
}

impl Extractor for ScheduleExtractor {
    fn validate(&self, html: &str) -> bool {
        validate(html)
    }

    fn extract(&self, html: &str) -> Result<Vec<EventRecord>, AppError> {
        extract_all(html, self.base_url.as_ref())
    }
}
