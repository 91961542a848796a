use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Substring of a session title that marks a pre-practical course.
pub const PRE_PRACTICAL_MARKER: &str = "טרום";

/// Category of a scheduled session.
///
/// Binary by construction: any title without [`PRE_PRACTICAL_MARKER`] is a
/// students session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "טרום מעשי")]
    PrePractical,
    #[serde(rename = "תלמידים")]
    Students,
}

impl EventType {
    /// Display order used when grouping records into buckets.
    pub const DISPLAY_ORDER: [EventType; 2] = [EventType::Students, EventType::PrePractical];

    /// Classify a session by its title.
    pub fn from_title(title: &str) -> Self {
        if title.contains(PRE_PRACTICAL_MARKER) {
            EventType::PrePractical
        } else {
            EventType::Students
        }
    }

    /// Hebrew label as emitted in the output schema.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::PrePractical => "טרום מעשי",
            EventType::Students => "תלמידים",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "טרום מעשי" | "pre-practical" | "pre_practical" => Ok(EventType::PrePractical),
            "תלמידים" | "students" => Ok(EventType::Students),
            other => Err(format!("Unknown event type: {other}")),
        }
    }
}

/// One scheduled sailing session.
///
/// Absent values are always empty strings, never a separate "missing" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub title: String,
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub day_of_week: String,
    pub description: String,
    pub boat: String,
    pub branch: String,
    pub pier: String,
    pub event_type: EventType,
    pub more_url: String,
    pub order_url: String,
    pub price: String,
}

/// Which transport supplied the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Local fixture file.
    #[default]
    Static,
    /// Remote fetch through the scraping proxy.
    Remote,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Static => "static",
            Provider::Remote => "remote",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" | "file" => Ok(Provider::Static),
            "remote" | "scraperapi" => Ok(Provider::Remote),
            other => Err(format!("Unknown provider: {other}")),
        }
    }
}

/// Branch / category selection applied by front ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub branch: Option<String>,
    pub category: Option<EventType>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.branch.is_none() && self.category.is_none()
    }

    pub fn matches(&self, record: &EventRecord) -> bool {
        let branch_ok = match &self.branch {
            Some(branch) => record.branch.trim() == branch.trim(),
            None => true,
        };
        let category_ok = match self.category {
            Some(category) => record.event_type == category,
            None => true,
        };
        branch_ok && category_ok
    }

    /// Keep only matching records, preserving order.
    pub fn apply(&self, records: Vec<EventRecord>) -> Vec<EventRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Split records into the two fixed display buckets.
///
/// Buckets follow [`EventType::DISPLAY_ORDER`] and are present even when empty.
pub fn group_by_event_type(records: &[EventRecord]) -> Vec<(EventType, Vec<EventRecord>)> {
    EventType::DISPLAY_ORDER
        .iter()
        .map(|&event_type| {
            let bucket = records
                .iter()
                .filter(|r| r.event_type == event_type)
                .cloned()
                .collect();
            (event_type, bucket)
        })
        .collect()
}
