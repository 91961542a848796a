use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sail_core::models::{EventRecord, Provider};
use sail_core::service::ScheduleResult;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct EventsQuery {
    /// Markup source: `static` (default) or `remote`
    pub provider: Option<String>,
    /// Keep only events at this branch
    pub branch: Option<String>,
    /// Keep only this category (`תלמידים` / `טרום מעשי`)
    pub category: Option<String>,
}

/// Uniform envelope returned for both success and failure.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventsResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub events: Vec<EventRecord>,
    /// Machine-readable error kind, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub provider: String,
    pub timestamp: DateTime<Utc>,
}

impl EventsResponse {
    pub fn success(result: ScheduleResult, events: Vec<EventRecord>) -> Self {
        let message = if result.valid {
            format!("Loaded {} events", events.len())
        } else {
            "Page does not look like a sailing schedule; no events returned".to_string()
        };

        Self {
            success: true,
            events,
            error: None,
            message: Some(message),
            provider: result.provider.to_string(),
            timestamp: result.fetched_at,
        }
    }

    pub fn failure(provider: Provider, error: &str, message: String) -> Self {
        Self {
            success: false,
            events: Vec::new(),
            error: Some(error.to_string()),
            message: Some(message),
            provider: provider.to_string(),
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}
