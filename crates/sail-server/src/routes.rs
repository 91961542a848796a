use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sail_client::{FileFetcher, RemoteFetcher, ScheduleExtractor};
use sail_core::error::AppError;
use sail_core::models::{EventFilter, EventType, Provider};
use sail_core::service::{ScheduleResult, ScheduleService};

use crate::dto::{EventsQuery, EventsResponse, HealthResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventsQuery),
    responses(
        (status = 200, description = "Extracted events", body = EventsResponse),
        (status = 500, description = "Markup could not be obtained or parsed", body = EventsResponse),
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = resolve_provider(query.provider.as_deref());
    let filter = build_filter(&query);

    let mut result = load(&state, provider)
        .await
        .map_err(|e| ApiError::new(provider, e))?;

    let events = filter.apply(std::mem::take(&mut result.events));
    Ok(axum::Json(EventsResponse::success(result, events)))
}

/// Unknown provider names fall back to the static fixture.
fn resolve_provider(raw: Option<&str>) -> Provider {
    match raw.map(str::parse::<Provider>) {
        None => Provider::default(),
        Some(Ok(provider)) => provider,
        Some(Err(e)) => {
            tracing::warn!("{e}; falling back to {}", Provider::default());
            Provider::default()
        }
    }
}

fn build_filter(query: &EventsQuery) -> EventFilter {
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .and_then(|c| match c.parse::<EventType>() {
            Ok(category) => Some(category),
            Err(e) => {
                tracing::warn!("{e}; ignoring category filter");
                None
            }
        });

    EventFilter {
        branch: query
            .branch
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string),
        category,
    }
}

async fn load(state: &AppState, provider: Provider) -> Result<ScheduleResult, AppError> {
    let extractor = ScheduleExtractor::with_base_url(&state.source.base_url)?;

    match provider {
        Provider::Static => {
            let fetcher = FileFetcher::new(&state.source.fixture_path);
            ScheduleService::new(fetcher, extractor).load().await
        }
        Provider::Remote => {
            let config = state.remote.as_ref().ok_or_else(|| {
                AppError::ConfigError(
                    "Remote provider is not configured (set SAIL_SCRAPER_API_KEY and SAIL_TARGET_URL)"
                        .to_string(),
                )
            })?;
            let fetcher = RemoteFetcher::new(config)?;
            ScheduleService::new(fetcher, extractor).load().await
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse { status: "healthy" })
}
