use sail_core::config::{RemoteConfig, SourceConfig};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub source: SourceConfig,
    /// Remote provider settings (None = remote provider disabled).
    pub remote: Option<RemoteConfig>,
}
