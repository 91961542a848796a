use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use sail_core::config::{RemoteConfig, SourceConfig};
use sail_server::routes;
use sail_server::state::AppState;

pub const SCHEDULE_PAGE: &str = r#"<!DOCTYPE html>
<html dir="rtl" lang="he">
<body>
  <div class="event-box">
    <h3>קורס טרום מעשי</h3>
    <label class="event-date">27/10/2025 14:00 - 16:00</label>
    <ul class="event-meta">
      <li><span class="messages">סניף</span><span>הרצליה</span></li>
    </ul>
    <a class="more-details" href="/course/1">לפרטים</a>
  </div>
  <div class="evnet-box">
    <h3>שיעור תלמידים</h3>
    <ul class="event-meta">
      <li><span class="messages">סניף</span><span>תל אביב</span></li>
    </ul>
  </div>
</body>
</html>"#;

/// Test router plus the temp dir holding its fixture.
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

/// Router whose static provider serves `fixture`, or a missing file when `None`.
pub fn setup_test_app(fixture: Option<&str>) -> TestApp {
    setup_with_remote(fixture, None)
}

pub fn setup_with_remote(fixture: Option<&str>, remote: Option<RemoteConfig>) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let fixture_path: PathBuf = dir.path().join("sailing_events.html");
    if let Some(html) = fixture {
        std::fs::write(&fixture_path, html).expect("Failed to write fixture");
    }

    let state = Arc::new(AppState {
        source: SourceConfig {
            fixture_path,
            base_url: "https://club.example/".to_string(),
        },
        remote,
    });

    TestApp {
        router: routes::router(state),
        _dir: dir,
    }
}

/// Remote settings pointing at a port nothing listens on.
pub fn unreachable_remote() -> RemoteConfig {
    RemoteConfig {
        endpoint: "http://127.0.0.1:9/".to_string(),
        api_key: "test-key".to_string(),
        target_url: "https://club.example/events".to_string(),
        render_js: true,
        country_code: "il".to_string(),
        timeout_secs: 2,
    }
}
