use std::time::Duration;

use reqwest::Client;
use url::Url;

use sail_core::config::RemoteConfig;
use sail_core::error::AppError;
use sail_core::models::Provider;
use sail_core::traits::Fetcher;

/// Fetches the live schedule page through a scraping proxy.
///
/// The proxy is asked to render JavaScript and to route through a proxy in
/// the configured country, since the site serves the schedule client-side
/// and geo-restricts some visitors.
#[derive(Clone)]
pub struct RemoteFetcher {
    client: Client,
    request_url: Url,
    timeout_secs: u64,
}

impl RemoteFetcher {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let request_url = build_request_url(config)?;
        let client = Client::builder()
            .user_agent(concat!("sail-schedule/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            request_url,
            timeout_secs: config.timeout_secs,
        })
    }
}

impl Fetcher for RemoteFetcher {
    fn provider(&self) -> Provider {
        Provider::Remote
    }

    async fn fetch(&self) -> Result<String, AppError> {
        let response = self
            .client
            .get(self.request_url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {}", e.without_url()))
                } else {
                    AppError::HttpError(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError(format!(
                "HTTP {} from scraping proxy",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| {
                AppError::HttpError(format!(
                    "Failed to read response body: {}",
                    e.without_url()
                ))
            })
    }
}

/// Proxy endpoint with the target page and fetch options as query parameters.
fn build_request_url(config: &RemoteConfig) -> Result<Url, AppError> {
    Url::parse(&config.target_url)
        .map_err(|e| AppError::ConfigError(format!("Invalid target URL: {e}")))?;

    let render = if config.render_js { "true" } else { "false" };
    Url::parse_with_params(
        &config.endpoint,
        &[
            ("api_key", config.api_key.as_str()),
            ("url", config.target_url.as_str()),
            ("render", render),
            ("country_code", config.country_code.as_str()),
        ],
    )
    .map_err(|e| AppError::ConfigError(format!("Invalid scraper endpoint: {e}")))
}
