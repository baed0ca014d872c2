//! HTTP-based `DirectionsProvider` using the Google Directions web service.
//!
//! # Architecture
//!
//! The [`DirectionsProvider`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use log::debug;
use porto_core::{DirectionsError, DirectionsProvider, DirectionsRequest, TransitRoute};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::google::DirectionsResponse;

/// Error type for [`HttpDirectionsProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// No API key was configured.
    #[error("a directions API key is required")]
    MissingApiKey,
    /// The configured base URL cannot be parsed.
    #[error("invalid directions base URL '{url}'")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
}

/// Default base URL of the Google Maps web services.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default user agent for directions requests.
pub const DEFAULT_USER_AGENT: &str = "porto-guide/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Region bias applied to every request.
const DEFAULT_REGION: &str = "ie";

/// Language of the returned instructions.
const DEFAULT_LANGUAGE: &str = "en";

/// Placeholder shown instead of the API key in logs and errors.
const REDACTED: &str = "REDACTED";

/// Configuration for [`HttpDirectionsProvider`].
#[derive(Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL of the web services, without the `directions/json` suffix.
    pub base_url: String,
    /// Access key sent with every request.
    pub api_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Region bias, a ccTLD such as `"ie"`.
    pub region: String,
    /// Language code for instructions.
    pub language: String,
}

impl std::fmt::Debug for HttpDirectionsProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectionsProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &REDACTED)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("region", &self.region)
            .field("language", &self.language)
            .finish()
    }
}

impl Default for HttpDirectionsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            region: DEFAULT_REGION.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

impl HttpDirectionsProviderConfig {
    /// Create a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Point the provider at a different service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the region bias.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the instruction language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// HTTP-based directions provider.
///
/// It owns a Tokio runtime that is reused across calls, avoiding the overhead
/// of creating a new runtime per request.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime the caller's thread cannot block on a runtime,
/// so the request runs on the stored runtime from a scoped worker thread.
pub struct HttpDirectionsProvider {
    client: Client,
    config: HttpDirectionsProviderConfig,
    endpoint: Url,
    /// Always `Some` until the provider is dropped.
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for HttpDirectionsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectionsProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpDirectionsProvider {
    /// Create a provider for the public service with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(api_key))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, the base URL is invalid, or the
    /// HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderBuildError::MissingApiKey);
        }
        let endpoint = directions_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime: Some(runtime),
        })
    }

    /// Build the request URL, carrying `key` as the access key.
    fn build_url(&self, request: &DirectionsRequest, key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("origin", &lat_lng(request.origin))
            .append_pair("destination", &lat_lng(request.destination))
            .append_pair("mode", request.mode.as_str())
            .append_pair("region", &self.config.region)
            .append_pair("language", &self.config.language)
            .append_pair("key", key);
        url
    }

    /// Fetch the route asynchronously.
    async fn fetch_route_async(
        &self,
        request: &DirectionsRequest,
    ) -> Result<TransitRoute, DirectionsError> {
        let url = self.build_url(request, &self.config.api_key);
        let redacted = self.build_url(request, REDACTED).to_string();
        debug!("requesting directions from {redacted}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &redacted))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &redacted))?;

        let body: DirectionsResponse =
            response
                .json()
                .await
                .map_err(|err| DirectionsError::ParseError {
                    message: err.without_url().to_string(),
                })?;

        convert_response(body)
    }

    fn route_on_stored_runtime(
        &self,
        request: &DirectionsRequest,
    ) -> Result<TransitRoute, DirectionsError> {
        match &self.runtime {
            Some(runtime) => runtime.block_on(self.fetch_route_async(request)),
            None => Err(DirectionsError::NetworkError {
                url: self.build_url(request, REDACTED).to_string(),
                message: "directions runtime has shut down".to_owned(),
            }),
        }
    }

    /// Run the request on the stored runtime from a scoped thread that is
    /// not bound to the caller's runtime.
    fn route_on_worker_thread(
        &self,
        request: &DirectionsRequest,
    ) -> Result<TransitRoute, DirectionsError> {
        std::thread::scope(|scope| {
            scope
                .spawn(|| self.route_on_stored_runtime(request))
                .join()
                .unwrap_or_else(|_| {
                    Err(DirectionsError::NetworkError {
                        url: self.build_url(request, REDACTED).to_string(),
                        message: "directions worker thread panicked".to_owned(),
                    })
                })
        })
    }

    /// Convert a reqwest error to a `DirectionsError`.
    ///
    /// The error's own URL is stripped since it carries the access key.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        let message = redact(&error.to_string(), &self.config.api_key);

        if let Some(status) = error.status() {
            return DirectionsError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message,
            };
        }

        DirectionsError::NetworkError {
            url: url.to_owned(),
            message,
        }
    }
}

fn directions_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let joined = format!("{}/directions/json", base_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base_url.to_owned(),
        source,
    })
}

fn lat_lng(location: geo::Coord<f64>) -> String {
    format!("{},{}", location.y, location.x)
}

fn redact(message: &str, key: &str) -> String {
    if key.is_empty() {
        message.to_owned()
    } else {
        message.replace(key, REDACTED)
    }
}

/// Convert a Directions API response to a `TransitRoute`.
///
/// Only the first leg of the first route is used; requests carry no
/// waypoints, so there is never more than one leg.
fn convert_response(response: DirectionsResponse) -> Result<TransitRoute, DirectionsError> {
    if !response.is_ok() {
        debug!("directions service returned {}", response.status);
        return Err(DirectionsError::ServiceError {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }

    let leg = response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
        .ok_or(DirectionsError::NoRoute)?;

    Ok(TransitRoute::new(leg.steps.into_iter().map(Into::into).collect()))
}

impl Drop for HttpDirectionsProvider {
    /// Dropping a runtime inside an async context panics, so shut it down
    /// without waiting.
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl DirectionsProvider for HttpDirectionsProvider {
    /// Fetch the route for `request`.
    ///
    /// # Runtime requirements
    ///
    /// Works outside any runtime and inside both runtime flavours. Inside a
    /// `current_thread` runtime the calling thread is blocked until the
    /// request completes, so other tasks on that runtime wait for it.
    fn route(&self, request: &DirectionsRequest) -> Result<TransitRoute, DirectionsError> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(self.fetch_route_async(request)))
            }
            Ok(_) => self.route_on_worker_thread(request),
            Err(_) => self.route_on_stored_runtime(request),
        }
    }
}
