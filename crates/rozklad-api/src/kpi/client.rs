//! `KpiClient` - KPI schedule API client implementation.

use std::time::Duration;

use futures::future::try_join_all;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalKpiScheduleApi;
use super::endpoint::{DEFAULT_BASE_URL, Endpoint};
use super::error::ScheduleError;
use super::params::{FilterParams, LessonFilter, SearchQuery, Selector};

/// Browser User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/72.0.3626.121 Safari/537.36";

/// Media type every response must declare.
const EXPECTED_CONTENT_TYPE: &str = "application/json";

/// Total per-request timeout, covering connect and the whole exchange.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One fully-resolved request in a batch.
///
/// Carries the resolved URL, the single `filter`/`search` query pair (or
/// none), and any extra headers. Created fresh for every facade call and
/// discarded after use.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Fully-resolved request URL.
    url: Url,
    /// Query pairs appended to the URL.
    query: Vec<(&'static str, String)>,
    /// Headers applied after the fixed ones.
    extra_headers: HeaderMap,
}

impl ApiRequest {
    /// Creates a request descriptor with no extra headers.
    #[must_use]
    pub fn new(url: Url, query: Vec<(&'static str, String)>) -> Self {
        Self {
            url,
            query,
            extra_headers: HeaderMap::new(),
        }
    }

    /// Sets headers applied after the fixed `User-Agent` and
    /// `Content-Type` pair.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.extra_headers = headers;
        self
    }
}

/// KPI schedule API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct KpiClient {
    /// HTTP client (reqwest, gzip enabled, fixed total timeout).
    http_client: Client,
    /// Base URL, ending with a slash.
    base_url: Url,
}

/// Builder for `KpiClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct KpiClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl KpiClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    ///
    /// Endpoint paths are joined onto it, so it must end with a slash.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent (default: [`DEFAULT_USER_AGENT`]).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Overrides the total request timeout (default: 30 seconds).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::Url`] if the default base URL fails to parse.
    /// - [`ScheduleError::Network`] if the `reqwest::Client` build fails.
    pub fn build(self) -> Result<KpiClient, ScheduleError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        // Content-Type is sent on every GET despite the absent body; the
        // service expects it.
        let mut fixed_headers = HeaderMap::new();
        fixed_headers.insert(CONTENT_TYPE, HeaderValue::from_static(EXPECTED_CONTENT_TYPE));

        let http_client = Client::builder()
            .user_agent(user_agent)
            .default_headers(fixed_headers)
            .timeout(self.timeout.unwrap_or(REQUEST_TIMEOUT))
            .gzip(true)
            .build()?;

        Ok(KpiClient {
            http_client,
            base_url,
        })
    }
}

impl KpiClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> KpiClientBuilder {
        KpiClientBuilder::new()
    }

    /// Performs one GET and decodes the JSON body.
    ///
    /// The fixed `User-Agent` and `Content-Type` headers are applied
    /// first, then any request-supplied extras. The response must declare
    /// the `application/json` media type (parameters such as charset are
    /// ignored); the HTTP status is logged but not validated. The body is
    /// decoded as UTF-8 JSON with no schema applied.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::Network`] on connect, DNS, or timeout failure.
    /// - [`ScheduleError::ContentType`] if the declared media type is not
    ///   `application/json`.
    /// - [`ScheduleError::Json`] if the body is not valid JSON.
    pub async fn fetch_json(&self, request: &ApiRequest) -> Result<Value, ScheduleError> {
        let response = self
            .http_client
            .get(request.url.clone())
            .headers(request.extra_headers.clone())
            .query(&request.query)
            .send()
            .await?;

        let status = response.status();
        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap_or_default()
            .trim()
            .to_owned();

        tracing::debug!(
            url = %response.url(),
            status = status.as_u16(),
            content_type = %media_type,
            "Schedule API response"
        );

        if media_type != EXPECTED_CONTENT_TYPE {
            return Err(ScheduleError::ContentType {
                expected: EXPECTED_CONTENT_TYPE,
                actual: media_type,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Issues all requests concurrently and collects the decoded payloads
    /// in submission order, regardless of completion order.
    ///
    /// The first failure drops the surviving siblings and aborts the whole
    /// batch; there is no partial-result mode.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ScheduleError`] produced by any request.
    pub async fn execute(&self, requests: &[ApiRequest]) -> Result<Vec<Value>, ScheduleError> {
        try_join_all(requests.iter().map(|request| self.fetch_json(request))).await
    }

    /// Resolves an endpoint into a request descriptor.
    fn request(
        &self,
        endpoint: Endpoint,
        query: Vec<(&'static str, String)>,
    ) -> Result<ApiRequest, ScheduleError> {
        Ok(ApiRequest::new(endpoint.resolve(&self.base_url)?, query))
    }
}

impl LocalKpiScheduleApi for KpiClient {
    #[instrument(skip_all)]
    async fn group(&self, selector: &Selector) -> Result<Vec<Value>, ScheduleError> {
        let requests = match selector {
            Selector::ById(id) => vec![
                self.request(Endpoint::GroupById(*id), FilterParams::new().to_query()?)?,
                self.request(Endpoint::GroupTimetable(*id), FilterParams::new().to_query()?)?,
            ],
            Selector::ByName(name) => vec![self.request(
                Endpoint::Groups,
                SearchQuery::new(name.as_str()).to_query()?,
            )?],
            Selector::Listing { offset } => vec![self.request(
                Endpoint::Groups,
                FilterParams::with_offset(*offset).to_query()?,
            )?],
        };

        self.execute(&requests).await
    }

    #[instrument(skip_all)]
    async fn group_lessons(
        &self,
        group_id: i64,
        filter: &LessonFilter,
    ) -> Result<Vec<Value>, ScheduleError> {
        let requests = vec![self.request(
            Endpoint::GroupLessons(group_id),
            FilterParams::for_lessons(filter).to_query()?,
        )?];

        self.execute(&requests).await
    }

    #[instrument(skip_all)]
    async fn teacher(&self, selector: &Selector) -> Result<Vec<Value>, ScheduleError> {
        let requests = match selector {
            Selector::ById(id) => vec![
                self.request(Endpoint::TeacherById(*id), FilterParams::new().to_query()?)?,
                self.request(Endpoint::TeacherVote(*id), FilterParams::new().to_query()?)?,
                self.request(Endpoint::TeacherCanVote(*id), FilterParams::new().to_query()?)?,
            ],
            Selector::ByName(name) => vec![self.request(
                Endpoint::Teachers,
                SearchQuery::new(name.as_str()).to_query()?,
            )?],
            // Listings target the group collection; the service exposes no
            // teacher listing route.
            Selector::Listing { offset } => vec![self.request(
                Endpoint::Groups,
                FilterParams::with_offset(*offset).to_query()?,
            )?],
        };

        self.execute(&requests).await
    }

    #[instrument(skip_all)]
    async fn current_week(&self) -> Result<Vec<Value>, ScheduleError> {
        let requests = vec![self.request(Endpoint::CurrentWeek, Vec::new())?];
        self.execute(&requests).await
    }

    #[instrument(skip_all)]
    async fn current_api_version(&self) -> Result<Vec<Value>, ScheduleError> {
        let requests = vec![self.request(Endpoint::ApiVersion, Vec::new())?];
        self.execute(&requests).await
    }
}
