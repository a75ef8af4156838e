//! KPI schedule API client module.
//!
//! Handles HTTP requests to the `api.rozklad.org.ua` REST endpoints and
//! returns the decoded JSON payloads without further interpretation.

mod api;
mod client;
mod endpoint;
mod error;
mod params;

#[allow(clippy::module_name_repetitions)]
pub use api::{KpiScheduleApi, LocalKpiScheduleApi};
pub use client::{ApiRequest, DEFAULT_USER_AGENT, KpiClient, KpiClientBuilder};
pub use endpoint::{API_VERSION, DEFAULT_BASE_URL, Endpoint};
pub use error::ScheduleError;
pub use params::{FilterParams, LessonFilter, SearchQuery, Selector};
