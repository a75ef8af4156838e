//! `KpiScheduleApi` trait definition.
#![allow(clippy::future_not_send)]

use serde_json::Value;

use super::error::ScheduleError;
use super::params::{LessonFilter, Selector};

/// KPI schedule API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// Every operation returns the decoded JSON payloads in request order,
/// without interpreting their shape.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(KpiScheduleApi: Send)]
pub trait LocalKpiScheduleApi {
    /// Fetches study group data.
    ///
    /// An ID lookup fans out to the group record and its timetable and
    /// returns both payloads in that order; a name search or a listing
    /// returns a single payload.
    ///
    /// # Errors
    ///
    /// Returns an error if any request in the batch fails; no partial
    /// results are returned.
    async fn group(&self, selector: &Selector) -> Result<Vec<Value>, ScheduleError>;

    /// Fetches lessons of a study group, optionally narrowed by day,
    /// lesson slot, and study week.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or `group_id` is negative.
    async fn group_lessons(
        &self,
        group_id: i64,
        filter: &LessonFilter,
    ) -> Result<Vec<Value>, ScheduleError>;

    /// Fetches teacher data.
    ///
    /// An ID lookup fans out to the teacher record, its vote data, and its
    /// vote eligibility, returning the three payloads in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if any request in the batch fails; no partial
    /// results are returned.
    async fn teacher(&self, selector: &Selector) -> Result<Vec<Value>, ScheduleError>;

    /// Fetches the current study week.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn current_week(&self) -> Result<Vec<Value>, ScheduleError>;

    /// Fetches the deployed API version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn current_api_version(&self) -> Result<Vec<Value>, ScheduleError>;
}
